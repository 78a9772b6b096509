use crate::model::Theme;
use crate::ui::mvi::Reducer;
use crate::ui::settings::intent::SettingsIntent;
use crate::ui::settings::state::SettingsDialogState;

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsDialogState;
    type Intent = SettingsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let count = Theme::all().len();
        match intent {
            SettingsIntent::Load { current } => SettingsDialogState::Visible {
                current,
                focused: Theme::all()
                    .iter()
                    .position(|theme| *theme == current)
                    .unwrap_or(0),
            },
            SettingsIntent::Close => SettingsDialogState::Hidden,
            SettingsIntent::MoveUp => match state {
                SettingsDialogState::Visible { current, focused } => {
                    let focused = if focused == 0 {
                        count.saturating_sub(1)
                    } else {
                        focused - 1
                    };
                    SettingsDialogState::Visible { current, focused }
                }
                other => other,
            },
            SettingsIntent::MoveDown => match state {
                SettingsDialogState::Visible { current, focused } => {
                    let focused = if focused + 1 >= count { 0 } else { focused + 1 };
                    SettingsDialogState::Visible { current, focused }
                }
                other => other,
            },
            SettingsIntent::Applied => match state {
                SettingsDialogState::Visible { current, focused } => {
                    SettingsDialogState::Visible {
                        current: Theme::all().get(focused).copied().unwrap_or(current),
                        focused,
                    }
                }
                other => other,
            },
        }
    }
}
