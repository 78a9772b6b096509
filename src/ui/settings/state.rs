use crate::model::Theme;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SettingsDialogState {
    #[default]
    Hidden,
    Visible {
        /// Theme saved in settings, drawn as the selected radio option.
        current: Theme,
        /// Index into `Theme::all()`.
        focused: usize,
    },
}

impl UiState for SettingsDialogState {}

impl SettingsDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Theme under the cursor.
    pub fn focused_theme(&self) -> Option<Theme> {
        match self {
            Self::Visible { focused, .. } => Theme::all().get(*focused).copied(),
            Self::Hidden => None,
        }
    }
}
