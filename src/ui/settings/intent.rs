use crate::model::Theme;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SettingsIntent {
    /// Open the dialog with the focus on the theme currently in use.
    Load { current: Theme },
    Close,
    MoveUp,
    MoveDown,
    /// The focused theme was saved; mark it as the current one.
    Applied,
}

impl Intent for SettingsIntent {}
