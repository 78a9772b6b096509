use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportView {
    #[default]
    Json,
    Qr,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TransferDialogState {
    #[default]
    Hidden,
    Export {
        list_name: String,
        json: String,
        qr: Option<String>,
        view: ExportView,
    },
    Import {
        input: String,
        error: Option<String>,
    },
}

impl UiState for TransferDialogState {}

impl TransferDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_import(&self) -> bool {
        matches!(self, Self::Import { .. })
    }

    /// JSON being exported, if the export side is open.
    pub fn export_json(&self) -> Option<&str> {
        match self {
            Self::Export { json, .. } => Some(json),
            _ => None,
        }
    }

    pub fn import_input(&self) -> Option<&str> {
        match self {
            Self::Import { input, .. } => Some(input),
            _ => None,
        }
    }
}
