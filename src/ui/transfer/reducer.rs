use crate::ui::mvi::Reducer;
use crate::ui::transfer::intent::TransferIntent;
use crate::ui::transfer::state::{ExportView, TransferDialogState};

pub struct TransferReducer;

impl Reducer for TransferReducer {
    type State = TransferDialogState;
    type Intent = TransferIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TransferIntent::OpenExport {
                list_name,
                json,
                qr,
            } => TransferDialogState::Export {
                list_name,
                json,
                qr,
                view: ExportView::Json,
            },
            TransferIntent::OpenImport => TransferDialogState::Import {
                input: String::new(),
                error: None,
            },
            TransferIntent::ToggleView => match state {
                TransferDialogState::Export {
                    list_name,
                    json,
                    qr,
                    view,
                } => TransferDialogState::Export {
                    list_name,
                    json,
                    qr,
                    view: match view {
                        ExportView::Json => ExportView::Qr,
                        ExportView::Qr => ExportView::Json,
                    },
                },
                other => other,
            },
            TransferIntent::Input(ch) => match state {
                TransferDialogState::Import { mut input, .. } => {
                    input.push(ch);
                    TransferDialogState::Import { input, error: None }
                }
                other => other,
            },
            TransferIntent::Paste(text) => match state {
                TransferDialogState::Import { mut input, .. } => {
                    input.push_str(&text);
                    TransferDialogState::Import { input, error: None }
                }
                other => other,
            },
            TransferIntent::Backspace => match state {
                TransferDialogState::Import { mut input, .. } => {
                    input.pop();
                    TransferDialogState::Import { input, error: None }
                }
                other => other,
            },
            TransferIntent::Failed(message) => match state {
                TransferDialogState::Import { input, .. } => TransferDialogState::Import {
                    input,
                    error: Some(message),
                },
                other => other,
            },
            TransferIntent::Close => TransferDialogState::Hidden,
        }
    }
}
