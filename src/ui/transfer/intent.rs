use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TransferIntent {
    /// Show the export side. `qr` is `None` when the list does not fit in a
    /// QR code.
    OpenExport {
        list_name: String,
        json: String,
        qr: Option<String>,
    },
    OpenImport,
    /// Switch the export preview between JSON and QR.
    ToggleView,
    Input(char),
    Paste(String),
    Backspace,
    /// Import was rejected; keep the input so it can be fixed.
    Failed(String),
    Close,
}

impl Intent for TransferIntent {}
