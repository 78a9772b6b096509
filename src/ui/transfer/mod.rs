//! Import/export modal.
//!
//! The export side shows the active list as JSON or as a QR code and offers
//! clipboard and file targets. The import side collects JSON text or a path
//! typed by the user. Reading files, the clipboard and decoding QR images is
//! done by the app; this reducer only tracks what the modal shows.

mod intent;
mod reducer;
mod state;

pub use intent::TransferIntent;
pub use reducer::TransferReducer;
pub use state::{ExportView, TransferDialogState};
