//! One-shot command line operations. They share the store and mutators with
//! the UI, so saves follow the same rules.

use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::cli::ExportFormat;
use crate::model::State;
use crate::mutators::ListMutators;
use crate::transfer::{self, TransferError};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("No list at index {0}")]
    NoSuchList(usize),

    #[error("No active list; pass --list")]
    NoActiveList,

    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error(transparent)]
    Transfer(#[from] TransferError),
}

/// One line per list: index, active marker, name and progress.
pub fn list_summary(state: &State) -> String {
    if state.shopping_lists.is_empty() {
        return "No lists yet.".to_string();
    }
    state
        .shopping_lists
        .iter()
        .enumerate()
        .map(|(idx, list)| {
            let marker = if state.active_list == Some(idx) { '*' } else { ' ' };
            let done = list.items.iter().filter(|item| item.checked).count();
            format!(
                "{marker} {idx:>2}  {}  ({done}/{} checked)",
                list.name,
                list.items.len()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Export list `list` (default: active). Writes `out` when given and returns
/// a confirmation; otherwise returns the JSON or the rendered QR code.
pub fn export(
    state: &State,
    list: Option<usize>,
    format: ExportFormat,
    out: Option<&Path>,
) -> Result<String, CommandError> {
    let target = match list {
        Some(idx) => state
            .shopping_lists
            .get(idx)
            .ok_or(CommandError::NoSuchList(idx))?,
        None => state.active().ok_or(CommandError::NoActiveList)?,
    };

    match (format, out) {
        (ExportFormat::Json, None) => Ok(transfer::export_list(target)?),
        (ExportFormat::Json, Some(path)) => {
            write_text(path, &transfer::export_list(target)?)?;
            Ok(format!("Wrote {}", path.display()))
        }
        (ExportFormat::Qr, None) => {
            Ok(transfer::render_qr(&transfer::export_list_compact(target)?)?)
        }
        (ExportFormat::Qr, Some(path)) => {
            transfer::write_qr_png(&transfer::export_list_compact(target)?, path)?;
            Ok(format!("Wrote {}", path.display()))
        }
    }
}

/// Back up the whole snapshot, every list plus the active index.
pub fn backup(state: &State, out: Option<&Path>) -> Result<String, CommandError> {
    let json = transfer::export_state(state)?;
    match out {
        None => Ok(json),
        Some(path) => {
            write_text(path, &json)?;
            Ok(format!("Wrote {}", path.display()))
        }
    }
}

fn write_text(path: &Path, text: &str) -> Result<(), TransferError> {
    std::fs::write(path, text).map_err(|e| TransferError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Import from a JSON file, a QR image, or `stdin` (no file, or `-`).
/// The list is appended and made active. Returns its index.
pub fn import(
    mutators: &ListMutators,
    file: Option<&Path>,
    qr: Option<&Path>,
    mut stdin: impl Read,
) -> Result<usize, CommandError> {
    let list = match (file, qr) {
        (_, Some(image)) => transfer::import_list(&transfer::decode_qr_image(image)?)?,
        (Some(path), None) if path != Path::new("-") => transfer::read_list_file(path)?,
        _ => {
            let mut text = String::new();
            stdin.read_to_string(&mut text).map_err(CommandError::Stdin)?;
            transfer::import_list(&text)?
        }
    };
    tracing::info!(list = %list.name, items = list.items.len(), "Importing list");
    Ok(mutators.add_list(list))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ShoppingList, ShoppingListItem};
    use crate::store::{MemoryStorage, Store, STATE_KEY};
    use std::sync::Arc;
    use std::time::Duration;

    fn state() -> State {
        let mut state = State::default();
        state.add_list(ShoppingList::with_items(
            "Hardware",
            vec![
                ShoppingListItem::new("Screws", 40, true),
                ShoppingListItem::new("Glue", 1, false),
            ],
        ));
        state
    }

    #[test]
    fn summary_marks_active_list() {
        assert_eq!(list_summary(&state()), "*  0  Hardware  (1/2 checked)");
        assert_eq!(list_summary(&State::default()), "No lists yet.");
    }

    #[test]
    fn export_unknown_index_fails() {
        assert!(matches!(
            export(&state(), Some(3), ExportFormat::Json, None),
            Err(CommandError::NoSuchList(3))
        ));
    }

    #[test]
    fn export_without_active_list_fails() {
        assert!(matches!(
            export(&State::default(), None, ExportFormat::Json, None),
            Err(CommandError::NoActiveList)
        ));
    }

    #[test]
    fn backup_holds_every_list() {
        let mut full = state();
        full.add_list(ShoppingList::new("Garden"));
        full.set_active_list(0).unwrap();

        let json = backup(&full, None).unwrap();
        let restored: State = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, full);
    }

    #[test]
    fn backup_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("backup.json");
        let message = backup(&state(), Some(&path)).unwrap();
        assert!(message.contains("backup.json"));
        let restored: State =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(restored, state());
    }

    #[test]
    fn import_from_stdin_appends() {
        let store = Store::load(STATE_KEY, Arc::new(MemoryStorage::new()));
        let mutators = ListMutators::new(store, Duration::from_millis(10));
        let json = export(&state(), None, ExportFormat::Json, None).unwrap();
        let idx = import(&mutators, Some(Path::new("-")), None, json.as_bytes()).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(mutators.state().shopping_lists[0].name, "Hardware");
    }

    #[test]
    fn import_rejects_invalid_json() {
        let store = Store::load(STATE_KEY, Arc::new(MemoryStorage::new()));
        let mutators = ListMutators::new(store, Duration::from_millis(10));
        let result = import(&mutators, None, None, &br#"{"items":[]}"#[..]);
        assert!(matches!(
            result,
            Err(CommandError::Transfer(TransferError::Validation(_)))
        ));
        assert!(mutators.state().shopping_lists.is_empty());
    }
}
