use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{ShoppingList, ShoppingListItem, State};
use crate::transfer::TransferError;

/// Pretty JSON for one list.
pub fn export_list(list: &ShoppingList) -> Result<String, TransferError> {
    Ok(serde_json::to_string_pretty(list)?)
}

/// Single-line JSON, for QR payloads.
pub fn export_list_compact(list: &ShoppingList) -> Result<String, TransferError> {
    Ok(serde_json::to_string(list)?)
}

/// Pretty JSON for the whole state snapshot (backup format).
pub fn export_state(state: &State) -> Result<String, TransferError> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// File name for an exported list: lower-cased, spaces as underscores.
pub fn export_filename(list_name: &str) -> String {
    let stem: String = list_name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    if stem.is_empty() {
        "list.json".to_string()
    } else {
        format!("{stem}.json")
    }
}

/// Parse and validate an exported list.
///
/// Only the envelope is checked strictly (see [`validate`]). Items are read
/// leniently: missing fields take their defaults and entries that are not
/// objects are skipped.
pub fn import_list(text: &str) -> Result<ShoppingList, TransferError> {
    let value: Value = serde_json::from_str(text.trim())?;
    validate(&value)?;

    let name = match &value["name"] {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let items = value["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .enumerate()
                .filter_map(|(idx, item)| {
                    let coerced = coerce_item(item);
                    if coerced.is_none() {
                        tracing::warn!(idx, "Skipping imported item that is not an object");
                    }
                    coerced
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(ShoppingList::with_items(name, items))
}

/// Loose schema check: a non-null object with a truthy `name` and an array
/// `items`.
pub fn validate(value: &Value) -> Result<(), TransferError> {
    let Some(object) = value.as_object() else {
        return Err(TransferError::Validation("expected a JSON object".to_string()));
    };
    if !object.get("name").is_some_and(is_truthy) {
        return Err(TransferError::Validation("missing list name".to_string()));
    }
    if !object.get("items").is_some_and(Value::is_array) {
        return Err(TransferError::Validation("items must be an array".to_string()));
    }
    Ok(())
}

/// Write `list` as `<dir>/<export_filename>`. Returns the path written.
pub fn write_list_file(list: &ShoppingList, dir: &Path) -> Result<PathBuf, TransferError> {
    let path = dir.join(export_filename(&list.name));
    let json = export_list(list)?;
    fs::write(&path, json).map_err(|e| TransferError::Write {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}

pub fn read_list_file(path: &Path) -> Result<ShoppingList, TransferError> {
    let text = fs::read_to_string(path).map_err(|e| TransferError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    import_list(&text)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn coerce_item(value: &Value) -> Option<ShoppingListItem> {
    let object = value.as_object()?;
    let name = object
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let quantity = object
        .get("quantity")
        .and_then(Value::as_f64)
        .filter(|q| *q >= 1.0)
        .map(|q| q.min(u32::MAX as f64) as u32)
        .unwrap_or(1);
    let checked = object
        .get("checked")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    Some(ShoppingListItem::new(name, quantity, checked))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ShoppingList {
        ShoppingList::with_items(
            "Weekend BBQ",
            vec![
                ShoppingListItem::new("Sausages", 12, false),
                ShoppingListItem::new("Buns", 2, true),
            ],
        )
    }

    #[test]
    fn export_then_import_is_identity() {
        let list = sample();
        assert_eq!(import_list(&export_list(&list).unwrap()).unwrap(), list);
        assert_eq!(import_list(&export_list_compact(&list).unwrap()).unwrap(), list);
    }

    #[test]
    fn filename_is_lowercase_with_underscores() {
        assert_eq!(export_filename("Weekend BBQ"), "weekend_bbq.json");
        assert_eq!(export_filename("a/b"), "a_b.json");
        assert_eq!(export_filename("   "), "list.json");
    }

    #[test]
    fn rejects_empty_name_and_non_array_items() {
        let err = import_list(r#"{"name":"","items":"notanarray"}"#).unwrap_err();
        assert!(matches!(err, TransferError::Validation(_)));
    }

    #[test]
    fn rejects_non_objects() {
        for text in ["null", "[]", "42", r#""list""#] {
            assert!(matches!(
                import_list(text),
                Err(TransferError::Validation(_))
            ));
        }
    }

    #[test]
    fn rejects_missing_items() {
        assert!(import_list(r#"{"name":"X"}"#).is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(import_list("{oops"), Err(TransferError::Parse(_))));
    }

    #[test]
    fn items_are_coerced_leniently() {
        let list = import_list(
            r#"{"name":"X","items":[{"name":"A"},{"quantity":0,"checked":true},"junk",{"name":"B","quantity":3.7}]}"#,
        )
        .unwrap();
        assert_eq!(
            list.items,
            vec![
                ShoppingListItem::new("A", 1, false),
                ShoppingListItem::new("", 1, true),
                ShoppingListItem::new("B", 3, false),
            ]
        );
    }

    #[test]
    fn truthy_non_string_name_is_kept_as_text() {
        let list = import_list(r#"{"name":7,"items":[]}"#).unwrap();
        assert_eq!(list.name, "7");
    }
}
