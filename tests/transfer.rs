mod common;

use common::{list, memory_mutators};
use shoplist::model::{ShoppingList, ShoppingListItem};
use shoplist::transfer::{
    decode_qr_image, export_filename, export_list, export_list_compact, import_list,
    read_list_file, write_list_file, write_qr_png, TransferError,
};
use tempfile::TempDir;

fn sample() -> ShoppingList {
    ShoppingList::with_items(
        "Camping Trip",
        vec![
            ShoppingListItem::new("Tent pegs", 12, false),
            ShoppingListItem::new("Marshmallows", 3, true),
        ],
    )
}

/// Test that an exported list imports back unchanged.
#[test]
fn import_of_export_is_identity() {
    let list = sample();
    assert_eq!(import_list(&export_list(&list).unwrap()).unwrap(), list);
}

/// Test that the export file is named after the list.
#[test]
fn file_export_and_import() {
    let dir = TempDir::new().unwrap();
    let path = write_list_file(&sample(), dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "camping_trip.json");
    assert_eq!(export_filename("Camping Trip"), "camping_trip.json");
    assert_eq!(read_list_file(&path).unwrap(), sample());
}

/// Test that a QR image of a list decodes back to the same list.
#[test]
fn qr_image_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("list.png");
    write_qr_png(&export_list_compact(&sample()).unwrap(), &path).unwrap();
    let text = decode_qr_image(&path).unwrap();
    assert_eq!(import_list(&text).unwrap(), sample());
}

/// Test that an invalid import adds nothing.
#[test]
fn invalid_import_leaves_state_alone() {
    let (mutators, _) = memory_mutators();
    mutators.add_list(list("Existing", &[]));
    let before = mutators.state();

    let err = import_list(r#"{"name":"","items":"notanarray"}"#).unwrap_err();
    assert!(matches!(err, TransferError::Validation(_)));
    assert_eq!(mutators.state(), before);
}

/// Test that a successful import is appended and made active.
#[test]
fn import_appends_and_activates() {
    let (mutators, _) = memory_mutators();
    mutators.add_list(list("Existing", &[]));
    let imported = import_list(&export_list(&sample()).unwrap()).unwrap();
    let idx = mutators.add_list(imported);
    let state = mutators.state();
    assert_eq!(idx, 1);
    assert_eq!(state.active_list, Some(1));
    assert_eq!(state.shopping_lists[1], sample());
}

/// Test that reading a missing file reports the path.
#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let err = read_list_file(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, TransferError::Read { .. }));
}
