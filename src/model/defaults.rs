//! Default values for new lists and items.
//!
//! Each call builds a fresh value, so callers never share a template.

use crate::model::types::{ShoppingList, ShoppingListItem};

pub const DEFAULT_LIST_NAME: &str = "My List";
pub const DEFAULT_ITEM_NAME: &str = "Name";

pub fn default_list_name() -> String {
    DEFAULT_LIST_NAME.to_string()
}

pub fn default_quantity() -> u32 {
    1
}

/// A new, empty list named "My List".
pub fn default_shopping_list() -> ShoppingList {
    ShoppingList::default()
}

/// The placeholder item inserted by the "add item" button.
pub fn default_shopping_list_item() -> ShoppingListItem {
    ShoppingListItem::new(DEFAULT_ITEM_NAME, default_quantity(), false)
}
