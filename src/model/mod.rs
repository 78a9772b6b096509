//! Shopping list data model.

pub mod defaults;
mod ops;
mod types;

pub use defaults::{default_shopping_list, default_shopping_list_item, DEFAULT_LIST_NAME};
pub use ops::EditError;
pub use types::{Settings, ShoppingList, ShoppingListItem, State, Theme};
