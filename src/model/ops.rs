//! Discrete, validated edits on a [`State`].
//!
//! These are pure: they never log or persist. `ListMutators` wraps them with
//! logging and the save policy.

use thiserror::Error;

use crate::model::types::{ShoppingList, ShoppingListItem, State};

/// Why an edit was rejected. The state is untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("Invalid list index: {index} ({len} lists)")]
    ListIndex { index: usize, len: usize },

    #[error("Invalid item index: {index} ({len} items)")]
    ItemIndex { index: usize, len: usize },

    #[error("No active list")]
    NoActiveList,

    #[error("List name is empty")]
    EmptyName,
}

impl State {
    /// Append a list and make it active. Returns its index.
    pub fn add_list(&mut self, list: ShoppingList) -> usize {
        self.shopping_lists.push(list);
        let idx = self.shopping_lists.len() - 1;
        self.active_list = Some(idx);
        idx
    }

    /// Remove the list at `idx`.
    ///
    /// Removing the active list selects the previous one (or the first, or
    /// none when the last list is gone). Removing a list before the active one
    /// shifts the active index so it keeps pointing at the same list.
    pub fn remove_list(&mut self, idx: usize) -> Result<ShoppingList, EditError> {
        let len = self.shopping_lists.len();
        if idx >= len {
            return Err(EditError::ListIndex { index: idx, len });
        }
        let removed = self.shopping_lists.remove(idx);
        self.active_list = match self.active_list {
            _ if self.shopping_lists.is_empty() => None,
            Some(active) if active == idx => Some(active.saturating_sub(1)),
            Some(active) if active > idx => Some(active - 1),
            Some(active) if active >= self.shopping_lists.len() => {
                Some(self.shopping_lists.len() - 1)
            }
            other => other,
        };
        Ok(removed)
    }

    pub fn set_active_list(&mut self, idx: usize) -> Result<(), EditError> {
        let len = self.shopping_lists.len();
        if idx >= len {
            return Err(EditError::ListIndex { index: idx, len });
        }
        self.active_list = Some(idx);
        Ok(())
    }

    /// Rename the active list to the trimmed `name`.
    pub fn rename_active_list(&mut self, name: &str) -> Result<(), EditError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(EditError::EmptyName);
        }
        let list = self.active_mut().ok_or(EditError::NoActiveList)?;
        list.name = trimmed.to_string();
        Ok(())
    }

    pub fn add_item(&mut self, list_idx: usize, item: ShoppingListItem) -> Result<(), EditError> {
        let len = self.shopping_lists.len();
        let list = self
            .shopping_lists
            .get_mut(list_idx)
            .ok_or(EditError::ListIndex { index: list_idx, len })?;
        list.items.push(item);
        Ok(())
    }

    pub fn remove_item(&mut self, item_idx: usize) -> Result<ShoppingListItem, EditError> {
        let list = self.active_mut().ok_or(EditError::NoActiveList)?;
        let len = list.items.len();
        if item_idx >= len {
            return Err(EditError::ItemIndex { index: item_idx, len });
        }
        Ok(list.items.remove(item_idx))
    }

    /// Move an item of the active list: remove at `source`, insert at `dest`.
    ///
    /// `dest` is an index into the list as it is after the removal, so
    /// `dest == len - 1` moves the item to the end.
    pub fn move_item(&mut self, source: usize, dest: usize) -> Result<(), EditError> {
        let list = self.active_mut().ok_or(EditError::NoActiveList)?;
        let len = list.items.len();
        if source >= len {
            return Err(EditError::ItemIndex { index: source, len });
        }
        if dest >= len {
            return Err(EditError::ItemIndex { index: dest, len });
        }
        let item = list.items.remove(source);
        list.items.insert(dest, item);
        Ok(())
    }

    pub fn item_at(&self, item_idx: usize) -> Result<&ShoppingListItem, EditError> {
        let list = self.active().ok_or(EditError::NoActiveList)?;
        list.items.get(item_idx).ok_or(EditError::ItemIndex {
            index: item_idx,
            len: list.items.len(),
        })
    }

    pub fn set_item_at(&mut self, item_idx: usize, item: ShoppingListItem) -> Result<(), EditError> {
        let list = self.active_mut().ok_or(EditError::NoActiveList)?;
        let len = list.items.len();
        let slot = list
            .items
            .get_mut(item_idx)
            .ok_or(EditError::ItemIndex { index: item_idx, len })?;
        *slot = item;
        Ok(())
    }
}
