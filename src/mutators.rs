//! State mutators: one validated edit per call, followed by a save.
//!
//! Structural edits (adding, removing, selecting or reordering) are saved
//! immediately. Field edits (item fields, list name) go through the debounced
//! path, because the UI emits one per keystroke. Rejected edits are logged and
//! leave the state untouched; they never surface as errors.

use std::time::Duration;

use crate::model::{EditError, ShoppingList, ShoppingListItem, State};
use crate::store::{DebouncedStore, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Save {
    Now,
    Debounced,
}

pub struct ListMutators {
    store: Store<State>,
    debounced: DebouncedStore<State>,
}

impl ListMutators {
    pub fn new(store: Store<State>, debounce: Duration) -> Self {
        let debounced = store.debounced(debounce);
        Self { store, debounced }
    }

    pub fn store(&self) -> &Store<State> {
        &self.store
    }

    /// Current snapshot.
    pub fn state(&self) -> State {
        self.store.get()
    }

    /// Append `list` and make it active. Returns the new index.
    pub fn add_list(&self, list: ShoppingList) -> usize {
        self.apply("add_list", Save::Now, |state| Ok(state.add_list(list)))
            .unwrap_or_default()
    }

    pub fn remove_list(&self, idx: usize) -> bool {
        self.apply("remove_list", Save::Now, |state| state.remove_list(idx))
            .is_some()
    }

    pub fn set_active_list(&self, idx: usize) -> bool {
        self.apply("set_active_list", Save::Now, |state| state.set_active_list(idx))
            .is_some()
    }

    /// Rename the active list. Blank names are ignored; the caller restores
    /// the field from the unchanged state.
    pub fn rename_active_list(&self, name: &str) -> bool {
        self.apply("rename_active_list", Save::Debounced, |state| {
            state.rename_active_list(name)
        })
        .is_some()
    }

    pub fn add_item(&self, list_idx: usize, item: ShoppingListItem) -> bool {
        self.apply("add_item", Save::Now, |state| state.add_item(list_idx, item))
            .is_some()
    }

    /// Remove an item of the active list.
    pub fn remove_item(&self, item_idx: usize) -> bool {
        self.apply("remove_item", Save::Now, |state| state.remove_item(item_idx))
            .is_some()
    }

    /// Reorder the active list.
    pub fn move_item(&self, source: usize, dest: usize) -> bool {
        self.apply("move_item", Save::Now, |state| state.move_item(source, dest))
            .is_some()
    }

    /// Replace an item of the active list.
    pub fn set_item_at(&self, item_idx: usize, item: ShoppingListItem) -> bool {
        self.apply("set_item_at", Save::Debounced, |state| {
            state.set_item_at(item_idx, item)
        })
        .is_some()
    }

    pub fn active_item_at(&self, item_idx: usize) -> Option<ShoppingListItem> {
        match self.store.get().item_at(item_idx) {
            Ok(item) => Some(item.clone()),
            Err(e) => {
                tracing::error!(item_idx, error = %e, "active_item_at rejected");
                None
            }
        }
    }

    /// Commit a pending debounced save now.
    pub fn flush(&self) {
        self.debounced.flush();
    }

    fn apply<R, F>(&self, op: &'static str, save: Save, edit: F) -> Option<R>
    where
        F: FnOnce(&mut State) -> Result<R, EditError>,
    {
        let mut state = self.store.get();
        match edit(&mut state) {
            Ok(result) => {
                match save {
                    Save::Now => self.store.update(state),
                    Save::Debounced => self.debounced.update(state),
                }
                Some(result)
            }
            Err(EditError::EmptyName) => {
                tracing::debug!(op, "Blank name ignored");
                None
            }
            Err(e) => {
                tracing::error!(op, error = %e, "Edit rejected");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStorage, STATE_KEY};
    use std::sync::Arc;

    fn mutators() -> (Arc<MemoryStorage>, ListMutators) {
        let backend = Arc::new(MemoryStorage::new());
        let store = Store::load(STATE_KEY, backend.clone());
        (backend, ListMutators::new(store, Duration::from_secs(30)))
    }

    #[test]
    fn structural_edits_save_immediately() {
        let (backend, m) = mutators();
        m.add_list(ShoppingList::new("A"));
        m.add_item(0, ShoppingListItem::new("Milk", 1, false));
        assert_eq!(backend.write_count(STATE_KEY), 2);
    }

    #[test]
    fn field_edits_wait_for_debounce() {
        let (backend, m) = mutators();
        m.add_list(ShoppingList::new("A"));
        m.add_item(0, ShoppingListItem::new("Milk", 1, false));
        let writes = backend.write_count(STATE_KEY);

        assert!(m.set_item_at(0, ShoppingListItem::new("Milk", 2, false)));
        assert!(m.rename_active_list("B"));
        assert_eq!(backend.write_count(STATE_KEY), writes);
        assert_eq!(m.state().shopping_lists[0].name, "B");

        m.flush();
        assert_eq!(backend.write_count(STATE_KEY), writes + 1);
    }

    #[test]
    fn rejected_edit_does_not_save() {
        let (backend, m) = mutators();
        m.add_list(ShoppingList::new("A"));
        let writes = backend.write_count(STATE_KEY);
        assert!(!m.remove_list(3));
        assert!(!m.move_item(0, 0));
        assert!(!m.rename_active_list(" "));
        m.flush();
        assert_eq!(backend.write_count(STATE_KEY), writes);
    }

    #[test]
    fn active_item_at_reads_active_list() {
        let (_, m) = mutators();
        m.add_list(ShoppingList::new("A"));
        m.add_item(0, ShoppingListItem::new("Eggs", 6, false));
        assert_eq!(m.active_item_at(0).unwrap().quantity, 6);
        assert!(m.active_item_at(1).is_none());
    }
}
