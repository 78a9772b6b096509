//! Pure view model built from a state snapshot.
//!
//! Nothing here is incremental: every call rebuilds the whole tree, and the
//! renderer redraws it. Equal snapshots give equal views.

use crate::model::State;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    List {
        idx: usize,
        name: String,
        active: bool,
    },
    /// The static "add list" entry, always last.
    AddList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub idx: usize,
    pub name: String,
    pub quantity: u32,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Hidden,
    Shown { name: String, rows: Vec<ItemRow> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppView {
    pub menu: Vec<MenuEntry>,
    pub detail: DetailView,
}

pub fn render_all(state: &State) -> AppView {
    AppView {
        menu: render_list_menu(state),
        detail: render_active_list(state),
    }
}

pub fn render_list_menu(state: &State) -> Vec<MenuEntry> {
    state
        .shopping_lists
        .iter()
        .enumerate()
        .map(|(idx, list)| MenuEntry::List {
            idx,
            name: list.name.clone(),
            active: state.active_list == Some(idx),
        })
        .chain(std::iter::once(MenuEntry::AddList))
        .collect()
}

pub fn render_active_list(state: &State) -> DetailView {
    let Some(list) = state.active() else {
        return DetailView::Hidden;
    };
    let rows = list
        .items
        .iter()
        .enumerate()
        .map(|(idx, item)| ItemRow {
            idx,
            name: item.name.clone(),
            quantity: item.quantity,
            checked: item.checked,
        })
        .collect();
    DetailView::Shown {
        name: list.name.clone(),
        rows,
    }
}
