//! Terminal UI: a list menu beside the active list, with import/export and
//! theme dialogs on top.

pub mod app;
pub mod drag;
pub mod element;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod settings;
pub mod status;
pub mod terminal_guard;
pub mod theme;
pub mod transfer;
pub mod view;

pub use runtime::run;
