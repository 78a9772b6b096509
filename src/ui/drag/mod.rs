//! Drag-to-reorder gesture for the items of the active list.
//!
//! While a drag is in progress only the visual order changes. The store is
//! touched once, on drop, through `ListMutators::move_item`.

mod intent;
mod reducer;
mod state;

pub use intent::DragIntent;
pub use reducer::DragReducer;
pub use state::DragState;
