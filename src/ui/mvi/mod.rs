//! Unidirectional state primitives shared by the dialogs and the drag
//! machine.
//!
//! ```text
//! key/mouse ──→ Intent ──→ Reducer ──→ State ──→ draw
//!     ↑                                           │
//!     └───────────────────────────────────────────┘
//! ```
//!
//! Reducers never touch the store. Side effects (saving, clipboard, files)
//! happen in the app after a reducer has produced its new state.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
