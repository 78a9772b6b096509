use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragIntent {
    /// Pointer pressed on the drag handle of item `source`.
    Start { source: usize, item_count: usize },
    /// Pointer moved over item `target`. `after` is true when the pointer is
    /// past the target's midpoint along the layout axis.
    Over { target: usize, after: bool },
    /// Pointer released.
    End,
    /// Drag aborted (Esc, focus lost, list changed underneath).
    Cancel,
}

impl Intent for DragIntent {}
