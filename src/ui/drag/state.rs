use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source: usize,
        original_position: usize,
        /// Position of the dragged item in `order` after the last `Over`.
        current_target: Option<usize>,
        /// Item indices in their current visual order.
        order: Vec<usize>,
    },
}

impl UiState for DragState {}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn source(&self) -> Option<usize> {
        match self {
            Self::Dragging { source, .. } => Some(*source),
            Self::Idle => None,
        }
    }

    /// Visual order of `item_count` rows. Identity unless a drag of a list
    /// with the same length is in progress.
    pub fn visual_order(&self, item_count: usize) -> Vec<usize> {
        match self {
            Self::Dragging { order, .. } if order.len() == item_count => order.clone(),
            _ => (0..item_count).collect(),
        }
    }

    /// The `(source, target)` move a drop right now would commit.
    ///
    /// `None` unless a target was recorded, the item ended somewhere other
    /// than where it started, and that place is not its own index.
    pub fn drop_move(&self) -> Option<(usize, usize)> {
        match self {
            Self::Dragging {
                source,
                original_position,
                current_target: Some(target),
                ..
            } if target != original_position && target != source => Some((*source, *target)),
            _ => None,
        }
    }
}
