use crate::ui::drag::intent::DragIntent;
use crate::ui::drag::state::DragState;
use crate::ui::mvi::Reducer;

pub struct DragReducer;

impl Reducer for DragReducer {
    type State = DragState;
    type Intent = DragIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DragIntent::Start { source, item_count } => {
                if source >= item_count {
                    return DragState::Idle;
                }
                DragState::Dragging {
                    source,
                    original_position: source,
                    current_target: None,
                    order: (0..item_count).collect(),
                }
            }
            DragIntent::Over { target, after } => match state {
                DragState::Dragging {
                    source,
                    original_position,
                    current_target,
                    mut order,
                } => {
                    if target == source || !order.contains(&target) {
                        return DragState::Dragging {
                            source,
                            original_position,
                            current_target,
                            order,
                        };
                    }
                    if let Some(from) = order.iter().position(|&idx| idx == source) {
                        order.remove(from);
                    }
                    let anchor = order.iter().position(|&idx| idx == target).unwrap_or(0);
                    let insert_at = if after { anchor + 1 } else { anchor };
                    order.insert(insert_at, source);
                    DragState::Dragging {
                        source,
                        original_position,
                        current_target: Some(insert_at),
                        order,
                    }
                }
                DragState::Idle => DragState::Idle,
            },
            DragIntent::End | DragIntent::Cancel => DragState::Idle,
        }
    }
}
