mod common;

use common::{item_names, list, memory_mutators};
use shoplist::ui::drag::{DragIntent, DragReducer, DragState};
use shoplist::ui::mvi::Reducer;

fn drag(state: DragState, intent: DragIntent) -> DragState {
    DragReducer::reduce(state, intent)
}

/// Run a whole gesture and commit the drop the way the app does.
fn drag_and_drop(source: usize, over: &[(usize, bool)]) -> (Vec<usize>, Vec<String>) {
    let (mutators, _) = memory_mutators();
    mutators.add_list(list("Party", &["A", "B", "C", "D"]));

    let mut state = drag(
        DragState::Idle,
        DragIntent::Start {
            source,
            item_count: 4,
        },
    );
    for &(target, after) in over {
        state = drag(state, DragIntent::Over { target, after });
    }
    let visual = state.visual_order(4);
    if let Some((from, to)) = state.drop_move() {
        assert!(mutators.move_item(from, to));
    }
    assert_eq!(drag(state, DragIntent::End), DragState::Idle);
    (visual, item_names(&mutators.state()))
}

/// Test that a drop commits the order the user saw while dragging.
#[test]
fn drop_matches_visual_order() {
    let (visual, names) = drag_and_drop(0, &[(2, true)]);
    assert_eq!(visual, vec![1, 2, 0, 3]);
    assert_eq!(names, vec!["B", "C", "A", "D"]);
}

#[test]
fn drag_to_front() {
    let (visual, names) = drag_and_drop(3, &[(1, false), (0, false)]);
    assert_eq!(visual, vec![3, 0, 1, 2]);
    assert_eq!(names, vec!["D", "A", "B", "C"]);
}

/// Test that returning to the start position commits nothing.
#[test]
fn drop_back_in_place_is_a_no_op() {
    let (visual, names) = drag_and_drop(1, &[(3, true), (0, true)]);
    assert_eq!(visual, vec![0, 1, 2, 3]);
    assert_eq!(names, vec!["A", "B", "C", "D"]);
}

#[test]
fn drop_without_movement_is_a_no_op() {
    let (_, names) = drag_and_drop(2, &[]);
    assert_eq!(names, vec!["A", "B", "C", "D"]);
}

/// Test that a cancelled drag leaves the store alone.
#[test]
fn cancel_discards_the_gesture() {
    let (mutators, backend) = memory_mutators();
    mutators.add_list(list("Party", &["A", "B", "C"]));
    let writes = backend.write_count(shoplist::store::STATE_KEY);

    let state = drag(
        DragState::Idle,
        DragIntent::Start {
            source: 0,
            item_count: 3,
        },
    );
    let state = drag(state, DragIntent::Over { target: 2, after: true });
    assert!(state.drop_move().is_some());
    assert_eq!(drag(state, DragIntent::Cancel), DragState::Idle);

    assert_eq!(backend.write_count(shoplist::store::STATE_KEY), writes);
    assert_eq!(item_names(&mutators.state()), vec!["A", "B", "C"]);
}

/// Test that hovering over nothing keeps the drag idle.
#[test]
fn over_without_start_stays_idle() {
    let state = drag(DragState::Idle, DragIntent::Over { target: 1, after: false });
    assert_eq!(state, DragState::Idle);
    assert_eq!(state.visual_order(2), vec![0, 1]);
}
