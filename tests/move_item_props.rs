use proptest::prelude::*;
use shoplist::model::{ShoppingList, ShoppingListItem, State};

fn state_with(names: &[String]) -> State {
    let mut state = State::default();
    state.add_list(ShoppingList::with_items(
        "P",
        names
            .iter()
            .map(|n| ShoppingListItem::new(n.clone(), 1, false))
            .collect(),
    ));
    state
}

fn names(state: &State) -> Vec<String> {
    state.shopping_lists[0]
        .items
        .iter()
        .map(|i| i.name.clone())
        .collect()
}

proptest! {
    #[test]
    fn move_item_is_a_permutation(
        items in prop::collection::vec("[a-z]{1,4}", 1..12),
        src_seed in any::<usize>(),
        dst_seed in any::<usize>(),
    ) {
        let src = src_seed % items.len();
        let dst = dst_seed % items.len();
        let mut state = state_with(&items);
        prop_assert!(state.move_item(src, dst).is_ok());

        let mut expected = items.clone();
        let moved = expected.remove(src);
        expected.insert(dst, moved);
        prop_assert_eq!(names(&state), expected);

        let mut before = items.clone();
        let mut after = names(&state);
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn out_of_range_move_changes_nothing(
        items in prop::collection::vec("[a-z]{1,4}", 0..6),
        extra in 0usize..4,
    ) {
        let mut state = state_with(&items);
        let before = state.clone();
        prop_assert!(state.move_item(items.len() + extra, 0).is_err());
        prop_assert!(state.move_item(0, items.len() + extra).is_err());
        prop_assert_eq!(state, before);
    }
}
