use std::collections::BTreeSet;

use proptest::prelude::*;
use tinytask_core::{TaskColor, TaskId, TaskStore};

fn seeded(len: usize) -> TaskStore {
    let mut store = TaskStore::new();
    for n in 0..len {
        if let Err(err) = store.add(format!("task {n}"), TaskColor::default()) {
            panic!("add: {err}");
        }
    }
    store
}

fn sorted_ids(store: &TaskStore) -> Vec<TaskId> {
    let mut ids: Vec<TaskId> = store.tasks().iter().map(tinytask_core::Task::id).collect();
    ids.sort();
    ids
}

/// A list length plus a batch of raw move requests to fold into range.
fn scenario() -> impl Strategy<Value = (usize, Vec<(Vec<usize>, usize)>)> {
    (1usize..12).prop_flat_map(|len| {
        let request = (prop::collection::vec(0..len, 0..=len), 0..=len);
        (Just(len), prop::collection::vec(request, 1..8))
    })
}

proptest! {
    #[test]
    fn moves_only_permute_tasks((len, moves) in scenario()) {
        let mut store = seeded(len);
        let original = sorted_ids(&store);

        for (from, to) in moves {
            let from: BTreeSet<usize> = from.into_iter().collect();
            prop_assert!(store.move_tasks(&from, to).is_ok());
            prop_assert_eq!(store.len(), len);
            prop_assert_eq!(sorted_ids(&store), original.clone());
        }
    }

    #[test]
    fn moved_block_is_contiguous_and_ordered((len, moves) in scenario()) {
        let (from, to) = moves[0].clone();
        let from: BTreeSet<usize> = from.into_iter().collect();
        let mut store = seeded(len);
        let block: Vec<TaskId> = from.iter().map(|&i| store.tasks()[i].id()).collect();

        prop_assert!(store.move_tasks(&from, to).is_ok());

        let start = to - from.range(..to).count();
        let landed: Vec<TaskId> = store.tasks()[start..start + block.len()]
            .iter()
            .map(tinytask_core::Task::id)
            .collect();
        prop_assert_eq!(landed, block);
    }

    #[test]
    fn double_toggle_restores_flag(len in 1usize..8, pick in 0usize..8) {
        let mut store = seeded(len);
        let id = store.tasks()[pick % len].id();
        let before = store.tasks().to_vec();
        prop_assert!(store.toggle_importance(id));
        prop_assert!(store.toggle_importance(id));
        prop_assert_eq!(store.tasks(), before.as_slice());
    }
}
