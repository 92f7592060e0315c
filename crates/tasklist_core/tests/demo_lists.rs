use std::collections::BTreeSet;
use tasklist_core::{DemoList, ListCapability, ListLayout, TaskListError};

#[test]
fn every_pattern_builds_its_seed_rows() {
    for demo in DemoList::ALL {
        let list = demo.build();
        let titles = list
            .tasks()
            .iter()
            .map(|task| task.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, demo.seed_titles(), "{demo}");
        assert_eq!(list.layout(), demo.layout(), "{demo}");
        assert!(list.tasks().iter().all(|task| !task.is_pinned), "{demo}");
    }
}

#[test]
fn builds_fresh_ids_each_time() {
    let first = DemoList::Deletable.build();
    let second = DemoList::Deletable.build();
    assert_ne!(first.ids(), second.ids());
}

#[test]
fn reorder_capability_matches_layout() {
    for demo in DemoList::ALL {
        let mut list = demo.build();
        let result = list.move_tasks(&BTreeSet::from([0]), 2);
        if demo.layout() == ListLayout::PinnedFirst {
            assert!(!demo.supports(ListCapability::Reorder));
            assert_eq!(
                result,
                Err(TaskListError::ReorderUnavailable(ListLayout::PinnedFirst))
            );
        } else {
            assert!(result.is_ok(), "{demo}");
        }
    }
}

#[test]
fn names_round_trip_through_parse() {
    for demo in DemoList::ALL {
        assert_eq!(demo.as_str().parse::<DemoList>(), Ok(demo));
    }
}

#[test]
fn basic_pattern_uses_its_own_title() {
    assert_eq!(DemoList::Basic.title(), "My Tasks");
    assert_eq!(DemoList::Pinned.title(), "Tasks");
    assert!(DemoList::Basic.capabilities().is_empty());
}
