use std::collections::{BTreeSet, HashSet};
use tasklist_core::{pinned_first, ListLayout, Task, TaskId, TaskList};

/// Builds `len` tasks where bit `i` of `mask` pins task `i`.
fn tasks_with_mask(len: usize, mask: u32) -> Vec<Task> {
    (0..len)
        .map(|index| {
            let pinned = mask & (1 << index) != 0;
            Task::new(format!("task {index}")).pinned(pinned)
        })
        .collect()
}

fn ids(rows: &[&Task]) -> Vec<TaskId> {
    rows.iter().map(|task| task.id).collect()
}

#[test]
fn display_order_is_a_permutation_for_every_pin_mask() {
    for len in 0..=6 {
        for mask in 0..(1u32 << len) {
            let tasks = tasks_with_mask(len, mask);
            let mut expected = tasks.iter().map(|task| task.id).collect::<Vec<_>>();
            let mut actual = ids(&pinned_first(&tasks));
            expected.sort();
            actual.sort();
            assert_eq!(actual, expected, "len={len} mask={mask:b}");
        }
    }
}

#[test]
fn display_order_keeps_relative_order_inside_each_group() {
    for len in 0..=6 {
        for mask in 0..(1u32 << len) {
            let tasks = tasks_with_mask(len, mask);
            let rows = pinned_first(&tasks);

            let pinned_count = tasks.iter().filter(|task| task.is_pinned).count();
            assert!(rows[..pinned_count].iter().all(|task| task.is_pinned));
            assert!(rows[pinned_count..].iter().all(|task| !task.is_pinned));

            let expected_pinned = tasks
                .iter()
                .filter(|task| task.is_pinned)
                .map(|task| task.id);
            let expected_unpinned = tasks
                .iter()
                .filter(|task| !task.is_pinned)
                .map(|task| task.id);
            let expected = expected_pinned.chain(expected_unpinned).collect::<Vec<_>>();
            assert_eq!(ids(&rows), expected, "len={len} mask={mask:b}");
        }
    }
}

#[test]
fn no_pins_means_base_order() {
    let tasks = tasks_with_mask(5, 0);
    let base = tasks.iter().map(|task| task.id).collect::<Vec<_>>();
    assert_eq!(ids(&pinned_first(&tasks)), base);
}

#[test]
fn all_pinned_means_base_order() {
    // A comparator that reports same-group pairs as ordered would scramble this.
    let tasks = tasks_with_mask(5, 0b11111);
    let base = tasks.iter().map(|task| task.id).collect::<Vec<_>>();
    assert_eq!(ids(&pinned_first(&tasks)), base);
}

#[test]
fn display_order_is_recomputed_after_every_mutation() {
    let mut list = TaskList::from_titles(["a", "b", "c", "d"], ListLayout::PinnedFirst);
    let [a, b, c, d]: [TaskId; 4] = list.ids().try_into().unwrap();

    list.toggle_pinned(c).unwrap();
    assert_eq!(ids(&list.display_order()), vec![c, a, b, d]);

    list.toggle_pinned(a).unwrap();
    assert_eq!(ids(&list.display_order()), vec![a, c, b, d]);

    list.delete(&HashSet::from([a]));
    assert_eq!(ids(&list.display_order()), vec![c, b, d]);

    list.toggle_pinned(c).unwrap();
    assert_eq!(ids(&list.display_order()), vec![b, c, d]);
}

#[test]
fn insertion_layout_rows_follow_base_order_even_with_pins() {
    let mut list = TaskList::from_titles(["a", "b", "c"], ListLayout::Insertion);
    let base = list.ids();
    list.toggle_pinned(base[2]).unwrap();
    assert_eq!(ids(&list.display_order()), base);

    list.set_layout(ListLayout::PinnedFirst);
    assert_eq!(ids(&list.display_order()), vec![base[2], base[0], base[1]]);
}

#[test]
fn display_index_of_tracks_partition() {
    let mut list = TaskList::from_titles(["a", "b", "c"], ListLayout::PinnedFirst);
    let c = list.ids()[2];
    assert_eq!(list.display_index_of(c), Ok(2));
    list.toggle_pinned(c).unwrap();
    assert_eq!(list.display_index_of(c), Ok(0));

    list.delete_at_display_offsets(&BTreeSet::from([0])).unwrap();
    assert!(list.display_index_of(c).is_err());
}
