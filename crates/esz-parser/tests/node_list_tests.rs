//! Tests for NodeList growth and access.

use crate::parser::node_list::NodeList;

#[test]
fn test_empty_list_owns_no_storage() {
    let list: NodeList<u32> = NodeList::new();
    assert_eq!(list.count(), 0);
    assert_eq!(list.capacity(), 0);
    assert!(list.is_empty());
    assert!(list.freeze().is_empty());
}

#[test]
fn test_growth_doubles_from_four() {
    let mut list = NodeList::new();
    list.add(1u32);
    assert_eq!(list.capacity(), 4);
    for i in 2..=4 {
        list.add(i);
    }
    assert_eq!(list.capacity(), 4);
    list.add(5);
    assert_eq!(list.capacity(), 8);
    for i in 6..=9 {
        list.add(i);
    }
    assert_eq!(list.capacity(), 16);
    assert_eq!(list.count(), 9);
}

#[test]
fn test_get_set_and_remove() {
    let mut list: NodeList<&str> = ["a", "b", "c"].into_iter().collect();
    assert_eq!(list.get(1), Some(&"b"));
    assert_eq!(list.get(3), None);

    assert_eq!(list.set(1, "x"), Some("b"));
    assert_eq!(list.set(7, "y"), None);
    assert_eq!(list[1], "x");

    assert_eq!(list.remove_at(0), Some("a"));
    assert_eq!(list.remove_at(5), None);
    assert_eq!(list.count(), 2);
    assert_eq!(list[0], "x");
    assert_eq!(list.last(), Some(&"c"));
}

#[test]
fn test_freeze_preserves_order() {
    let mut list = NodeList::new();
    for i in 0..10u8 {
        list.push(i);
    }
    let frozen = list.freeze();
    assert_eq!(&*frozen, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_iteration_by_reference_and_value() {
    let list: NodeList<u32> = (1..=3).collect();
    let sum: u32 = (&list).into_iter().sum();
    assert_eq!(sum, 6);
    let doubled: Vec<u32> = list.into_iter().map(|x| x * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6]);
}
