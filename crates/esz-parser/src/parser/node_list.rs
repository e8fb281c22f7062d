//! Growable node list used while a node's children are being collected.
//!
//! Children are gathered into a `NodeList` and frozen into the node's boxed
//! slice once the sub-parse completes. An empty list owns no storage; the first
//! growth allocates `NODE_LIST_INITIAL_CAPACITY` slots and later growth doubles.

use std::ops::{Index, IndexMut};

use esz_common::limits::NODE_LIST_INITIAL_CAPACITY;

#[derive(Clone, Debug, PartialEq)]
pub struct NodeList<T> {
    items: Vec<T>,
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        NodeList::new()
    }
}

impl<T> NodeList<T> {
    #[inline]
    pub const fn new() -> Self {
        NodeList { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NodeList {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Append an item, growing 0 -> 4 -> 8 -> 16 ...
    pub fn add(&mut self, item: T) {
        let len = self.items.len();
        if len == self.items.capacity() {
            let target = if len == 0 {
                NODE_LIST_INITIAL_CAPACITY
            } else {
                len * 2
            };
            self.items.reserve_exact(target - len);
        }
        self.items.push(item);
    }

    #[inline]
    pub fn push(&mut self, item: T) {
        self.add(item);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Remove the item at `index`, shifting the tail down.
    /// Returns None when `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Overwrite the item at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, item: T) -> Option<T> {
        self.items
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, item))
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Fix the contents into the node's final field.
    pub fn freeze(self) -> Box<[T]> {
        self.items.into_boxed_slice()
    }
}

impl<T> Index<usize> for NodeList<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for NodeList<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> FromIterator<T> for NodeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = NodeList::new();
        for item in iter {
            list.add(item);
        }
        list
    }
}

impl<T> IntoIterator for NodeList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NodeList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
