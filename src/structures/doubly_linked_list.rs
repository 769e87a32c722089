//! Doubly-linked list with arena-backed nodes.
//!
//! Nodes live in a slot vector owned by the list and refer to their
//! neighbours by slot index, so the list needs no `unsafe` and no reference
//! counting. Vacated slots are recycled by later insertions. Every mutation
//! updates the forward and backward links together, which keeps two
//! properties true between calls:
//!
//! - walking `next` from `head` visits exactly `count` nodes and ends at `tail`
//! - walking `prev` from `tail` visits the same nodes in reverse
//!
//! Head and tail operations are O(1). Positional operations walk from
//! whichever end is nearer, so they are O(n/2) in the worst case.

use std::fmt;
use std::iter::FusedIterator;

use super::List;

#[derive(Clone)]
struct Node<E> {
    value: E,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly-linked sequence of `E`.
#[derive(Clone)]
pub struct DoublyLinkedList<E> {
    slots: Vec<Option<Node<E>>>,
    vacant: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    count: usize,
}

impl<E> DoublyLinkedList<E> {
    /// Create an empty list.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
            head: None,
            tail: None,
            count: 0,
        }
    }

    /// Drop every element and release the node storage.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
        self.head = None;
        self.tail = None;
        self.count = 0;
    }

    /// Borrowing iterator from first to last.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.count,
        }
    }

    fn node(&self, slot: usize) -> Option<&Node<E>> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node<E>> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    fn allocate(&mut self, node: Node<E>) -> usize {
        match self.vacant.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Slot holding the element at `index`, walking from the nearer end.
    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.count {
            return None;
        }

        if index <= self.count / 2 {
            (0..index).try_fold(self.head?, |slot, _| self.node(slot)?.next)
        } else {
            (index..self.count - 1).try_fold(self.tail?, |slot, _| self.node(slot)?.prev)
        }
    }

    /// Link a new node carrying `value` between `prev` and `next`.
    fn link_between(&mut self, value: E, prev: Option<usize>, next: Option<usize>) {
        let slot = self.allocate(Node { value, prev, next });

        match prev.and_then(|p| self.node_mut(p)) {
            Some(node) => node.next = Some(slot),
            None => self.head = Some(slot),
        }
        match next.and_then(|n| self.node_mut(n)) {
            Some(node) => node.prev = Some(slot),
            None => self.tail = Some(slot),
        }

        self.count += 1;
    }

    /// Detach the node in `slot`, joining its neighbours to each other.
    fn unlink(&mut self, slot: usize) -> Option<E> {
        let node = self.slots.get_mut(slot)?.take()?;

        match node.prev.and_then(|p| self.node_mut(p)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|n| self.node_mut(n)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }

        self.count -= 1;
        if self.count == 0 {
            self.clear();
        } else {
            self.vacant.push(slot);
        }

        Some(node.value)
    }
}

impl<E> List<E> for DoublyLinkedList<E> {
    fn first(&self) -> Option<&E> {
        self.node(self.head?).map(|node| &node.value)
    }

    fn last(&self) -> Option<&E> {
        self.node(self.tail?).map(|node| &node.value)
    }

    fn add_first(&mut self, element: E) {
        self.link_between(element, None, self.head);
    }

    fn add_last(&mut self, element: E) {
        self.link_between(element, self.tail, None);
    }

    fn remove_first(&mut self) -> Option<E> {
        self.unlink(self.head?)
    }

    fn remove_last(&mut self) -> Option<E> {
        self.unlink(self.tail?)
    }

    fn insert(&mut self, element: E, index: usize) {
        if index >= self.count {
            self.add_last(element);
        } else if index == 0 {
            self.add_first(element);
        } else {
            match self.slot_at(index - 1) {
                Some(prev) => {
                    let next = self.node(prev).and_then(|node| node.next);
                    self.link_between(element, Some(prev), next);
                }
                None => self.add_last(element),
            }
        }
    }

    fn remove(&mut self, index: usize) -> Option<E> {
        if index >= self.count {
            None
        } else if index == 0 {
            self.remove_first()
        } else if index == self.count - 1 {
            self.remove_last()
        } else {
            let slot = self.slot_at(index)?;
            self.unlink(slot)
        }
    }

    fn get(&self, index: usize) -> Option<&E> {
        self.node(self.slot_at(index)?).map(|node| &node.value)
    }

    fn size(&self) -> usize {
        self.count
    }
}

impl<E> Default for DoublyLinkedList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for DoublyLinkedList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E: PartialEq> PartialEq for DoublyLinkedList<E> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<E: Eq> Eq for DoublyLinkedList<E> {}

impl<E> FromIterator<E> for DoublyLinkedList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<E> Extend<E> for DoublyLinkedList<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        iter.into_iter().for_each(|element| self.add_last(element));
    }
}

impl<'a, E> IntoIterator for &'a DoublyLinkedList<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> IntoIterator for DoublyLinkedList<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// Borrowing iterator over a [`DoublyLinkedList`].
pub struct Iter<'a, E> {
    list: &'a DoublyLinkedList<E>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = list.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> DoubleEndedIterator for Iter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = list.node(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<E> FusedIterator for Iter<'_, E> {}

impl<E> Clone for Iter<'_, E> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator over a [`DoublyLinkedList`].
pub struct IntoIter<E> {
    list: DoublyLinkedList<E>,
}

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.size(), Some(self.list.size()))
    }
}

impl<E> DoubleEndedIterator for IntoIter<E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.remove_last()
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}

impl<E> FusedIterator for IntoIter<E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collect<E: Clone>(list: &DoublyLinkedList<E>) -> Vec<E> {
        list.iter().cloned().collect()
    }

    fn collect_backward<E: Clone>(list: &DoublyLinkedList<E>) -> Vec<E> {
        list.iter().rev().cloned().collect()
    }

    #[test]
    fn empty_list_has_no_first_or_last() {
        let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.size(), 0);
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
        assert_eq!(list.get(0), None);
    }

    #[test]
    fn insert_at_zero_on_empty_list_matches_add_first() {
        let mut inserted = DoublyLinkedList::new();
        inserted.insert("x", 0);

        let mut prepended = DoublyLinkedList::new();
        prepended.add_first("x");

        assert_eq!(inserted, prepended);
        assert_eq!(inserted.first(), Some(&"x"));
        assert_eq!(inserted.last(), Some(&"x"));
        assert_eq!(inserted.size(), 1);
    }

    #[test]
    fn add_first_and_add_last_update_both_ends() {
        let mut list = DoublyLinkedList::new();
        list.add_last(2);
        list.add_first(1);
        list.add_last(3);

        assert_eq!(collect(&list), vec![1, 2, 3]);
        assert_eq!(list.first(), Some(&1));
        assert_eq!(list.last(), Some(&3));
    }

    #[test]
    fn removing_only_element_clears_head_and_tail() {
        let mut list = DoublyLinkedList::new();
        list.add_first(7);

        assert_eq!(list.remove_first(), Some(7));
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
        assert!(list.is_empty());

        list.add_last(8);
        assert_eq!(list.remove_last(), Some(8));
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
    }

    #[test]
    fn remove_from_empty_list_is_none() {
        let mut list: DoublyLinkedList<i32> = DoublyLinkedList::new();
        assert_eq!(list.remove_first(), None);
        assert_eq!(list.remove_last(), None);
        assert_eq!(list.remove(0), None);
        assert_eq!(list.size(), 0);
    }

    #[test]
    fn remove_last_moves_tail_back() {
        let mut list: DoublyLinkedList<_> = (1..=4).collect();

        assert_eq!(list.remove_last(), Some(4));
        assert_eq!(list.last(), Some(&3));
        assert_eq!(collect_backward(&list), vec![3, 2, 1]);
    }

    #[test]
    fn insert_into_two_element_list_keeps_tail_valid() {
        let mut list: DoublyLinkedList<_> = vec!['a', 'c'].into_iter().collect();
        list.insert('b', 1);

        assert_eq!(collect(&list), vec!['a', 'b', 'c']);
        assert_eq!(list.last(), Some(&'c'));
        assert_eq!(collect_backward(&list), vec!['c', 'b', 'a']);

        list.add_last('d');
        assert_eq!(collect(&list), vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn insert_past_end_appends() {
        let mut list: DoublyLinkedList<_> = (1..=2).collect();
        list.insert(3, 2);
        list.insert(4, 99);

        assert_eq!(collect(&list), vec![1, 2, 3, 4]);
        assert_eq!(list.last(), Some(&4));
    }

    #[test]
    fn insert_in_back_half_walks_from_tail() {
        let mut list: DoublyLinkedList<_> = (0..6).collect();
        list.insert(100, 5);

        assert_eq!(collect(&list), vec![0, 1, 2, 3, 4, 100, 5]);
        assert_eq!(collect_backward(&list), vec![5, 100, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn remove_by_index_splices_out_middle() {
        let mut list: DoublyLinkedList<_> = (0..5).collect();

        assert_eq!(list.remove(2), Some(2));
        assert_eq!(list.remove(3), Some(4));
        assert_eq!(list.remove(0), Some(0));
        assert_eq!(list.remove(5), None);

        assert_eq!(collect(&list), vec![1, 3]);
        assert_eq!(list.size(), 2);
        assert_eq!(list.last(), Some(&3));
    }

    #[test]
    fn get_reads_from_either_end() {
        let list: DoublyLinkedList<_> = (10..20).collect();

        assert_eq!(list.get(0), Some(&10));
        assert_eq!(list.get(4), Some(&14));
        assert_eq!(list.get(7), Some(&17));
        assert_eq!(list.get(9), Some(&19));
        assert_eq!(list.get(10), None);
    }

    #[test]
    fn vacated_slots_are_reused() {
        let mut list: DoublyLinkedList<_> = (0..4).collect();
        list.remove(1);
        list.remove(1);
        list.add_last(4);
        list.add_first(-1);

        assert_eq!(list.slots.len(), 4);
        assert_eq!(collect(&list), vec![-1, 0, 3, 4]);
    }

    #[test]
    fn iterators_meet_in_the_middle() {
        let list: DoublyLinkedList<_> = (1..=5).collect();
        let mut iter = list.iter();

        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn owning_iterator_drains_in_order() {
        let list: DoublyLinkedList<_> = vec!["a".to_string(), "b".to_string()].into_iter().collect();
        let drained: Vec<String> = list.into_iter().collect();

        assert_eq!(drained, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn debug_renders_as_list() {
        let list: DoublyLinkedList<_> = (1..=3).collect();
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    }

    #[test]
    fn clear_resets_state() {
        let mut list: DoublyLinkedList<_> = (1..=3).collect();
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.first(), None);
        assert_eq!(list.iter().count(), 0);
    }
}
