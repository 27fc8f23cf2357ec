use std::fmt;
use std::iter::FromIterator;

use crate::node::{self, Link, ListNode};
use crate::reverse::reverse_list;

// =============================================================================
// LinkedList: an owning container around a chain
// =============================================================================

pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

/// Walks to the empty link after the last node.
fn tail_slot<T>(mut cursor: &mut Link<T>) -> &mut Link<T> {
    while let Some(node) = cursor {
        cursor = &mut node.next;
    }
    cursor
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn tail(&self) -> Option<&T> {
        self.iter().last()
    }

    pub fn iter(&self) -> node::Iter<'_, T> {
        node::iter(&self.head)
    }

    pub fn prepend(&mut self, value: T) -> &mut Self {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode::with_next(value, next)));
        self.len += 1;
        self
    }

    /// O(n): the list keeps no tail pointer.
    pub fn append(&mut self, value: T) -> &mut Self {
        *tail_slot(&mut self.head) = Some(Box::new(ListNode::new(value)));
        self.len += 1;
        self
    }

    pub fn delete_head(&mut self) -> Option<T> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        self.len -= 1;
        Some((*node).into_value())
    }

    pub fn delete_tail(&mut self) -> Option<T> {
        let mut cursor = &mut self.head;
        while cursor.as_ref()?.next.is_some() {
            cursor = &mut cursor.as_mut()?.next;
        }

        let last = cursor.take()?;
        self.len -= 1;
        Some((*last).into_value())
    }

    /// Removes every node whose value matches `pred` and returns the last
    /// removed value. Surviving nodes keep their relative order.
    pub fn delete_by<F>(&mut self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut deleted = None;
        let mut kept = None;
        let mut current = self.head.take();
        self.len = 0;

        while let Some(mut node) = current {
            current = node.next.take();
            if pred(&node.value) {
                deleted = Some((*node).into_value());
            } else {
                node.next = kept;
                kept = Some(node);
                self.len += 1;
            }
        }

        // survivors were pushed front-first
        self.head = reverse_list(kept);
        deleted
    }

    pub fn find_by<F>(&self, mut pred: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|value| pred(value))
    }

    /// Reverses the list in place. The old head becomes the tail.
    pub fn reverse(&mut self) -> &mut Self {
        self.head = reverse_list(self.head.take());
        self
    }

    /// Hands the chain over to the caller, leaving the list empty.
    pub fn into_link(self) -> Link<T> {
        self.head
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn delete(&mut self, value: &T) -> Option<T> {
        self.delete_by(|candidate| candidate == value)
    }

    pub fn find(&self, value: &T) -> Option<&T> {
        self.find_by(|candidate| candidate == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }
}

impl<T: Clone> LinkedList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Link<T>> for LinkedList<T> {
    fn from(head: Link<T>) -> Self {
        let len = node::len(&head);
        LinkedList { head, len }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Iterator integration
// =============================================================================

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut slot = tail_slot(&mut self.head);
        for value in iter {
            let node = slot.insert(Box::new(ListNode::new(value)));
            slot = &mut node.next;
            self.len += 1;
        }
    }
}

pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.delete_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = node::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
