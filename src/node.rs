use std::fmt;
use std::mem::ManuallyDrop;
use std::ptr;

// =============================================================================
// Node type and chain helpers
// =============================================================================

/// One element of a singly-linked list.
///
/// Dropping a node releases its whole tail iteratively, so a `Link` of any
/// length can be dropped directly.
pub struct ListNode<T> {
    pub value: T,
    pub next: Link<T>,
}

/// A node, or `None` for the end of a chain / an empty list.
pub type Link<T> = Option<Box<ListNode<T>>>;

impl<T> ListNode<T> {
    pub fn new(value: T) -> Self {
        ListNode { value, next: None }
    }

    pub fn with_next(value: T, next: Link<T>) -> Self {
        ListNode { value, next }
    }

    /// Releases the successor chain and returns the payload.
    pub fn into_value(mut self) -> T {
        drop(self.next.take());
        let node = ManuallyDrop::new(self);
        // SAFETY: `node` is never dropped and its `next` is already empty,
        // so `value` is read exactly once and nothing else is owned.
        unsafe { ptr::read(&node.value) }
    }
}

impl<T> Drop for ListNode<T> {
    fn drop(&mut self) {
        let mut current = self.next.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ListNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = vec![&self.value];
        values.extend(iter(&self.next));
        f.debug_list().entries(values).finish()
    }
}

/// Builds a chain whose traversal yields `values` in order.
pub fn from_vec<T>(values: Vec<T>) -> Link<T> {
    let mut head = None;

    for value in values.into_iter().rev() {
        head = Some(Box::new(ListNode::with_next(value, head)));
    }
    head
}

/// Consumes a chain, returning its values in traversal order.
pub fn into_vec<T>(mut head: Link<T>) -> Vec<T> {
    let mut values = Vec::new();

    while let Some(mut node) = head {
        head = node.next.take();
        values.push((*node).into_value());
    }
    values
}

/// Reads a chain back without consuming it.
pub fn values<T: Clone>(head: &Link<T>) -> Vec<T> {
    iter(head).cloned().collect()
}

pub fn len<T>(head: &Link<T>) -> usize {
    iter(head).count()
}

pub fn iter<T>(head: &Link<T>) -> Iter<'_, T> {
    Iter {
        next: head.as_deref(),
    }
}

/// Iterator over the nodes of a chain, yielding node references so callers
/// can check identity as well as value.
pub struct Nodes<'a, T> {
    next: Option<&'a ListNode<T>>,
}

pub fn nodes<T>(head: &Link<T>) -> Nodes<'_, T> {
    Nodes {
        next: head.as_deref(),
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a ListNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node
        })
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}
