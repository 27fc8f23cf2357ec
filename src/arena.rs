use crate::error::ArenaError;

// =============================================================================
// Index-linked nodes
// =============================================================================

/// Handle to a node slot inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Slot<T> {
    value: T,
    next: Option<NodeId>,
}

/// Owns every node; chains are expressed as `next` indices between slots.
///
/// Because ids stay valid across a reversal, a caller holding an id from the
/// middle of a chain can observe the rewired links afterwards.
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        NodeArena { slots: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            slots: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Adds an unlinked node.
    pub fn push(&mut self, value: T) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot { value, next: None });
        id
    }

    /// Pushes `values` as a fresh chain and returns its head.
    pub fn chain<I>(&mut self, values: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = T>,
    {
        let mut head = None;
        let mut prev: Option<NodeId> = None;

        for value in values {
            let id = self.push(value);
            match prev {
                Some(p) => self.slots[p.0].next = Some(id),
                None => head = Some(id),
            }
            prev = Some(id);
        }
        head
    }

    pub fn link(&mut self, from: NodeId, to: Option<NodeId>) -> Result<(), ArenaError> {
        if let Some(to) = to {
            self.check(to)?;
        }
        self.slot_mut(from)?.next = to;
        Ok(())
    }

    pub fn value(&self, id: NodeId) -> Result<&T, ArenaError> {
        Ok(&self.slot(id)?.value)
    }

    pub fn next(&self, id: NodeId) -> Result<Option<NodeId>, ArenaError> {
        Ok(self.slot(id)?.next)
    }

    /// Ids along the chain starting at `head`. The chain must be acyclic.
    pub fn walk(&self, head: Option<NodeId>) -> Result<Vec<NodeId>, ArenaError> {
        let mut ids = Vec::new();
        let mut current = head;

        while let Some(id) = current {
            current = self.slot(id)?.next;
            ids.push(id);
        }
        Ok(ids)
    }

    /// Reverses the chain starting at `head` and returns the new head.
    ///
    /// No slot is added or removed; only `next` indices change.
    pub fn reverse(&mut self, head: Option<NodeId>) -> Result<Option<NodeId>, ArenaError> {
        let mut previous = None;
        let mut current = head;

        while let Some(id) = current {
            let slot = self.slot_mut(id)?;
            let next = slot.next;
            slot.next = previous;
            previous = Some(id);
            current = next;
        }

        Ok(previous)
    }

    fn check(&self, id: NodeId) -> Result<(), ArenaError> {
        if id.0 < self.slots.len() {
            Ok(())
        } else {
            Err(ArenaError::unknown_node(id.0, self.slots.len()))
        }
    }

    fn slot(&self, id: NodeId) -> Result<&Slot<T>, ArenaError> {
        let len = self.slots.len();
        self.slots
            .get(id.0)
            .ok_or_else(|| ArenaError::unknown_node(id.0, len))
    }

    fn slot_mut(&mut self, id: NodeId) -> Result<&mut Slot<T>, ArenaError> {
        let len = self.slots.len();
        self.slots
            .get_mut(id.0)
            .ok_or_else(|| ArenaError::unknown_node(id.0, len))
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> NodeArena<T> {
    pub fn values_from(&self, head: Option<NodeId>) -> Result<Vec<T>, ArenaError> {
        self.walk(head)?
            .into_iter()
            .map(|id| self.value(id).cloned())
            .collect()
    }
}
