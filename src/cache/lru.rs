//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.
//!
//! Nodes live in a slot vector and link to each other by index, so every
//! operation is O(1) and freed slots are reused by later insertions.
//!
//! ```text
//!   head (MRU) ─► [k3] ◄──► [k1] ◄──► [k2] ◄── tail (LRU, next eviction)
//! ```

// == Node Handle ==
/// Stable handle to a node in an [`LruTracker`].
///
/// Valid until the node is removed; the slot may then be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    key: String,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys are linked where:
/// - Front (head) = Most recently used
/// - Back (tail) = Least recently used
#[derive(Debug, Default)]
pub struct LruTracker {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Push Front ==
    /// Adds a key as the most recently used and returns its handle.
    pub fn push_front(&mut self, key: &str) -> NodeId {
        let node = Node {
            key: key.to_string(),
            prev: None,
            next: None,
        };
        let id = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                NodeId(idx)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        };
        self.len += 1;
        self.attach_front(id);
        id
    }

    // == Touch ==
    /// Marks a node as recently used (moves to front).
    ///
    /// Returns false if the handle is not live.
    pub fn touch(&mut self, id: NodeId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.head != Some(id) {
            self.detach(id);
            self.attach_front(id);
        }
        true
    }

    // == Remove ==
    /// Removes a node from the tracker, returning its key.
    pub fn remove(&mut self, id: NodeId) -> Option<String> {
        if !self.contains(id) {
            return None;
        }
        self.detach(id);
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(node.key)
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        let tail = self.tail?;
        self.remove(tail)
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Contains ==
    /// Checks if a handle refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Iterate ==
    /// Iterates keys from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        let mut current = self.head;
        std::iter::from_fn(move || {
            let node = self.node(current?)?;
            current = node.next;
            Some(node.key.as_str())
        })
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    /// Unlinks a live node, leaving it in its slot.
    fn detach(&mut self, id: NodeId) {
        let (prev, next) = match self.node_mut(id) {
            Some(node) => (node.prev.take(), node.next.take()),
            None => return,
        };
        match prev {
            Some(prev) => {
                if let Some(node) = self.node_mut(prev) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(next) => {
                if let Some(node) = self.node_mut(next) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    /// Links a detached node at the head.
    fn attach_front(&mut self, id: NodeId) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(head) => {
                if let Some(node) = self.node_mut(head) {
                    node.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    /// Walks the list both ways and checks links, length and free slots.
    #[cfg(test)]
    pub(crate) fn validate(&self) {
        let mut forward = Vec::new();
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = self.node(id).expect("linked node must be live");
            assert_eq!(node.prev, prev, "broken back link");
            forward.push(id);
            prev = Some(id);
            current = node.next;
        }
        assert_eq!(self.tail, prev, "tail does not end the list");
        assert_eq!(forward.len(), self.len, "length mismatch");

        let live = self.slots.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(live, self.len, "unlinked live slot");
        assert_eq!(live + self.free.len(), self.slots.len(), "leaked slot");
    }
}
