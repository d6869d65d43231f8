//! Arena-backed doubly linked lists.
//!
//! Nodes live in an [`Arena`] and are addressed by [`Handle`]s. A [`List`] is
//! only a head/tail/len descriptor over an arena, so several lists can share
//! one arena and a node can be moved from one list to another by relinking
//! its handle, without reallocating it.
//!
//! The cache keeps two arenas: one holding every entry (each entry list of a
//! bucket threads through it), and one holding the buckets themselves (the
//! bucket sequence threads through it).
//!
//! ```text
//!   Arena<T>                       List { head, tail, len }
//!   ┌──────┬───────────────────┐
//!   │ slot │ value, prev, next │    head ──► [h2] ◄──► [h0] ◄──► [h3] ◄── tail
//!   ├──────┼───────────────────┤
//!   │  h0  │ ..., h2,  h3      │
//!   │  h1  │ (free)            │
//!   │  h2  │ ..., -,   h0      │
//!   │  h3  │ ..., h0,  -       │
//!   └──────┴───────────────────┘
//! ```
//!
//! **Note**: this module is internal infrastructure. A handle is only
//! meaningful for the arena that produced it; handing a foreign or freed
//! handle to a list operation is a bug and panics.

extern crate alloc;

use alloc::vec::Vec;

/// Stable index of a node inside an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Handle(usize);

impl Handle {
    #[cfg(test)]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A node in an arena: a value plus its links in whichever list owns it.
#[derive(Debug)]
pub(crate) struct Node<T> {
    value: T,
    prev: Option<Handle>,
    next: Option<Handle>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub(crate) fn prev(&self) -> Option<Handle> {
        self.prev
    }

    #[inline]
    pub(crate) fn next(&self) -> Option<Handle> {
        self.next
    }
}

/// Slot storage for list nodes with free-slot reuse.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> Arena<T> {
    /// Creates an arena with room for `capacity` nodes before reallocating.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Stores `value` in a free slot as an unlinked node.
    pub(crate) fn insert(&mut self, value: T) -> Handle {
        let node = Some(Node {
            value,
            prev: None,
            next: None,
        });
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = node;
                idx
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        };
        self.len += 1;
        Handle(idx)
    }

    /// Frees the slot behind `handle` and returns its value.
    ///
    /// The node must already be unlinked from any list.
    pub(crate) fn remove(&mut self, handle: Handle) -> T {
        let node = match self.slots.get_mut(handle.0).and_then(Option::take) {
            Some(node) => node,
            None => panic!("removing vacant arena slot {}", handle.0),
        };
        debug_assert!(node.prev.is_none() && node.next.is_none());
        self.free.push(handle.0);
        self.len -= 1;
        node.value
    }

    /// Number of occupied slots.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Drops every node. Outstanding handles become invalid.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<T> {
        match self.slots.get(handle.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling arena handle {}", handle.0),
        }
    }

    #[inline]
    fn node_mut(&mut self, handle: Handle) -> &mut Node<T> {
        match self.slots.get_mut(handle.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling arena handle {}", handle.0),
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        &self.node(handle).value
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        &mut self.node_mut(handle).value
    }
}

/// A doubly linked list of arena nodes.
///
/// The list does not own its nodes; it records which handles are linked and
/// in what order. Every method takes the arena the nodes live in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct List {
    head: Option<Handle>,
    tail: Option<Handle>,
    len: usize,
}

impl List {
    pub(crate) const fn new() -> Self {
        List {
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    pub(crate) fn front(&self) -> Option<Handle> {
        self.head
    }

    #[inline]
    pub(crate) fn back(&self) -> Option<Handle> {
        self.tail
    }

    /// Links an unlinked node at the back of the list.
    pub(crate) fn push_back<T>(&mut self, arena: &mut Arena<T>, handle: Handle) {
        let old_tail = self.tail;
        {
            let node = arena.node_mut(handle);
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail {
            Some(tail) => arena.node_mut(tail).next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        self.len += 1;
    }

    /// Links an unlinked node directly after `pivot`, which must be in this list.
    pub(crate) fn insert_after<T>(&mut self, arena: &mut Arena<T>, pivot: Handle, handle: Handle) {
        let after = arena.node(pivot).next;
        {
            let node = arena.node_mut(handle);
            node.prev = Some(pivot);
            node.next = after;
        }
        arena.node_mut(pivot).next = Some(handle);
        match after {
            Some(after) => arena.node_mut(after).prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.len += 1;
    }

    /// Detaches `handle` from this list, leaving its slot occupied.
    pub(crate) fn unlink<T>(&mut self, arena: &mut Arena<T>, handle: Handle) {
        let (prev, next) = {
            let node = arena.node_mut(handle);
            (node.prev.take(), node.next.take())
        };
        match prev {
            Some(prev) => arena.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => arena.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
    }

    /// Detaches and returns the front node, if any.
    pub(crate) fn pop_front<T>(&mut self, arena: &mut Arena<T>) -> Option<Handle> {
        let head = self.head?;
        self.unlink(arena, head);
        Some(head)
    }
}
