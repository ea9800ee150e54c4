use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated with Box, which allows the value to be moved back out of the heap with
// a dereference once the node is unlinked.

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

/// A copyable handle to a heap allocated [`Node`]. The list that links a node owns it, handles
/// are only used to reach it.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node back off of the heap, freeing its allocation.
    ///
    /// # Safety
    /// The node must still be allocated, and neither this handle nor any copy of it may be used
    /// afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The node was allocated by Box in from_node and is still live.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// # Safety
    /// The node must be allocated for all of `'a` and must not be mutated during that time.
    pub const unsafe fn node<'a>(self) -> &'a Node<T> {
        // SAFETY: Upheld by the caller.
        unsafe { self.0.as_ref() }
    }

    /// # Safety
    /// The node must be allocated for all of `'a` and no other reference to it may exist during
    /// that time.
    pub const unsafe fn node_mut<'a>(mut self) -> &'a mut Node<T> {
        // SAFETY: Upheld by the caller.
        unsafe { self.0.as_mut() }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}
