use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Position of a mounted node, as the child-index path from the root.
///
/// Handles stay valid across re-renders as long as the tree keeps the same
/// shape, which is how focus survives a re-render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(Vec<usize>);

impl NodeHandle {
    /// Handle of the root node.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Handle of the `index`-th child of this node.
    pub fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        Self(path)
    }

    /// Handle of the parent node, `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }

    pub fn path(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "root");
        }
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        write!(f, "root/{}", parts.join("/"))
    }
}

/// A shareable slot that receives the handle of the node it is attached to.
///
/// Attach a `NodeRef` to an [`Element`](crate::Element) with
/// [`Element::node_ref`](crate::Element::node_ref); the document writes the
/// node's handle into it on every mount. Several refs can point at the same
/// element, and clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct NodeRef {
    slot: Arc<RwLock<Option<NodeHandle>>>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// The handle of the node this ref was last attached to.
    pub fn get(&self) -> Option<NodeHandle> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_attached(&self) -> bool {
        self.get().is_some()
    }

    /// Whether both refs share the same slot.
    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }

    pub(crate) fn attach(&self, handle: NodeHandle) {
        log::trace!("Attaching ref to {handle}");
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(handle);
    }

    pub(crate) fn detach(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
