use super::node::{Node, NodeId};
use crate::subject::Subject;

/// Storage that the compiler can append nodes to.
pub(crate) trait NodeSink<T: Subject> {
    fn alloc(&mut self, node: Node<T>) -> NodeId;

    /// Mutable access to a node this sink owns.
    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>>;
}

/// Nodes of a compiled grammar, addressed by stable `NodeId`s.
#[derive(Debug)]
pub struct NodeArena<T: Subject> {
    nodes: Vec<Node<T>>,
}

impl<T: Subject> NodeArena<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<T: Subject> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Subject> NodeSink<T> for NodeArena<T> {
    fn alloc(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(id.index())
    }
}

/// Per-check overlay on a compiled arena.
///
/// Range branches materialised during one search live here and are dropped
/// with it, leaving the compiled graph untouched and shareable.
#[derive(Debug)]
pub(crate) struct ScratchArena<'g, T: Subject> {
    base: &'g NodeArena<T>,
    extra: Vec<Node<T>>,
}

impl<'g, T: Subject> ScratchArena<'g, T> {
    pub fn new(base: &'g NodeArena<T>) -> Self {
        Self {
            base,
            extra: Vec::new(),
        }
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        let index = id.index();
        if index < self.base.len() {
            self.base.get(id)
        } else {
            self.extra.get(index - self.base.len())
        }
    }

    #[cfg(test)]
    pub fn materialized(&self) -> usize {
        self.extra.len()
    }
}

impl<T: Subject> NodeSink<T> for ScratchArena<'_, T> {
    fn alloc(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId::from_index(self.base.len() + self.extra.len());
        self.extra.push(node);
        id
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        id.index()
            .checked_sub(self.base.len())
            .and_then(|index| self.extra.get_mut(index))
    }
}
