use super::arena::{NodeArena, NodeSink};
use super::node::{Link, Node, NodeId, RangeManager};
use crate::grammar::{Descriptor, GrammarError, GrammarResult, Range};
use crate::subject::Subject;

/// A compiled top-level chain and the arena holding it.
#[derive(Debug)]
pub struct CompiledGraph<T: Subject> {
    pub(crate) arena: NodeArena<T>,
    pub(crate) start: NodeId,
}

impl<T: Subject> CompiledGraph<T> {
    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn arena(&self) -> &NodeArena<T> {
        &self.arena
    }
}

#[tracing::instrument(level = "trace", skip(descriptors), fields(descriptors = descriptors.len() as u64))]
pub fn compile_graph<T: Subject>(descriptors: &[Descriptor<T>]) -> GrammarResult<CompiledGraph<T>> {
    let mut arena = NodeArena::new();
    match compile_chain(&mut arena, descriptors, Link::Final) {
        Link::Node(start) => Ok(CompiledGraph { arena, start }),
        Link::Final => Err(GrammarError::EmptyGrammar),
    }
}

/// Compiles `descriptors` into a forward-linked chain ending in `tail` and
/// returns its head. Built back to front so every forward edge is known when
/// its node is allocated.
pub(crate) fn compile_chain<T, S>(sink: &mut S, descriptors: &[Descriptor<T>], tail: Link) -> Link
where
    T: Subject,
    S: NodeSink<T>,
{
    let mut forward = tail;
    for descriptor in descriptors.iter().rev() {
        let node = match descriptor {
            Descriptor::Action(predicate) => Node::Action {
                predicate: predicate.clone(),
                forward,
            },
            Descriptor::Range(range) => Node::Range {
                range: range.clone(),
                forward,
            },
        };
        forward = Link::Node(sink.alloc(node));
    }
    forward
}

/// Builds a fresh branch for one entry into `range`: a new inner chain whose
/// tail loops back to a new manager. Returns the manager.
pub(crate) fn materialize_range<T, S>(sink: &mut S, range: &Range<T>, outer: Link) -> NodeId
where
    T: Subject,
    S: NodeSink<T>,
{
    let manager = sink.alloc(Node::Manager(RangeManager {
        min: range.min(),
        max: range.max(),
        inner: Link::Final,
        outer,
    }));
    let head = compile_chain(sink, range.children(), Link::Node(manager));
    if let Some(Node::Manager(node)) = sink.node_mut(manager) {
        node.inner = head;
    }
    manager
}
