use std::fmt;
use std::sync::Arc;

use crate::grammar::Range;
use crate::predicate::SharedPredicate;
use crate::subject::Subject;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Target of an edge: another node, or the end of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Link {
    Node(NodeId),
    Final,
}

#[derive(Debug)]
pub enum Node<T: Subject> {
    /// Runs a predicate against the element at the cursor.
    Action {
        predicate: SharedPredicate<T>,
        forward: Link,
    },
    /// Entry into a repetition; materialises a fresh branch on every visit.
    Range { range: Arc<Range<T>>, forward: Link },
    Manager(RangeManager),
}

impl<T: Subject> Node<T> {
    pub fn forward(&self) -> Link {
        match self {
            Node::Action { forward, .. } | Node::Range { forward, .. } => *forward,
            Node::Manager(manager) => manager.outer,
        }
    }
}

/// Loop head of one materialised range branch.
///
/// Holds only immutable wiring; the visit count belongs to the search branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeManager {
    pub min: usize,
    pub max: Option<usize>,
    pub inner: Link,
    pub outer: Link,
}

/// Which edges a manager offers after a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeDecision {
    pub reenter: bool,
    pub exit: bool,
}

impl RangeManager {
    /// `visits` counts this visit; `progressed` is whether the iteration that
    /// just finished consumed an element or changed the branch's bindings.
    pub fn decide(&self, visits: usize, progressed: bool) -> RangeDecision {
        let effective = visits.saturating_sub(1);

        let reenter = match self.max {
            Some(max) => effective < max,
            // an iteration that changed nothing past the minimum can never enable a new match
            None => effective == 0 || effective < self.min || progressed,
        };
        let exit = effective >= self.min && self.max.is_none_or(|max| effective <= max);

        RangeDecision { reenter, exit }
    }
}
