mod arena;
mod compile;
mod node;

pub(crate) use arena::ScratchArena;
pub use arena::NodeArena;
pub(crate) use compile::materialize_range;
pub use compile::{CompiledGraph, compile_graph};
pub use node::{Link, Node, NodeId, RangeDecision, RangeManager};
