mod graph;
mod node;

pub use graph::SceneGraph;
pub use node::{Node, NodeId};
