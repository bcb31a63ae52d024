// src/graph/mod.rs

use crate::config::GraphConfig;
use crate::error::{MicrodiffError, Result};
use crate::node::{Node, NodeId, Op};
use log::trace;

mod accessors;
mod autograd_methods;
mod coerce;
mod op_methods;

pub use coerce::IntoOperand;

/// Arena owning every node of a computation graph.
///
/// Nodes refer to their operands by [`NodeId`], never by ownership, so a value
/// reused in several sub-expressions is one node with several consumers. The
/// arena issues ids in insertion order and an operation can only reference
/// nodes that already exist, which keeps the graph acyclic.
///
/// Serials are never reused, even after [`Graph::truncate`], so a stale id
/// fails with `UnknownNode` instead of aliasing a newer node.
///
/// Use follows the phases build, optionally reset, backward, read gradients.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    config: GraphConfig,
    next_serial: usize,
}

impl Graph {
    /// Creates an empty graph with default thresholds.
    pub fn new() -> Self {
        Graph::default()
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            nodes: Vec::new(),
            config,
            next_serial: 0,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a leaf node. Fails with `NonFiniteValue` for NaN or infinities.
    pub fn value(&mut self, data: f64) -> Result<NodeId> {
        self.push_node(data, Op::Leaf, Vec::new())
    }

    pub fn value_labeled(&mut self, data: f64, label: impl Into<String>) -> Result<NodeId> {
        let id = self.value(data)?;
        self.set_label(id, label)?;
        Ok(id)
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id.index())
            .filter(|node| node.id == id)
            .ok_or(MicrodiffError::UnknownNode(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id.index())
            .filter(|node| node.id == id)
            .ok_or(MicrodiffError::UnknownNode(id))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Drops every node created after the first `len` nodes.
    ///
    /// Training loops take `graph.len()` once the parameters exist and truncate
    /// back to it after each step, so per-step expression nodes do not pile up.
    /// Ids issued after the mark become unknown to this graph and stay unknown
    /// once new nodes reuse their slots.
    pub fn truncate(&mut self, len: usize) {
        if len < self.nodes.len() {
            trace!("truncating graph from {} to {} nodes", self.nodes.len(), len);
            self.nodes.truncate(len);
        }
    }

    pub(crate) fn push_node(&mut self, data: f64, op: Op, children: Vec<NodeId>) -> Result<NodeId> {
        for child in &children {
            self.node(*child)?;
        }
        let id = NodeId::new(self.next_serial, self.nodes.len());
        let node = Node::new(id, data, op, children)?;
        trace!("node {} created: op={:?} data={}", id, op, data);
        self.nodes.push(node);
        self.next_serial += 1;
        Ok(id)
    }
}
