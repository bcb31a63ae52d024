use crate::error::Result;
use crate::graph::Graph;
use crate::node::NodeId;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// Parameters are leaf nodes of the graph the module was created in.
pub trait Module: std::fmt::Debug {
    /// Builds the module's expression over `inputs` and returns its output nodes.
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>>;

    /// Returns all learnable parameters, including those of sub-modules.
    fn parameters(&self) -> Vec<NodeId>;

    /// Zeroes the gradient of every parameter.
    fn zero_grad(&self, graph: &mut Graph) -> Result<()> {
        for param in self.parameters() {
            graph.set_grad(param, 0.0)?;
        }
        Ok(())
    }
}
