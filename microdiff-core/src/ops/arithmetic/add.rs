use crate::error::Result;
use crate::graph::{Graph, IntoOperand};
use crate::node::{NodeId, Op};
use crate::ops::apply_binary_op;

/// Computes `a + b`.
pub fn add_op(graph: &mut Graph, a: impl IntoOperand, b: impl IntoOperand) -> Result<NodeId> {
    apply_binary_op(graph, a, b, Op::Add, |_, a, b| Ok(a + b))
}

/// `d(a+b)/da = 1`, `d(a+b)/db = 1`.
pub(crate) fn add_backward(grad: f64) -> [f64; 2] {
    [grad, grad]
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
