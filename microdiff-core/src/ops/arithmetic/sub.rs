use crate::error::Result;
use crate::graph::{Graph, IntoOperand};
use crate::node::{NodeId, Op};
use crate::ops::apply_binary_op;

/// Computes `a - b`.
pub fn sub_op(graph: &mut Graph, a: impl IntoOperand, b: impl IntoOperand) -> Result<NodeId> {
    apply_binary_op(graph, a, b, Op::Sub, |_, a, b| Ok(a - b))
}

pub(crate) fn sub_backward(grad: f64) -> [f64; 2] {
    [grad, -grad]
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
