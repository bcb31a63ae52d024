use crate::error::Result;
use crate::graph::{Graph, IntoOperand};
use crate::node::{NodeId, Op};
use crate::ops::apply_binary_op;

/// Computes `a * b`.
pub fn mul_op(graph: &mut Graph, a: impl IntoOperand, b: impl IntoOperand) -> Result<NodeId> {
    apply_binary_op(graph, a, b, Op::Mul, |_, a, b| Ok(a * b))
}

/// `d(ab)/da = b`, `d(ab)/db = a`.
pub(crate) fn mul_backward(a: f64, b: f64, grad: f64) -> [f64; 2] {
    [b * grad, a * grad]
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
