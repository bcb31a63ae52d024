use crate::error::Result;
use crate::graph::{Graph, IntoOperand};
use crate::node::{NodeId, Op};
use crate::ops::apply_unary_op;

/// Computes `max(0, a)`.
pub fn relu_op(graph: &mut Graph, a: impl IntoOperand) -> Result<NodeId> {
    apply_unary_op(graph, a, Op::Relu, |_, a| Ok(if a > 0.0 { a } else { 0.0 }))
}

/// Passes the gradient through only where the input was positive.
pub(crate) fn relu_backward(a: f64, grad: f64) -> f64 {
    if a > 0.0 {
        grad
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
