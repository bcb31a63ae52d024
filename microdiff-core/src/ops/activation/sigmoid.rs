use crate::error::Result;
use crate::graph::{Graph, IntoOperand};
use crate::node::{NodeId, Op};
use crate::ops::apply_unary_op;

/// Computes `1 / (1 + e^-a)`.
pub fn sigmoid_op(graph: &mut Graph, a: impl IntoOperand) -> Result<NodeId> {
    apply_unary_op(graph, a, Op::Sigmoid, |_, a| Ok(1.0 / (1.0 + (-a).exp())))
}

pub(crate) fn sigmoid_backward(out: f64, grad: f64) -> f64 {
    out * (1.0 - out) * grad
}
