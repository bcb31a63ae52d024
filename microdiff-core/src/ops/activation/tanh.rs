use crate::error::Result;
use crate::graph::{Graph, IntoOperand};
use crate::node::{NodeId, Op};
use crate::ops::apply_unary_op;

/// Computes `tanh(a)`.
pub fn tanh_op(graph: &mut Graph, a: impl IntoOperand) -> Result<NodeId> {
    apply_unary_op(graph, a, Op::Tanh, |_, a| Ok(a.tanh()))
}

pub(crate) fn tanh_backward(out: f64, grad: f64) -> f64 {
    (1.0 - out * out) * grad
}
