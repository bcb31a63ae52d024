use crate::error::Result;
use crate::graph::{Graph, IntoOperand};
use crate::node::{NodeId, Op};
use crate::ops::apply_unary_op;

/// Computes `e ^ a`. An overflowing result is rejected as `NonFiniteValue`.
pub fn exp_op(graph: &mut Graph, a: impl IntoOperand) -> Result<NodeId> {
    apply_unary_op(graph, a, Op::Exp, |_, a| Ok(a.exp()))
}

pub(crate) fn exp_backward(out: f64, grad: f64) -> f64 {
    out * grad
}
