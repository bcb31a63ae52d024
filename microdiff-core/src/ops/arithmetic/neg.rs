use crate::error::Result;
use crate::graph::{Graph, IntoOperand};
use crate::node::{NodeId, Op};
use crate::ops::apply_unary_op;

/// Computes `-a`.
pub fn neg_op(graph: &mut Graph, a: impl IntoOperand) -> Result<NodeId> {
    apply_unary_op(graph, a, Op::Neg, |_, a| Ok(-a))
}

pub(crate) fn neg_backward(grad: f64) -> f64 {
    -grad
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
