use crate::error::{MicrodiffError, Result};
use crate::graph::{Graph, IntoOperand};
use crate::node::{NodeId, Op};
use crate::ops::apply_unary_op;

/// Computes the natural logarithm `ln(a)`.
///
/// # Errors
/// `DomainViolation` if `a <= 0`.
pub fn log_op(graph: &mut Graph, a: impl IntoOperand) -> Result<NodeId> {
    apply_unary_op(graph, a, Op::Log, |_, a| {
        if a <= 0.0 {
            return Err(MicrodiffError::domain(
                "log",
                format!("logarithm of non-positive value {}", a),
            ));
        }
        Ok(a.ln())
    })
}

pub(crate) fn log_backward(a: f64, grad: f64) -> f64 {
    grad / a
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
