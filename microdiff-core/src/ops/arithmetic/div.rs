use crate::error::{MicrodiffError, Result};
use crate::graph::{Graph, IntoOperand};
use crate::node::{NodeId, Op};
use crate::ops::apply_binary_op;

/// Computes `a / b`.
///
/// # Errors
/// `DomainViolation` if `|b|` is below the graph's `division_epsilon`.
pub fn div_op(graph: &mut Graph, a: impl IntoOperand, b: impl IntoOperand) -> Result<NodeId> {
    apply_binary_op(graph, a, b, Op::Div, |config, a, b| {
        if b.abs() < config.division_epsilon {
            return Err(MicrodiffError::domain(
                "div",
                format!("division by near-zero divisor {}", b),
            ));
        }
        Ok(a / b)
    })
}

/// For z = a / b:
/// grad(a) = grad * (1 / b), grad(b) = grad * (-a / b^2)
pub(crate) fn div_backward(a: f64, b: f64, grad: f64) -> [f64; 2] {
    [grad / b, -a / (b * b) * grad]
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
