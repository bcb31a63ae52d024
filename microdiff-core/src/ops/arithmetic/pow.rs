use crate::error::{MicrodiffError, Result};
use crate::graph::{Graph, IntoOperand};
use crate::node::{NodeId, Op};
use crate::ops::apply_binary_op;

/// Computes `a ^ b`.
///
/// Domain policy:
/// - `a == 0`: fails for `b == 0` and `b < 0`; `0 ^ b` for `b > 0` is `0` and
///   both operand gradients are `0`.
/// - `a < 0` with non-integer `b` fails (the result would be complex).
/// - a non-finite result fails as an overflow.
pub fn pow_op(graph: &mut Graph, a: impl IntoOperand, b: impl IntoOperand) -> Result<NodeId> {
    apply_binary_op(graph, a, b, Op::Pow, |_, a, b| pow_forward(a, b))
}

fn pow_forward(a: f64, b: f64) -> Result<f64> {
    if a == 0.0 {
        check_zero_base(b)?;
        return Ok(0.0);
    }
    if a < 0.0 && b.fract() != 0.0 {
        return Err(MicrodiffError::domain(
            "pow",
            format!("negative base {} with non-integer exponent {}", a, b),
        ));
    }
    let value = a.powf(b);
    if !value.is_finite() {
        return Err(MicrodiffError::domain(
            "pow",
            format!("overflow computing {} ^ {}", a, b),
        ));
    }
    Ok(value)
}

fn check_zero_base(b: f64) -> Result<()> {
    if b == 0.0 {
        Err(MicrodiffError::domain(
            "pow",
            "cannot raise 0 to zero or negative power",
        ))
    } else if b < 0.0 {
        Err(MicrodiffError::domain("pow", "division by zero in power operation"))
    } else {
        Ok(())
    }
}

/// `d(a^b)/da = b * a^(b-1)`, `d(a^b)/db = a^b * ln|a|`.
///
/// `ln|a|` extends the exponent rule to negative integer bases; it is exact
/// only for `a > 0`. Operands are re-inspected here because `set_data` may have
/// moved them into the zero-base cases after the forward pass.
pub(crate) fn pow_backward(a: f64, b: f64, out: f64, grad: f64) -> Result<[f64; 2]> {
    if a == 0.0 {
        check_zero_base(b)?;
        return Ok([0.0, 0.0]);
    }
    let grad_a = b * a.powf(b - 1.0) * grad;
    let grad_b = out * a.abs().ln() * grad;
    Ok([grad_a, grad_b])
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
