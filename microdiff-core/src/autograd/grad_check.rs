use crate::error::MicrodiffError;
use crate::graph::Graph;
use crate::node::NodeId;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(MicrodiffError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(MicrodiffError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Graph error during intermediate calculation: {0}")]
    GraphError(MicrodiffError),
}

impl From<MicrodiffError> for GradCheckError {
    fn from(err: MicrodiffError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs` and must
/// return the scalar output node. The analytical gradient of each input comes
/// from one backward pass; the numerical one from
/// `(f(x + epsilon) - f(x - epsilon)) / (2 * epsilon)`, each side evaluated on
/// its own graph. A pair matches when it is within `abs_tol` absolutely or
/// `rel_tol` relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    abs_tol: f64,
    rel_tol: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, MicrodiffError>,
{
    // --- 1. Analytical gradients ---
    let mut graph = Graph::new();
    let leaves = inputs
        .iter()
        .map(|&x| graph.value(x))
        .collect::<Result<Vec<_>, _>>()?;
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    graph
        .backward(output)
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical = leaves
        .iter()
        .map(|&leaf| graph.grad(leaf))
        .collect::<Result<Vec<_>, _>>()?;

    // --- 2. Numerical gradients ---
    let evaluate = |values: &[f64]| -> Result<f64, GradCheckError> {
        let mut graph = Graph::new();
        let leaves = values
            .iter()
            .map(|&x| graph.value(x))
            .collect::<Result<Vec<_>, _>>()?;
        let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
        Ok(graph.data(output)?)
    };

    for (input_index, &analytical_grad) in analytical.iter().enumerate() {
        let mut plus = inputs.to_vec();
        let mut minus = inputs.to_vec();
        plus[input_index] += epsilon;
        minus[input_index] -= epsilon;

        let loss_plus = evaluate(&plus)?;
        let loss_minus = evaluate(&minus)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = abs_tol,
            max_relative = rel_tol
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }
    Ok(())
}
