use crate::error::{MicrodiffError, Result};
use crate::graph::Graph;
use crate::node::NodeId;

/// Computes the Mean Squared Error between `predictions` and `targets`.
///
/// Returns the scalar loss node `sum((p - t)^2) / n`.
///
/// # Errors
/// `ConfigurationError` if the slices are empty or differ in length.
pub fn mse_loss(graph: &mut Graph, predictions: &[NodeId], targets: &[f64]) -> Result<NodeId> {
    if predictions.is_empty() || predictions.len() != targets.len() {
        return Err(MicrodiffError::ConfigurationError(format!(
            "mse_loss expects matching non-empty inputs, got {} predictions and {} targets",
            predictions.len(),
            targets.len()
        )));
    }
    let mut total = graph.value(0.0)?;
    for (&prediction, &target) in predictions.iter().zip(targets) {
        let diff = graph.sub(prediction, target)?;
        let squared = graph.pow(diff, 2.0)?;
        total = graph.add(total, squared)?;
    }
    graph.div(total, predictions.len())
}
