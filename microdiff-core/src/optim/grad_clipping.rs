use crate::autograd::graph::topological_sort;
use crate::error::{MicrodiffError, Result};
use crate::graph::Graph;
use crate::node::NodeId;
use log::debug;

/// Clips the gradient of every node reachable from `root` in place.
///
/// Each node is clamped on its own: a gradient with `|grad| > max_norm` is
/// rescaled to magnitude `max_norm` with its sign kept, everything else is
/// left untouched. This is not a global L2-norm rescaling.
///
/// Returns the number of gradients that were clipped.
///
/// # Errors
/// `ConfigurationError` if `max_norm` is negative or not finite.
pub fn clip_gradients(graph: &mut Graph, root: NodeId, max_norm: f64) -> Result<usize> {
    if !max_norm.is_finite() || max_norm < 0.0 {
        return Err(MicrodiffError::ConfigurationError(format!(
            "max_norm must be finite and non-negative, got {}",
            max_norm
        )));
    }

    let mut clipped = 0;
    for id in topological_sort(graph, root)? {
        let grad = graph.grad(id)?;
        if grad.abs() > max_norm {
            graph.set_grad(id, max_norm.copysign(grad))?;
            clipped += 1;
        }
    }
    debug!("clip_gradients(max_norm = {}): clipped {} gradients", max_norm, clipped);
    Ok(clipped)
}

impl Graph {
    /// See [`clip_gradients`].
    pub fn clip_gradients(&mut self, root: NodeId, max_norm: f64) -> Result<usize> {
        clip_gradients(self, root, max_norm)
    }
}

#[cfg(test)]
#[path = "grad_clipping_test.rs"]
mod tests;
