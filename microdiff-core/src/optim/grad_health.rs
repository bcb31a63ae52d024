use crate::autograd::graph::topological_sort;
use crate::error::Result;
use crate::graph::Graph;
use crate::node::NodeId;
use log::warn;

/// Summary of the gradient magnitudes reachable from a root.
///
/// Only non-zero gradients are considered. With none at all, `max_grad` is
/// `-inf`, `min_grad` is `+inf` and neither flag is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientHealth {
    pub has_exploding: bool,
    pub has_vanishing: bool,
    pub max_grad: f64,
    pub min_grad: f64,
}

/// Scans the nodes reachable from `root` once and reports the largest and
/// smallest non-zero `|grad|` against the graph's configured thresholds.
pub fn check_gradient_health(graph: &Graph, root: NodeId) -> Result<GradientHealth> {
    let mut max_grad = f64::NEG_INFINITY;
    let mut min_grad = f64::INFINITY;

    for id in topological_sort(graph, root)? {
        let magnitude = graph.grad(id)?.abs();
        if magnitude != 0.0 {
            max_grad = max_grad.max(magnitude);
            min_grad = min_grad.min(magnitude);
        }
    }

    let config = graph.config();
    let health = GradientHealth {
        has_exploding: max_grad > config.exploding_threshold,
        has_vanishing: min_grad < config.vanishing_threshold,
        max_grad,
        min_grad,
    };
    if health.has_exploding {
        warn!("exploding gradient under {}: max |grad| = {}", root, max_grad);
    }
    if health.has_vanishing {
        warn!("vanishing gradient under {}: min |grad| = {}", root, min_grad);
    }
    Ok(health)
}

impl Graph {
    /// See [`check_gradient_health`].
    pub fn check_gradient_health(&self, root: NodeId) -> Result<GradientHealth> {
        check_gradient_health(self, root)
    }
}
