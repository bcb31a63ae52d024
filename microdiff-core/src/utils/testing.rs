use crate::graph::Graph;
use crate::node::NodeId;

/// Checks that a node's data is within `tolerance` of `expected`.
/// Panics with the offending values otherwise.
pub fn check_data_near(graph: &Graph, id: NodeId, expected: f64, tolerance: f64) {
    let actual = graph
        .data(id)
        .expect("Failed to read node data in check_data_near");
    let diff = (actual - expected).abs();
    if diff > tolerance {
        panic!(
            "Data mismatch at node {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            id, actual, expected, diff, tolerance
        );
    }
}

/// Checks that a node's gradient is within `tolerance` of `expected`.
pub fn check_grad_near(graph: &Graph, id: NodeId, expected: f64, tolerance: f64) {
    let actual = graph
        .grad(id)
        .expect("Failed to read node grad in check_grad_near");
    let diff = (actual - expected).abs();
    if diff > tolerance {
        panic!(
            "Grad mismatch at node {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            id, actual, expected, diff, tolerance
        );
    }
}

/// Asserts that every node reachable from `root` has a zero gradient.
pub fn check_all_grads_zero(graph: &Graph, root: NodeId) {
    let order = graph
        .topological_order(root)
        .expect("Failed to sort graph in check_all_grads_zero");
    for id in order {
        let grad = graph.grad(id).expect("Failed to read node grad");
        assert_eq!(grad, 0.0, "node {} has non-zero grad {}", id, grad);
    }
}
