use super::Graph;
use crate::autograd::backward_op::local_gradients;
use crate::autograd::graph::topological_sort;
use crate::error::{MicrodiffError, Result};
use crate::node::NodeId;
use log::{debug, trace};

impl Graph {
    /// Performs the backward pass starting from `root`.
    ///
    /// Seeds `root.grad = 1` and visits every node reachable from `root` in
    /// reverse topological order, adding each node's local-gradient
    /// contributions into its operands. Contributions accumulate on top of
    /// whatever gradients are already present, so call [`Graph::reset_grad`]
    /// before differentiating the same graph twice.
    ///
    /// # Errors
    /// Fails if a gradient becomes non-finite or a rule meets an invalid
    /// operand state (e.g. `pow` with a zero base and a non-positive exponent
    /// after `set_data`). The pass is not transactional: gradients written
    /// before the failure stay in place.
    pub fn backward(&mut self, root: NodeId) -> Result<()> {
        self.backward_order(root, 1)
    }

    /// Backward pass that also fills the per-node higher-order cache.
    ///
    /// For `order > 1`, after the ordinary pass every visited node (root
    /// first) records its gradient under order 1, re-runs
    /// `backward_order(node, order - 1)` rooted at itself, and records the
    /// resulting gradient under `order`. This re-propagates over the existing
    /// primal graph; it is not a second derivative in the usual sense.
    pub fn backward_order(&mut self, root: NodeId, order: u32) -> Result<()> {
        if order < 1 {
            return Err(MicrodiffError::InvalidOrder(order));
        }
        let sorted = topological_sort(self, root)?;
        debug!(
            "backward from {} (order {}): {} reachable nodes",
            root,
            order,
            sorted.len()
        );

        self.set_grad(root, 1.0)?;
        for &id in sorted.iter().rev() {
            let contributions = local_gradients(self, self.node(id)?)?;
            for (child, delta) in contributions {
                trace!("{} -> {}: += {}", id, child, delta);
                self.accumulate_grad(child, delta)?;
            }
        }

        if order > 1 {
            for &id in sorted.iter().rev() {
                let first = self.grad(id)?;
                self.node_mut(id)?.higher_order_grads.insert(1, first);
                self.backward_order(id, order - 1)?;
                let next = self.grad(id)?;
                self.node_mut(id)?.higher_order_grads.insert(order, next);
            }
        }
        Ok(())
    }

    /// Returns the cached gradient for `order`, or `0.0` if it was never computed.
    pub fn get_higher_order_gradient(&self, id: NodeId, order: u32) -> Result<f64> {
        if order < 1 {
            return Err(MicrodiffError::InvalidOrder(order));
        }
        Ok(self
            .node(id)?
            .higher_order_grads
            .get(&order)
            .copied()
            .unwrap_or(0.0))
    }

    /// Zeroes `grad` and clears the higher-order cache of every node reachable from `root`.
    pub fn reset_grad(&mut self, root: NodeId) -> Result<()> {
        let sorted = topological_sort(self, root)?;
        for &id in &sorted {
            let node = self.node_mut(id)?;
            node.grad = 0.0;
            node.higher_order_grads.clear();
        }
        debug!("reset gradients of {} nodes under {}", sorted.len(), root);
        Ok(())
    }

    /// Nodes reachable from `root`, each after all of its operands.
    pub fn topological_order(&self, root: NodeId) -> Result<Vec<NodeId>> {
        topological_sort(self, root)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Graph, MicrodiffError};
    use approx::assert_relative_eq;

    #[test]
    fn test_diamond_accumulates() -> Result<(), MicrodiffError> {
        let mut graph = Graph::new();
        let a = graph.value(3.0)?;
        let b = graph.add(a, a)?;
        let c = graph.mul(b, a)?;
        graph.backward(c)?;
        assert_eq!(graph.grad(c)?, 1.0);
        assert_eq!(graph.grad(b)?, 3.0);
        assert_eq!(graph.grad(a)?, 12.0);
        Ok(())
    }

    #[test]
    fn test_second_backward_accumulates_without_reset() -> Result<(), MicrodiffError> {
        let mut graph = Graph::new();
        let a = graph.value(2.0)?;
        let y = graph.mul(a, 5.0)?;
        graph.backward(y)?;
        graph.backward(y)?;
        assert_eq!(graph.grad(a)?, 10.0);
        graph.reset_grad(y)?;
        graph.backward(y)?;
        assert_eq!(graph.grad(a)?, 5.0);
        Ok(())
    }

    #[test]
    fn test_reset_grad_zeroes_reachable_nodes() -> Result<(), MicrodiffError> {
        let mut graph = Graph::new();
        let a = graph.value(0.7)?;
        let b = graph.value(-1.2)?;
        let c = graph.mul(a, b)?;
        let d = graph.tanh(c)?;
        let e = graph.add(d, a)?;
        graph.backward_order(e, 2)?;
        graph.reset_grad(e)?;
        for id in graph.topological_order(e)? {
            assert_eq!(graph.grad(id)?, 0.0);
            assert_eq!(graph.get_higher_order_gradient(id, 1)?, 0.0);
            assert_eq!(graph.get_higher_order_gradient(id, 2)?, 0.0);
        }
        Ok(())
    }

    #[test]
    fn test_reset_grad_leaves_unreachable_nodes() -> Result<(), MicrodiffError> {
        let mut graph = Graph::new();
        let a = graph.value(1.0)?;
        let b = graph.value(2.0)?;
        graph.set_grad(b, 4.0)?;
        let c = graph.neg(a)?;
        graph.backward(c)?;
        graph.reset_grad(c)?;
        assert_eq!(graph.grad(a)?, 0.0);
        assert_eq!(graph.grad(b)?, 4.0);
        Ok(())
    }

    #[test]
    fn test_invalid_order() -> Result<(), MicrodiffError> {
        let mut graph = Graph::new();
        let a = graph.value(1.0)?;
        assert_eq!(graph.backward_order(a, 0), Err(MicrodiffError::InvalidOrder(0)));
        assert_eq!(
            graph.get_higher_order_gradient(a, 0),
            Err(MicrodiffError::InvalidOrder(0))
        );
        Ok(())
    }

    // Exercises the recursive re-invocation and caching of `backward_order`,
    // not calculus ground truth for second derivatives.
    #[test]
    fn test_higher_order_pass_caches_recursive_reinvocation() -> Result<(), MicrodiffError> {
        let mut graph = Graph::new();
        let a = graph.value(3.0)?;
        let y = graph.mul(a, a)?;
        graph.backward_order(y, 2)?;

        // Root first: cache 1, re-run from y (a.grad 6 -> 12), cache 1 under order 2.
        assert_eq!(graph.get_higher_order_gradient(y, 1)?, 1.0);
        assert_eq!(graph.get_higher_order_gradient(y, 2)?, 1.0);
        // Then a: cache 12, re-run rooted at a reseeds it to 1.
        assert_relative_eq!(graph.get_higher_order_gradient(a, 1)?, 12.0);
        assert_relative_eq!(graph.get_higher_order_gradient(a, 2)?, 1.0);
        assert_eq!(graph.get_higher_order_gradient(a, 3)?, 0.0);
        Ok(())
    }

    // Documented behavior of the recursive re-invocation: each level stores its
    // result under its own order, and the last re-run rooted at `a` reseeds it.
    #[test]
    fn test_third_order_pass_stores_each_order() -> Result<(), MicrodiffError> {
        let mut graph = Graph::new();
        let a = graph.value(3.0)?;
        let y = graph.mul(a, a)?;
        graph.backward_order(y, 3)?;

        for order in 1..=3 {
            assert_eq!(graph.get_higher_order_gradient(y, order)?, 1.0);
            assert_eq!(graph.get_higher_order_gradient(a, order)?, 1.0);
        }
        assert_eq!(graph.get_higher_order_gradient(a, 4)?, 0.0);
        assert_eq!(graph.grad(a)?, 1.0);
        Ok(())
    }

    #[test]
    fn test_plain_backward_does_not_fill_cache() -> Result<(), MicrodiffError> {
        let mut graph = Graph::new();
        let a = graph.value(3.0)?;
        let y = graph.mul(a, a)?;
        graph.backward(y)?;
        assert_eq!(graph.grad(a)?, 6.0);
        assert_eq!(graph.get_higher_order_gradient(a, 1)?, 0.0);
        Ok(())
    }

    #[test]
    fn test_deep_chain_does_not_overflow_stack() -> Result<(), MicrodiffError> {
        let mut graph = Graph::new();
        let x = graph.value(1.0)?;
        let mut acc = x;
        for _ in 0..50_000 {
            acc = graph.add(acc, 0.0)?;
        }
        graph.backward(acc)?;
        assert_eq!(graph.grad(x)?, 1.0);
        Ok(())
    }
}
