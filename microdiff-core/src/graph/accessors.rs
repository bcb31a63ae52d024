use super::Graph;
use crate::error::Result;
use crate::node::{ensure_finite, NodeId, Op};

impl Graph {
    pub fn data(&self, id: NodeId) -> Result<f64> {
        Ok(self.node(id)?.data)
    }

    /// Overwrites the primal value. Dependent nodes are not recomputed.
    pub fn set_data(&mut self, id: NodeId, data: f64) -> Result<()> {
        let data = ensure_finite("data", data)?;
        self.node_mut(id)?.data = data;
        Ok(())
    }

    pub fn grad(&self, id: NodeId) -> Result<f64> {
        Ok(self.node(id)?.grad)
    }

    pub fn set_grad(&mut self, id: NodeId, grad: f64) -> Result<()> {
        let grad = ensure_finite("grad", grad)?;
        self.node_mut(id)?.grad = grad;
        Ok(())
    }

    /// Adds `delta` into the node's gradient accumulator.
    pub(crate) fn accumulate_grad(&mut self, id: NodeId, delta: f64) -> Result<()> {
        let current = self.grad(id)?;
        self.set_grad(id, current + delta)
    }

    pub fn op(&self, id: NodeId) -> Result<Op> {
        Ok(self.node(id)?.op)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(self.node(id)?.children())
    }

    pub fn label(&self, id: NodeId) -> Result<Option<&str>> {
        Ok(self.node(id)?.label())
    }

    /// Attaches a display name. Labels play no part in differentiation.
    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<()> {
        self.node_mut(id)?.label = Some(label.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Graph, MicrodiffError, Op};

    #[test]
    fn test_setters_validate_finiteness() -> Result<(), MicrodiffError> {
        let mut graph = Graph::new();
        let a = graph.value(1.0)?;
        assert!(matches!(
            graph.set_data(a, f64::NAN),
            Err(MicrodiffError::NonFiniteValue { field: "data", .. })
        ));
        assert!(matches!(
            graph.set_grad(a, f64::INFINITY),
            Err(MicrodiffError::NonFiniteValue { field: "grad", .. })
        ));
        assert_eq!(graph.data(a)?, 1.0);
        assert_eq!(graph.grad(a)?, 0.0);

        graph.set_data(a, -2.0)?;
        graph.set_grad(a, 0.5)?;
        assert_eq!(graph.data(a)?, -2.0);
        assert_eq!(graph.grad(a)?, 0.5);
        Ok(())
    }

    #[test]
    fn test_accumulate_grad_sums() -> Result<(), MicrodiffError> {
        let mut graph = Graph::new();
        let a = graph.value(1.0)?;
        graph.accumulate_grad(a, 2.0)?;
        graph.accumulate_grad(a, 0.5)?;
        assert_eq!(graph.grad(a)?, 2.5);
        Ok(())
    }

    #[test]
    fn test_structural_accessors() -> Result<(), MicrodiffError> {
        let mut graph = Graph::new();
        let a = graph.value(1.0)?;
        let b = graph.value(2.0)?;
        let c = graph.sub(b, a)?;
        graph.set_label(c, "c")?;
        assert_eq!(graph.op(c)?, Op::Sub);
        assert_eq!(graph.children(c)?, &[b, a]);
        assert_eq!(graph.label(c)?, Some("c"));
        assert_eq!(graph.label(a)?, None);
        Ok(())
    }
}
