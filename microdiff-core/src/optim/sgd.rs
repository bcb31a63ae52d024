use crate::error::{MicrodiffError, Result};
use crate::graph::Graph;
use crate::node::NodeId;
use log::debug;

/// Implements plain Stochastic Gradient Descent over scalar parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    lr: f64,
}

impl Sgd {
    /// Creates a new `Sgd` optimizer.
    ///
    /// # Errors
    /// `ConfigurationError` if `lr` is not a finite positive number.
    pub fn new(lr: f64) -> Result<Self> {
        if !lr.is_finite() || lr <= 0.0 {
            return Err(MicrodiffError::ConfigurationError(format!(
                "learning rate must be finite and positive, got {}",
                lr
            )));
        }
        Ok(Sgd { lr })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    /// Applies `data -= lr * grad` to every parameter, then zeroes its gradient.
    pub fn step(&self, graph: &mut Graph, params: &[NodeId]) -> Result<()> {
        for &param in params {
            let updated = graph.data(param)? - self.lr * graph.grad(param)?;
            graph.set_data(param, updated)?;
            graph.set_grad(param, 0.0)?;
        }
        debug!("Sgd: step() updated {} parameters (lr = {})", params.len(), self.lr);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sgd_step_updates_and_zeroes() -> Result<()> {
        let mut graph = Graph::new();
        let w = graph.value(1.0)?;
        let loss = graph.mul(w, w)?;
        graph.backward(loss)?;
        assert_eq!(graph.grad(w)?, 2.0);

        let sgd = Sgd::new(0.1)?;
        sgd.step(&mut graph, &[w])?;
        assert_relative_eq!(graph.data(w)?, 0.8);
        assert_eq!(graph.grad(w)?, 0.0);
        Ok(())
    }

    #[test]
    fn test_sgd_rejects_bad_learning_rate() {
        assert!(matches!(Sgd::new(0.0), Err(MicrodiffError::ConfigurationError(_))));
        assert!(matches!(Sgd::new(-0.1), Err(MicrodiffError::ConfigurationError(_))));
        assert!(matches!(Sgd::new(f64::NAN), Err(MicrodiffError::ConfigurationError(_))));
    }
}
