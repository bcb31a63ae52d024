use crate::error::{MicrodiffError, Result};
use crate::graph::Graph;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::node::NodeId;
use rand::Rng;

/// Non-linearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Linear,
    Tanh,
    Relu,
    Sigmoid,
}

impl Activation {
    pub fn apply(&self, graph: &mut Graph, x: NodeId) -> Result<NodeId> {
        match self {
            Activation::Linear => Ok(x),
            Activation::Tanh => graph.tanh(x),
            Activation::Relu => graph.relu(x),
            Activation::Sigmoid => graph.sigmoid(x),
        }
    }
}

/// A single neuron: `activation(w . x + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `in_features` weights drawn from `init` and a zero bias.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        in_features: usize,
        activation: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self> {
        let weights = init
            .sample(in_features, rng)?
            .into_iter()
            .map(|w| graph.value(w))
            .collect::<Result<Vec<_>>>()?;
        let bias = graph.value(0.0)?;
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Builds the neuron's output for `inputs`.
    pub fn activate(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<NodeId> {
        if inputs.len() != self.weights.len() {
            return Err(MicrodiffError::ConfigurationError(format!(
                "neuron expects {} inputs, got {}",
                self.weights.len(),
                inputs.len()
            )));
        }
        let mut sum = self.bias;
        for (&w, &x) in self.weights.iter().zip(inputs) {
            let product = graph.mul(w, x)?;
            sum = graph.add(sum, product)?;
        }
        self.activation.apply(graph, sum)
    }
}

impl Module for Neuron {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>> {
        Ok(vec![self.activate(graph, inputs)?])
    }

    fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_neuron_weighted_sum() -> Result<()> {
        let mut graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(0);
        let neuron = Neuron::new(&mut graph, 2, Activation::Tanh, Init::Constant(0.5), &mut rng)?;
        graph.set_data(neuron.bias(), 0.25)?;
        let x0 = graph.value(1.0)?;
        let x1 = graph.value(-2.0)?;
        let out = neuron.activate(&mut graph, &[x0, x1])?;
        assert_relative_eq!(graph.data(out)?, (0.5 - 1.0 + 0.25_f64).tanh());
        Ok(())
    }

    #[test]
    fn test_neuron_parameters_and_grads() -> Result<()> {
        let mut graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(0);
        let neuron = Neuron::new(&mut graph, 2, Activation::Linear, Init::Constant(3.0), &mut rng)?;
        assert_eq!(neuron.parameters().len(), 3);
        let x0 = graph.value(2.0)?;
        let x1 = graph.value(5.0)?;
        let out = neuron.activate(&mut graph, &[x0, x1])?;
        graph.backward(out)?;
        assert_eq!(graph.grad(neuron.weights()[0])?, 2.0);
        assert_eq!(graph.grad(neuron.weights()[1])?, 5.0);
        assert_eq!(graph.grad(neuron.bias())?, 1.0);
        neuron.zero_grad(&mut graph)?;
        for p in neuron.parameters() {
            assert_eq!(graph.grad(p)?, 0.0);
        }
        Ok(())
    }

    #[test]
    fn test_neuron_input_size_mismatch() -> Result<()> {
        let mut graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(0);
        let neuron = Neuron::new(&mut graph, 3, Activation::Relu, Init::default(), &mut rng)?;
        let x = graph.value(1.0)?;
        assert!(matches!(
            neuron.activate(&mut graph, &[x]),
            Err(MicrodiffError::ConfigurationError(_))
        ));
        Ok(())
    }
}
