use crate::error::Result;
use crate::graph::Graph;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::nn::neuron::{Activation, Neuron};
use crate::node::NodeId;
use rand::Rng;

/// A fully connected layer of independent neurons sharing the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        in_features: usize,
        out_features: usize,
        activation: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self> {
        let neurons = (0..out_features)
            .map(|_| Neuron::new(graph, in_features, activation, init, rng))
            .collect::<Result<Vec<_>>>()?;
        Ok(Layer { neurons })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>> {
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(graph, inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}
