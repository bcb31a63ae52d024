use crate::error::{MicrodiffError, Result};
use crate::graph::Graph;
use crate::nn::init::Init;
use crate::nn::layer::Layer;
use crate::nn::module::Module;
use crate::nn::neuron::Activation;
use crate::node::NodeId;
use log::debug;
use rand::Rng;

/// A Multi-Layer Perceptron.
///
/// Hidden layers use `hidden_activation`; the last layer is linear.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates a network mapping `in_features` inputs through layers of the given sizes.
    ///
    /// # Errors
    /// `ConfigurationError` if `layer_sizes` is empty or contains a zero.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        in_features: usize,
        layer_sizes: &[usize],
        hidden_activation: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self> {
        if layer_sizes.is_empty() || layer_sizes.contains(&0) || in_features == 0 {
            return Err(MicrodiffError::ConfigurationError(format!(
                "invalid MLP shape: {} inputs, layers {:?}",
                in_features, layer_sizes
            )));
        }
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = in_features;
        for (i, &size) in layer_sizes.iter().enumerate() {
            let activation = if i + 1 == layer_sizes.len() {
                Activation::Linear
            } else {
                hidden_activation
            };
            layers.push(Layer::new(graph, fan_in, size, activation, init, rng)?);
            fan_in = size;
        }
        let mlp = Mlp { layers };
        debug!(
            "Mlp: {} -> {:?} ({} parameters)",
            in_features,
            layer_sizes,
            mlp.parameters().len()
        );
        Ok(mlp)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Converts `inputs` to leaves and runs [`Module::forward`].
    pub fn forward_values(&self, graph: &mut Graph, inputs: &[f64]) -> Result<Vec<NodeId>> {
        let leaves = inputs
            .iter()
            .map(|&x| graph.value(x))
            .collect::<Result<Vec<_>>>()?;
        self.forward(graph, &leaves)
    }
}

impl Module for Mlp {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(graph, &activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}
