use rand::Rng;
use tracing::{debug, trace};

use crate::activation::activation::Activation;
use crate::error::{ensure_len, NetError, Result};
use crate::layers::dense::Layer;
use crate::loss::mse::MseLoss;

/// Lifecycle of a [`Network`]: parameters are unset until initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkState {
    Uninitialized,
    Ready,
}

/// An ordered chain of layers where each layer's output size equals the
/// next layer's input size.
///
/// The network owns its layers outright.  Forward evaluation only reads
/// them, so a `Ready` network can be shared across threads by reference;
/// initialization needs `&mut self` and therefore exclusive access.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
    state: NetworkState,
}

impl Network {
    /// Builds `node_counts.len() - 1` layers; layer `k` maps
    /// `node_counts[k]` inputs to `node_counts[k + 1]` outputs.
    ///
    /// `[2, 3, 1]` gives one hidden layer of 3 nodes between 2 inputs and
    /// 1 output.  The result is `Uninitialized`.
    pub fn build(node_counts: &[usize]) -> Result<Network> {
        if node_counts.len() < 2 {
            return Err(NetError::InvalidTopology {
                reason: format!("need at least 2 node counts, got {}", node_counts.len()),
            });
        }
        if let Some(idx) = node_counts.iter().position(|&n| n == 0) {
            return Err(NetError::InvalidTopology {
                reason: format!("node count at index {idx} is zero"),
            });
        }

        let layers = node_counts
            .windows(2)
            .map(|pair| Layer::allocate(pair[0], pair[1]))
            .collect::<Result<Vec<_>>>()?;

        debug!(topology = ?node_counts, depth = layers.len(), "built network");
        Ok(Network { layers, state: NetworkState::Uninitialized })
    }

    /// Adopts already-parameterized layers.  The result is `Ready`.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Network> {
        if layers.is_empty() {
            return Err(NetError::InvalidTopology { reason: "a network needs at least one layer".into() });
        }
        for (k, pair) in layers.windows(2).enumerate() {
            if pair[0].num_outputs() != pair[1].num_inputs() {
                return Err(NetError::InvalidTopology {
                    reason: format!(
                        "layer {k} has {} outputs but layer {} expects {} inputs",
                        pair[0].num_outputs(),
                        k + 1,
                        pair[1].num_inputs()
                    ),
                });
            }
        }

        Ok(Network { layers, state: NetworkState::Ready })
    }

    /// Initializes every layer in order from one shared stream, so
    /// successive layers consume disjoint draws.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for layer in &mut self.layers {
            layer.initialize(rng);
        }
        self.state = NetworkState::Ready;
        debug!(parameters = self.parameter_count(), "initialized network from random stream");
    }

    /// Sets every weight and bias to zero.  Deterministic alternative to
    /// [`Network::initialize`].
    pub fn initialize_zeros(&mut self) {
        for layer in &mut self.layers {
            layer.reset_to_zero();
        }
        self.state = NetworkState::Ready;
        debug!(parameters = self.parameter_count(), "initialized network to zero");
    }

    /// Feeds `input` through every layer, applying `activation` after each.
    ///
    /// The same activation is used for all layers.
    pub fn forward<A: Activation + ?Sized>(&self, input: &[f64], activation: &A) -> Result<Vec<f64>> {
        if self.state != NetworkState::Ready {
            return Err(NetError::NotInitialized);
        }
        ensure_len(self.input_len(), input.len())?;

        let mut current = input.to_vec();
        for (k, layer) in self.layers.iter().enumerate() {
            current = layer.forward(&current, activation)?;
            trace!(layer = k, width = current.len(), "forward");
        }
        Ok(current)
    }

    /// Mean squared error between `outputs` and `targets`.
    pub fn loss(&self, outputs: &[f64], targets: &[f64]) -> Result<f64> {
        MseLoss::loss(outputs, targets)
    }

    pub fn input_len(&self) -> usize {
        self.layers[0].num_inputs()
    }

    pub fn output_len(&self) -> usize {
        self.layers[self.layers.len() - 1].num_outputs()
    }

    /// Number of layers (node counts minus one).
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Node counts from input to output, e.g. `[2, 3, 1]`.
    pub fn topology(&self) -> Vec<usize> {
        std::iter::once(self.input_len())
            .chain(self.layers.iter().map(Layer::num_outputs))
            .collect()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn state(&self) -> NetworkState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == NetworkState::Ready
    }

    pub fn parameter_count(&self) -> usize {
        self.layers.iter().map(Layer::parameter_count).sum()
    }
}
