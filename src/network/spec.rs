use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::network::network::Network;

/// Describes what network to build and how to initialize it.
///
/// This is configuration only; trained weights are never stored here.
///
/// ```json
/// { "name": "xor", "topology": [2, 3, 1], "activation": "soft_step", "seed": 42 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name, used in log output.
    #[serde(default = "default_name")]
    pub name: String,
    /// Node counts from input to output.
    pub topology: Vec<usize>,
    /// Activation applied after every layer.
    #[serde(default)]
    pub activation: ActivationFunction,
    /// Seed for the initialization stream; `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_name() -> String {
    "network".to_string()
}

impl NetworkSpec {
    pub fn new(name: impl Into<String>, topology: Vec<usize>, activation: ActivationFunction) -> Self {
        NetworkSpec { name: name.into(), topology, activation, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the network and initializes it from the configured seed
    /// (or from entropy when no seed is set).
    pub fn build_network(&self) -> Result<Network> {
        let mut network = Network::build(&self.topology)?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        network.initialize(&mut rng);
        debug!(network = %self.name, seed = ?self.seed, "network ready");
        Ok(network)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
