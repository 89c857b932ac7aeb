use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::eval::dataset::Dataset;
use crate::network::spec::NetworkSpec;

/// Everything needed for an evaluation run: the network to build and the
/// rows to score it on.
///
/// # Fields
/// - `network` — topology, activation and optional seed
/// - `dataset` — input/target rows; defaults to the XOR truth table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalConfig {
    pub network: NetworkSpec,
    #[serde(default = "Dataset::xor")]
    pub dataset: Dataset,
}

impl EvalConfig {
    pub fn new(network: NetworkSpec, dataset: Dataset) -> Self {
        EvalConfig { network, dataset }
    }

    /// `[2, 3, 1]` soft-step network on the XOR table, unseeded.
    pub fn xor() -> Self {
        EvalConfig {
            network: NetworkSpec::new("xor", vec![2, 3, 1], ActivationFunction::SoftStep),
            dataset: Dataset::xor(),
        }
    }

    pub fn load_json(path: &str) -> Result<EvalConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(json: &str) -> Result<EvalConfig> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig::xor()
    }
}
