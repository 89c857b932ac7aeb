use serde::{Serialize, Deserialize};

/// Outcome of a forward pass on one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleResult {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
    pub output: Vec<f64>,
    /// MSE between `output` and `target`.
    pub loss: f64,
}

/// Per-sample results plus the aggregate produced by `evaluate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
    pub samples: Vec<SampleResult>,
    /// Mean of the per-sample losses.
    pub mean_loss: f64,
}

impl EvalReport {
    pub(crate) fn from_samples(samples: Vec<SampleResult>) -> Self {
        let mean_loss = samples.iter().map(|s| s.loss).sum::<f64>() / samples.len() as f64;
        EvalReport { samples, mean_loss }
    }
}
