use crate::error::{ensure_len, NetError, Result};

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> Result<f64> {
        ensure_len(predicted.len(), expected.len())?;
        if predicted.is_empty() {
            return Err(NetError::InvalidDimension { what: "loss vector", value: 0 });
        }

        let n = predicted.len() as f64;
        Ok(predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n)
    }
}
