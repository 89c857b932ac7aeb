use serde::{Serialize, Deserialize};

use crate::error::{ensure_len, Result};

/// One input row paired with its expected output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl Sample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Self {
        Sample { input, target }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub samples: Vec<Sample>,
}

impl Dataset {
    /// Pairs `inputs[i]` with `targets[i]`; both lists must be the same length.
    pub fn new(inputs: Vec<Vec<f64>>, targets: Vec<Vec<f64>>) -> Result<Dataset> {
        ensure_len(inputs.len(), targets.len())?;
        let samples = inputs.into_iter()
            .zip(targets)
            .map(|(input, target)| Sample { input, target })
            .collect();
        Ok(Dataset { samples })
    }

    /// The canonical 4-row XOR truth table.
    pub fn xor() -> Dataset {
        Dataset {
            samples: vec![
                Sample::new(vec![0.0, 0.0], vec![0.0]),
                Sample::new(vec![0.0, 1.0], vec![1.0]),
                Sample::new(vec![1.0, 0.0], vec![1.0]),
                Sample::new(vec![1.0, 1.0], vec![0.0]),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetError;

    #[test]
    fn xor_has_four_rows() {
        let data = Dataset::xor();
        assert_eq!(data.len(), 4);
        let targets: Vec<f64> = data.iter().map(|s| s.target[0]).collect();
        assert_eq!(targets, vec![0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn new_rejects_unpaired_rows() {
        let err = Dataset::new(vec![vec![0.0]; 3], vec![vec![1.0]; 2]).unwrap_err();
        assert_eq!(err, NetError::DimensionMismatch { expected: 3, got: 2 });
    }
}
