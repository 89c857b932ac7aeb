use rand::Rng;
use tracing::trace;

use crate::activation::activation::Activation;
use crate::error::{ensure_len, NetError, Result};
use crate::math::matrix::Matrix;

/// A single affine transform followed by an activation.
///
/// `weights` is `num_inputs × num_outputs` (row = input, column = output)
/// and `biases` has `num_outputs` entries.  The shape is fixed at
/// allocation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer{
    num_inputs: usize,
    num_outputs: usize,
    weights: Matrix,
    biases: Vec<f64>,
}

impl Layer {
    /// Reserves a zero-filled weight matrix and bias vector.
    pub fn allocate(num_inputs: usize, num_outputs: usize) -> Result<Layer> {
        if num_inputs == 0 {
            return Err(NetError::InvalidDimension { what: "layer inputs", value: num_inputs });
        }
        if num_outputs == 0 {
            return Err(NetError::InvalidDimension { what: "layer outputs", value: num_outputs });
        }

        Ok(Layer {
            num_inputs,
            num_outputs,
            weights: Matrix::zeros(num_inputs, num_outputs),
            biases: vec![0.0; num_outputs],
        })
    }

    /// Adopts explicit parameters.  `biases` must have one entry per weight column.
    pub fn from_parameters(weights: Matrix, biases: Vec<f64>) -> Result<Layer> {
        // re-derive rows/cols from the data itself
        let weights = Matrix::from_data(weights.data)?;
        ensure_len(weights.cols, biases.len())?;

        Ok(Layer {
            num_inputs: weights.rows,
            num_outputs: weights.cols,
            weights,
            biases,
        })
    }

    /// Draws every weight from N(0, 1) and zeroes every bias.
    ///
    /// Overwrites all previous values; calling it twice is a reset.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.weights.fill_standard_normal(rng);
        self.biases.iter_mut().for_each(|b| *b = 0.0);
    }

    pub fn reset_to_zero(&mut self) {
        self.weights.fill(0.0);
        self.biases.iter_mut().for_each(|b| *b = 0.0);
    }

    /// output[j] = activation(bias[j] + Σ_i input[i] * weights[i][j])
    pub fn forward<A: Activation + ?Sized>(&self, input: &[f64], activation: &A) -> Result<Vec<f64>> {
        ensure_len(self.num_inputs, input.len())?;

        let mut z = self.weights.transpose_mul_vec(input);
        for (zj, bj) in z.iter_mut().zip(self.biases.iter()) {
            *zj += bj;
        }
        let a = activation.apply_all(&z);
        trace!(inputs = self.num_inputs, outputs = self.num_outputs, "layer forward");
        Ok(a)
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    /// `(num_inputs, num_outputs)`
    pub fn shape(&self) -> (usize, usize) {
        (self.num_inputs, self.num_outputs)
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn biases(&self) -> &[f64] {
        &self.biases
    }

    pub fn parameter_count(&self) -> usize {
        self.weights.len() + self.biases.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::{soft_step, ActivationFunction};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn allocate_rejects_zero_sizes() {
        assert_eq!(
            Layer::allocate(0, 3).unwrap_err(),
            NetError::InvalidDimension { what: "layer inputs", value: 0 }
        );
        assert_eq!(
            Layer::allocate(2, 0).unwrap_err(),
            NetError::InvalidDimension { what: "layer outputs", value: 0 }
        );
    }

    #[test]
    fn initialize_fills_shape_and_zeroes_biases() {
        for (n_in, n_out) in [(1, 1), (2, 3), (5, 2), (7, 7)] {
            let mut layer = Layer::allocate(n_in, n_out).unwrap();
            layer.initialize(&mut StdRng::seed_from_u64(42));
            assert_eq!(layer.weights().shape(), (n_in, n_out));
            assert_eq!(layer.weights().iter().count(), n_in * n_out);
            assert_eq!(layer.biases().len(), n_out);
            assert!(layer.biases().iter().all(|&b| b == 0.0));
        }
    }

    #[test]
    fn reinitialize_overwrites_previous_weights() {
        let mut layer = Layer::allocate(3, 4).unwrap();
        layer.initialize(&mut StdRng::seed_from_u64(1));
        let first = layer.weights().clone();
        layer.initialize(&mut StdRng::seed_from_u64(2));
        assert_ne!(&first, layer.weights());

        // same stream again reproduces the first draw exactly
        layer.initialize(&mut StdRng::seed_from_u64(1));
        assert_eq!(&first, layer.weights());
    }

    #[test]
    fn forward_rejects_wrong_input_length() {
        let layer = Layer::allocate(2, 3).unwrap();
        let err = layer.forward(&[1.0, 2.0, 3.0], &soft_step).unwrap_err();
        assert_eq!(err, NetError::DimensionMismatch { expected: 2, got: 3 });
    }

    #[test]
    fn forward_computes_affine_then_activation() {
        let weights = Matrix::from_data(vec![
            vec![1.0, -1.0],
            vec![0.5, 2.0],
        ]).unwrap();
        let layer = Layer::from_parameters(weights, vec![0.25, -0.5]).unwrap();

        let out = layer.forward(&[2.0, 4.0], &ActivationFunction::Identity).unwrap();
        // [0.25 + 2*1 + 4*0.5, -0.5 + 2*-1 + 4*2]
        assert_eq!(out, vec![4.25, 5.5]);

        let out = layer.forward(&[2.0, 4.0], &soft_step).unwrap();
        assert!((out[0] - soft_step(4.25)).abs() < 1e-12);
    }

    #[test]
    fn from_parameters_checks_bias_length() {
        let err = Layer::from_parameters(Matrix::zeros(2, 3), vec![0.0; 2]).unwrap_err();
        assert_eq!(err, NetError::DimensionMismatch { expected: 3, got: 2 });
    }

    #[test]
    fn zero_layer_outputs_half_under_soft_step() {
        let mut layer = Layer::allocate(3, 2).unwrap();
        layer.initialize(&mut StdRng::seed_from_u64(9));
        layer.reset_to_zero();
        assert_eq!(layer.forward(&[1.0, -2.0, 3.0], &soft_step).unwrap(), vec![0.5, 0.5]);
        assert_eq!(layer.parameter_count(), 8);
    }
}
