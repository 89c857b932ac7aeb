use rand::Rng;
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;

use crate::error::{NetError, Result};

/// Dense row-major matrix.  For layer weights the row is the input index
/// and the column is the output index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Wraps nested row data, rejecting empty or ragged input.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let rows = data.len();
        if rows == 0 {
            return Err(NetError::InvalidDimension { what: "matrix rows", value: 0 });
        }
        let cols = data[0].len();
        if cols == 0 {
            return Err(NetError::InvalidDimension { what: "matrix columns", value: 0 });
        }
        if let Some(row) = data.iter().find(|row| row.len() != cols) {
            return Err(NetError::DimensionMismatch { expected: cols, got: row.len() });
        }

        Ok(Matrix { rows, cols, data })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Entry at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if `row >= rows` or `col >= cols`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter().flat_map(|row| row.iter())
    }

    pub fn fill(&mut self, value: f64) {
        for row in &mut self.data {
            row.iter_mut().for_each(|x| *x = value);
        }
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    /// Both u1 and u2 are uniform on (0, 1].
    pub fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        // 1 - [0, 1) keeps both draws away from log(0).
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// Overwrites every entry, row by row, with an independent N(0, 1) draw.
    /// Consumes exactly `2 * rows * cols` uniform samples from `rng`.
    pub fn fill_standard_normal<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for row in &mut self.data {
            for x in row.iter_mut() {
                *x = Matrix::sample_standard_normal(rng);
            }
        }
    }

    /// Computes `selfᵗ · v`.  `v` must have `rows` entries; the result has `cols`.
    pub fn transpose_mul_vec(&self, v: &[f64]) -> Vec<f64> {
        debug_assert_eq!(v.len(), self.rows);
        let mut res = vec![0.0; self.cols];

        for (row, &x) in self.data.iter().zip(v.iter()) {
            for (acc, w) in res.iter_mut().zip(row.iter()) {
                *acc += x * w;
            }
        }

        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn from_data_rejects_ragged_rows() {
        let err = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err, NetError::DimensionMismatch { expected: 2, got: 1 });
    }

    #[test]
    fn from_data_rejects_empty() {
        assert!(Matrix::from_data(vec![]).is_err());
        assert!(Matrix::from_data(vec![vec![]]).is_err());
    }

    #[test]
    fn transpose_mul_vec_sums_over_rows() {
        // 2 inputs, 3 outputs
        let m = Matrix::from_data(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
        ]).unwrap();
        assert_eq!(m.transpose_mul_vec(&[1.0, 10.0]), vec![41.0, 52.0, 63.0]);
    }

    #[test]
    fn standard_normal_has_roughly_unit_moments() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = 20_000;
        let draws: Vec<f64> = (0..n).map(|_| Matrix::sample_standard_normal(&mut rng)).collect();
        let mean = draws.iter().sum::<f64>() / n as f64;
        let var = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "mean = {mean}");
        assert!((var - 1.0).abs() < 0.05, "var = {var}");
        assert!(draws.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn get_reads_row_then_column() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.get(1, 0), 3.0);
        assert_eq!(m.get(0, 1), 2.0);
    }

    #[test]
    #[should_panic]
    fn get_out_of_range_panics() {
        Matrix::zeros(2, 2).get(2, 0);
    }

    #[test]
    fn serializes_as_rows_cols_data() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0]]).unwrap();
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json, serde_json::json!({ "rows": 1, "cols": 2, "data": [[1.0, 2.0]] }));

        let back: Matrix = serde_json::from_value(json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn deserialized_ragged_data_is_caught_by_from_data() {
        let m: Matrix = serde_json::from_str(r#"{ "rows": 2, "cols": 2, "data": [[1.0, 2.0], [3.0]] }"#).unwrap();
        assert!(Matrix::from_data(m.data).is_err());
    }

    #[test]
    fn fill_standard_normal_is_deterministic_per_seed() {
        let mut a = Matrix::zeros(3, 4);
        let mut b = Matrix::zeros(3, 4);
        a.fill_standard_normal(&mut StdRng::seed_from_u64(1));
        b.fill_standard_normal(&mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
