// ─────────────────────────────────────────────────────────────────────
// Neuro-Twin — Reservoir Readout Layer
// ─────────────────────────────────────────────────────────────────────
//! Linear spatial readout: maps a high-dimensional magnetic state to a
//! low-dimensional kinematic vector,
//!
//!   y = W_out · m + b
//!
//! with an online Hebbian update rule
//!
//!   ΔW_ij = η · (target_j − y_j) · m_i
//!
//! Weights start as small seeded-random values, bias at zero; the
//! Hebbian step is the only mutator.

use magnon_physics::{MagnetizationField, SimpleRng};
use magnon_types::{EngineConfig, MagnonError, MagnonResult};

/// Trainable linear readout over a flattened magnetization field.
#[derive(Debug)]
pub struct ReservoirReadout {
    input_dim: usize,
    output_dim: usize,
    /// W_out, output_dim × input_dim row-major.
    weights: Vec<f64>,
    bias: Vec<f64>,
}

impl ReservoirReadout {
    /// Initialize with weights drawn from N(0, weight_scale²) under the
    /// given seed. Fixed seed, fixed weights.
    pub fn new(input_dim: usize, output_dim: usize, weight_scale: f64, seed: u64) -> Self {
        let mut rng = SimpleRng::new(seed);
        let weights = (0..output_dim * input_dim)
            .map(|_| rng.next_normal() * weight_scale)
            .collect();
        Self {
            input_dim,
            output_dim,
            weights,
            bias: vec![0.0; output_dim],
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.input_dim(),
            config.output_dim,
            config.weight_scale,
            config.seed,
        )
    }

    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    pub fn output_dim(&self) -> usize {
        self.output_dim
    }

    /// Flattened weight matrix, row-major.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> &[f64] {
        &self.bias
    }

    fn check_field(&self, field: &MagnetizationField) -> MagnonResult<()> {
        if field.len() != self.input_dim {
            return Err(MagnonError::DimensionMismatch {
                expected: self.input_dim,
                got: field.len(),
            });
        }
        Ok(())
    }

    fn check_output(&self, vec: &[f64]) -> MagnonResult<()> {
        if vec.len() != self.output_dim {
            return Err(MagnonError::DimensionMismatch {
                expected: self.output_dim,
                got: vec.len(),
            });
        }
        Ok(())
    }

    /// y = W_out · m + b over the flattened field.
    ///
    /// Accepts any field whose pixel count equals the input dimension;
    /// anything else is a `DimensionMismatch`.
    pub fn predict(&self, field: &MagnetizationField) -> MagnonResult<Vec<f64>> {
        self.check_field(field)?;
        let m = field.as_slice();

        let mut out = Vec::with_capacity(self.output_dim);
        for row in 0..self.output_dim {
            let w = &self.weights[row * self.input_dim..(row + 1) * self.input_dim];
            let mut acc = self.bias[row];
            for (wi, mi) in w.iter().zip(m) {
                acc += wi * mi;
            }
            out.push(acc);
        }
        Ok(out)
    }

    /// One Hebbian step: W += η · outer(target − current, m),
    /// b += η · (target − current). In-place; zero error is an exact
    /// no-op.
    pub fn train_step(
        &mut self,
        field: &MagnetizationField,
        current: &[f64],
        target: &[f64],
        learning_rate: f64,
    ) -> MagnonResult<()> {
        self.check_field(field)?;
        self.check_output(current)?;
        self.check_output(target)?;
        let m = field.as_slice();

        for j in 0..self.output_dim {
            let error = target[j] - current[j];
            let step = learning_rate * error;
            let w = &mut self.weights[j * self.input_dim..(j + 1) * self.input_dim];
            for (wi, mi) in w.iter_mut().zip(m) {
                *wi += step * mi;
            }
            self.bias[j] += step;
        }
        Ok(())
    }
}
