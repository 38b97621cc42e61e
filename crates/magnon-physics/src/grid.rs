// ─────────────────────────────────────────────────────────────────────
// Neuro-Twin — Pre-computed Pattern Grid
// ─────────────────────────────────────────────────────────────────────
//! The 25-point pattern database: one magnetization field per
//! (theta, beta) step on the 5×5 lattice. Materialized eagerly at
//! construction and immutable afterwards, so unsynchronized concurrent
//! reads are safe.

use crate::params::{N_STEPS, PARAM_STEPS};
use crate::pattern::PatternSynthesizer;
use crate::MagnetizationField;

/// Immutable 5×5 sampling of the pattern synthesizer over the unit
/// parameter square. Construction is the one non-trivial cost of the
/// engine (25 syntheses); it happens once, up front, never per request.
#[derive(Debug)]
pub struct PatternGrid {
    field_size: usize,
    /// N_STEPS × N_STEPS fields, row-major over (theta step, beta step).
    fields: Vec<MagnetizationField>,
}

impl PatternGrid {
    /// Materialize all 25 patterns from the given synthesizer.
    pub fn new(synth: &PatternSynthesizer) -> Self {
        let mut fields = Vec::with_capacity(N_STEPS * N_STEPS);
        for &theta in PARAM_STEPS.iter() {
            for &beta in PARAM_STEPS.iter() {
                fields.push(synth.synthesize(theta, beta));
            }
        }
        log::info!(
            "pattern grid materialized: {} patterns ({N_STEPS}x{N_STEPS} steps, {}x{} px)",
            fields.len(),
            synth.size(),
            synth.size()
        );
        Self {
            field_size: synth.size(),
            fields,
        }
    }

    /// Canonical 128×128 database.
    pub fn default_params() -> Self {
        Self::new(&PatternSynthesizer::default_params())
    }

    /// Stored field at lattice position (theta step, beta step).
    ///
    /// Panics on indices outside the 5×5 lattice.
    pub fn at_step(&self, theta_idx: usize, beta_idx: usize) -> &MagnetizationField {
        assert!(theta_idx < N_STEPS && beta_idx < N_STEPS, "lattice index out of range");
        &self.fields[theta_idx * N_STEPS + beta_idx]
    }

    /// Side length of every stored field.
    pub fn field_size(&self) -> usize {
        self.field_size
    }

    /// Number of stored patterns (25).
    pub fn pattern_count(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid() -> PatternGrid {
        PatternGrid::new(&PatternSynthesizer::new(16))
    }

    #[test]
    fn test_grid_holds_25_patterns() {
        let grid = small_grid();
        assert_eq!(grid.pattern_count(), 25);
        assert_eq!(grid.field_size(), 16);
    }

    #[test]
    fn test_grid_matches_synthesizer() {
        let synth = PatternSynthesizer::new(16);
        let grid = PatternGrid::new(&synth);
        for (i, &theta) in PARAM_STEPS.iter().enumerate() {
            for (j, &beta) in PARAM_STEPS.iter().enumerate() {
                assert_eq!(
                    grid.at_step(i, j),
                    &synth.synthesize(theta, beta),
                    "stored pattern at ({theta},{beta}) diverges from synthesis"
                );
            }
        }
    }

    #[test]
    fn test_construction_idempotent() {
        let synth = PatternSynthesizer::new(16);
        let a = PatternGrid::new(&synth);
        let b = PatternGrid::new(&synth);
        for i in 0..N_STEPS {
            for j in 0..N_STEPS {
                assert_eq!(a.at_step(i, j), b.at_step(i, j));
            }
        }
    }

    #[test]
    #[should_panic(expected = "lattice index out of range")]
    fn test_out_of_range_step_panics() {
        small_grid().at_step(5, 0);
    }
}
