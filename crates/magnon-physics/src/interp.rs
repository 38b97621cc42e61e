// ─────────────────────────────────────────────────────────────────────
// Neuro-Twin — Continuous Field Interpolator
// ─────────────────────────────────────────────────────────────────────
//! Per-pixel bilinear blending over the 5×5 pattern grid, giving a
//! smooth, continuous magnetic state for any (theta, beta) in the unit
//! square, plus a time-dependent precession modulation for animation.
//!
//! On a lattice line the fractional offset is exactly 0 or 1, so the
//! blend reduces to the stored pattern with no error.

use std::sync::Arc;

use magnon_types::{clamp_unit, PhysicsMetadata};

use crate::params::{self, MATERIAL, N_STEPS, STEP_SIZE};
use crate::{MagnetizationField, PatternGrid};

/// Continuous (theta, beta, t) → field surface over a pattern grid.
#[derive(Debug)]
pub struct FieldInterpolator {
    grid: Arc<PatternGrid>,
}

/// Lattice cell index and fractional offset for a clamped parameter.
fn cell_offset(v: f64) -> (usize, f64) {
    let u = v / STEP_SIZE;
    let i = (u.floor() as usize).min(N_STEPS - 2);
    (i, u - i as f64)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

impl FieldInterpolator {
    pub fn new(grid: Arc<PatternGrid>) -> Self {
        Self { grid }
    }

    /// The underlying pattern database.
    pub fn grid(&self) -> &PatternGrid {
        &self.grid
    }

    /// Interpolated field at t = 0 (no precession modulation).
    pub fn field_at(&self, theta: f64, beta: f64) -> MagnetizationField {
        self.continuous_field(theta, beta, 0.0)
    }

    /// Interpolated field with time-dependent precession modulation.
    ///
    /// theta/beta are clamped to [0, 1]; any finite t is accepted.
    /// At t = 0 the modulation factor is exactly 1 and the result is the
    /// unmodulated interpolation.
    pub fn continuous_field(&self, theta: f64, beta: f64, t: f64) -> MagnetizationField {
        let theta = clamp_unit(theta);
        let beta = clamp_unit(beta);

        let (ti, tf) = cell_offset(theta);
        let (bi, bf) = cell_offset(beta);

        let p00 = self.grid.at_step(ti, bi).as_slice();
        let p01 = self.grid.at_step(ti, bi + 1).as_slice();
        let p10 = self.grid.at_step(ti + 1, bi).as_slice();
        let p11 = self.grid.at_step(ti + 1, bi + 1).as_slice();

        let w00 = (1.0 - tf) * (1.0 - bf);
        let w01 = (1.0 - tf) * bf;
        let w10 = tf * (1.0 - bf);
        let w11 = tf * bf;

        let mut field = MagnetizationField::zeros(self.grid.field_size());
        let out = field.as_mut_slice();
        for i in 0..out.len() {
            out[i] = w00 * p00[i] + w01 * p01[i] + w10 * p10[i] + w11 * p11[i];
        }

        // Spin precession animation term
        let precession = params::excitation_freq_ghz(beta);
        let modulation = 1.0 + 0.2 * (std::f64::consts::TAU * precession * t * 0.01).sin();
        if modulation != 1.0 {
            field.scale(modulation);
        }

        field
    }

    /// Database-level physical parameters for a (theta, beta) point.
    ///
    /// Expects clamped inputs (the orchestrator clamps before calling).
    pub fn metadata(&self, theta: f64, beta: f64) -> PhysicsMetadata {
        let size = self.grid.field_size();
        PhysicsMetadata::Interpolated {
            alpha_gilbert: round_to(params::gilbert_damping(theta), 4),
            b_external_tesla: round_to(params::external_field_tesla(beta), 4),
            dominant_freq_ghz: round_to(params::excitation_freq_ghz(beta), 2),
            grid: format!("{size}x{size}"),
            material: MATERIAL.to_string(),
            interpolation: "bilinear".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::PARAM_STEPS;
    use crate::PatternSynthesizer;

    fn make_interp() -> FieldInterpolator {
        let grid = PatternGrid::new(&PatternSynthesizer::new(16));
        FieldInterpolator::new(Arc::new(grid))
    }

    #[test]
    fn test_lattice_points_exact() {
        let interp = make_interp();
        for (i, &theta) in PARAM_STEPS.iter().enumerate() {
            for (j, &beta) in PARAM_STEPS.iter().enumerate() {
                let field = interp.field_at(theta, beta);
                assert_eq!(
                    &field,
                    interp.grid().at_step(i, j),
                    "blend at lattice point ({theta},{beta}) is not exact"
                );
            }
        }
    }

    #[test]
    fn test_midpoint_is_average_of_neighbours() {
        let interp = make_interp();
        let mid = interp.field_at(0.125, 0.0);
        let a = interp.grid().at_step(0, 0).as_slice();
        let b = interp.grid().at_step(1, 0).as_slice();
        for (i, v) in mid.as_slice().iter().enumerate() {
            let expect = 0.5 * (a[i] + b[i]);
            assert!(
                (v - expect).abs() < 1e-12,
                "pixel {i}: {v} vs expected {expect}"
            );
        }
    }

    #[test]
    fn test_continuous_across_cell_boundary() {
        let interp = make_interp();
        let eps = 1e-9;
        let below = interp.field_at(0.25 - eps, 0.4);
        let above = interp.field_at(0.25 + eps, 0.4);
        let max_diff = below
            .as_slice()
            .iter()
            .zip(above.as_slice())
            .fold(0.0f64, |m, (a, b)| m.max((a - b).abs()));
        assert!(max_diff < 1e-6, "discontinuity {max_diff} at cell boundary");
    }

    #[test]
    fn test_zero_time_is_unmodulated() {
        let interp = make_interp();
        assert_eq!(
            interp.field_at(0.37, 0.62),
            interp.continuous_field(0.37, 0.62, 0.0)
        );
    }

    #[test]
    fn test_modulation_bounded() {
        let interp = make_interp();
        for &t in &[0.1, 1.0, 7.3, 1e6] {
            let field = interp.continuous_field(0.5, 0.9, t);
            assert!(field.max_abs() <= 1.2 + 1e-9, "t={t}: over-modulated");
            assert!(field.as_slice().iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_out_of_range_clamped() {
        let interp = make_interp();
        assert_eq!(interp.field_at(-1.0, 2.0), interp.field_at(0.0, 1.0));
        assert_eq!(interp.field_at(f64::NAN, 0.5), interp.field_at(0.0, 0.5));
    }

    #[test]
    fn test_negative_time_total() {
        let interp = make_interp();
        let field = interp.continuous_field(0.5, 0.5, -42.0);
        assert!(field.as_slice().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_metadata_values() {
        let interp = make_interp();
        let meta = interp.metadata(0.33, 0.67);
        match meta {
            PhysicsMetadata::Interpolated {
                alpha_gilbert,
                b_external_tesla,
                dominant_freq_ghz,
                grid,
                material,
                interpolation,
            } => {
                assert!((alpha_gilbert - 0.0232).abs() < 1e-12);
                assert!((b_external_tesla - 0.0736).abs() < 1e-12);
                assert!((dominant_freq_ghz - 15.05).abs() < 1e-12);
                assert_eq!(grid, "16x16");
                assert_eq!(material, "Permalloy_Ni80Fe20");
                assert_eq!(interpolation, "bilinear");
            }
            PhysicsMetadata::Mock => panic!("expected interpolated metadata"),
        }
    }
}
