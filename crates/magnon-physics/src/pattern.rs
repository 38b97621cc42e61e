// ─────────────────────────────────────────────────────────────────────
// Neuro-Twin — Pattern Synthesizer
// ─────────────────────────────────────────────────────────────────────
//! Closed-form magnetization pattern for a (theta, beta) parameter point:
//!
//!   m(x, y) = [ 0.3·theta·vortex
//!             + 0.4·beta·spin_wave
//!             + 0.2·(1 − |theta − beta|)·domain_wall
//!             + 0.1·interference ] · exp(−0.5·α·R)
//!
//! normalized to max |m| = 1. Pure and deterministic; callers clamp
//! theta/beta to [0, 1] before sampling.

use crate::field::MagnetizationField;
use crate::params::{self, DOMAIN_HALF_WIDTH, GRID_SIZE};

/// Synthesizes magnetization patterns over a fixed coordinate grid.
///
/// Coordinate grids X, Y, R are allocated once at construction; each
/// `synthesize` call is arithmetic over the pre-computed grids only.
pub struct PatternSynthesizer {
    size: usize,
    x: Vec<f64>,
    y: Vec<f64>,
    r: Vec<f64>,
}

impl PatternSynthesizer {
    /// Build coordinate grids over [-5, 5]² at side `size`.
    pub fn new(size: usize) -> Self {
        let n = size * size;
        let mut x = vec![0.0; n];
        let mut y = vec![0.0; n];
        let mut r = vec![0.0; n];

        // Evenly spaced including both endpoints.
        let span = 2.0 * DOMAIN_HALF_WIDTH;
        let step = span / (size - 1) as f64;
        for row in 0..size {
            let yv = -DOMAIN_HALF_WIDTH + step * row as f64;
            for col in 0..size {
                let xv = -DOMAIN_HALF_WIDTH + step * col as f64;
                let i = row * size + col;
                x[i] = xv;
                y[i] = yv;
                r[i] = (xv * xv + yv * yv).sqrt();
            }
        }

        Self { size, x, y, r }
    }

    /// Canonical 128×128 grid.
    pub fn default_params() -> Self {
        Self::new(GRID_SIZE)
    }

    /// Side length of synthesized fields.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Synthesize the magnetization pattern for one parameter point.
    ///
    /// theta: relaxation level (0 = alert, 1 = relaxed).
    /// beta: excitation level (0 = calm, 1 = excited).
    pub fn synthesize(&self, theta: f64, beta: f64) -> MagnetizationField {
        let alpha = params::gilbert_damping(theta);
        let freq = params::excitation_freq_ghz(beta);
        let amplitude = params::wave_amplitude(beta);

        // Interference opens up above beta = 0.5, saturating at 1.
        let interference_gain = if beta > 0.5 { (beta - 0.5) * 2.0 } else { 0.0 };
        let wall_weight = 1.0 - (theta - beta).abs();
        let wall_damp = (-alpha * 5.0).exp();

        let mut field = MagnetizationField::zeros(self.size);
        let data = field.as_mut_slice();

        for i in 0..data.len() {
            let x = self.x[i];
            let y = self.y[i];
            let r = self.r[i];

            // 1. Central vortex (ground state, stronger at high theta)
            let vortex_core = (-r * r / 4.0).exp() * theta;
            let vortex = y.atan2(x).sin() * (1.0 - (-r).exp()) * vortex_core;

            // 2. Propagating spin waves (stronger at high beta)
            let spin_wave = (0.5 * r * freq).sin() * (-alpha * r * 2.0).exp() * amplitude;

            // 3. Domain wall along X, widened by beta
            let domain_wall = (x * (1.0 + beta)).tanh() * wall_damp;

            // 4. Two-source interference at high beta
            let interference = if interference_gain > 0.0 {
                let r1 = ((x - 3.0) * (x - 3.0) + y * y).sqrt();
                let r2 = ((x + 3.0) * (x + 3.0) + y * y).sqrt();
                ((0.3 * r1 * freq).sin() + (0.3 * r2 * freq).sin())
                    * 0.5
                    * (-alpha * r).exp()
                    * interference_gain
            } else {
                0.0
            };

            let combined = vortex * theta * 0.3
                + spin_wave * beta * 0.4
                + domain_wall * wall_weight * 0.2
                + interference * 0.1;

            // Global damping envelope
            data[i] = combined * (-alpha * r * 0.5).exp();
        }

        field.normalize();
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_deterministic() {
        let synth = PatternSynthesizer::new(32);
        let a = synth.synthesize(0.3, 0.7);
        let b = synth.synthesize(0.3, 0.7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_synthesize_normalized() {
        let synth = PatternSynthesizer::new(32);
        for &(theta, beta) in &[(0.0, 0.0), (1.0, 1.0), (0.5, 0.5), (0.0, 1.0)] {
            let field = synth.synthesize(theta, beta);
            let max = field.max_abs();
            assert!(max <= 1.0 + 1e-12, "({theta},{beta}): max {max} > 1");
            assert!(
                (max - 1.0).abs() < 1e-9,
                "({theta},{beta}): non-degenerate pattern should peak at 1, got {max}"
            );
        }
    }

    #[test]
    fn test_corners_finite() {
        let synth = PatternSynthesizer::new(32);
        for &theta in &[0.0, 1.0] {
            for &beta in &[0.0, 1.0] {
                let field = synth.synthesize(theta, beta);
                assert!(
                    field.as_slice().iter().all(|v| v.is_finite()),
                    "({theta},{beta}) produced non-finite values"
                );
            }
        }
    }

    #[test]
    fn test_interference_continuous_at_activation_edge() {
        // The interference gain scales from 0 at beta = 0.5, so the
        // pattern must not jump when the term switches on.
        let synth = PatternSynthesizer::new(32);
        let at_edge = synth.synthesize(0.5, 0.5);
        let above = synth.synthesize(0.5, 0.5 + 1e-6);
        let max_diff = at_edge
            .as_slice()
            .iter()
            .zip(above.as_slice())
            .fold(0.0f64, |m, (a, b)| m.max((a - b).abs()));
        assert!(max_diff < 1e-3, "jump of {max_diff} across beta = 0.5");
    }

    #[test]
    fn test_parameter_points_distinct() {
        let synth = PatternSynthesizer::new(32);
        let calm = synth.synthesize(1.0, 0.0);
        let excited = synth.synthesize(0.0, 1.0);
        assert_ne!(calm, excited);
    }

    #[test]
    fn test_grid_size_respected() {
        let synth = PatternSynthesizer::new(16);
        let field = synth.synthesize(0.4, 0.6);
        assert_eq!(field.size(), 16);
        assert_eq!(field.len(), 256);
    }
}
