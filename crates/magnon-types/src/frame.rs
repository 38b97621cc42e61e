// ─────────────────────────────────────────────────────────────────────
// Neuro-Twin — Kinematic Frame Types
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

/// Clamp an intent parameter to the unit interval, mapping NaN to 0.0.
///
/// Out-of-range theta/beta never raise; the engine degrades to the
/// nearest valid state instead.
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        log::warn!("clamp_unit: NaN parameter, clamping to 0.0");
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Caller-facing simulation parameters derived from one intent sample.
///
/// `alpha` here is the motor-chain damping (0.01 + 0.05·theta), not the
/// Gilbert damping reported in [`PhysicsMetadata`] (0.01 + 0.04·theta);
/// the two coefficients describe different facets of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    /// Motor-chain damping: 0.01 + 0.05·theta.
    pub alpha: f64,
    /// External drive magnitude: 0.05·beta.
    pub b_ext: f64,
    /// Relaxation intent, clamped to [0, 1].
    pub theta: f64,
    /// Excitation intent, clamped to [0, 1].
    pub beta: f64,
}

/// Provenance and derived physical parameters for one magnetization field.
///
/// Serializes with a `"source"` tag so downstream consumers can branch on
/// provenance without schema knowledge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source")]
pub enum PhysicsMetadata {
    /// Field blended from the pre-computed 5×5 pattern database.
    #[serde(rename = "interpolated_mumax3_5x5")]
    Interpolated {
        /// Gilbert damping: 0.01 + 0.04·theta, rounded to 4 decimals.
        alpha_gilbert: f64,
        /// External field: 0.02 + 0.08·beta Tesla, rounded to 4 decimals.
        b_external_tesla: f64,
        /// Dominant spin-wave frequency: 5 + 15·beta GHz, rounded to 2.
        dominant_freq_ghz: f64,
        /// Field geometry, e.g. "128x128".
        grid: String,
        /// Simulated material label.
        material: String,
        /// Blending scheme label.
        interpolation: String,
    },
    /// Field produced by the closed-form fallback wave.
    #[serde(rename = "mock")]
    Mock,
}

impl PhysicsMetadata {
    /// True when the field came from the fallback path.
    pub fn is_mock(&self) -> bool {
        matches!(self, PhysicsMetadata::Mock)
    }
}

/// One complete intent-processing result, handed to the serving layer
/// for JSON encoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinematicFrame {
    /// Readout outputs, one per kinematic channel.
    pub joint_angles: Vec<f64>,
    /// Smoothness proxy in (0, 1]: 1 / (1 + variance of joint_angles).
    pub fluidity_index: f64,
    /// Orchestration-level physics parameters.
    pub sim_params: SimParams,
    /// Field provenance and database-level physics parameters.
    pub physics: PhysicsMetadata,
}
