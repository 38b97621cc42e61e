// ─────────────────────────────────────────────────────────────────────
// Neuro-Twin — Magnonic Controller (Intent Orchestrator)
// ─────────────────────────────────────────────────────────────────────
//! Orchestrates the causal chain:
//!
//!   (theta, beta) → physics parameters → magnetic state → kinematic
//!   readout → fluidity.
//!
//! The field comes from the pre-computed pattern database when one was
//! injected at construction; otherwise from a closed-form fallback wave
//! that cannot fail. The choice is an explicit constructor decision,
//! not a hidden import-time probe.

use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;

use magnon_physics::params::DOMAIN_HALF_WIDTH;
use magnon_physics::{FieldInterpolator, MagnetizationField, PatternGrid, PatternSynthesizer};
use magnon_types::{
    clamp_unit, EngineConfig, KinematicFrame, MagnonError, MagnonResult, PhysicsMetadata,
    SimParams,
};

use crate::action::{ActionPattern, NEUTRAL_INTENT};
use crate::readout::ReservoirReadout;

/// Where the controller obtains magnetic states.
///
/// The caller decides at construction; tests can substitute either
/// variant without touching process-wide state.
#[derive(Debug)]
pub enum FieldSource {
    /// Continuous interpolation over a materialized pattern database.
    Interpolated(FieldInterpolator),
    /// Closed-form fallback wave; provenance is tagged mock.
    Mock,
}

/// Population variance.
fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n
}

/// Radial distance grid over [-5, 5]² at side `size`, flattened row-major.
fn radius_grid(size: usize) -> Vec<f64> {
    let step = 2.0 * DOMAIN_HALF_WIDTH / (size - 1) as f64;
    let mut r = vec![0.0; size * size];
    for row in 0..size {
        let y = -DOMAIN_HALF_WIDTH + step * row as f64;
        for col in 0..size {
            let x = -DOMAIN_HALF_WIDTH + step * col as f64;
            r[row * size + col] = (x * x + y * y).sqrt();
        }
    }
    r
}

/// The intent-processing engine.
///
/// Stateless per call except for the readout weights, which are
/// mutated only by `train_step` behind the internal mutex.
#[derive(Debug)]
pub struct MagnonicController {
    config: EngineConfig,
    source: FieldSource,
    readout: Mutex<ReservoirReadout>,
    /// Pre-computed radii for the fallback wave; independent of the
    /// pattern database so the fallback needs nothing from it.
    radius: Vec<f64>,
    epoch: Instant,
}

impl MagnonicController {
    /// Build a controller over an explicit field source.
    pub fn new(config: EngineConfig, source: FieldSource) -> MagnonResult<Self> {
        config.validate()?;
        if let FieldSource::Interpolated(ref interp) = source {
            let db_size = interp.grid().field_size();
            if db_size != config.grid_size {
                return Err(MagnonError::Config(format!(
                    "pattern database is {db_size}x{db_size} but config expects {}x{}",
                    config.grid_size, config.grid_size
                )));
            }
        }

        let readout = ReservoirReadout::from_config(&config);
        let radius = radius_grid(config.grid_size);

        log::info!(
            "magnonic controller initialized: {}x{} reservoir grid, {} kinematic channels, {} field source",
            config.grid_size,
            config.grid_size,
            config.output_dim,
            match &source {
                FieldSource::Interpolated(_) => "pre-computed",
                FieldSource::Mock => "mock",
            }
        );

        Ok(Self {
            config,
            source,
            readout: Mutex::new(readout),
            radius,
            epoch: Instant::now(),
        })
    }

    /// Build with an eagerly materialized pattern database.
    pub fn with_precomputed(config: EngineConfig) -> MagnonResult<Self> {
        let synth = PatternSynthesizer::new(config.grid_size);
        let grid = Arc::new(PatternGrid::new(&synth));
        Self::new(config, FieldSource::Interpolated(FieldInterpolator::new(grid)))
    }

    /// Build on the fallback path only (no pattern database).
    pub fn mock(config: EngineConfig) -> MagnonResult<Self> {
        Self::new(config, FieldSource::Mock)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// True when fields come from the pre-computed database.
    pub fn uses_precomputed(&self) -> bool {
        matches!(self.source, FieldSource::Interpolated(_))
    }

    /// Fallback magnetic state: a radially decaying traveling wave
    /// shaped by the motor-chain damping and drive magnitude.
    fn fallback_field(&self, alpha: f64, b_ext: f64, t: f64) -> MagnetizationField {
        let mut field = MagnetizationField::zeros(self.config.grid_size);
        let data = field.as_mut_slice();
        let phase = std::f64::consts::TAU * 2.0 * t;
        for (v, &r) in data.iter_mut().zip(&self.radius) {
            *v = (r - phase).sin() * (-0.1 * r * alpha).exp() * b_ext;
        }
        field
    }

    /// Process one intent sample at an explicit simulation time.
    ///
    /// theta/beta are clamped to [0, 1]; the call never fails for any
    /// real-valued intent. The returned `sim_params.alpha`
    /// (0.01 + 0.05·theta) is the motor-chain damping, distinct from
    /// the database's Gilbert damping (0.01 + 0.04·theta).
    pub fn process_intent_at(&self, theta: f64, beta: f64, t: f64) -> MagnonResult<KinematicFrame> {
        let theta = clamp_unit(theta);
        let beta = clamp_unit(beta);

        let alpha = 0.01 + 0.05 * theta;
        let b_ext = 0.05 * beta;

        let (field, physics) = match &self.source {
            FieldSource::Interpolated(interp) => (
                interp.continuous_field(theta, beta, t),
                interp.metadata(theta, beta),
            ),
            FieldSource::Mock => (self.fallback_field(alpha, b_ext, t), PhysicsMetadata::Mock),
        };

        let joint_angles = self.readout.lock().predict(&field)?;

        // Jerk proxy: inverse of output variance, bounded to (0, 1].
        let fluidity_index = 1.0 / (1.0 + variance(&joint_angles));

        Ok(KinematicFrame {
            joint_angles,
            fluidity_index,
            sim_params: SimParams {
                alpha,
                b_ext,
                theta,
                beta,
            },
            physics,
        })
    }

    /// Process one intent sample at "now" (seconds since controller
    /// construction, monotonic).
    pub fn process_intent(&self, theta: f64, beta: f64) -> MagnonResult<KinematicFrame> {
        self.process_intent_at(theta, beta, self.epoch.elapsed().as_secs_f64())
    }

    /// Process a named action at an explicit simulation time.
    pub fn simulate_action_at(&self, name: &str, t: f64) -> MagnonResult<KinematicFrame> {
        let (theta, beta) = match ActionPattern::parse(name) {
            Some(action) => action.intent(),
            None => NEUTRAL_INTENT,
        };
        self.process_intent_at(theta, beta, t)
    }

    /// Process a named action at "now".
    pub fn simulate_action(&self, name: &str) -> MagnonResult<KinematicFrame> {
        let (theta, beta) = match ActionPattern::parse(name) {
            Some(action) => action.intent(),
            None => NEUTRAL_INTENT,
        };
        self.process_intent(theta, beta)
    }

    /// One Hebbian readout update, serialized against all other weight
    /// access. Exposed for online-learning callers.
    pub fn train_step(
        &self,
        field: &MagnetizationField,
        current: &[f64],
        target: &[f64],
        learning_rate: f64,
    ) -> MagnonResult<()> {
        self.readout
            .lock()
            .train_step(field, current, target, learning_rate)
    }

    /// [`Self::train_step`] with the configured default step size.
    pub fn train_step_default(
        &self,
        field: &MagnetizationField,
        current: &[f64],
        target: &[f64],
    ) -> MagnonResult<()> {
        self.train_step(field, current, target, self.config.learning_rate)
    }
}
