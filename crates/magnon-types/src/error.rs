// ─────────────────────────────────────────────────────────────────────
// Neuro-Twin — Reservoir Kernel Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all reservoir kernel failures.
///
/// The engine favours graceful degradation: out-of-range intent
/// parameters are clamped, a missing pattern database falls back to the
/// closed-form wave, and degenerate fields are treated as the zero
/// pattern. What remains are contract violations that must surface.
#[derive(Error, Debug)]
pub enum MagnonError {
    /// Invalid configuration value or unparseable config document.
    #[error("config error: {0}")]
    Config(String),

    /// A supplied field or vector does not match the readout's shape.
    /// Contract error; never silently truncated or padded.
    #[error("dimension mismatch: expected {expected} values, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

pub type MagnonResult<T> = Result<T, MagnonError>;
