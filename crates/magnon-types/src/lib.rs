// ─────────────────────────────────────────────────────────────────────
// Neuro-Twin — Magnonic Reservoir Kernel Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! magnonic reservoir kernel: the neural-intent-to-kinematics engine
//! behind the Neuro-Twin visualization.

pub mod config;
pub mod error;
pub mod frame;

pub use config::EngineConfig;
pub use error::{MagnonError, MagnonResult};
pub use frame::{clamp_unit, KinematicFrame, PhysicsMetadata, SimParams};
