// ─────────────────────────────────────────────────────────────────────
// Neuro-Twin — Magnonic Reservoir Core Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Kinematic readout and the intent-processing controller: the causal
//! chain from (theta, beta) neural intent to joint angles and fluidity.
//!
//! # Engine Invariants
//!
//! 1. **No hard failure on bad intent**: out-of-range or NaN theta/beta
//!    are clamped to [0, 1]; the engine feeds a best-effort
//!    visualization and degrades instead of raising.
//!
//! 2. **The pattern database is optional**: a controller built with
//!    [`FieldSource::Mock`] (or whenever the database cannot be
//!    provided) produces a closed-form fallback wave and tags the
//!    result's provenance as mock. The fallback path cannot fail.
//!
//! 3. **Single writer on the readout weights**: `train_step` is the
//!    only mutator, serialized behind a `parking_lot::Mutex` together
//!    with `predict`, so concurrent updates never interleave partially.
//!
//! 4. **Shape contracts are hard errors**: a field or vector of the
//!    wrong dimension is a programmer error and surfaces as
//!    `DimensionMismatch`, never silently truncated or padded.

pub mod action;
pub mod controller;
pub mod readout;

pub use action::ActionPattern;
pub use controller::{FieldSource, MagnonicController};
pub use readout::ReservoirReadout;
