// ─────────────────────────────────────────────────────────────────────
// Neuro-Twin — Magnonic Pattern Physics
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Closed-form magnetization pattern synthesis and the pre-computed
//! pattern database behind the continuous (theta, beta) field surface.
//!
//! The pattern is a formula-defined approximation of LLG spin dynamics
//! (superposed vortex, spin-wave, domain-wall, and interference terms),
//! not a differential-equation integrator. A 5×5 sampling of the unit
//! parameter square is materialized once; everything in between is
//! per-pixel bilinear blending plus a time-dependent precession term.

pub mod field;
pub mod grid;
pub mod interp;
pub mod params;
pub mod pattern;
pub mod rng;

pub use field::MagnetizationField;
pub use grid::PatternGrid;
pub use interp::FieldInterpolator;
pub use pattern::PatternSynthesizer;
pub use rng::SimpleRng;
