//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::core`] data layer and the
//! [`crate::engine`] optimizer together into complete procedures.
//!
//! ## Overview
//!
//! Workflows are the top-level API for users of BioOpti. Each one handles
//! parameter resolution, validation, progress reporting, and result
//! organization, so callers deal in enzymes and conditions rather than in
//! optimizer internals.
//!
//! ## Architecture
//!
//! - **Simulation Workflow** ([`simulate`]) - Resolve an enzyme's parameters
//!   (from a catalog entry or an explicit set) and evaluate the reaction rate
//!   for one set of conditions.
//! - **Optimization Workflow** ([`optimize`]) - Search the bounded
//!   (substrate, pH, temperature) box for the rate-maximizing operating point.

pub mod optimize;
pub mod simulate;
