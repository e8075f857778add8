//! # Engine Module
//!
//! This module implements the optimization engine of BioOpti: a bounded,
//! derivative-free search for the environmental conditions that maximize an
//! enzyme's reaction rate.
//!
//! ## Overview
//!
//! The objective surface is smooth with a single dominant peak shaped by the
//! Gaussian penalty terms, but no gradient is assumed available. The engine
//! therefore uses a population-based differential-evolution search over the
//! three-dimensional (substrate, pH, temperature) box.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Search-space bounds, population sizing,
//!   convergence criteria, and seeding
//! - **Evolution** ([`evolution`]) - The differential-evolution minimizer
//! - **Progress Monitoring** ([`progress`]) - Per-generation progress callbacks
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! ## Key Capabilities
//!
//! - **Bounded global search** robust to the flat far-from-optimum regions of
//!   the rate surface
//! - **Parallel candidate scoring** per generation; the objective is a pure
//!   function, so concurrent evaluation is safe by construction
//! - **Deterministic runs** when a seed is fixed in the configuration
//! - **Progress reporting** with per-generation best-rate updates

pub mod config;
pub mod error;
pub mod evolution;
pub mod progress;
