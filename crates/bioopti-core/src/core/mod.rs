//! # Core Module
//!
//! This module provides the fundamental building blocks for enzyme kinetics
//! calculations in BioOpti, serving as the computational foundation of the library.
//!
//! ## Overview
//!
//! The core module implements the data structures and closed-form mathematics
//! required to evaluate enzymatic reaction rates under arbitrary environmental
//! conditions, together with the local data source those calculations draw
//! their parameters from.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules:
//!
//! - **Kinetics** ([`kinetics`]) - Kinetic parameter models, reaction conditions,
//!   and the Michaelis-Menten rate law with environmental penalty terms
//! - **Catalog** ([`catalog`]) - Lookup of kinetic parameters from a local JSON
//!   catalog keyed by enzyme and organism
//!
//! ## Scientific Foundation
//!
//! Rate evaluation follows established enzymology:
//!
//! - **Michaelis-Menten kinetics** relating rate to substrate concentration via
//!   Vmax and Km
//! - **Competitive inhibition** raising the effective Km by `(1 + [I]/Ki)`
//! - **Gaussian response curves** modeling activity loss away from the enzyme's
//!   pH and temperature optima

pub mod catalog;
pub mod kinetics;
