//! # Kinetics Module
//!
//! Data models and rate mathematics for single-substrate enzyme kinetics.
//!
//! ## Key Components
//!
//! - [`params`] - Immutable kinetic parameter sets ([`params::KineticParameters`])
//!   with a validating builder
//! - [`conditions`] - Per-evaluation environmental conditions
//!   ([`conditions::ReactionConditions`])
//! - [`rate`] - The canonical rate law: Michaelis-Menten base rate, competitive
//!   inhibition, and multiplicative Gaussian pH/temperature penalties
//!
//! There is exactly one implementation of the rate formula in this crate;
//! every higher layer (the optimizer, the workflows, the CLI) evaluates
//! through [`rate::reaction_rate`].

pub mod conditions;
pub mod params;
pub mod rate;
