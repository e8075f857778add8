use thiserror::Error;

use super::config::ConfigError;
use crate::core::kinetics::rate::RateError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid optimizer configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Rate evaluation failed: {source}")]
    Evaluation {
        #[from]
        source: RateError,
    },

    #[error("Objective was non-finite for every candidate in the population")]
    NonFiniteObjective,

    #[error("Internal logic error: {0}")]
    Internal(String),
}
