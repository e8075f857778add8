use crate::core::catalog::{CatalogError, EnzymeCatalog};
use crate::core::kinetics::conditions::ReactionConditions;
use crate::core::kinetics::params::KineticParameters;
use crate::core::kinetics::rate::{RateError, reaction_rate};
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum SimulateError {
    #[error("Catalog lookup failed: {source}")]
    Catalog {
        #[from]
        source: CatalogError,
    },

    #[error("Rate evaluation failed: {source}")]
    Rate {
        #[from]
        source: RateError,
    },
}

/// Caller-supplied values that take precedence over whatever the catalog
/// entry carries. Anything left `None` keeps the looked-up value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParameterOverrides {
    pub ph_sigma: Option<f64>,
    pub temp_sigma: Option<f64>,
    pub ki: Option<f64>,
}

impl ParameterOverrides {
    pub fn apply(&self, mut params: KineticParameters) -> KineticParameters {
        if let Some(sigma) = self.ph_sigma {
            params.ph_sigma = sigma;
        }
        if let Some(sigma) = self.temp_sigma {
            params.temp_sigma = sigma;
        }
        if let Some(ki) = self.ki {
            params.ki = Some(ki);
        }
        params
    }
}

/// The evaluated rate together with the parameter set that produced it, so
/// callers can report which constants a simulation actually used.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub rate: f64,
    pub params: KineticParameters,
}

/// Resolves an enzyme's parameters from the catalog and evaluates the
/// reaction rate for one set of conditions.
#[instrument(skip(catalog, conditions, overrides), name = "simulate_workflow")]
pub fn run(
    catalog: &EnzymeCatalog,
    enzyme: &str,
    organism: Option<&str>,
    conditions: &ReactionConditions,
    overrides: &ParameterOverrides,
) -> Result<SimulationReport, SimulateError> {
    let params = overrides.apply(catalog.find(enzyme, organism)?);
    let rate = reaction_rate(&params, conditions)?;

    info!(enzyme, ?organism, rate, "Simulated reaction rate");
    Ok(SimulationReport { rate, params })
}
