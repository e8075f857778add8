use super::conditions::ReactionConditions;
use super::params::KineticParameters;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum RateError {
    #[error("vmax must be positive, got {0}")]
    NonPositiveVmax(f64),

    #[error("km must be positive, got {0}")]
    NonPositiveKm(f64),

    #[error("ki must be positive, got {0}")]
    NonPositiveKi(f64),

    #[error("{name} must be positive, got {value}")]
    NonPositiveSigma { name: &'static str, value: f64 },

    #[error("{name} must be non-negative, got {value}")]
    NegativeConcentration { name: &'static str, value: f64 },

    #[error(
        "Effective Km ({effective_km}) and substrate concentration ({substrate_conc}) sum to zero"
    )]
    ZeroDenominator {
        effective_km: f64,
        substrate_conc: f64,
    },
}

/// Gaussian activity falloff around an environmental optimum, in (0, 1].
#[inline]
pub fn gaussian_penalty(value: f64, optimum: f64, sigma: f64) -> f64 {
    let deviation = value - optimum;
    (-(deviation * deviation) / (2.0 * sigma * sigma)).exp()
}

/// Km corrected for competitive inhibition. Without an inhibitor/Ki pair the
/// Michaelis constant is returned unchanged.
#[inline]
pub fn effective_km(km: f64, inhibitor_conc: Option<f64>, ki: Option<f64>) -> f64 {
    match (inhibitor_conc, ki) {
        (Some(inhibitor), Some(ki)) if ki != 0.0 => km * (1.0 + inhibitor / ki),
        _ => km,
    }
}

/// Evaluates the reaction rate in µmol/min for one set of conditions.
///
/// The rate is the Michaelis-Menten base rate (with Km corrected for
/// competitive inhibition) scaled by Gaussian pH and temperature penalties.
/// The result is non-negative for every accepted input; inputs that would
/// produce a NaN or infinite rate are rejected instead.
pub fn reaction_rate(
    params: &KineticParameters,
    conditions: &ReactionConditions,
) -> Result<f64, RateError> {
    validate_params(params)?;
    validate_conditions(conditions)?;

    let km_effective = effective_km(params.km, conditions.inhibitor_conc, params.ki);

    let denominator = km_effective + conditions.substrate_conc;
    if denominator == 0.0 {
        return Err(RateError::ZeroDenominator {
            effective_km: km_effective,
            substrate_conc: conditions.substrate_conc,
        });
    }

    let base_rate = (params.vmax * conditions.substrate_conc) / denominator;
    let temp_penalty = gaussian_penalty(conditions.temp, params.optimal_temp, params.temp_sigma);
    let ph_penalty = gaussian_penalty(conditions.ph, params.optimal_ph, params.ph_sigma);

    Ok(base_rate * temp_penalty * ph_penalty)
}

fn validate_params(params: &KineticParameters) -> Result<(), RateError> {
    if params.vmax <= 0.0 {
        return Err(RateError::NonPositiveVmax(params.vmax));
    }
    if params.km <= 0.0 {
        return Err(RateError::NonPositiveKm(params.km));
    }
    if let Some(ki) = params.ki {
        if ki <= 0.0 {
            return Err(RateError::NonPositiveKi(ki));
        }
    }
    if params.ph_sigma <= 0.0 {
        return Err(RateError::NonPositiveSigma {
            name: "ph_sigma",
            value: params.ph_sigma,
        });
    }
    if params.temp_sigma <= 0.0 {
        return Err(RateError::NonPositiveSigma {
            name: "temp_sigma",
            value: params.temp_sigma,
        });
    }
    Ok(())
}

fn validate_conditions(conditions: &ReactionConditions) -> Result<(), RateError> {
    if conditions.substrate_conc < 0.0 {
        return Err(RateError::NegativeConcentration {
            name: "substrate_conc",
            value: conditions.substrate_conc,
        });
    }
    if let Some(inhibitor) = conditions.inhibitor_conc {
        if inhibitor < 0.0 {
            return Err(RateError::NegativeConcentration {
                name: "inhibitor_conc",
                value: inhibitor,
            });
        }
    }
    Ok(())
}
