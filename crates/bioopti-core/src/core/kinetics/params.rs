use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_OPTIMAL_PH: f64 = 7.0;
pub const DEFAULT_OPTIMAL_TEMP: f64 = 37.0;
pub const DEFAULT_PH_SIGMA: f64 = 1.0;
pub const DEFAULT_TEMP_SIGMA: f64 = 5.0;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParamsError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Kinetic constants and environmental response profile of a single enzyme.
///
/// Values are constructed once, from a catalog entry, a remote lookup, or the
/// builder, and never mutated afterwards. Units follow the catalog convention:
/// concentrations in mM, velocities in µmol/min, temperatures in °C.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct KineticParameters {
    pub vmax: f64,
    pub km: f64,
    pub optimal_ph: f64,
    pub optimal_temp: f64,
    pub ph_sigma: f64,
    pub temp_sigma: f64,
    pub ki: Option<f64>,
}

impl KineticParameters {
    pub fn builder() -> KineticParametersBuilder {
        KineticParametersBuilder::default()
    }
}

#[derive(Default)]
pub struct KineticParametersBuilder {
    vmax: Option<f64>,
    km: Option<f64>,
    optimal_ph: Option<f64>,
    optimal_temp: Option<f64>,
    ph_sigma: Option<f64>,
    temp_sigma: Option<f64>,
    ki: Option<f64>,
}

impl KineticParametersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vmax(mut self, vmax: f64) -> Self {
        self.vmax = Some(vmax);
        self
    }
    pub fn km(mut self, km: f64) -> Self {
        self.km = Some(km);
        self
    }
    pub fn optimal_ph(mut self, ph: f64) -> Self {
        self.optimal_ph = Some(ph);
        self
    }
    pub fn optimal_temp(mut self, temp: f64) -> Self {
        self.optimal_temp = Some(temp);
        self
    }
    pub fn ph_sigma(mut self, sigma: f64) -> Self {
        self.ph_sigma = Some(sigma);
        self
    }
    pub fn temp_sigma(mut self, sigma: f64) -> Self {
        self.temp_sigma = Some(sigma);
        self
    }
    pub fn ki(mut self, ki: f64) -> Self {
        self.ki = Some(ki);
        self
    }

    /// Builds the parameter set. `vmax` and `km` are required; the optima and
    /// sigmas fall back to the conventional assay defaults (pH 7.0, 37 °C,
    /// sigma 1.0 / 5.0) when not supplied.
    pub fn build(self) -> Result<KineticParameters, ParamsError> {
        Ok(KineticParameters {
            vmax: self.vmax.ok_or(ParamsError::MissingParameter("vmax"))?,
            km: self.km.ok_or(ParamsError::MissingParameter("km"))?,
            optimal_ph: self.optimal_ph.unwrap_or(DEFAULT_OPTIMAL_PH),
            optimal_temp: self.optimal_temp.unwrap_or(DEFAULT_OPTIMAL_TEMP),
            ph_sigma: self.ph_sigma.unwrap_or(DEFAULT_PH_SIGMA),
            temp_sigma: self.temp_sigma.unwrap_or(DEFAULT_TEMP_SIGMA),
            ki: self.ki,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_succeeds_with_required_fields_only() {
        let params = KineticParameters::builder()
            .vmax(100.0)
            .km(0.5)
            .build()
            .unwrap();

        assert_eq!(params.vmax, 100.0);
        assert_eq!(params.km, 0.5);
        assert_eq!(params.optimal_ph, DEFAULT_OPTIMAL_PH);
        assert_eq!(params.optimal_temp, DEFAULT_OPTIMAL_TEMP);
        assert_eq!(params.ph_sigma, DEFAULT_PH_SIGMA);
        assert_eq!(params.temp_sigma, DEFAULT_TEMP_SIGMA);
        assert_eq!(params.ki, None);
    }

    #[test]
    fn builder_fails_without_vmax() {
        let result = KineticParameters::builder().km(0.5).build();
        assert_eq!(result, Err(ParamsError::MissingParameter("vmax")));
    }

    #[test]
    fn builder_fails_without_km() {
        let result = KineticParameters::builder().vmax(100.0).build();
        assert_eq!(result, Err(ParamsError::MissingParameter("km")));
    }

    #[test]
    fn builder_applies_explicit_overrides() {
        let params = KineticParameters::builder()
            .vmax(80.0)
            .km(0.3)
            .optimal_ph(7.5)
            .optimal_temp(30.0)
            .ph_sigma(0.8)
            .temp_sigma(4.0)
            .ki(0.2)
            .build()
            .unwrap();

        assert_eq!(params.optimal_ph, 7.5);
        assert_eq!(params.optimal_temp, 30.0);
        assert_eq!(params.ph_sigma, 0.8);
        assert_eq!(params.temp_sigma, 4.0);
        assert_eq!(params.ki, Some(0.2));
    }
}
