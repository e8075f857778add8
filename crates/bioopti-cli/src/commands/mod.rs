use crate::cli::ParameterSource;
use crate::error::{CliError, Result};
use bioopti::core::catalog::EnzymeCatalog;
use bioopti::core::kinetics::params::KineticParameters;
use bioopti::workflows::simulate::ParameterOverrides;

pub mod fetch;
pub mod media;
pub mod optimize;
pub mod simulate;

/// Builds a parameter set from the explicit `--vmax`/`--km`/... flags.
pub(crate) fn explicit_parameters(source: &ParameterSource) -> Result<KineticParameters> {
    let (Some(vmax), Some(km)) = (source.vmax, source.km) else {
        return Err(CliError::Argument(
            "Provide either --enzyme for a catalog lookup or explicit --vmax and --km.".to_string(),
        ));
    };

    let mut builder = KineticParameters::builder().vmax(vmax).km(km);
    if let Some(value) = source.optimal_ph {
        builder = builder.optimal_ph(value);
    }
    if let Some(value) = source.optimal_temp {
        builder = builder.optimal_temp(value);
    }
    if let Some(value) = source.ph_sigma {
        builder = builder.ph_sigma(value);
    }
    if let Some(value) = source.temp_sigma {
        builder = builder.temp_sigma(value);
    }
    if let Some(value) = source.ki {
        builder = builder.ki(value);
    }
    Ok(builder.build()?)
}

/// Resolves a parameter set from whichever source the user picked: a catalog
/// lookup (with command-line overrides applied on top) or explicit flags.
pub(crate) fn resolve_parameters(source: &ParameterSource) -> Result<KineticParameters> {
    match &source.enzyme {
        Some(enzyme) => {
            let catalog = EnzymeCatalog::load(&source.catalog)?;
            let overrides = ParameterOverrides {
                ph_sigma: source.ph_sigma,
                temp_sigma: source.temp_sigma,
                ki: source.ki,
            };
            let mut params = overrides.apply(catalog.find(enzyme, source.organism.as_deref())?);
            if let Some(value) = source.optimal_ph {
                params.optimal_ph = value;
            }
            if let Some(value) = source.optimal_temp {
                params.optimal_temp = value;
            }
            Ok(params)
        }
        None => explicit_parameters(source),
    }
}

pub(crate) fn print_parameters(params: &KineticParameters) {
    println!("Parameters used:");
    println!("  vmax          = {} µmol/min", params.vmax);
    println!("  km            = {} mM", params.km);
    println!("  optimal pH    = {}", params.optimal_ph);
    println!("  optimal temp  = {} °C", params.optimal_temp);
    println!("  pH sigma      = {}", params.ph_sigma);
    println!("  temp sigma    = {} °C", params.temp_sigma);
    match params.ki {
        Some(ki) => println!("  ki            = {} mM", ki),
        None => println!("  ki            = -"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn source_with_catalog(content: &str) -> (tempfile::TempDir, ParameterSource) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enzyme_data.json");
        fs::write(&path, content).unwrap();
        let source = ParameterSource {
            enzyme: None,
            organism: None,
            catalog: path,
            vmax: None,
            km: None,
            optimal_ph: None,
            optimal_temp: None,
            ph_sigma: None,
            temp_sigma: None,
            ki: None,
        };
        (dir, source)
    }

    const CATALOG_JSON: &str = r#"{
        "hexokinase (Homo sapiens)": {
            "vmax": 80.0,
            "km": 0.3,
            "optimal_pH": 7.5,
            "optimal_temp": 30.0
        }
    }"#;

    #[test]
    fn explicit_parameters_require_vmax_and_km() {
        let (_dir, source) = source_with_catalog("{}");
        let result = explicit_parameters(&source);
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn explicit_parameters_apply_all_flags() {
        let (_dir, mut source) = source_with_catalog("{}");
        source.vmax = Some(100.0);
        source.km = Some(0.5);
        source.optimal_ph = Some(6.5);
        source.ki = Some(0.1);

        let params = explicit_parameters(&source).unwrap();
        assert_eq!(params.vmax, 100.0);
        assert_eq!(params.optimal_ph, 6.5);
        assert_eq!(params.ki, Some(0.1));
    }

    #[test]
    fn resolve_parameters_prefers_the_catalog_when_an_enzyme_is_named() {
        let (_dir, mut source) = source_with_catalog(CATALOG_JSON);
        source.enzyme = Some("hexokinase".to_string());
        source.temp_sigma = Some(3.0);

        let params = resolve_parameters(&source).unwrap();
        assert_eq!(params.vmax, 80.0);
        assert_eq!(params.optimal_temp, 30.0);
        // The command-line override wins over the catalog default.
        assert_eq!(params.temp_sigma, 3.0);
    }

    #[test]
    fn resolve_parameters_surfaces_catalog_misses() {
        let (_dir, mut source) = source_with_catalog(CATALOG_JSON);
        source.enzyme = Some("unknown".to_string());

        let result = resolve_parameters(&source);
        assert!(matches!(result, Err(CliError::Catalog(_))));
    }
}
