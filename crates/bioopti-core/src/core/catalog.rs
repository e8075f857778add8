use crate::core::kinetics::params::{DEFAULT_PH_SIGMA, DEFAULT_TEMP_SIGMA, KineticParameters};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON parsing error for '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("Malformed catalog key '{0}'. Expected 'enzyme (organism)'.")]
    MalformedKey(String),

    #[error("No catalog entry for enzyme '{enzyme}'{}", .organism.as_deref().map(|o| format!(" with organism '{o}'")).unwrap_or_default())]
    NotFound {
        enzyme: String,
        organism: Option<String>,
    },

    #[error("Catalog entry '{key}' is missing required value '{field}'")]
    MissingValue { key: String, field: &'static str },
}

/// One raw catalog record. The catalog format grew unit-tagged key spellings
/// over time (`km_mM`, `vmax_umol_per_min`, ...) next to the plain ones, so
/// both are accepted for every field.
#[derive(Debug, Deserialize, Clone, PartialEq)]
struct CatalogEntry {
    #[serde(default, alias = "vmax_umol_per_min")]
    vmax: Option<f64>,
    #[serde(default, alias = "km_mM")]
    km: Option<f64>,
    #[serde(default, rename = "optimal_pH")]
    optimal_ph: Option<f64>,
    #[serde(default, alias = "optimal_temp_C")]
    optimal_temp: Option<f64>,
    #[serde(default, rename = "pH_sigma")]
    ph_sigma: Option<f64>,
    #[serde(default, alias = "temp_sigma_C")]
    temp_sigma: Option<f64>,
    #[serde(default, alias = "ki_mM")]
    ki: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
struct CatalogRecord {
    enzyme: String,
    organism: String,
    entry: CatalogEntry,
}

/// An in-memory enzyme parameter catalog loaded from a local JSON file.
///
/// The on-disk format is a single JSON object keyed by `"enzyme (organism)"`.
#[derive(Debug, Clone)]
pub struct EnzymeCatalog {
    records: Vec<CatalogRecord>,
}

impl EnzymeCatalog {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        debug!("Loading enzyme catalog from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let raw: BTreeMap<String, CatalogEntry> =
            serde_json::from_str(&content).map_err(|e| CatalogError::Json {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;

        let mut records = Vec::with_capacity(raw.len());
        for (key, entry) in raw {
            let (enzyme, organism) = split_key(&key)?;
            records.push(CatalogRecord {
                enzyme,
                organism,
                entry,
            });
        }

        debug!("Catalog loaded with {} entries", records.len());
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds the first entry matching the enzyme name (and organism, when
    /// given) case-insensitively, and resolves it into a parameter set.
    /// Sigmas absent from the catalog fall back to the assay defaults;
    /// every other missing field is an error, never silently substituted.
    pub fn find(
        &self,
        enzyme: &str,
        organism: Option<&str>,
    ) -> Result<KineticParameters, CatalogError> {
        let record = self
            .records
            .iter()
            .find(|r| {
                r.enzyme.eq_ignore_ascii_case(enzyme)
                    && organism.is_none_or(|o| r.organism.eq_ignore_ascii_case(o))
            })
            .ok_or_else(|| CatalogError::NotFound {
                enzyme: enzyme.to_string(),
                organism: organism.map(str::to_string),
            })?;

        resolve_entry(record)
    }
}

fn split_key(key: &str) -> Result<(String, String), CatalogError> {
    let (enzyme, rest) = key
        .rsplit_once(" (")
        .ok_or_else(|| CatalogError::MalformedKey(key.to_string()))?;
    let organism = rest
        .strip_suffix(')')
        .ok_or_else(|| CatalogError::MalformedKey(key.to_string()))?;
    if enzyme.is_empty() || organism.is_empty() {
        return Err(CatalogError::MalformedKey(key.to_string()));
    }
    Ok((enzyme.to_string(), organism.to_string()))
}

fn resolve_entry(record: &CatalogRecord) -> Result<KineticParameters, CatalogError> {
    let key = format!("{} ({})", record.enzyme, record.organism);
    let missing = |field: &'static str| CatalogError::MissingValue {
        key: key.clone(),
        field,
    };

    Ok(KineticParameters {
        vmax: record.entry.vmax.ok_or_else(|| missing("vmax"))?,
        km: record.entry.km.ok_or_else(|| missing("km"))?,
        optimal_ph: record.entry.optimal_ph.ok_or_else(|| missing("optimal_pH"))?,
        optimal_temp: record
            .entry
            .optimal_temp
            .ok_or_else(|| missing("optimal_temp"))?,
        ph_sigma: record.entry.ph_sigma.unwrap_or(DEFAULT_PH_SIGMA),
        temp_sigma: record.entry.temp_sigma.unwrap_or(DEFAULT_TEMP_SIGMA),
        ki: record.entry.ki,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const CATALOG_JSON: &str = r#"{
        "lactate dehydrogenase (Homo sapiens)": {
            "vmax": 100.0,
            "km": 0.5,
            "optimal_pH": 7.0,
            "optimal_temp": 37.0
        },
        "hexokinase (Saccharomyces cerevisiae)": {
            "vmax_umol_per_min": 80.0,
            "km_mM": 0.3,
            "optimal_pH": 7.5,
            "optimal_temp_C": 30.0,
            "pH_sigma": 0.8,
            "temp_sigma_C": 4.0,
            "ki_mM": 0.2
        }
    }"#;

    fn write_catalog(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enzyme_data.json");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn load_succeeds_with_valid_catalog() {
        let (_dir, path) = write_catalog(CATALOG_JSON);
        let catalog = EnzymeCatalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("non_existent.json");
        let result = EnzymeCatalog::load(&path);
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_json() {
        let (_dir, path) = write_catalog("this is not json");
        let result = EnzymeCatalog::load(&path);
        assert!(matches!(result, Err(CatalogError::Json { .. })));
    }

    #[test]
    fn load_fails_for_key_without_organism() {
        let (_dir, path) = write_catalog(r#"{"hexokinase": {"vmax": 1.0, "km": 1.0}}"#);
        let result = EnzymeCatalog::load(&path);
        assert!(matches!(result, Err(CatalogError::MalformedKey(_))));
    }

    #[test]
    fn find_matches_exact_enzyme_and_organism() {
        let (_dir, path) = write_catalog(CATALOG_JSON);
        let catalog = EnzymeCatalog::load(&path).unwrap();

        let params = catalog
            .find("lactate dehydrogenase", Some("Homo sapiens"))
            .unwrap();
        assert_eq!(params.vmax, 100.0);
        assert_eq!(params.km, 0.5);
    }

    #[test]
    fn find_is_case_insensitive() {
        let (_dir, path) = write_catalog(CATALOG_JSON);
        let catalog = EnzymeCatalog::load(&path).unwrap();

        let params = catalog
            .find("Lactate Dehydrogenase", Some("homo sapiens"))
            .unwrap();
        assert_eq!(params.vmax, 100.0);
    }

    #[test]
    fn find_without_organism_matches_any() {
        let (_dir, path) = write_catalog(CATALOG_JSON);
        let catalog = EnzymeCatalog::load(&path).unwrap();

        let params = catalog.find("hexokinase", None).unwrap();
        assert_eq!(params.vmax, 80.0);
    }

    #[test]
    fn find_fails_for_unknown_enzyme() {
        let (_dir, path) = write_catalog(CATALOG_JSON);
        let catalog = EnzymeCatalog::load(&path).unwrap();

        let result = catalog.find("random enzyme", Some("Unknown"));
        assert!(matches!(result, Err(CatalogError::NotFound { .. })));
    }

    #[test]
    fn unit_tagged_keys_resolve_like_plain_ones() {
        let (_dir, path) = write_catalog(CATALOG_JSON);
        let catalog = EnzymeCatalog::load(&path).unwrap();

        let params = catalog
            .find("hexokinase", Some("Saccharomyces cerevisiae"))
            .unwrap();
        assert_eq!(params.vmax, 80.0);
        assert_eq!(params.km, 0.3);
        assert_eq!(params.optimal_temp, 30.0);
        assert_eq!(params.ph_sigma, 0.8);
        assert_eq!(params.temp_sigma, 4.0);
        assert_eq!(params.ki, Some(0.2));
    }

    #[test]
    fn missing_sigmas_fall_back_to_defaults() {
        let (_dir, path) = write_catalog(CATALOG_JSON);
        let catalog = EnzymeCatalog::load(&path).unwrap();

        let params = catalog
            .find("lactate dehydrogenase", Some("Homo sapiens"))
            .unwrap();
        assert_eq!(params.ph_sigma, DEFAULT_PH_SIGMA);
        assert_eq!(params.temp_sigma, DEFAULT_TEMP_SIGMA);
        assert_eq!(params.ki, None);
    }

    #[test]
    fn missing_required_value_is_an_error() {
        let (_dir, path) = write_catalog(
            r#"{"hexokinase (Homo sapiens)": {"vmax": 80.0, "optimal_pH": 7.0, "optimal_temp": 37.0}}"#,
        );
        let catalog = EnzymeCatalog::load(&path).unwrap();

        let result = catalog.find("hexokinase", None);
        assert!(matches!(
            result,
            Err(CatalogError::MissingValue { field: "km", .. })
        ));
    }
}
