use crate::error::Result;
use tracing::{debug, info};

pub const SABIO_KINETIC_LAWS_URL: &str =
    "https://sabiork.h-its.org/sabioRestWebServices/kineticLaws";

/// Averaged kinetic values scraped from a SABIO-RK text response. Any series
/// the service did not report stays `None`; the caller decides whether to
/// prompt for it or fail.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SabioSummary {
    pub vmax: Option<f64>,
    pub km: Option<f64>,
    pub optimal_ph: Option<f64>,
    pub optimal_temp: Option<f64>,
}

pub struct SabioClient {
    client: reqwest::Client,
    base_url: String,
}

impl SabioClient {
    pub fn new() -> Self {
        Self::with_base_url(SABIO_KINETIC_LAWS_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Queries the kinetic-laws endpoint in its plain-text format and scrapes
    /// the Km / Vmax / pH-optimum / temperature-optimum series out of it.
    pub async fn fetch_summary(
        &self,
        enzyme: &str,
        organism: Option<&str>,
    ) -> Result<SabioSummary> {
        let query = advanced_query(enzyme, organism);
        info!(enzyme, ?organism, "Querying SABIO-RK");
        debug!(query, "SABIO-RK advanced search");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("format", "txt"), ("query", query.as_str())])
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;

        Ok(parse_summary(&text))
    }
}

impl Default for SabioClient {
    fn default() -> Self {
        Self::new()
    }
}

/// SABIO-RK advanced search syntax: `EnzymeName:"..." AND Organism:"..."`.
pub fn advanced_query(enzyme: &str, organism: Option<&str>) -> String {
    match organism {
        Some(organism) => format!(r#"EnzymeName:"{enzyme}" AND Organism:"{organism}""#),
        None => format!(r#"EnzymeName:"{enzyme}""#),
    }
}

fn parse_summary(text: &str) -> SabioSummary {
    SabioSummary {
        vmax: average(&scan_values(text, "vmax")),
        km: average(&scan_values(text, "km")),
        optimal_ph: average(&scan_values(text, "ph optimum")),
        optimal_temp: average(&scan_values(text, "temperature optimum")),
    }
}

/// Collects every `<label> = <number>` occurrence in the response text.
/// Matching is case-insensitive and tolerates `-` in place of the space
/// inside multi-word labels ("pH-optimum" vs "pH optimum").
fn scan_values(text: &str, label: &str) -> Vec<f64> {
    let haystack = text.to_ascii_lowercase().replace('-', " ");
    let mut values = Vec::new();
    let mut offset = 0;

    while let Some(pos) = haystack[offset..].find(label) {
        offset += pos + label.len();
        if let Some(value) = parse_assigned_number(&haystack[offset..]) {
            values.push(value);
        }
    }
    values
}

fn parse_assigned_number(text: &str) -> Option<f64> {
    let text = text.trim_start().strip_prefix('=')?.trim_start();
    let digits: String = text
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}

fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = "\
        EntryID\tParameter\n\
        1\tKm = 0.5 mM for pyruvate\n\
        2\tkm = 1.5\n\
        3\tVmax = 120.0\n\
        4\tpH optimum = 7.0\n\
        5\tpH-optimum = 7.4\n\
        6\tTemperature optimum = 37.0\n";

    #[test]
    fn summary_averages_every_reported_series() {
        let summary = parse_summary(SAMPLE_RESPONSE);
        assert_eq!(summary.km, Some(1.0));
        assert_eq!(summary.vmax, Some(120.0));
        assert_eq!(summary.optimal_ph, Some(7.2));
        assert_eq!(summary.optimal_temp, Some(37.0));
    }

    #[test]
    fn missing_series_stay_none() {
        let summary = parse_summary("Km = 2.0\n");
        assert_eq!(summary.km, Some(2.0));
        assert_eq!(summary.vmax, None);
        assert_eq!(summary.optimal_ph, None);
        assert_eq!(summary.optimal_temp, None);
    }

    #[test]
    fn empty_response_yields_an_empty_summary() {
        assert_eq!(parse_summary(""), SabioSummary::default());
    }

    #[test]
    fn label_without_assignment_is_skipped() {
        let values = scan_values("Km values were inconclusive; Km = 3.0", "km");
        assert_eq!(values, vec![3.0]);
    }

    #[test]
    fn whitespace_around_the_equals_sign_is_tolerated() {
        assert_eq!(scan_values("Vmax   =   12.5", "vmax"), vec![12.5]);
        assert_eq!(scan_values("Vmax=12.5", "vmax"), vec![12.5]);
    }

    #[test]
    fn query_includes_the_organism_only_when_given() {
        assert_eq!(
            advanced_query("hexokinase", None),
            r#"EnzymeName:"hexokinase""#
        );
        assert_eq!(
            advanced_query("hexokinase", Some("Homo sapiens")),
            r#"EnzymeName:"hexokinase" AND Organism:"Homo sapiens""#
        );
    }
}
