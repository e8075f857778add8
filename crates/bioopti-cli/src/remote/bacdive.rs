use crate::config::BacdiveCredentials;
use crate::error::{CliError, Result};
use serde_json::Value;
use tracing::{debug, info};

pub const SSO_TOKEN_URL: &str =
    "https://sso.dsmz.de/auth/realms/dsmz/protocol/openid-connect/token";
pub const API_BASE_URL: &str = "https://api.bacdive.dsmz.de";
const SSO_CLIENT_ID: &str = "api.bacdive.public";

const CULTURE_CONDITIONS_KEY: &str = "Culture and growth conditions";

/// An authenticated BACdive session. The DSMZ SSO issues a bearer token for
/// the credentials, which is then attached to every API request.
pub struct BacdiveClient {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

impl BacdiveClient {
    pub async fn authenticate(credentials: &BacdiveCredentials) -> Result<Self> {
        Self::authenticate_against(credentials, SSO_TOKEN_URL, API_BASE_URL).await
    }

    pub async fn authenticate_against(
        credentials: &BacdiveCredentials,
        token_url: &str,
        api_url: &str,
    ) -> Result<Self> {
        info!("Authenticating against the DSMZ SSO");
        let client = reqwest::Client::new();
        let form = [
            ("grant_type", "password"),
            ("client_id", SSO_CLIENT_ID),
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
            ("scope", "openid"),
        ];
        let response = client
            .post(token_url)
            .form(&form)
            .send()
            .await?
            .error_for_status()?;
        let body: Value = response.json().await?;
        let token = body
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| CliError::Remote("No access_token in SSO response".to_string()))?
            .to_string();

        Ok(Self {
            client,
            api_url: api_url.to_string(),
            token,
        })
    }

    /// Searches by culture collection number or by `genus species` taxon and
    /// returns the matching BACdive IDs.
    pub async fn search_ids(&self, query: &str) -> Result<Vec<u64>> {
        let url = if is_collection_number(query) {
            format!("{}/culturecollectionno/{}", self.api_url, query)
        } else {
            let mut parts = query.split_whitespace();
            let (Some(genus), Some(species)) = (parts.next(), parts.next()) else {
                return Err(CliError::Argument(
                    "Please enter at least genus and species.".to_string(),
                ));
            };
            format!("{}/taxon/{}/{}", self.api_url, genus, species)
        };

        debug!(url, "BACdive search");
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;
        let body: Value = response.json().await?;

        Ok(collect_ids(&body))
    }

    /// Fetches the full strain record for one BACdive ID.
    pub async fn fetch_strain(&self, id: u64) -> Result<Value> {
        let url = format!("{}/fetch/{}", self.api_url, id);
        debug!(url, "BACdive fetch");
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;
        let body: Value = response.json().await?;

        Ok(first_result(&body))
    }
}

/// Culture collection numbers look like "DSM 402" or "ATCC 6051": a short
/// alphabetic prefix followed by digits.
pub fn is_collection_number(query: &str) -> bool {
    let letters: String = query.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    if !(2..=5).contains(&letters.len()) {
        return false;
    }
    query[letters.len()..]
        .trim_start()
        .starts_with(|c: char| c.is_ascii_digit())
}

fn collect_ids(body: &Value) -> Vec<u64> {
    let Some(results) = body.get("results").and_then(Value::as_array) else {
        return Vec::new();
    };
    results
        .iter()
        .filter_map(|entry| match entry {
            Value::Object(fields) => fields
                .get("bacdive_id")
                .or_else(|| fields.get("id"))
                .and_then(Value::as_u64),
            Value::Number(n) => n.as_u64(),
            _ => None,
        })
        .collect()
}

/// `fetch` wraps the strain either in an object keyed by ID or in a list.
fn first_result(body: &Value) -> Value {
    match body.get("results") {
        Some(Value::Object(map)) => map
            .values()
            .next()
            .cloned()
            .unwrap_or(Value::Object(Default::default())),
        Some(Value::Array(items)) => items
            .first()
            .cloned()
            .unwrap_or(Value::Object(Default::default())),
        _ => Value::Object(Default::default()),
    }
}

/// One culture medium entry of a strain record, normalized for display.
#[derive(Debug, Clone, PartialEq)]
pub struct MediumRecipe {
    pub name: String,
    pub growth: String,
    pub composition: String,
    pub link: String,
}

impl MediumRecipe {
    fn from_value(value: &Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or("-")
                .to_string()
        };
        Self {
            name: field("name"),
            growth: field("growth"),
            composition: field("composition"),
            link: field("link"),
        }
    }
}

/// Extracts the culture-medium entries from a strain record. A single medium
/// object is normalized into a one-element list.
pub fn extract_media(strain: &Value) -> Vec<MediumRecipe> {
    let Some(media) = strain
        .get(CULTURE_CONDITIONS_KEY)
        .and_then(|cgc| cgc.get("culture medium"))
    else {
        return Vec::new();
    };

    match media {
        Value::Array(items) => items.iter().map(MediumRecipe::from_value).collect(),
        Value::Object(_) => vec![MediumRecipe::from_value(media)],
        _ => Vec::new(),
    }
}

/// Picks the best growth temperature in °C from a strain record.
///
/// Sub-entries under any culture-condition key containing "temp" are ranked
/// optimum > growth > first parsable; numeric ranges average their
/// endpoints. When no such entry exists, the whole culture-conditions block
/// is scanned for a literal "<number> °C".
pub fn extract_temperature(strain: &Value) -> Option<f64> {
    let cgc = strain.get(CULTURE_CONDITIONS_KEY)?.as_object()?;

    let mut candidates: Vec<&Value> = Vec::new();
    for (key, value) in cgc {
        if key.to_ascii_lowercase().contains("temp") {
            match value {
                Value::Array(items) => candidates.extend(items),
                other => candidates.push(other),
            }
        }
    }

    if candidates.is_empty() {
        let blob = serde_json::to_string(cgc).ok()?;
        return scan_degrees_celsius(&blob);
    }

    for wanted in ["optimum", "growth"] {
        for entry in &candidates {
            if entry_kind(entry).contains(wanted) {
                if let Some(value) = parse_temperature_entry(entry) {
                    return Some(value);
                }
            }
        }
    }
    candidates.iter().find_map(|e| parse_temperature_entry(e))
}

fn entry_kind(entry: &Value) -> String {
    entry
        .get("test_type")
        .or_else(|| entry.get("type"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_ascii_lowercase()
}

fn parse_temperature_entry(entry: &Value) -> Option<f64> {
    let object = entry.as_object()?;

    for field in ["temperature", "temp", "value"] {
        match object.get(field) {
            Some(Value::Number(n)) => return n.as_f64(),
            Some(Value::String(s)) => {
                if let Some(value) = parse_numeric_span(s) {
                    return Some(value);
                }
            }
            _ => {}
        }
    }

    object
        .get("description")
        .and_then(Value::as_str)
        .and_then(scan_degrees_celsius)
}

/// "20–30" (or "20-30") averages to 25; a single number parses as itself.
fn parse_numeric_span(text: &str) -> Option<f64> {
    let numbers = find_numbers(text);
    match numbers.as_slice() {
        [] => None,
        [single] => Some(*single),
        [first, second, ..] => {
            if text.contains('–') || text.contains('-') {
                Some((first + second) / 2.0)
            } else {
                Some(*first)
            }
        }
    }
}

fn find_numbers(text: &str) -> Vec<f64> {
    let mut numbers = Vec::new();
    let mut run = String::new();
    for c in text.chars().chain(std::iter::once(' ')) {
        if c.is_ascii_digit() || c == '.' {
            run.push(c);
        } else if !run.is_empty() {
            if let Ok(value) = run.parse() {
                numbers.push(value);
            }
            run.clear();
        }
    }
    numbers
}

/// Finds the first "<number> °C" occurrence in free text.
fn scan_degrees_celsius(text: &str) -> Option<f64> {
    let chars: Vec<char> = text.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c != '°' {
            continue;
        }
        let mut j = i + 1;
        while j < chars.len() && chars[j] == ' ' {
            j += 1;
        }
        if j >= chars.len() || !matches!(chars[j], 'c' | 'C') {
            continue;
        }

        let mut end = i;
        while end > 0 && chars[end - 1] == ' ' {
            end -= 1;
        }
        let mut start = end;
        while start > 0 && (chars[start - 1].is_ascii_digit() || chars[start - 1] == '.') {
            start -= 1;
        }
        if start < end {
            let number: String = chars[start..end].iter().collect();
            if let Ok(value) = number.parse() {
                return Some(value);
            }
        }
    }
    None
}
