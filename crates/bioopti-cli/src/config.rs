use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

pub const BACDIVE_USERNAME_ENV: &str = "BACDIVE_USERNAME";
pub const BACDIVE_PASSWORD_ENV: &str = "BACDIVE_PASSWORD";

/// Remote-service credentials, supplied by the user at call time. They are
/// read from the environment or a TOML file and never compiled in.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    #[serde(default)]
    pub bacdive: Option<BacdiveCredentials>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BacdiveCredentials {
    pub username: String,
    pub password: String,
}

impl RemoteConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading remote-service config from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

/// Resolves BACdive credentials: environment variables win, then the config
/// file. Missing credentials are a configuration error, never a built-in
/// default.
pub fn bacdive_credentials(config_path: Option<&Path>) -> Result<BacdiveCredentials> {
    let username = std::env::var(BACDIVE_USERNAME_ENV).ok();
    let password = std::env::var(BACDIVE_PASSWORD_ENV).ok();
    if let (Some(username), Some(password)) = (username, password) {
        debug!("Using BACdive credentials from the environment");
        return Ok(BacdiveCredentials { username, password });
    }

    if let Some(path) = config_path {
        if let Some(credentials) = RemoteConfig::from_file(path)?.bacdive {
            return Ok(credentials);
        }
        return Err(CliError::Config(format!(
            "No [bacdive] section in '{}'",
            path.display()
        )));
    }

    Err(CliError::Config(format!(
        "BACdive credentials not found. Set {BACDIVE_USERNAME_ENV}/{BACDIVE_PASSWORD_ENV} or pass --config with a [bacdive] section."
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::tempdir;

    fn clear_env() {
        unsafe {
            std::env::remove_var(BACDIVE_USERNAME_ENV);
            std::env::remove_var(BACDIVE_PASSWORD_ENV);
        }
    }

    #[test]
    fn config_file_with_bacdive_section_parses() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bioopti.toml");
        fs::write(
            &path,
            "[bacdive]\nusername = \"user@example.org\"\npassword = \"secret\"\n",
        )
        .unwrap();

        let config = RemoteConfig::from_file(&path).unwrap();
        let credentials = config.bacdive.unwrap();
        assert_eq!(credentials.username, "user@example.org");
        assert_eq!(credentials.password, "secret");
    }

    #[test]
    fn malformed_config_file_is_a_parsing_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bioopti.toml");
        fs::write(&path, "this is not toml").unwrap();

        let result = RemoteConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bioopti.toml");
        fs::write(&path, "[sabio]\ntoken = \"x\"\n").unwrap();

        let result = RemoteConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    #[serial]
    fn environment_variables_win_over_the_config_file() {
        clear_env();
        unsafe {
            std::env::set_var(BACDIVE_USERNAME_ENV, "env-user");
            std::env::set_var(BACDIVE_PASSWORD_ENV, "env-pass");
        }

        let credentials = bacdive_credentials(None).unwrap();
        assert_eq!(credentials.username, "env-user");
        assert_eq!(credentials.password, "env-pass");

        clear_env();
    }

    #[test]
    #[serial]
    fn missing_credentials_are_a_config_error() {
        clear_env();
        let result = bacdive_credentials(None);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    #[serial]
    fn file_without_bacdive_section_is_a_config_error() {
        clear_env();
        let dir = tempdir().unwrap();
        let path = dir.path().join("bioopti.toml");
        fs::write(&path, "").unwrap();

        let result = bacdive_credentials(Some(&path));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
