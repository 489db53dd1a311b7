//! Configuration loading.
//!
//! Resolution order: explicit `--config` path, then the `TOKENGATE_CONFIG`
//! environment variable, then `{config_dir}/tokengate/config.toml` when it
//! exists, then built-in defaults. Credential environment variables
//! override whatever the file says, so secrets can stay out of config
//! files.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokengate_verifier::VerifierConfig;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "TOKENGATE_CONFIG";

/// Environment override for the chain-indexer credential.
pub const INDEXER_KEY_ENV: &str = "TOKENGATE_INDEXER_KEY";

/// Environment override for the purchase-ledger credential.
pub const LEDGER_TOKEN_ENV: &str = "TOKENGATE_LEDGER_TOKEN";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The named config file could not be read.
    #[error("cannot read config file {path}: {source}")]
    Read {
        /// Path that failed to read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The named config file is not valid TOML for [`VerifierConfig`].
    #[error("cannot parse config file {path}: {source}")]
    Parse {
        /// Path that failed to parse
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load the verifier configuration.
pub fn load(explicit: Option<&Path>) -> Result<VerifierConfig, ConfigError> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        .or_else(discovered_config_path);

    let mut config = match path {
        Some(path) => read_config_file(&path)?,
        None => VerifierConfig::default(),
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

/// Default config location, only when the file actually exists.
fn discovered_config_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("tokengate").join("config.toml");
    path.is_file().then_some(path)
}

fn read_config_file(path: &Path) -> Result<VerifierConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_env_overrides(config: &mut VerifierConfig) {
    if let Ok(key) = std::env::var(INDEXER_KEY_ENV) {
        if !key.is_empty() {
            tracing::debug!("using chain-indexer credential from {}", INDEXER_KEY_ENV);
            config.indexer_api_key = Some(key);
        }
    }
    if let Ok(token) = std::env::var(LEDGER_TOKEN_ENV) {
        if !token.is_empty() {
            tracing::debug!("using purchase-ledger credential from {}", LEDGER_TOKEN_ENV);
            config.ledger_api_token = Some(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_file_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "indexer_api_key = \"proj_abc123\"\ndemo_mode = true\nresolution_budget_ms = 2500"
        )
        .unwrap();

        let config = read_config_file(&path).unwrap();
        assert_eq!(config.indexer_api_key.as_deref(), Some("proj_abc123"));
        assert!(config.demo_mode);
        assert_eq!(config.resolution_budget_ms, Some(2500));
        // Unset fields fall back to defaults
        assert!(config.ledger_api_token.is_none());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = read_config_file(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "demo_mode = \"definitely\"").unwrap();

        let err = read_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
