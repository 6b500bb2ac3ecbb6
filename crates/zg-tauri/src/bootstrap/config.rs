//! Configuration loader.
//!
//! Pure data loading: read the TOML file, parse it, map it to `AppConfig`.
//! Fallback behavior for a missing file belongs to the caller.

use anyhow::Context;
use std::path::{Path, PathBuf};
use zg_core::config::AppConfig;

/// Default location of the configuration file.
///
/// `~/.config/zzanggu/zzanggu.toml` on Linux, the platform equivalent
/// elsewhere.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("zzanggu")
        .join("zzanggu.toml")
}

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the content is not valid
/// TOML for [`AppConfig`].
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content).context("Failed to parse config as TOML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [api]
            base_url = "https://api.zzanggu.example"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://api.zzanggu.example");
    }

    #[test]
    fn test_empty_toml_falls_back_to_field_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"").unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_missing_file_is_an_error_for_the_caller_to_handle() {
        assert!(load_config(Path::new("/nonexistent/zzanggu.toml")).is_err());
    }
}
