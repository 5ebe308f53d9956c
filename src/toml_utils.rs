// -- imports
use serde::Deserialize;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::manifest::ManifestArgs;

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "image-manifest.toml";

// -- config

#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlConfig {
    manifest: ManifestArgs,
}

impl TomlConfig {
    /// Parse a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns `AppError` if:
    /// - The path is not a valid toml file
    /// - File read fails
    /// - TOML parsing fails
    /// - An extra ignore entry is empty or contains a path separator
    pub fn from_toml(toml_path: &Path) -> Result<Self> {
        if !toml_path.is_file() || toml_path.extension().is_none_or(|ext| ext != "toml") {
            return Err(AppError::Config(format!(
                "TOML config path is not a valid .toml file: {:?}",
                toml_path
            )));
        }

        let content = std::fs::read_to_string(toml_path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for dir in &self.manifest.extra_ignore_dirs {
            if dir.is_empty() || dir.contains(['/', '\\']) {
                return Err(AppError::Config(format!(
                    "extra_ignore_dirs entries must be plain directory names, got {:?}",
                    dir
                )));
            }
        }
        Ok(())
    }
}

impl From<TomlConfig> for ManifestArgs {
    fn from(config: TomlConfig) -> Self {
        config.manifest
    }
}

// -- public API

/// Parse TOML config file and return ManifestArgs.
///
/// # Errors
///
/// Returns `AppError` if the file cannot be read, parsed or validated.
pub fn parse_toml(toml_path: &Path) -> Result<ManifestArgs> {
    TomlConfig::from_toml(toml_path).map(Into::into)
}

/// Load `image-manifest.toml` from `dir`, or defaults when the file is absent.
pub fn load_config(dir: &Path) -> Result<ManifestArgs> {
    let toml_path = dir.join(DEFAULT_CONFIG_FILE);
    if !toml_path.exists() {
        return Ok(ManifestArgs::default());
    }
    parse_toml(&toml_path)
}

// -- tests

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_from_toml_with_custom_values() {
        let temp_dir = TempDir::new().unwrap();
        let toml_path = temp_dir.path().join("config.toml");
        let toml_content = r#"
[manifest]
root = "assets"
output_file = "out/manifest.json"
extra_ignore_dirs = ["fixtures", "target"]
progress = false
verbose = true
"#;
        fs::write(&toml_path, toml_content).unwrap();

        let config = TomlConfig::from_toml(&toml_path).unwrap();

        assert_eq!(config.manifest.root, PathBuf::from("assets"));
        assert_eq!(config.manifest.output_file, PathBuf::from("out/manifest.json"));
        assert_eq!(config.manifest.extra_ignore_dirs, vec!["fixtures", "target"]);
        assert!(!config.manifest.progress);
        assert!(config.manifest.verbose);
    }

    #[test]
    fn test_parse_toml_partial_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let toml_path = temp_dir.path().join("config.toml");
        fs::write(&toml_path, "[manifest]\nverbose = true\n").unwrap();

        let args = parse_toml(&toml_path).unwrap();

        assert!(args.verbose);
        assert_eq!(args.root, PathBuf::from("."));
        assert_eq!(args.output_file, PathBuf::from("image_paths.json"));
        assert!(args.extra_ignore_dirs.is_empty());
        assert!(args.progress);
    }

    #[test]
    fn test_from_toml_invalid_path() {
        let invalid_path = PathBuf::from("/nonexistent/config.toml");
        assert!(TomlConfig::from_toml(&invalid_path).is_err());
    }

    #[test]
    fn test_from_toml_invalid_extension() {
        let temp_dir = TempDir::new().unwrap();
        let invalid_path = temp_dir.path().join("config.txt");
        fs::write(&invalid_path, "[manifest]\nverbose = true\n").unwrap();
        assert!(TomlConfig::from_toml(&invalid_path).is_err());
    }

    #[test]
    fn test_parse_toml_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let invalid_toml_path = temp_dir.path().join("invalid.toml");
        fs::write(&invalid_toml_path, "invalid toml [[[").unwrap();
        assert!(matches!(
            parse_toml(&invalid_toml_path),
            Err(AppError::TomlConfig(_))
        ));
    }

    #[test]
    fn test_parse_toml_rejects_unknown_keys() {
        let temp_dir = TempDir::new().unwrap();
        let toml_path = temp_dir.path().join("config.toml");
        fs::write(&toml_path, "[manifest]\nrecursive = false\n").unwrap();
        assert!(parse_toml(&toml_path).is_err());
    }

    #[test]
    fn test_parse_toml_rejects_nested_ignore_entry() {
        let temp_dir = TempDir::new().unwrap();
        let toml_path = temp_dir.path().join("config.toml");
        fs::write(&toml_path, "[manifest]\nextra_ignore_dirs = [\"a/b\"]\n").unwrap();
        assert!(matches!(parse_toml(&toml_path), Err(AppError::Config(_))));
    }

    #[test]
    fn test_load_config_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let args = load_config(temp_dir.path()).unwrap();
        assert_eq!(args, ManifestArgs::default());
    }

    #[test]
    fn test_load_config_reads_default_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(DEFAULT_CONFIG_FILE),
            "[manifest]\noutput_file = \"images.json\"\n",
        )
        .unwrap();

        let args = load_config(temp_dir.path()).unwrap();
        assert_eq!(args.output_file, PathBuf::from("images.json"));
    }
}
