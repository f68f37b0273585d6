//! Loading [`AiConfig`] from TOML files.
use std::path::Path;

use combat_core::AiConfig;

use crate::error::{Result, RuntimeError};

/// Loader for AI tunables.
///
/// Every section and field is optional; missing values take their defaults.
/// The result is validated before it is returned.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<AiConfig> {
        let content = std::fs::read_to_string(path).map_err(|source| RuntimeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate TOML text.
    pub fn parse(content: &str) -> Result<AiConfig> {
        let config: AiConfig = toml::from_str(content).map_err(RuntimeError::ConfigSyntax)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use combat_core::{CombatError, ConfigError, ErrorSeverity};

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), AiConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = ConfigLoader::parse(
            r#"
            [acquisition]
            cooldown = 0.25

            [cover]
            max_rings = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.acquisition.cooldown, 0.25);
        assert_eq!(config.acquisition.engagement_memory, 1.0);
        assert_eq!(config.cover.max_rings, 4);
        assert_eq!(config.cover.samples_per_ring, 10);
        assert_eq!(config.perception, Default::default());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ConfigLoader::parse("[cover]\nsamples_per_ring = 0\n").unwrap_err();

        assert!(matches!(
            err,
            RuntimeError::InvalidConfig(ConfigError::Zero {
                field: "cover.samples_per_ring"
            })
        ));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn malformed_toml_is_a_syntax_error() {
        let err = ConfigLoader::parse("[cover\n").unwrap_err();
        assert!(matches!(err, RuntimeError::ConfigSyntax(_)));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[combat]\nshot_range = 25.0").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.combat.shot_range, 25.0);
        assert_eq!(config.combat.stopping_distance(), 20.0);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = ConfigLoader::load(&path).unwrap_err();

        assert!(matches!(err, RuntimeError::ConfigRead { path: ref p, .. } if *p == path));
    }
}
