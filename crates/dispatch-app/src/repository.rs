//! Repository adapters for the persistence layer

use std::path::PathBuf;

use dispatch_infra::persistence::FileFleetRepository;
use dispatch_types::{ConfigError, Result};

use crate::config::Config;

/// Fleet file path: explicit override first, then config
pub fn resolve_fleet_path(config: &Config, override_path: Option<PathBuf>) -> Result<PathBuf> {
    override_path
        .or_else(|| config.fleet_path.clone())
        .ok_or_else(|| {
            ConfigError::InvalidValue(
                "no fleet file; pass --fleet or run: dispatch-checker config --set-fleet <path>".to_string(),
            )
            .into()
        })
}

/// Open fleet repository from TOML
pub fn open_fleet_repo(toml_path: PathBuf) -> Result<FileFleetRepository> {
    FileFleetRepository::new(toml_path)
}

/// Open the fleet repository named by the override or the config
pub fn open_configured_fleet_repo(config: &Config, override_path: Option<PathBuf>) -> Result<FileFleetRepository> {
    open_fleet_repo(resolve_fleet_path(config, override_path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let config = Config {
            fleet_path: Some(PathBuf::from("from-config.toml")),
            ..Config::default()
        };
        let path = resolve_fleet_path(&config, Some(PathBuf::from("cli.toml"))).unwrap();
        assert_eq!(path, PathBuf::from("cli.toml"));
        let path = resolve_fleet_path(&config, None).unwrap();
        assert_eq!(path, PathBuf::from("from-config.toml"));
    }

    #[test]
    fn test_no_fleet_configured() {
        assert!(resolve_fleet_path(&Config::default(), None).is_err());
    }
}
