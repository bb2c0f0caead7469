use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::LinearUnit;

pub const DEFAULT_ZONES_FILE: &str = "stateplane_zones.geojson";
pub const DEFAULT_SRIDS_FILE: &str = "srids.txt";

fn default_zones() -> PathBuf {
    PathBuf::from(DEFAULT_ZONES_FILE)
}
fn default_srids() -> PathBuf {
    PathBuf::from(DEFAULT_SRIDS_FILE)
}
fn default_unit() -> LinearUnit {
    LinearUnit::UsSurveyFoot
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    /// GeoJSON file of zone boundaries
    #[serde(default = "default_zones")]
    pub zones: PathBuf,
    /// Semicolon-delimited `srid;wkt` catalog
    #[serde(default = "default_srids")]
    pub srids: PathBuf,
    #[serde(default = "default_unit")]
    pub unit: LinearUnit,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            zones: default_zones(),
            srids: default_srids(),
            unit: default_unit(),
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str::<Self>(&contents) {
                    Ok(config) => return Some(config.relative_to(&path)),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "failed to parse config file");
                    }
                }
            }
        }
        None
    }

    /// Resolve relative catalog paths against the directory of the config file
    pub fn relative_to(mut self, config_path: &Path) -> Self {
        if let Some(dir) = config_path.parent() {
            if self.zones.is_relative() {
                self.zones = dir.join(&self.zones);
            }
            if self.srids.is_relative() {
                self.srids = dir.join(&self.srids);
            }
        }
        self
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("databridge-geo.toml"));
    paths.push(PathBuf::from(".databridge-geo.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("databridge-geo").join("config.toml"));
        paths.push(config_dir.join("databridge-geo.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".databridge-geo.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.zones, PathBuf::from(DEFAULT_ZONES_FILE));
        assert_eq!(config.unit, LinearUnit::UsSurveyFoot);
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_full() {
        let config: FileConfig = toml::from_str(
            r#"
            zones = "/data/zones.geojson"
            srids = "catalog/srids.txt"
            unit = "Metre"
            verbose = true
            "#,
        )
        .unwrap();
        assert_eq!(config.unit, LinearUnit::Metre);
        assert!(config.verbose);

        let config = config.relative_to(Path::new("/etc/databridge/config.toml"));
        assert_eq!(config.zones, PathBuf::from("/data/zones.geojson"));
        assert_eq!(config.srids, PathBuf::from("/etc/databridge/catalog/srids.txt"));
    }

    #[test]
    fn test_bad_unit_is_rejected() {
        assert!(toml::from_str::<FileConfig>("unit = \"yards\"").is_err());
    }
}
