use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_CORNER_RADIUS, DEFAULT_TICK_RATE_MS, HOVER_CORNER_RADIUS, INNER_CORNER_RADIUS,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Corner radius magnitudes handed to every `ChatListStateManager`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListGeometryConfig {
    /// Outer corners of the first/last card in a run
    pub default_radius: f32,
    /// Corners between cards of an unbroken run
    pub inner_radius: f32,
    /// All four corners of a hovered card
    pub hover_radius: f32,
}

impl ListGeometryConfig {
    /// Clamp negative magnitudes to zero. Radii are lengths.
    pub fn sanitized(self) -> Self {
        Self {
            default_radius: self.default_radius.max(0.0),
            inner_radius: self.inner_radius.max(0.0),
            hover_radius: self.hover_radius.max(0.0),
        }
    }
}

impl Default for ListGeometryConfig {
    fn default() -> Self {
        Self {
            default_radius: DEFAULT_CORNER_RADIUS,
            inner_radius: INNER_CORNER_RADIUS,
            hover_radius: HOVER_CORNER_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub geometry: ListGeometryConfig,
    pub tick_rate_ms: u64,
}

impl CoreConfig {
    /// Load config from a JSON file. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let mut config: CoreConfig =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.geometry = config.geometry.sanitized();
        if config.tick_rate_ms == 0 {
            config.tick_rate_ms = DEFAULT_TICK_RATE_MS;
        }
        Ok(config)
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            geometry: ListGeometryConfig::default(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = CoreConfig::load(dir.path().join("nope.json")).unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "geometry": { "hover_radius": 20.0 } }"#).unwrap();

        let config = CoreConfig::load(&path).unwrap();
        assert_eq!(config.geometry.hover_radius, 20.0);
        assert_eq!(config.geometry.default_radius, DEFAULT_CORNER_RADIUS);
        assert_eq!(config.geometry.inner_radius, INNER_CORNER_RADIUS);
        assert_eq!(config.tick_rate_ms, DEFAULT_TICK_RATE_MS);
    }

    #[test]
    fn test_negative_radii_are_clamped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "geometry": { "inner_radius": -3.0 } }"#).unwrap();

        let config = CoreConfig::load(&path).unwrap();
        assert_eq!(config.geometry.inner_radius, 0.0);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = CoreConfig::load(&path).unwrap_err();
        assert!(
            matches!(err, ConfigError::Parse { .. }),
            "Expected parse error, got {err:?}"
        );
    }
}
