use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::ConfigError;
use super::state::Position;

/// Largest width or height accepted, fence included. Keeps a full frame
/// of tiles small enough to allocate and draw every tick.
pub const MAX_SIDE: i32 = 1024;

/// Configuration for a world and the collaborators drawing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Width of the grid in tiles, fence included
    pub width: i32,
    /// Height of the grid in tiles, fence included
    pub height: i32,
    /// Where the head starts
    pub start: Position,
    /// Pixel size of one tile (rendering only)
    pub cell_size: i32,
    /// Intended tick period for a real-time driver
    pub tick_millis: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
            start: Position::new(15, 15),
            cell_size: 20,
            tick_millis: 40,
        }
    }
}

impl WorldConfig {
    /// Create a new configuration with custom grid size.
    /// The start is moved to the middle of the grid.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            start: Position::new((width - 1) / 2, (height - 1) / 2),
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Read a JSON config file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: WorldConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        config
            .validate()
            .with_context(|| format!("Invalid config in {:?}", path))?;
        Ok(config)
    }

    /// Fail fast on a configuration no world can be built from
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::NonPositiveDimensions {
                width: self.width,
                height: self.height,
            });
        }

        if self.width > MAX_SIDE || self.height > MAX_SIDE {
            return Err(ConfigError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_SIDE,
            });
        }

        if self.width < 3 || self.height < 3 {
            return Err(ConfigError::EmptyInterior {
                width: self.width,
                height: self.height,
            });
        }

        let start = self.start;
        if start.x < 1 || start.x > self.width - 2 || start.y < 1 || start.y > self.height - 2 {
            return Err(ConfigError::StartOutsideInterior(start));
        }

        if self.cell_size <= 0 {
            return Err(ConfigError::NonPositiveCellSize(self.cell_size));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = WorldConfig::default();
        assert_eq!(config.width, 32);
        assert_eq!(config.height, 32);
        assert_eq!(config.start, Position::new(15, 15));
        assert_eq!(config.cell_size, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = WorldConfig::new(15, 11);
        assert_eq!(config.width, 15);
        assert_eq!(config.height, 11);
        assert_eq!(config.start, Position::new(7, 5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let config = WorldConfig {
            width: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveDimensions {
                width: 0,
                height: 32
            })
        );

        let config = WorldConfig {
            height: -4,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_grid_without_interior() {
        let config = WorldConfig {
            width: 2,
            height: 2,
            start: Position::new(1, 1),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyInterior { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let config = WorldConfig::new(i32::MAX, i32::MAX);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DimensionsTooLarge {
                width: i32::MAX,
                height: i32::MAX,
                max: MAX_SIDE,
            })
        );

        let config = WorldConfig::new(MAX_SIDE + 1, 10);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DimensionsTooLarge { .. })
        ));

        assert!(WorldConfig::new(MAX_SIDE, MAX_SIDE).validate().is_ok());
    }

    #[test]
    fn test_rejects_start_on_fence() {
        let config = WorldConfig {
            start: Position::new(0, 15),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::StartOutsideInterior(Position::new(0, 15)))
        );
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "width": 20, "start": {{ "x": 3, "y": 4 }} }}"#).unwrap();

        let config = WorldConfig::load(file.path()).unwrap();
        assert_eq!(config.width, 20);
        assert_eq!(config.height, 32);
        assert_eq!(config.start, Position::new(3, 4));
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "width": -1 }}"#).unwrap();
        assert!(WorldConfig::load(file.path()).is_err());

        let mut garbage = NamedTempFile::new().unwrap();
        write!(garbage, "not json").unwrap();
        assert!(WorldConfig::load(garbage.path()).is_err());
    }
}
