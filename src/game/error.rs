use thiserror::Error;

use super::state::Position;

/// Rejected world configuration or setup request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    NonPositiveDimensions { width: i32, height: i32 },

    #[error("a {width}x{height} grid has no interior inside its fence")]
    EmptyInterior { width: i32, height: i32 },

    #[error("start position ({}, {}) is not inside the fence", .0.x, .0.y)]
    StartOutsideInterior(Position),

    #[error("grid dimensions {width}x{height} exceed the {max} tile limit per side")]
    DimensionsTooLarge { width: i32, height: i32, max: i32 },

    #[error("cell size must be positive, got {0}")]
    NonPositiveCellSize(i32),
}

/// Rejected request to put the apple somewhere
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("apple position ({}, {}) is not inside the fence", .0.x, .0.y)]
    OutsideInterior(Position),

    #[error("apple position ({}, {}) is covered by the snake", .0.x, .0.y)]
    OnSnake(Position),
}
