use thiserror::Error;

use crate::footprint::GridPos;

/// Top-level error type for house generation.
#[derive(Debug, Error)]
pub enum HouseError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Footprint(#[from] FootprintError),

    #[error(transparent)]
    Walk(#[from] WalkError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while validating or updating a [`HouseConfig`](crate::HouseConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    #[error("{key} must be positive and finite, got {value}")]
    NonPositive { key: &'static str, value: f64 },

    #[error("{key} must be a non-negative integer, got {value}")]
    NotAnInteger { key: &'static str, value: f64 },

    #[error("{key} = {value} is too small (must exceed {min})")]
    TooSmall {
        key: &'static str,
        value: f64,
        min: f64,
    },

    #[error("invalid seed fragment: {0}")]
    InvalidSeed(String),
}

/// Errors related to the footprint store.
#[derive(Debug, Error)]
pub enum FootprintError {
    #[error("grid position {0} is already occupied")]
    Occupied(GridPos),

    #[error("cell not found")]
    CellNotFound,
}

/// Errors raised by the random walk.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error(
        "walk exhausted after {attempts} rejected draws with {placed} of {requested} cells placed"
    )]
    Exhausted {
        placed: usize,
        requested: usize,
        attempts: usize,
    },
}

/// Errors related to geometry operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`HouseError`].
pub type Result<T> = std::result::Result<T, HouseError>;
