use std::str::FromStr;

use tracing::info;

use crate::error::{ConfigError, Result};
use crate::mesh::House;
use crate::operations::creation::ROOF_INSET;
use crate::operations::{BuildHouse, RandomWalk};

/// Default bound on consecutive rejected moves before a walk gives up.
pub const DEFAULT_RETRY_LIMIT: usize = 100_000;

/// Physical size of a cell and its walls and roof.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Cell size along x.
    pub unit_x: f64,
    /// Cell size along y.
    pub unit_y: f64,
    /// Height of the wall boxes; the roof starts here.
    pub wall_height: f64,
    /// Rise from the eaves to the apex.
    pub roof_height: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            unit_x: 15.0,
            unit_y: 10.0,
            wall_height: 6.0,
            roof_height: 4.0,
        }
    }
}

impl Dimensions {
    /// Checks every dimension is positive and the cell leaves room for the roof inset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositive`] or [`ConfigError::TooSmall`].
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        check_unit("unit_x", self.unit_x)?;
        check_unit("unit_y", self.unit_y)?;
        check_positive("wall_height", self.wall_height)?;
        check_positive("roof_height", self.roof_height)?;
        Ok(())
    }
}

/// A configuration key accepted by [`HouseConfig::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Seed,
    Steps,
    UnitX,
    UnitY,
    WallHeight,
    RoofHeight,
    RetryLimit,
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "seed" => Ok(Self::Seed),
            "steps" => Ok(Self::Steps),
            "unit_x" => Ok(Self::UnitX),
            "unit_y" => Ok(Self::UnitY),
            "wall_height" => Ok(Self::WallHeight),
            "roof_height" => Ok(Self::RoofHeight),
            "retry_limit" => Ok(Self::RetryLimit),
            other => Err(ConfigError::UnknownKey(other.to_owned())),
        }
    }
}

/// Everything needed to generate a house.
///
/// Each [`build`](Self::build) regenerates from scratch, so the same
/// configuration always yields the same house.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseConfig {
    /// Seed of the random walk.
    pub seed: u64,
    /// Cells placed beyond the origin.
    pub steps: usize,
    pub dimensions: Dimensions,
    /// Consecutive rejected moves tolerated before the walk fails. `None`
    /// retries forever.
    pub retry_limit: Option<usize>,
}

impl Default for HouseConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            steps: 3,
            dimensions: Dimensions::default(),
            retry_limit: Some(DEFAULT_RETRY_LIMIT),
        }
    }
}

impl HouseConfig {
    #[must_use]
    pub fn new(seed: u64, steps: usize) -> Self {
        Self {
            seed,
            steps,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    #[must_use]
    pub fn with_retry_limit(mut self, limit: Option<usize>) -> Self {
        self.retry_limit = limit;
        self
    }

    /// Updates one setting by name, validating the value immediately.
    ///
    /// `retry_limit` accepts `+inf` to retry forever.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownKey`] for an unrecognised key and a
    /// value error if `value` is out of range for the key. The config is
    /// unchanged on error.
    pub fn set(&mut self, key: &str, value: f64) -> std::result::Result<(), ConfigError> {
        match key.parse::<ConfigKey>()? {
            ConfigKey::Seed => self.seed = to_integer("seed", value)?,
            ConfigKey::Steps => self.steps = to_count("steps", value)?,
            ConfigKey::UnitX => self.dimensions.unit_x = check_unit("unit_x", value)?,
            ConfigKey::UnitY => self.dimensions.unit_y = check_unit("unit_y", value)?,
            ConfigKey::WallHeight => {
                self.dimensions.wall_height = check_positive("wall_height", value)?;
            }
            ConfigKey::RoofHeight => {
                self.dimensions.roof_height = check_positive("roof_height", value)?;
            }
            ConfigKey::RetryLimit => {
                self.retry_limit = if value.is_infinite() && value > 0.0 {
                    None
                } else {
                    Some(to_count("retry_limit", value)?)
                };
            }
        }
        Ok(())
    }

    /// Generates the house.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or the walk exhausts
    /// its retry limit. No partial house is returned.
    pub fn build(&self) -> Result<House> {
        self.dimensions.validate()?;
        let walk = RandomWalk::new(self.steps, self.seed)
            .with_retry_limit(self.retry_limit)
            .execute()?;
        let house = BuildHouse::new(&walk.footprint, self.dimensions).execute()?;
        info!(
            seed = self.seed,
            steps = self.steps,
            cells = walk.footprint.cell_count(),
            triangles = house.triangle_count(),
            "built house"
        );
        Ok(house)
    }
}

fn check_positive(key: &'static str, value: f64) -> std::result::Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { key, value })
    }
}

fn check_unit(key: &'static str, value: f64) -> std::result::Result<f64, ConfigError> {
    let value = check_positive(key, value)?;
    let min = 2.0 * ROOF_INSET;
    if value > min {
        Ok(value)
    } else {
        Err(ConfigError::TooSmall { key, value, min })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn to_integer(key: &'static str, value: f64) -> std::result::Result<u64, ConfigError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(ConfigError::NotAnInteger { key, value })
    }
}

fn to_count(key: &'static str, value: f64) -> std::result::Result<usize, ConfigError> {
    usize::try_from(to_integer(key, value)?).map_err(|_| ConfigError::NotAnInteger { key, value })
}
