//! Generation options and configuration file loading
//!
//! Options live in an rc-style file:
//!
//! ```text
//! # comments start with '#'
//! OPTIONS=base_dimension:5,dimension_step:2
//! OPTIONS=wall_length:2.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::maze::{PlacementCount, PopulationCounts, WallGeometry};
use crate::world::errors::LevelError;
use crate::{BASE_DIMENSION, DIMENSION_CEILING, DIMENSION_STEP, KEY_DIVISOR, MAX_DIMENSION};

/// Tunables for level generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Maze dimension on level 1
    pub base_dimension: usize,
    /// Dimension added per level
    pub dimension_step: usize,
    /// Largest dimension accepted
    pub max_dimension: usize,

    // Entity scaling: count in [cells / min_divisor, cells / max_divisor)
    pub pickup_min_divisor: u32,
    pub pickup_max_divisor: u32,
    pub hostile_min_divisor: u32,
    pub hostile_max_divisor: u32,

    /// A key drops once more than `total_hostiles / key_divisor` kills pile up
    pub key_divisor: u32,

    pub geometry: WallGeometry,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            base_dimension: BASE_DIMENSION,
            dimension_step: DIMENSION_STEP,
            max_dimension: MAX_DIMENSION,

            pickup_min_divisor: 10,
            pickup_max_divisor: 5,
            hostile_min_divisor: 8,
            hostile_max_divisor: 3,

            key_divisor: KEY_DIVISOR,

            geometry: WallGeometry::default(),
        }
    }
}

impl GenerationOptions {
    /// Maze dimension for a 1-based level number
    pub fn dimension_for_level(&self, level: u32) -> Result<usize, LevelError> {
        if level == 0 {
            return Err(LevelError::InvalidLevel(level));
        }
        let dimension = self
            .dimension_step
            .saturating_mul(level as usize - 1)
            .saturating_add(self.base_dimension);
        let max = self.max_dimension.min(DIMENSION_CEILING);
        if dimension == 0 || dimension > max {
            return Err(LevelError::InvalidDimension { dimension, max });
        }
        Ok(dimension)
    }

    /// Entity count ranges for a grid of `total_cells`
    pub fn population_counts(&self, total_cells: usize) -> PopulationCounts {
        PopulationCounts {
            pickups: PlacementCount::scaled(
                total_cells,
                self.pickup_min_divisor,
                self.pickup_max_divisor,
            ),
            hostiles: PlacementCount::scaled(
                total_cells,
                self.hostile_min_divisor,
                self.hostile_max_divisor,
            ),
        }
    }

    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| OptionsError::IoError(e.to_string()))?;

        Self::parse_config(&contents)
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',') {
                    options.parse_option(opt.trim())?;
                }
            } else {
                return Err(OptionsError::ParseError(line.to_string()));
            }
        }

        Ok(options)
    }

    /// Parse a single `name:value` option
    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if opt.is_empty() {
            return Ok(());
        }
        if let Some((key, value)) = opt.split_once(':') {
            return self.set_option(key.trim(), value.trim());
        }
        if let Some((key, value)) = opt.split_once('=') {
            return self.set_option(key.trim(), value.trim());
        }
        Err(OptionsError::MissingValue(opt.to_string()))
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        match name {
            "base_dimension" => self.base_dimension = parse_value(name, value)?,
            "dimension_step" => self.dimension_step = parse_value(name, value)?,
            "max_dimension" => match parse_value::<usize>(name, value)? {
                n if n > DIMENSION_CEILING => {
                    return Err(OptionsError::InvalidValue(name.to_string(), value.to_string()));
                }
                n => self.max_dimension = n,
            },
            "pickup_min_divisor" => self.pickup_min_divisor = parse_divisor(name, value)?,
            "pickup_max_divisor" => self.pickup_max_divisor = parse_divisor(name, value)?,
            "hostile_min_divisor" => self.hostile_min_divisor = parse_divisor(name, value)?,
            "hostile_max_divisor" => self.hostile_max_divisor = parse_divisor(name, value)?,
            "key_divisor" => self.key_divisor = parse_divisor(name, value)?,
            "wall_length" => self.geometry.length = parse_value(name, value)?,
            "wall_width" => self.geometry.width = parse_value(name, value)?,
            "wall_height" => self.geometry.height = parse_value(name, value)?,
            "y_height" => self.geometry.y_height = parse_value(name, value)?,
            "spawn_height" => self.geometry.spawn_height = parse_value(name, value)?,
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Save options to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), OptionsError> {
        let contents = self.to_config_string();
        std::fs::write(path, contents).map_err(|e| OptionsError::IoError(e.to_string()))
    }

    /// Convert options to config file format
    pub fn to_config_string(&self) -> String {
        let lines = [
            "# VamPyro maze generation options".to_string(),
            String::new(),
            "# Maze size".to_string(),
            format!(
                "OPTIONS=base_dimension:{},dimension_step:{},max_dimension:{}",
                self.base_dimension, self.dimension_step, self.max_dimension
            ),
            String::new(),
            "# Entity scaling".to_string(),
            format!(
                "OPTIONS=pickup_min_divisor:{},pickup_max_divisor:{}",
                self.pickup_min_divisor, self.pickup_max_divisor
            ),
            format!(
                "OPTIONS=hostile_min_divisor:{},hostile_max_divisor:{}",
                self.hostile_min_divisor, self.hostile_max_divisor
            ),
            format!("OPTIONS=key_divisor:{}", self.key_divisor),
            String::new(),
            "# Wall geometry".to_string(),
            format!(
                "OPTIONS=wall_length:{},wall_width:{},wall_height:{}",
                self.geometry.length, self.geometry.width, self.geometry.height
            ),
            format!(
                "OPTIONS=y_height:{},spawn_height:{}",
                self.geometry.y_height, self.geometry.spawn_height
            ),
        ];
        lines.join("\n")
    }
}

fn parse_value<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, OptionsError> {
    value
        .parse()
        .map_err(|_| OptionsError::InvalidValue(name.to_string(), value.to_string()))
}

fn parse_divisor(name: &str, value: &str) -> Result<u32, OptionsError> {
    match parse_value(name, value)? {
        0 => Err(OptionsError::InvalidValue(name.to_string(), value.to_string())),
        n => Ok(n),
    }
}

/// Options parsing error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),
    #[error("Missing value for option '{0}'")]
    MissingValue(String),
}
