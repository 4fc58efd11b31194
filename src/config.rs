/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::MAX_FLOOR;
use crate::shared::MIN_FLOOR;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub building: BuildingConfig,
    pub simulation: SimulationConfig,
}

/// Floor range of the simulated building, used to validate pickup
/// requests at the boundary. Every field falls back to the modelled
/// default range when left out of the configuration file.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingConfig {
    #[serde(default = "default_min_floor")]
    pub min_floor: u8,
    #[serde(default = "default_max_floor")]
    pub max_floor: u8,
}

#[derive(Deserialize, Clone)]
pub struct SimulationConfig {
    pub n_elevators: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Default for BuildingConfig {
    fn default() -> BuildingConfig {
        BuildingConfig {
            min_floor: MIN_FLOOR,
            max_floor: MAX_FLOOR,
        }
    }
}

fn default_min_floor() -> u8 {
    MIN_FLOOR
}

fn default_max_floor() -> u8 {
    MAX_FLOOR
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    Ok(toml::from_str(&config_str)?)
}

/***************************************/
/*             Unit tests              */
/***************************************/
