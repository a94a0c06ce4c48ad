/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{ClockTime, ConfigError};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub scenario: ScenarioConfig,
    pub output: OutputConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub start_time: ClockTime,
    pub step_time: ClockTime,
    pub n_floors: u8,
    pub n_requests: u32,
    pub ground_weight: f64,
    pub seed: Option<u64>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub echo: bool,
}

impl Default for ScenarioConfig {
    fn default() -> ScenarioConfig {
        ScenarioConfig {
            start_time: ClockTime::new(12, 56, 23, 453),
            step_time: ClockTime::new(0, 0, 7, 0),
            n_floors: 22,
            n_requests: 10,
            ground_weight: 0.5,
            seed: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> OutputConfig {
        OutputConfig {
            path: PathBuf::from("TestFile.txt"),
            echo: true,
        }
    }
}

impl ScenarioConfig {
    /**
     * Checks the invariants the generator relies on.
     *
     * Fewer than two floors would leave the destination sampler without a floor
     * distinct from the origin, so it is refused here instead of looping forever.
     */
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_floors < 2 {
            return Err(ConfigError::TooFewFloors(self.n_floors));
        }
        if self.n_requests == 0 {
            return Err(ConfigError::NoRequests);
        }
        if !(0.0..=1.0).contains(&self.ground_weight) {
            return Err(ConfigError::GroundWeight(self.ground_weight));
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.scenario.validate()?;
    Ok(config)
}

/// Loads `path`, falling back to the built-in defaults when the file does not exist.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    match fs::read_to_string(path) {
        Ok(config_str) => parse_config(&config_str),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("No configuration at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
