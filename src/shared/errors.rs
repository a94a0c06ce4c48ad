/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/***************************************/
/*            Error types              */
/***************************************/
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("n_floors must be at least 2 to pick distinct floors, got {0}")]
    TooFewFloors(u8),

    #[error("n_requests must be positive")]
    NoRequests,

    #[error("ground_weight must be within [0, 1], got {0}")]
    GroundWeight(f64),
}

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write scenario to {}: {source}", .path.display())]
    Sink { path: PathBuf, source: io::Error },
}

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("expected 4 space separated fields, got {0}")]
    FieldCount(usize),

    #[error("malformed timestamp '{0}'")]
    Timestamp(String),

    #[error("malformed floor '{0}'")]
    Floor(String),

    #[error("unknown direction '{0}'")]
    Direction(String),

    #[error("line {line}: {source}")]
    Line { line: usize, source: Box<ParseError> },

    #[error("line {line}: {reason}")]
    Invalid { line: usize, reason: String },

    #[error("failed to read scenario file: {0}")]
    Io(String),
}
