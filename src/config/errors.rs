use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Malformed {
        key: String,
        value: String,
        fallback: String,
    },
    OutOfRange {
        key: String,
        value: String,
        fallback: String,
    },
    UnknownAlgorithm {
        value: String,
    },
    DegenerateLogBase {
        max_iterations: u32,
    },
    InvalidAssignment {
        argument: String,
    },
    InvalidJson {
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed {
                key,
                value,
                fallback,
            } => {
                write!(
                    f,
                    "malformed value {} for '{}', using {}",
                    value, key, fallback
                )
            }
            Self::OutOfRange {
                key,
                value,
                fallback,
            } => {
                write!(
                    f,
                    "value {} for '{}' is out of range, using {}",
                    value, key, fallback
                )
            }
            Self::UnknownAlgorithm { value } => {
                write!(
                    f,
                    "unknown algorithm {}, colouring with mandel_color only",
                    value
                )
            }
            Self::DegenerateLogBase { max_iterations } => {
                write!(
                    f,
                    "log colouring needs max_iter > 1 (got {}), colouring with mandel_color only",
                    max_iterations
                )
            }
            Self::InvalidAssignment { argument } => {
                write!(f, "expected key=value, got '{}'", argument)
            }
            Self::InvalidJson { message } => {
                write!(f, "configuration is not a JSON object: {}", message)
            }
        }
    }
}

impl Error for ConfigError {}
