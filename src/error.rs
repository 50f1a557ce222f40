//! Defines the general error type for the crate and various conversions into it
use std::convert;
use std::fmt;

/// General error type for the crate
#[derive(Debug)]
pub enum Error {
    IndexOutOfRange { index: usize, count: usize },
    InvalidConfigurationValue(String),
    InvalidCoordinate(String),
    Io(std::io::Error),
    Other(String),
    PersistenceWriteFailure(String),
    Rusqlite(rusqlite::Error),
    Yaml(serde_yaml::Error),
}

impl convert::From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Error {
        Error::Rusqlite(err)
    }
}

impl convert::From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl convert::From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Error {
        Error::Yaml(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, count } => write!(
                f,
                "Route index {} is out of range, {} route(s) are stored",
                index, count
            ),
            Error::InvalidConfigurationValue(msg) => write!(f, "{}", msg),
            Error::InvalidCoordinate(line) => {
                write!(f, "Could not parse '{}' as a latitude,longitude pair", line)
            }
            Error::Io(e) => write!(f, "{}", e),
            Error::Other(msg) => write!(f, "{}", msg),
            Error::PersistenceWriteFailure(msg) => {
                write!(f, "Failed to write route data to the store: {}", msg)
            }
            Error::Rusqlite(e) => write!(f, "{}", e),
            Error::Yaml(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {}
