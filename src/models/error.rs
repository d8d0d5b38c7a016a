use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    ParserError(String),
    MissingPrerequisite(PathBuf),
    IoError(std::io::Error),
    CsvError(csv::Error),
    ManifestError(String),
    ConfigError(String),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::MissingPrerequisite(path) => write!(
                f,
                "Missing Prerequisite: {:?} does not exist (missing a previous step)",
                path
            ),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::CsvError(err) => write!(f, "CSV Error: {}", err),
            Error::ManifestError(msg) => write!(f, "Manifest Error: {}", msg),
            Error::ConfigError(msg) => write!(f, "Config Error: {}", msg),
            Error::Other(msg) => write!(f, "Other Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            Error::CsvError(err) => Some(err),
            _ => None,
        }
    }
}

impl Error {
    /// Whether this error means an earlier pipeline stage has not been run yet.
    pub fn is_missing_prerequisite(&self) -> bool {
        matches!(self, Error::MissingPrerequisite(_))
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Error {
        Error::ParserError(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Error {
        Error::ParserError(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::CsvError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::ManifestError(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Error {
        Error::ConfigError(err.to_string())
    }
}
