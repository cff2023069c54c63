use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum DoctorError {
    ReadError { path: PathBuf, message: String },
    ConfigError(String),
    UnknownGuide(String),
    UnknownCategory(String),
}

impl fmt::Display for DoctorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadError { path, message } => {
                write!(f, "Could not read {}: {}", path.display(), message)
            }
            Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Self::UnknownGuide(id) => write!(f, "No error guide with id '{}'", id),
            Self::UnknownCategory(name) => write!(
                f,
                "Unknown category '{}' (expected syntax, structure, data-type or encoding)",
                name
            ),
        }
    }
}

impl std::error::Error for DoctorError {}

impl From<toml::de::Error> for DoctorError {
    fn from(error: toml::de::Error) -> Self {
        DoctorError::ConfigError(format!("invalid config file: {}", error))
    }
}

impl From<toml::ser::Error> for DoctorError {
    fn from(error: toml::ser::Error) -> Self {
        DoctorError::ConfigError(format!("could not serialize config: {}", error))
    }
}
