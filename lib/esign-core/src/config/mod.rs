use std::path::PathBuf;

use thiserror::Error;

pub mod core_config;
pub mod source;

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Unsupported config file `{0}`")]
    UnsupportedFile(PathBuf),
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}
