use std::path::Path;

use figment::Figment;
#[cfg(feature = "config_json")]
use figment::providers::Json;
#[cfg(feature = "config_yaml")]
use figment::providers::Yaml;
#[cfg(any(feature = "config_yaml", feature = "config_json"))]
use figment::providers::{Data, Format};

use super::ConfigParsingError;

/// One layer of configuration. Layers are merged in order, so later ones win.
pub enum ConfigSource {
    #[cfg(feature = "config_yaml")]
    Yaml(Data<Yaml>),
    #[cfg(feature = "config_json")]
    Json(Data<Json>),
}

impl ConfigSource {
    /// Picks the format from the file extension (`.yml`, `.yaml` or `.json`).
    pub fn from_path(path: &Path) -> Result<Self, ConfigParsingError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            #[cfg(feature = "config_yaml")]
            Some("yml" | "yaml") => Ok(Self::Yaml(Yaml::file(path))),
            #[cfg(feature = "config_json")]
            Some("json") => Ok(Self::Json(Json::file(path))),
            _ => Err(ConfigParsingError::UnsupportedFile(path.to_path_buf())),
        }
    }

    #[cfg(feature = "config_yaml")]
    pub fn yaml(content: impl AsRef<str>) -> Self {
        Self::Yaml(Yaml::string(content.as_ref()))
    }

    #[cfg(feature = "config_json")]
    pub fn json(content: impl AsRef<str>) -> Self {
        Self::Json(Json::string(content.as_ref()))
    }

    pub(super) fn merge_into(self, figment: Figment) -> Figment {
        match self {
            #[cfg(feature = "config_yaml")]
            Self::Yaml(data) => figment.merge(data),
            #[cfg(feature = "config_json")]
            Self::Json(data) => figment.merge(data),
        }
    }
}
