use std::path::Path;

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use time::OffsetDateTime;
use url::Url;

use super::ConfigParsingError;
use super::source::ConfigSource;

#[derive(Debug, Default, Clone, Deserialize)]
pub struct NoCustomConfig;

/// Shape of the merged configuration: the `esign` section for the core and
/// an optional application-specific `app` section.
#[derive(Deserialize)]
struct ConfigDocument<Custom> {
    esign: EsignConfig,
    #[serde(default)]
    app: Custom,
}

#[derive(Debug, Clone)]
pub struct AppConfig<Custom> {
    pub core: CoreConfig,
    pub app: Custom,
}

#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub esign: EsignConfig,
}

/// Credentials and envelope templates of the e-signature platform integration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsignConfig {
    #[serde(default)]
    pub enabled: bool,
    pub email_subject: String,
    pub integrator_key: String,
    pub user_id: String,
    #[serde(deserialize_with = "deserialize_secret")]
    pub private_key: SecretString,
    pub rest_api_url: Url,
    pub sign_here_tag_anchor_string: String,
    #[serde(default)]
    pub sign_date_tag_anchor_string: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_synchronization: Option<OffsetDateTime>,
    #[serde(default)]
    pub oauth_base_path: Option<Url>,
    #[serde(default = "default_jwt_expires_in_hours")]
    pub jwt_expires_in_hours: u32,
    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,
    #[serde(default = "default_max_status_change_pages")]
    pub max_status_change_pages: u32,
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
}

impl EsignConfig {
    /// Date anchor, if one is configured; an empty string counts as absent.
    pub fn sign_date_anchor(&self) -> Option<&str> {
        self.sign_date_tag_anchor_string
            .as_deref()
            .filter(|anchor| !anchor.is_empty())
    }
}

fn default_jwt_expires_in_hours() -> u32 {
    1
}

fn default_scopes() -> Vec<String> {
    vec!["signature".to_owned(), "impersonation".to_owned()]
}

fn default_max_status_change_pages() -> u32 {
    100
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

impl<Custom> AppConfig<Custom>
where
    Custom: DeserializeOwned + Default,
{
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let sources = files
            .iter()
            .map(|file| ConfigSource::from_path(file.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Self::load(sources)
    }

    #[cfg(feature = "config_yaml")]
    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigParsingError> {
        Self::load(configs.into_iter().map(ConfigSource::yaml))
    }

    /// Merges the sources in order, then `ESIGN_`-prefixed environment
    /// variables when `config_env` is enabled (`ESIGN_esign__userId`).
    pub fn load(
        sources: impl IntoIterator<Item = ConfigSource>,
    ) -> Result<Self, ConfigParsingError> {
        let figment = sources
            .into_iter()
            .fold(Figment::new(), |figment, source| source.merge_into(figment));

        #[cfg(feature = "config_env")]
        let figment = figment.merge(Env::prefixed("ESIGN_").split("__").lowercase(false));

        let ConfigDocument { esign, app } = figment.extract().map_err(Box::new)?;

        Ok(Self {
            core: CoreConfig { esign },
            app,
        })
    }
}
