use crate::serialization::json::SerializationSettings;
use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    serialization: SerializationSettings,
    payloads: Payloads,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("payloads.directory", "payloads")?
            .set_default("payloads.extension", "json")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("GRAPH_MODELS").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn serialization(&self) -> SerializationSettings {
        self.serialization
    }

    pub fn payloads(&self) -> &Payloads {
        &self.payloads
    }
}

#[derive(Debug, Deserialize)]
pub struct Payloads {
    directory: String,
    extension: String,
}

impl Payloads {
    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                serialization: SerializationSettings::default(),
                payloads: Payloads {
                    directory: "payloads".to_string(),
                    extension: "json".to_string(),
                },
            },
        }
    }

    pub fn payload_directory(mut self, directory: String) -> Self {
        self.config.payloads.directory = directory;
        self
    }

    pub fn omit_null_values(mut self) -> Self {
        self.config.serialization = SerializationSettings::new(true, self.config.serialization.pretty());
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
