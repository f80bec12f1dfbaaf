//! File and environment configuration for the command line front end.
//!
//! Library users build a [`ClientConfig`] directly; this module only turns a
//! layered [`config::Config`] into one per network.

mod loader;

use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use url::Url;

use crate::http::ClientConfig;
use crate::legacy::LEGACY_MAINNET_URL;
use crate::scprime::SCPRIME_MAINNET_URL;
use crate::sia::SIA_MAINNET_URL;

pub use loader::{DEFAULT_CONFIG_FILE, ENV_PREFIX, get_default_config, load_configuration, write_config_to};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointSettings {
    pub base_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default = "default_sia")]
    pub sia: EndpointSettings,
    #[serde(default = "default_scprime")]
    pub scprime: EndpointSettings,
    #[serde(default = "default_legacy")]
    pub legacy: EndpointSettings,
    #[serde(default)]
    pub http: HttpSettings,
}

fn default_sia() -> EndpointSettings {
    EndpointSettings {
        base_url: SIA_MAINNET_URL.to_string(),
    }
}

fn default_scprime() -> EndpointSettings {
    EndpointSettings {
        base_url: SCPRIME_MAINNET_URL.to_string(),
    }
}

fn default_legacy() -> EndpointSettings {
    EndpointSettings {
        base_url: LEGACY_MAINNET_URL.to_string(),
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sia: default_sia(),
            scprime: default_scprime(),
            legacy: default_legacy(),
            http: HttpSettings::default(),
        }
    }
}

impl Settings {
    pub fn from_config(cfg: config::Config) -> anyhow::Result<Self> {
        cfg.try_deserialize().context("Invalid configuration")
    }

    pub fn sia_client_config(&self) -> anyhow::Result<ClientConfig> {
        self.client_config(&self.sia)
    }

    pub fn scprime_client_config(&self) -> anyhow::Result<ClientConfig> {
        self.client_config(&self.scprime)
    }

    pub fn legacy_client_config(&self) -> anyhow::Result<ClientConfig> {
        self.client_config(&self.legacy)
    }

    fn client_config(&self, endpoint: &EndpointSettings) -> anyhow::Result<ClientConfig> {
        let base_url = Url::parse(&endpoint.base_url)
            .with_context(|| format!("Invalid base url: {}", endpoint.base_url))?;

        let mut config = ClientConfig::new(base_url);
        if let Some(secs) = self.http.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(user_agent) = &self.http.user_agent {
            config = config.with_user_agent(user_agent.clone());
        }
        if let Some(api_key) = self.http.api_key.as_deref().filter(|k| !k.is_empty()) {
            config = config.with_api_key(api_key);
        }
        Ok(config)
    }
}
