use crate::{
    Config, Location, LookupError,
    provider::{mapsco::MapsCoProvider, nominatim::NominatimProvider},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod mapsco;
pub mod nominatim;
mod search;

#[cfg(test)]
pub(crate) mod stub;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Nominatim,
    MapsCo,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Nominatim => "nominatim",
            ProviderId::MapsCo => "mapsco",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::Nominatim, ProviderId::MapsCo]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ProviderId::all()
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| {
                let supported: Vec<&str> = ProviderId::all().iter().map(|id| id.as_str()).collect();
                anyhow::anyhow!(
                    "Unknown provider '{value}'. Supported providers: {}.",
                    supported.join(", ")
                )
            })
    }
}

/// A forward-geocoding service.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    /// Resolve a free-form address to the service's best match.
    ///
    /// Issues exactly one request.
    async fn locate(&self, address: &str) -> Result<Location, LookupError>;
}

/// Construct a provider from config and explicit ProviderId.
pub fn provider_from_config(
    id: ProviderId,
    config: &Config,
) -> anyhow::Result<Box<dyn Geocoder>> {
    let user_agent = config.user_agent();

    let boxed: Box<dyn Geocoder> = match id {
        ProviderId::Nominatim => {
            let endpoint = config
                .provider_endpoint(id)
                .unwrap_or(nominatim::DEFAULT_ENDPOINT);
            Box::new(NominatimProvider::new(endpoint, user_agent))
        }
        ProviderId::MapsCo => {
            let api_key = config.provider_api_key(id).ok_or_else(|| {
                anyhow::anyhow!(
                    "No API key configured for provider '{id}'.\n\
                     Hint: set `api_key` under [providers.{id}] in the config file."
                )
            })?;
            let endpoint = config.provider_endpoint(id).unwrap_or(mapsco::DEFAULT_ENDPOINT);
            Box::new(MapsCoProvider::new(endpoint, user_agent, api_key))
        }
    };

    log::debug!("Using geocoding provider '{id}'");
    Ok(boxed)
}

/// Construct the default provider from config, using `default_provider` field.
pub fn default_provider_from_config(config: &Config) -> anyhow::Result<Box<dyn Geocoder>> {
    let id = config.default_provider_id()?;
    provider_from_config(id, config)
}
