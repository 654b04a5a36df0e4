use async_trait::async_trait;
use reqwest::Client;

use crate::{Location, LookupError};

use super::{Geocoder, search};

/// geocode.maps.co forward search; Nominatim-compatible responses, keyed access.
pub const DEFAULT_ENDPOINT: &str = "https://geocode.maps.co/search";

#[derive(Debug, Clone)]
pub struct MapsCoProvider {
    endpoint: String,
    user_agent: String,
    api_key: String,
    http: Client,
}

impl MapsCoProvider {
    pub fn new(
        endpoint: impl Into<String>,
        user_agent: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            user_agent: user_agent.into(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    pub fn with_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }
}

#[async_trait]
impl Geocoder for MapsCoProvider {
    async fn locate(&self, address: &str) -> Result<Location, LookupError> {
        search::first_hit(
            &self.http,
            &self.endpoint,
            &self.user_agent,
            &[("q", address), ("api_key", self.api_key.as_str())],
        )
        .await
    }
}
