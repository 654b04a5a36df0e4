use async_trait::async_trait;
use reqwest::Client;

use crate::{Location, LookupError};

use super::{Geocoder, search};

/// Public OpenStreetMap Nominatim search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

#[derive(Debug, Clone)]
pub struct NominatimProvider {
    endpoint: String,
    user_agent: String,
    http: Client,
}

impl NominatimProvider {
    pub fn new(endpoint: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            user_agent: user_agent.into(),
            http: Client::new(),
        }
    }

    /// Replace the HTTP client, e.g. to tune proxies or TLS.
    pub fn with_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }
}

#[async_trait]
impl Geocoder for NominatimProvider {
    async fn locate(&self, address: &str) -> Result<Location, LookupError> {
        search::first_hit(
            &self.http,
            &self.endpoint,
            &self.user_agent,
            &[
                ("q", address),
                ("format", "json"),
                ("addressdetails", "1"),
                ("limit", "1"),
            ],
        )
        .await
    }
}
