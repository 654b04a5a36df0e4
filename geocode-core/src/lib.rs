//! Core library for the `geocode` CLI.
//!
//! This crate defines:
//! - Configuration handling
//! - Abstraction over geocoding providers (Nominatim, maps.co)
//! - The lookup result model and its JSON shape
//!
//! It is used by `geocode-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::{Config, ProviderConfig};
pub use error::LookupError;
pub use model::{GeocodeResult, Location};
pub use provider::{Geocoder, ProviderId};

/// Resolve `address` with `geocoder`, folding every failure into [`GeocodeResult::Error`].
///
/// One outbound request per call. Never returns an `Err` or panics on a bad response.
pub async fn lookup(geocoder: &dyn Geocoder, address: &str) -> GeocodeResult {
    match geocoder.locate(address).await {
        Ok(location) => GeocodeResult::Found(location),
        Err(err) => {
            log::warn!("Lookup for {address:?} failed: {err}");
            GeocodeResult::error(err.to_string())
        }
    }
}
