use reqwest::{Client, StatusCode, header::USER_AGENT};
use serde::Deserialize;

use crate::{Location, LookupError};

/// One element of a Nominatim-style `/search` response. Other fields are ignored.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    display_name: String,
}

impl From<SearchHit> for Location {
    fn from(hit: SearchHit) -> Self {
        Location {
            latitude: hit.lat,
            longitude: hit.lon,
            display_name: hit.display_name,
        }
    }
}

/// GET `endpoint` with `params` and return the first hit of the JSON array.
pub(crate) async fn first_hit(
    http: &Client,
    endpoint: &str,
    user_agent: &str,
    params: &[(&str, &str)],
) -> Result<Location, LookupError> {
    log::debug!("GET {endpoint}");

    let res = http
        .get(endpoint)
        .header(USER_AGENT, user_agent)
        .query(params)
        .send()
        .await?;

    let status = res.status();
    log::debug!("{endpoint} answered {status}");

    if status != StatusCode::OK {
        return Err(LookupError::Status(status.as_u16()));
    }

    let body = res.text().await?;
    let hits: Vec<SearchHit> = serde_json::from_str(&body)?;

    hits.into_iter()
        .next()
        .map(Location::from)
        .ok_or(LookupError::NotFound)
}
