//! Address geocoding against a Google Geocoding compatible API.
//!
//! Sends `GET {url}?address=<address>&key=<api key>` and reads the first result's
//! `geometry.location`. An address with no match is a client error and is reported as
//! `GeocodeError::NotFound`; lookups are never retried.

use serde::Deserialize;
use url::Url;

use crate::server::{error::geocode::GeocodeError, model::player::Coordinates};

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

/// Resolves addresses to coordinates.
///
/// Cheap to clone; `reqwest::Client` shares its connection pool between clones.
#[derive(Clone)]
pub struct GeocodeService {
    http_client: reqwest::Client,
    url: Url,
    api_key: String,
}

impl GeocodeService {
    /// Creates a geocoding service.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `url` - Geocoding endpoint without query string
    /// - `api_key` - Provider API key sent as the `key` query parameter
    pub fn new(http_client: reqwest::Client, url: Url, api_key: String) -> Self {
        Self {
            http_client,
            url,
            api_key,
        }
    }

    /// Looks up the coordinates of an address.
    ///
    /// # Returns
    /// - `Ok(Coordinates)` - Location of the first match
    /// - `Err(GeocodeError::NotFound)` - Provider found no match for the address
    /// - `Err(GeocodeError::Provider)` - Provider rejected the request
    /// - `Err(GeocodeError::Request)` - Transport or decoding failure
    pub async fn coordinates_for_address(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        let mut url = self.url.clone();
        url.query_pairs_mut()
            .append_pair("address", address)
            .append_pair("key", &self.api_key);

        let response: GeocodeResponse = self
            .http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        coordinates_from_response(address, response)
    }
}

fn coordinates_from_response(
    address: &str,
    response: GeocodeResponse,
) -> Result<Coordinates, GeocodeError> {
    match response.status.as_str() {
        "OK" => response
            .results
            .into_iter()
            .next()
            .map(|result| Coordinates {
                lat: result.geometry.location.lat,
                lng: result.geometry.location.lng,
            })
            .ok_or_else(|| GeocodeError::NotFound(address.to_string())),
        "ZERO_RESULTS" => Err(GeocodeError::NotFound(address.to_string())),
        status => Err(GeocodeError::Provider(status.to_string())),
    }
}
