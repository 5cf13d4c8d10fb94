// Reverse-geocoding HTTP client
//
// Wraps `reqwest::Client` with Nominatim-specific URL construction and
// response decoding. The one endpoint used is `reverse` with the
// `jsonv2` format; everything else Nominatim offers is out of scope.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::Error;

/// Configuration for building a [`GeocodeClient`].
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// Geocoder root, e.g. `https://nominatim.openstreetmap.org`.
    pub base_url: Url,
    /// `accept-language` value for returned display names.
    pub language: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for GeocodeConfig {
    #[allow(clippy::unwrap_used)]
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".parse().unwrap(),
            language: "hy".into(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Raw HTTP client for the Nominatim reverse endpoint.
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: Url,
    language: String,
}

impl GeocodeClient {
    /// Build a client from a [`GeocodeConfig`].
    pub fn new(config: &GeocodeConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent("argus-geo/0.1.0")
            .build()
            .map_err(Error::Transport)?;
        Ok(Self::with_client(
            http,
            config.base_url.clone(),
            config.language.clone(),
        ))
    }

    /// Wrap a pre-built `reqwest::Client` (used by tests).
    pub fn with_client(http: reqwest::Client, base_url: Url, language: String) -> Self {
        Self {
            http,
            base_url,
            language,
        }
    }

    /// Resolve coordinates to a display name.
    ///
    /// `Ok(None)` means the geocoder answered but had no name for the
    /// spot; callers fall back to [`fallback_label`] either way.
    pub async fn reverse(&self, lat: f64, lon: f64) -> Result<Option<String>, Error> {
        let mut url = self.base_url.join("reverse")?;
        url.query_pairs_mut()
            .append_pair("format", "jsonv2")
            .append_pair("lat", &lat.to_string())
            .append_pair("lon", &lon.to_string())
            .append_pair("zoom", "18")
            .append_pair("addressdetails", "1")
            .append_pair("accept-language", &self.language);

        debug!("GET {url}");
        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }

        let body: ReverseResponse = resp.json().await.map_err(|e| Error::Deserialization {
            message: e.to_string(),
        })?;
        Ok(body.display_name)
    }

    /// Resolve coordinates, degrading to the `"lat, lon"` label on any
    /// failure or empty answer. Total: never errors.
    pub async fn reverse_or_fallback(&self, lat: f64, lon: f64) -> String {
        match self.reverse(lat, lon).await {
            Ok(Some(name)) => name,
            Ok(None) => fallback_label(lat, lon),
            Err(e) => {
                debug!(error = %e, "reverse geocode failed, using coordinate label");
                fallback_label(lat, lon)
            }
        }
    }
}

/// The coordinate label shown when no address is available.
pub fn fallback_label(lat: f64, lon: f64) -> String {
    format!("{lat:.5}, {lon:.5}")
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_label_is_five_decimal_places() {
        assert_eq!(fallback_label(40.18111, 44.51361), "40.18111, 44.51361");
        assert_eq!(fallback_label(40.0, 44.5), "40.00000, 44.50000");
    }
}
