use std::env;

use anyhow::Result;
use reqwest::Client;

use crate::types::{GeocodeOutcome, GeocodeResponse, GeocodeStatus, Location};

const API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Configuration for GeocoderClient
#[derive(Debug, Clone, Default)]
pub struct GeocoderConfig {
    /// API key (overrides GOOGLE_MAPS_API_KEY env var)
    pub api_key: Option<String>,
    /// Endpoint override, mainly for tests
    pub endpoint: Option<String>,
}

pub struct GeocoderClient {
    http_client: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl GeocoderClient {
    pub fn new() -> Result<Self> {
        Self::with_config(GeocoderConfig::default())
    }

    pub fn with_config(config: GeocoderConfig) -> Result<Self> {
        // API key: config takes precedence over env var
        let api_key = config
            .api_key
            .or_else(|| env::var("GOOGLE_MAPS_API_KEY").ok())
            .filter(|k| !k.is_empty());

        let http_client = Client::builder().gzip(true).build()?;

        Ok(Self {
            http_client,
            api_key,
            endpoint: config.endpoint.unwrap_or_else(|| API_URL.to_string()),
        })
    }

    /// Geocode a free-text address.
    ///
    /// One request, one response; no retry, no timeout, no cancellation.
    /// A non-OK vendor status comes back as `GeocodeOutcome::Failed`;
    /// transport and parse errors propagate as errors.
    pub async fn geocode(&self, address: &str) -> Result<GeocodeOutcome> {
        let mut query: Vec<(&str, &str)> = vec![("address", address)];
        if let Some(ref key) = self.api_key {
            query.push(("key", key));
        }

        let response = self
            .http_client
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            anyhow::bail!("Geocoding request failed: {} {}", status, body);
        }

        let response: GeocodeResponse = serde_json::from_str(&body)
            .map_err(|e| anyhow::anyhow!("Failed to parse geocoding response: {}", e))?;

        let vendor_status = GeocodeStatus::from_status(&response.status);
        if !vendor_status.is_ok() {
            return Ok(GeocodeOutcome::Failed(vendor_status));
        }

        // Only the first candidate result matters
        let first = response
            .results
            .first()
            .ok_or_else(|| anyhow::anyhow!("OK response with no results"))?;

        Ok(GeocodeOutcome::Found(Location::from_result(first)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, routing::get};

    /// Serve a fixed JSON body on an ephemeral port, return its URL
    async fn serve_body(body: &'static str) -> String {
        let app = Router::new().route("/geocode", get(move || async move { body }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/geocode", addr)
    }

    #[tokio::test]
    async fn test_geocode_success() {
        let endpoint = serve_body(
            r#"{
                "status": "OK",
                "results": [{
                    "address_components": [
                        {"short_name": "94110", "long_name": "94110", "types": ["postal_code"]},
                        {"short_name": "CA", "long_name": "California",
                         "types": ["administrative_area_level_1"]},
                        {"short_name": "San Francisco", "long_name": "San Francisco",
                         "types": ["locality"]}
                    ],
                    "geometry": {"location": {"lat": 37.75, "lng": -122.41}}
                }]
            }"#,
        )
        .await;

        let client = GeocoderClient::with_config(GeocoderConfig {
            api_key: Some("test-key".to_string()),
            endpoint: Some(endpoint),
        })
        .unwrap();

        let outcome = client.geocode("1234 Fake St, San Francisco CA").await.unwrap();
        match outcome {
            GeocodeOutcome::Found(loc) => {
                assert_eq!(loc.latitude, 37.75);
                assert_eq!(loc.longitude, -122.41);
                assert_eq!(loc.state_code, "CA");
                assert_eq!(loc.state_name, "California");
                assert_eq!(loc.locality, "San Francisco");
                assert_eq!(loc.postal_code, "94110");
            }
            GeocodeOutcome::Failed(status) => panic!("unexpected failure: {}", status),
        }
    }

    #[tokio::test]
    async fn test_geocode_zero_results() {
        let endpoint = serve_body(r#"{"status": "ZERO_RESULTS", "results": []}"#).await;

        let client = GeocoderClient::with_config(GeocoderConfig {
            api_key: None,
            endpoint: Some(endpoint),
        })
        .unwrap();

        let outcome = client.geocode("xyzzy").await.unwrap();
        match outcome {
            GeocodeOutcome::Failed(status) => assert_eq!(status, GeocodeStatus::ZeroResults),
            GeocodeOutcome::Found(_) => panic!("expected failure outcome"),
        }
    }

    #[tokio::test]
    async fn test_geocode_malformed_body_is_error() {
        let endpoint = serve_body("not json").await;

        let client = GeocoderClient::with_config(GeocoderConfig {
            api_key: None,
            endpoint: Some(endpoint),
        })
        .unwrap();

        assert!(client.geocode("anywhere").await.is_err());
    }
}
