//! Geocoding proxy client for Travily.
//!
//! Wraps the backend's Geoapify proxy: destination autocomplete and
//! nearby points of interest around a selected destination.

use crate::types::errors::FetchError;
use crate::types::history::Suggestion;
use crate::types::place::{FeatureCollection, Place};

/// Category and radius the original UI requests around a destination.
const SIGHTS_CATEGORY: &str = "tourism.sights";
const SIGHTS_RADIUS_M: u32 = 2000;

/// Client for the backend's geocoding proxy endpoints.
pub struct PlacesApi {
    client: reqwest::Client,
    base_url: String,
}

impl PlacesApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches destination suggestions for a partial query.
    pub async fn autocomplete(
        &self,
        text: &str,
        token: Option<&str>,
    ) -> Result<Vec<Suggestion>, FetchError> {
        let url = format!("{}/api/geoapify/autocomplete", self.base_url);
        let mut request = self.client.get(&url).query(&[("text", text)]);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let body = send_for_body(request).await?;
        let collection = parse_feature_collection(&body)?;
        Ok(collection
            .features
            .into_iter()
            .map(|f| {
                Suggestion::from_provider(&f.properties.formatted, f.properties.lat, f.properties.lon)
            })
            .collect())
    }

    /// Fetches tourist sights near a selected destination. Unnamed
    /// features are filtered out before they reach the UI.
    pub async fn nearby_sights(
        &self,
        lat: f64,
        lon: f64,
        destination: &str,
        token: Option<&str>,
    ) -> Result<Vec<Place>, FetchError> {
        let url = format!("{}/api/geoapify/places", self.base_url);
        let mut request = self.client.get(&url).query(&[
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("category", SIGHTS_CATEGORY.to_string()),
            ("radius", SIGHTS_RADIUS_M.to_string()),
            ("destinationName", destination.to_string()),
        ]);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let body = send_for_body(request).await?;
        let collection = parse_feature_collection(&body)?;
        Ok(named_places(collection))
    }
}

async fn send_for_body(request: reqwest::RequestBuilder) -> Result<String, FetchError> {
    let response = request
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))
}

/// Parses a Geoapify-style feature-collection body.
pub fn parse_feature_collection(body: &str) -> Result<FeatureCollection, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::MalformedBody(e.to_string()))
}

/// Keeps only features with a usable name.
pub fn named_places(collection: FeatureCollection) -> Vec<Place> {
    collection
        .features
        .into_iter()
        .filter_map(Place::from_feature)
        .collect()
}
