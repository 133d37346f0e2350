use serde::{Deserialize, Serialize};

/// Properties of a single feature returned by the geocoding proxy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceProperties {
    pub name: Option<String>,
    pub formatted: String,
    pub lat: f64,
    pub lon: f64,
    pub categories: Vec<String>,
}

/// One GeoJSON-style feature from the places proxy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub properties: PlaceProperties,
}

/// Top-level response shape of the autocomplete and places endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

/// A point of interest near a selected destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub name: String,
    pub formatted: String,
    pub lat: f64,
    pub lon: f64,
    pub categories: Vec<String>,
}

impl Place {
    /// Converts a feature into a `Place`, rejecting features without a
    /// usable name (the proxy returns plenty of unnamed geometry).
    pub fn from_feature(feature: Feature) -> Option<Self> {
        let props = feature.properties;
        let name = props.name?;
        if name.trim().is_empty() {
            return None;
        }
        Some(Self {
            name,
            formatted: props.formatted,
            lat: props.lat,
            lon: props.lon,
            categories: props.categories,
        })
    }
}
