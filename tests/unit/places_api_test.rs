//! Unit tests for geocoding-proxy response parsing and filtering.

use travily::services::places_api::{named_places, parse_feature_collection};
use travily::types::errors::FetchError;
use travily::types::place::Place;

const PLACES_BODY: &str = r#"{
    "features": [
        {"properties": {"name": "Eiffel Tower", "formatted": "Eiffel Tower, Paris", "lat": 48.8584, "lon": 2.2945, "categories": ["tourism.sights"]}},
        {"properties": {"formatted": "Unnamed geometry, Paris", "lat": 48.85, "lon": 2.29}},
        {"properties": {"name": "   ", "formatted": "Blank name, Paris", "lat": 48.86, "lon": 2.30}},
        {"properties": {"name": "Louvre", "formatted": "Louvre, Paris", "lat": 48.8606, "lon": 2.3376}}
    ]
}"#;

#[test]
fn test_parses_feature_collection() {
    let collection = parse_feature_collection(PLACES_BODY).unwrap();
    assert_eq!(collection.features.len(), 4);
    assert_eq!(
        collection.features[0].properties.name.as_deref(),
        Some("Eiffel Tower")
    );
}

#[test]
fn test_empty_body_defaults_to_no_features() {
    let collection = parse_feature_collection("{}").unwrap();
    assert!(collection.features.is_empty());
}

#[test]
fn test_malformed_body_is_rejected() {
    match parse_feature_collection("<html>proxy error</html>") {
        Err(FetchError::MalformedBody(_)) => {}
        other => panic!("expected MalformedBody error, got {:?}", other),
    }
}

/// Features without a usable name never reach the UI.
#[test]
fn test_named_places_filters_unnamed_features() {
    let collection = parse_feature_collection(PLACES_BODY).unwrap();
    let places = named_places(collection);

    let names: Vec<&str> = places.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Eiffel Tower", "Louvre"]);
}

#[test]
fn test_place_carries_coordinates_and_categories() {
    let collection = parse_feature_collection(PLACES_BODY).unwrap();
    let places = named_places(collection);
    let tower: &Place = &places[0];

    assert_eq!(tower.formatted, "Eiffel Tower, Paris");
    assert_eq!(tower.lat, 48.8584);
    assert_eq!(tower.lon, 2.2945);
    assert_eq!(tower.categories, vec!["tourism.sights"]);
}
