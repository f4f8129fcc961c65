//! GeoJSON rendering of proximity results

use crate::output_types::NearbyItem;
use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

/// Build a FeatureCollection with one Point per result, closest first
pub fn to_feature_collection(items: &[NearbyItem]) -> FeatureCollection {
    let features = items.iter().map(to_feature).collect();

    FeatureCollection { bbox: None, features, foreign_members: None }
}

fn to_feature(item: &NearbyItem) -> Feature {
    // GeoJSON positions are [longitude, latitude]
    let geometry =
        Geometry::new(Value::Point(vec![item.coordinates.longitude, item.coordinates.latitude]));

    let mut properties = JsonObject::new();
    properties.insert("rank".to_string(), json!(item.rank));
    properties.insert("title".to_string(), json!(item.title));
    properties.insert("severity".to_string(), json!(item.severity));
    properties.insert("progress".to_string(), json!(item.progress));
    properties.insert("radius".to_string(), json!(item.radius));
    properties.insert("distance".to_string(), json!(item.distance));

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: Some(Id::String(item.id.clone())),
        properties: Some(properties),
        foreign_members: None,
    }
}
