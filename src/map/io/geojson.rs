use anyhow::{anyhow, Context, Result};
use serde_json::{json, Map, Value};
use tracing::warn;

use crate::map::{
    classify::{zone_from_properties, CENTER_KEY, CONTINENT_KEY, DEPARTMENT_KEY, DISTRICT_KEY, NAME_KEY, REGION_KEY, WORLD_KEY},
    Atlas, Zone, ZoneId,
};

impl Atlas {
    /// Add every feature of a GeoJSON FeatureCollection to the atlas.
    /// Features that cannot be classified are skipped and counted.
    /// Returns the number of zones added or replaced.
    pub fn add_geojson(&mut self, collection: &Value) -> Result<usize> {
        let features = collection.get("features")
            .and_then(Value::as_array)
            .ok_or_else(|| anyhow!("[Atlas::add_geojson] Expected a FeatureCollection with a 'features' array"))?;

        let mut added = 0;
        for (idx, feature) in features.iter().enumerate() {
            let zone = feature.get("properties")
                .and_then(Value::as_object)
                .and_then(zone_from_properties);

            match zone {
                Some(zone) => {
                    let geometry = feature.get("geometry").filter(|g| !g.is_null()).cloned();
                    self.insert(zone, geometry);
                    added += 1;
                }
                None => {
                    warn!(index = idx, "[Atlas::add_geojson] skipping unclassified feature");
                    self.note_unclassified();
                }
            }
        }
        Ok(added)
    }

    /// Parse a GeoJSON FeatureCollection from text and add it to the atlas.
    pub fn add_geojson_str(&mut self, data: &str) -> Result<usize> {
        let collection: Value = serde_json::from_str(data)
            .context("[Atlas::add_geojson_str] Invalid GeoJSON")?;
        self.add_geojson(&collection)
    }

    /// Export zones as a GeoJSON FeatureCollection for the rendering layer.
    /// Properties carry the zone codes in the same keys classification
    /// reads, so the output can be loaded back.
    pub fn to_geojson(&self, zones: &[&Zone]) -> Value {
        let features: Vec<Value> = zones.iter()
            .map(|zone| json!({
                "type": "Feature",
                "id": zone.id.to_string(),
                "geometry": self.geometry(&zone.id).cloned().unwrap_or(Value::Null),
                "properties": zone_properties(zone),
            }))
            .collect();

        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }
}

fn zone_properties(zone: &Zone) -> Map<String, Value> {
    let mut properties = Map::new();

    match &zone.id {
        ZoneId::World => {
            properties.insert(WORLD_KEY.to_string(), json!(true));
        }
        ZoneId::Continent(c) => {
            properties.insert(CONTINENT_KEY.to_string(), json!(c.code()));
        }
        ZoneId::Region(code) => {
            properties.insert(REGION_KEY.to_string(), json!(&**code));
        }
        ZoneId::Department(code) => {
            properties.insert(DEPARTMENT_KEY.to_string(), json!(&**code));
        }
        ZoneId::District { department, number } => {
            properties.insert(DEPARTMENT_KEY.to_string(), json!(&**department));
            properties.insert(DISTRICT_KEY.to_string(), json!(number));
        }
    }

    if let Some(region) = &zone.parents.region {
        properties.entry(REGION_KEY.to_string()).or_insert_with(|| json!(&**region));
    }
    if let Some(continent) = zone.parents.continent {
        properties.entry(CONTINENT_KEY.to_string()).or_insert_with(|| json!(continent.code()));
    }

    properties.insert(NAME_KEY.to_string(), json!(&*zone.name));
    if let Some(center) = zone.centroid {
        properties.insert(CENTER_KEY.to_string(), json!([center.x(), center.y()]));
    }
    properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{classify, ZoneLevel};

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature", "geometry": { "type": "Point", "coordinates": [2.3, 48.8] },
              "properties": { "code_reg": "11", "code_dpt": "75", "nom": "Paris", "center": [2.35, 48.86] } },
            { "type": "Feature", "geometry": null,
              "properties": { "code_reg": "11", "code_dpt": "75", "num_circ": 1, "nom_dpt": "Paris" } },
            { "type": "Feature", "geometry": null, "properties": { "nom": "mystery" } },
            { "type": "Feature", "geometry": null }
        ]
    }"#;

    #[test]
    fn loads_features_and_counts_unclassified() {
        let mut atlas = Atlas::new();
        let added = atlas.add_geojson_str(COLLECTION).unwrap();
        assert_eq!(added, 2);
        assert_eq!(atlas.num_unclassified(), 2);
        assert_eq!(atlas.zones(ZoneLevel::Department).len(), 1);
        assert!(atlas.geometry(&ZoneId::department("75")).is_some());
        assert!(atlas.geometry(&ZoneId::district("75", 1)).is_none());
    }

    #[test]
    fn rejects_non_collections() {
        let mut atlas = Atlas::new();
        assert!(atlas.add_geojson_str("{\"type\": \"Feature\"}").is_err());
        assert!(atlas.add_geojson_str("not json").is_err());
    }

    #[test]
    fn exported_properties_classify_back() {
        let mut atlas = Atlas::new();
        atlas.add_geojson_str(COLLECTION).unwrap();
        let paris = atlas.get(&ZoneId::department("75")).unwrap();
        let exported = atlas.to_geojson(&[paris, atlas.root()]);

        let features = exported["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0]["geometry"]["type"], "Point");
        assert_eq!(features[0]["properties"]["code_reg"], "11");
        for (feature, zone) in features.iter().zip([paris, atlas.root()]) {
            let properties = feature["properties"].as_object().unwrap();
            assert_eq!(classify(properties).as_ref(), Some(&zone.id));
        }
    }
}
