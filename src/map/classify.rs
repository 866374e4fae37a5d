//! Classification of GeoJSON feature properties into zone identities.

use serde_json::{Map, Value};

use super::{continent::Continent, layer::Zone, zone_id::ZoneId, zone_level::ZoneLevel};

pub(crate) const DISTRICT_KEY: &str = "num_circ";
pub(crate) const DEPARTMENT_KEY: &str = "code_dpt";
pub(crate) const REGION_KEY: &str = "code_reg";
pub(crate) const CONTINENT_KEY: &str = "code_cont";
pub(crate) const WORLD_KEY: &str = "world";
pub(crate) const NAME_KEY: &str = "nom";
pub(crate) const CENTER_KEY: &str = "center";

/// Determine which zone a feature's properties describe.
///
/// Keys are checked from the most specific level to the least: a feature
/// carrying both `num_circ` and `code_dpt` is a district, since codes nest.
/// Returns `None` (unclassified) when no recognized key holds a usable code;
/// such features are not navigable.
pub fn classify(properties: &Map<String, Value>) -> Option<ZoneId> {
    if let Some(number) = property_code(properties, DISTRICT_KEY) {
        let department = property_code(properties, DEPARTMENT_KEY)?;
        let number = number.parse::<u32>().ok()?;
        return Some(ZoneId::district(&department, number));
    }
    if let Some(code) = property_code(properties, DEPARTMENT_KEY) {
        return Some(ZoneId::department(&code));
    }
    if let Some(code) = property_code(properties, REGION_KEY) {
        return Some(ZoneId::region(&code));
    }
    if let Some(code) = property_code(properties, CONTINENT_KEY) {
        return code.parse::<Continent>().ok().map(ZoneId::Continent);
    }
    if properties.get(WORLD_KEY).is_some_and(is_truthy) {
        return Some(ZoneId::World);
    }
    None
}

/// Build the full zone (identity, parent references, name, centroid) for a
/// feature, or `None` when it cannot be classified.
pub(crate) fn zone_from_properties(properties: &Map<String, Value>) -> Option<Zone> {
    let id = classify(properties)?;
    let name = zone_name(&id, properties);
    let mut zone = Zone::new(id, name);

    if matches!(zone.level(), ZoneLevel::Department | ZoneLevel::District) {
        if let Some(region) = property_code(properties, REGION_KEY) {
            zone = zone.with_region(&region);
        }
    }
    if let Some((lon, lat)) = centroid(properties) {
        zone = zone.with_centroid(lon, lat);
    }
    Some(zone)
}

/// Read a code property as text. Accepts strings and non-negative integral numbers.
fn property_code(properties: &Map<String, Value>, key: &str) -> Option<String> {
    match properties.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => n.as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))
            .map(|u| u.to_string()),
        _ => None,
    }
}

fn property_str<'a>(properties: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    properties.get(key)?.as_str().map(str::trim).filter(|s| !s.is_empty())
}

fn zone_name(id: &ZoneId, properties: &Map<String, Value>) -> String {
    if let Some(name) = property_str(properties, NAME_KEY) {
        return name.to_string();
    }
    match id {
        ZoneId::World => "Monde".to_string(),
        ZoneId::Continent(c) => c.name().to_string(),
        ZoneId::Region(_) => property_str(properties, "nom_reg").map(str::to_string).unwrap_or_else(|| id.to_string()),
        ZoneId::Department(_) => property_str(properties, "nom_dpt").map(str::to_string).unwrap_or_else(|| id.to_string()),
        ZoneId::District { number, .. } => match property_str(properties, "nom_dpt") {
            Some(dpt) => format!("{dpt} {number}"),
            None => id.to_string(),
        },
    }
}

fn centroid(properties: &Map<String, Value>) -> Option<(f64, f64)> {
    match properties.get(CENTER_KEY)?.as_array()?.as_slice() {
        [lon, lat] => Some((lon.as_f64()?, lat.as_f64()?)),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn props(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn most_specific_code_wins() {
        let p = props(json!({ "code_reg": "11", "code_dpt": "75", "num_circ": 3 }));
        assert_eq!(classify(&p), Some(ZoneId::district("75", 3)));

        let p = props(json!({ "code_reg": "11", "code_dpt": "75" }));
        assert_eq!(classify(&p), Some(ZoneId::department("75")));

        let p = props(json!({ "code_reg": 11 }));
        assert_eq!(classify(&p), Some(ZoneId::region("11")));
    }

    #[test]
    fn continents_and_world() {
        assert_eq!(classify(&props(json!({ "code_cont": 1 }))), Some(ZoneId::Continent(Continent::Overseas)));
        assert_eq!(classify(&props(json!({ "code_cont": "0" }))), Some(ZoneId::Continent(Continent::Metropole)));
        assert_eq!(classify(&props(json!({ "code_cont": 7 }))), None);
        assert_eq!(classify(&props(json!({ "world": true }))), Some(ZoneId::World));
    }

    #[test]
    fn unclassified_is_a_sentinel_not_an_error() {
        assert_eq!(classify(&props(json!({ "nom": "Nowhere" }))), None);
        assert_eq!(classify(&props(json!({ "num_circ": 2 }))), None);
        assert_eq!(classify(&props(json!({ "code_dpt": "75", "num_circ": "two" }))), None);
        assert_eq!(classify(&props(json!({ "code_dpt": "" }))), None);
    }

    #[test]
    fn numeric_codes_are_padded() {
        let p = props(json!({ "code_dpt": 1, "num_circ": 2.0 }));
        assert_eq!(classify(&p), Some(ZoneId::district("01", 2)));
    }

    #[test]
    fn zone_carries_parents_name_and_centroid() {
        let p = props(json!({
            "code_reg": "11", "code_dpt": "75", "num_circ": 3,
            "nom_dpt": "Paris", "center": [2.35, 48.86]
        }));
        let zone = zone_from_properties(&p).unwrap();
        assert_eq!(&*zone.name, "Paris 3");
        assert_eq!(zone.parents.region.as_deref(), Some("11"));
        assert_eq!(zone.parents.department.as_deref(), Some("75"));
        assert_eq!(zone.centroid.map(|c| (c.x(), c.y())), Some((2.35, 48.86)));
    }
}
