#![allow(dead_code)]

use augora::{DataPack, MemPack};
use serde_json::{json, Value};

fn feature(properties: Value) -> Value {
    json!({ "type": "Feature", "geometry": null, "properties": properties })
}

fn collection(features: Vec<Value>) -> String {
    json!({ "type": "FeatureCollection", "features": features }).to_string()
}

pub fn regions() -> String {
    collection(vec![
        feature(json!({ "code_reg": "11", "nom": "Île-de-France", "center": [2.5, 48.7] })),
        feature(json!({ "code_reg": "32", "nom": "Hauts-de-France", "center": [2.8, 50.0] })),
    ])
}

pub fn departments() -> String {
    collection(vec![
        feature(json!({ "code_dpt": "75", "code_reg": "11", "nom": "Paris", "center": [2.35, 48.86] })),
        feature(json!({ "code_dpt": "92", "code_reg": "11", "nom": "Hauts-de-Seine", "center": [2.2, 48.85] })),
        feature(json!({ "code_dpt": "59", "code_reg": "32", "nom": "Nord", "center": [3.2, 50.5] })),
        feature(json!({ "code_dpt": "971", "nom": "Guadeloupe", "center": [-61.5, 16.2] })),
        feature(json!({ "code_dpt": "999", "nom": "Français établis hors de France" })),
    ])
}

pub fn districts() -> String {
    collection(vec![
        feature(json!({ "code_dpt": "75", "code_reg": "11", "num_circ": 1, "nom_dpt": "Paris", "center": [2.33, 48.87] })),
        feature(json!({ "code_dpt": "75", "code_reg": "11", "num_circ": 2, "nom_dpt": "Paris", "center": [2.34, 48.84] })),
        feature(json!({ "code_dpt": "92", "code_reg": "11", "num_circ": 1, "nom_dpt": "Hauts-de-Seine" })),
        feature(json!({ "code_dpt": "59", "code_reg": "32", "num_circ": 3, "nom_dpt": "Nord" })),
        feature(json!({ "code_dpt": "971", "num_circ": 1, "nom_dpt": "Guadeloupe" })),
        feature(json!({ "code_dpt": "999", "num_circ": 5, "nom_dpt": "Étranger" })),
        feature(json!({ "nom": "sans code" })),
    ])
}

pub fn groups() -> String {
    json!([
        { "code": "Y", "name": "Groupe Y", "rank": 2, "color": "#0000ff" },
        { "code": "X", "name": "Groupe X", "rank": 1, "color": "#ff0000" },
    ]).to_string()
}

pub fn deputies() -> String {
    json!([
        { "slug": "alice-a", "name": "Alice A", "gender": "F", "age": 30, "group": "X", "department": "75", "district": 1 },
        { "slug": "bob-b", "name": "Bob B", "gender": "H", "age": 45, "group": "X", "department": 75, "district": 2 },
        { "slug": "carol-c", "name": "Carol C", "gender": "F", "age": 60, "group": "Y", "department": "971", "district": 1 },
        { "slug": "denis-d", "name": "Denis D", "gender": "H", "age": 52, "group": "Y", "department": "59", "district": 3 },
        { "slug": "eve-e", "name": "Ève E", "gender": "F", "age": 38, "department": "999", "district": 5 },
    ]).to_string()
}

pub fn mem_pack() -> MemPack {
    MemPack::new()
        .with_file("deputies.json", deputies())
        .with_file("groups.json", groups())
        .with_file("regions.geojson", regions())
        .with_file("departments.geojson", departments())
        .with_file("districts.geojson", districts())
}

pub fn data() -> DataPack {
    DataPack::read_from_pack_source(&mem_pack()).expect("fixture pack loads")
}
