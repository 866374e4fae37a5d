mod common;

use augora::{Continent, DataPack, ZoneId};

#[test]
fn directory_pack_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let data = common::data();
    data.write_to_dir(dir.path()).unwrap();
    assert!(dir.path().join("manifest.json").is_file());

    let loaded = DataPack::read_from_dir(dir.path()).unwrap();
    assert_eq!(loaded.roster.deputies(), data.roster.deputies());
    assert_eq!(loaded.roster.groups(), data.roster.groups());
    assert_eq!(loaded.atlas.len(), data.atlas.len());
    assert_eq!(loaded.atlas.routes(), data.atlas.routes());

    let paris = loaded.atlas.get(&ZoneId::department("75")).unwrap();
    assert_eq!(paris.name.as_ref(), "Paris");
    let (before, after) = (data.atlas.get(&ZoneId::department("75")).unwrap().centroid.unwrap(), paris.centroid.unwrap());
    assert!((before.x() - after.x()).abs() < 1e-9 && (before.y() - after.y()).abs() < 1e-9);
}

#[test]
fn directory_without_manifest_uses_default_names() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("deputies.json"), common::deputies()).unwrap();
    std::fs::write(dir.path().join("groups.json"), common::groups()).unwrap();
    std::fs::write(dir.path().join("districts.geojson"), common::districts()).unwrap();

    let data = DataPack::read_from_dir(dir.path()).unwrap();
    assert_eq!(data.roster.len(), 5);
    assert_eq!(data.atlas.num_unclassified(), 1);

    // districts without their department fall back to the pseudo-continent
    let paris_1 = data.atlas.get(&ZoneId::district("75", 1)).unwrap();
    assert_eq!(data.atlas.parent(paris_1).unwrap().id, ZoneId::Continent(Continent::Metropole));
    let guadeloupe_1 = data.atlas.get(&ZoneId::district("971", 1)).unwrap();
    assert_eq!(data.atlas.parent(guadeloupe_1).unwrap().id, ZoneId::Continent(Continent::Overseas));
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DataPack::read_from_dir(&dir.path().join("absent")).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}
