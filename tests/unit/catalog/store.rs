use super::*;
use crate::foundation::core::{Category, GarmentOffset};
use std::collections::BTreeMap;

fn garment(id: &str, category: Category) -> Garment {
    Garment {
        id: id.into(),
        category,
        name: format!("{id} name"),
        brand: "StyleCorp".to_string(),
        color: "white".to_string(),
        fabric: None,
        size: None,
        model_ref: format!("models/{id}.glb"),
        offset: GarmentOffset::default(),
        fit_data: BTreeMap::new(),
        physics_hints: None,
        is_new: false,
        is_wishlisted: false,
    }
}

#[test]
fn lookup_preserves_catalog_order() {
    let catalog = Catalog::new(
        vec![
            garment("tee-1", Category::Tops),
            garment("jeans-1", Category::Bottoms),
            garment("boots-1", Category::Shoes),
        ],
        vec![],
    )
    .unwrap();

    let ids: Vec<&str> = catalog.garments().iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, ["tee-1", "jeans-1", "boots-1"]);
    assert_eq!(catalog.len(), 3);
    assert!(catalog.contains(&"jeans-1".into()));
    assert_eq!(catalog.garment(&"boots-1".into()).unwrap().category, Category::Shoes);
    assert!(catalog.get(&"nope".into()).is_none());
}

#[test]
fn unknown_garment_lookup_is_typed() {
    let catalog = Catalog::new(vec![garment("tee-1", Category::Tops)], vec![]).unwrap();
    let err = catalog.garment(&"nope".into()).unwrap_err();
    assert!(matches!(err, VestiaryError::UnknownGarment(_)));
    assert_eq!(err.to_string(), "unknown garment 'nope'");
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = Catalog::new(
        vec![
            garment("tee-1", Category::Tops),
            garment("tee-1", Category::Bottoms),
        ],
        vec![],
    )
    .unwrap_err();
    assert!(err.to_string().contains("duplicate garment id 'tee-1'"));
}

#[test]
fn invalid_entries_fail_the_build() {
    let mut bad = garment("tee-1", Category::Tops);
    bad.color = String::new();
    let err = Catalog::new(vec![bad], vec![]).unwrap_err();
    assert!(err.to_string().contains("color must be non-empty"));
}

#[test]
fn json_file_source_loads_garments_and_outfits() {
    let path = std::env::temp_dir().join(format!(
        "vestiary_store_unit_{}.json",
        std::process::id()
    ));
    std::fs::write(
        &path,
        r#"{
            "garments": [
                {
                    "id": "tee-1",
                    "category": "tops",
                    "name": "Premium Cotton Tee",
                    "brand": "StyleCorp",
                    "color": "white",
                    "model_ref": "models/tshirt.glb"
                }
            ],
            "outfits": [
                {
                    "id": "work",
                    "name": "Work Meeting",
                    "garment_ids": ["tee-1"],
                    "created_at": "2025-01-15T09:00:00Z"
                }
            ]
        }"#,
    )
    .unwrap();

    let catalog = Catalog::from_source(&JsonCatalogFile::new(&path)).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.outfits().len(), 1);
    assert_eq!(catalog.outfit(&"work".into()).unwrap().garment_ids.len(), 1);

    std::fs::remove_file(&path).ok();
}

#[test]
fn outfits_key_is_optional() {
    let path = std::env::temp_dir().join(format!(
        "vestiary_store_unit_no_outfits_{}.json",
        std::process::id()
    ));
    std::fs::write(&path, r#"{ "garments": [] }"#).unwrap();

    let catalog = Catalog::from_source(&JsonCatalogFile::new(&path)).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.outfits().is_empty());

    std::fs::remove_file(&path).ok();
}

#[test]
fn parse_errors_name_the_file() {
    let path = std::env::temp_dir().join(format!(
        "vestiary_store_unit_bad_{}.json",
        std::process::id()
    ));
    std::fs::write(&path, "{ not json").unwrap();

    let err = Catalog::from_source(&JsonCatalogFile::new(&path)).unwrap_err();
    assert!(err.to_string().contains("parse catalog"));

    std::fs::remove_file(&path).ok();

    let missing = JsonCatalogFile::new("definitely/does/not/exist.json");
    let err = Catalog::from_source(&missing).unwrap_err();
    assert!(err.to_string().contains("open catalog"));
}
