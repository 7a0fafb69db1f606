use super::*;
use crate::foundation::core::Vec3;

fn tee() -> Garment {
    Garment {
        id: "tee-1".into(),
        category: Category::Tops,
        name: "Premium Cotton Tee".to_string(),
        brand: "StyleCorp".to_string(),
        color: "white".to_string(),
        fabric: Some("cotton".to_string()),
        size: Some("M".to_string()),
        model_ref: "models/tshirt.glb".to_string(),
        offset: GarmentOffset::default(),
        fit_data: BTreeMap::new(),
        physics_hints: None,
        is_new: false,
        is_wishlisted: false,
    }
}

#[test]
fn valid_garment_passes() {
    tee().validate().unwrap();
}

#[test]
fn display_fields_must_be_non_empty() {
    let mut g = tee();
    g.brand = "  ".to_string();
    let err = g.validate().unwrap_err();
    assert!(err.to_string().contains("brand must be non-empty"));

    let mut g = tee();
    g.name = String::new();
    assert!(
        g.validate()
            .unwrap_err()
            .to_string()
            .contains("name must be non-empty")
    );
}

#[test]
fn optional_fields_reject_empty_when_set() {
    let mut g = tee();
    g.fabric = Some(String::new());
    assert!(
        g.validate()
            .unwrap_err()
            .to_string()
            .contains("fabric must be non-empty when set")
    );
}

#[test]
fn validate_rejects_bad_model_paths() {
    let mut g = tee();
    g.model_ref = "/models/tshirt.glb".to_string();
    assert!(
        g.validate()
            .unwrap_err()
            .to_string()
            .contains("must be a relative path")
    );

    let mut g = tee();
    g.model_ref = "models/../secret.glb".to_string();
    assert!(
        g.validate()
            .unwrap_err()
            .to_string()
            .contains("must not contain '..'")
    );

    let mut g = tee();
    g.model_ref = String::new();
    assert!(
        g.validate()
            .unwrap_err()
            .to_string()
            .contains("model_ref must be non-empty")
    );
}

#[test]
fn backslash_paths_are_treated_as_separators() {
    let mut g = tee();
    g.model_ref = "models\\..\\secret.glb".to_string();
    assert!(
        g.validate()
            .unwrap_err()
            .to_string()
            .contains("must not contain '..'")
    );
}

#[test]
fn offset_scale_must_be_positive_and_finite() {
    let mut g = tee();
    g.offset.scale = Vec3::new(1.0, 0.0, 1.0);
    assert!(
        g.validate()
            .unwrap_err()
            .to_string()
            .contains("scale must be finite and > 0")
    );

    let mut g = tee();
    g.offset.position = Vec3::new(f32::NAN, 0.0, 0.0);
    assert!(
        g.validate()
            .unwrap_err()
            .to_string()
            .contains("position must be finite")
    );
}

#[test]
fn fit_regions_must_be_named() {
    let mut g = tee();
    g.fit_data.insert(String::new(), FitLabel::Fitted);
    assert!(
        g.validate()
            .unwrap_err()
            .to_string()
            .contains("fit_data region must be non-empty")
    );
}

#[test]
fn physics_hints_must_be_finite_and_non_negative() {
    let mut g = tee();
    g.physics_hints = Some(PhysicsHints {
        mass: -1.0,
        elasticity: 0.5,
        friction: 0.3,
        damping: 0.1,
    });
    assert!(
        g.validate()
            .unwrap_err()
            .to_string()
            .contains("physics_hints.mass must be finite and >= 0")
    );
}

#[test]
fn garment_json_defaults_apply() {
    let g: Garment = serde_json::from_str(
        r#"{
            "id": "tee-1",
            "category": "tops",
            "name": "Premium Cotton Tee",
            "brand": "StyleCorp",
            "color": "white",
            "model_ref": "models/tshirt.glb"
        }"#,
    )
    .unwrap();
    assert_eq!(g.offset, GarmentOffset::default());
    assert!(g.fit_data.is_empty());
    assert!(g.physics_hints.is_none());
    assert!(!g.is_new);
    assert!(!g.is_wishlisted);
    g.validate().unwrap();
}

#[test]
fn outfit_requires_a_garment() {
    let outfit = SavedOutfit {
        id: "work".into(),
        name: "Work Meeting".to_string(),
        garment_ids: vec![],
        created_at: Utc::now(),
    };
    let err = outfit.validate().unwrap_err();
    assert!(err.to_string().contains("at least one garment"));
}

#[test]
fn outfit_tolerates_ids_absent_from_catalog() {
    // Saved outfits may outlive catalog entries; validation only checks shape.
    let outfit = SavedOutfit {
        id: "work".into(),
        name: "Work Meeting".to_string(),
        garment_ids: vec!["long-gone".into()],
        created_at: Utc::now(),
    };
    outfit.validate().unwrap();
}
