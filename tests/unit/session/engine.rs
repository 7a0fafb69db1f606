use super::*;
use crate::catalog::dsl::{CatalogBuilder, GarmentBuilder};

fn garment(id: &str, category: Category, name: &str, brand: &str, color: &str) -> Garment {
    GarmentBuilder::new(id, category, name)
        .brand(brand)
        .color(color)
        .model_ref(format!("models/{id}.glb"))
        .build()
        .unwrap()
}

fn catalog() -> Catalog {
    CatalogBuilder::new()
        .garment(garment("tee-1", Category::Tops, "Premium Cotton Tee", "StyleCorp", "white"))
        .unwrap()
        .garment(garment("tee-2", Category::Tops, "Stripe Shirt", "PatternPro", "white"))
        .unwrap()
        .garment(garment("jeans-1", Category::Bottoms, "Black Jeans", "DenimCo", "black"))
        .unwrap()
        .garment(garment(
            "jacket-1",
            Category::Outerwear,
            "Classic Denim Jacket",
            "RetroWear",
            "blue",
        ))
        .unwrap()
        .garment(garment("boots-1", Category::Shoes, "Trail Boots", "ComfortFit", "brown"))
        .unwrap()
        .garment(garment("bag-1", Category::Accessories, "Canvas Tote", "StyleCorp", "beige"))
        .unwrap()
        .build()
        .unwrap()
}

fn session() -> FittingSession {
    FittingSession::new(AvatarConfig::default()).unwrap()
}

fn staged(session: &FittingSession) -> Vec<&str> {
    session.staging().iter().map(|id| id.as_str()).collect()
}

#[test]
fn new_session_is_empty_at_the_initial_pose() {
    let s = session();
    assert!(s.staging().is_empty());
    assert!(s.worn().is_empty());
    assert!(s.selected().is_none());
    assert!(!s.physics_enabled());
    assert_eq!(s.pose(), s.initial_pose());
    assert_eq!(s.pose().position, Vec3::new(0.0, -1.0, 0.0));
}

#[test]
fn avatar_model_ref_is_validated() {
    let avatar = AvatarConfig {
        model_ref: "/abs/avatar.glb".to_string(),
        ..Default::default()
    };
    let err = FittingSession::new(avatar).unwrap_err();
    assert!(err.to_string().contains("must be a relative path"));
}

#[test]
fn staging_is_idempotent_per_id() {
    let catalog = catalog();
    let mut s = session();
    assert_eq!(
        s.stage(&catalog, &"tee-1".into()).unwrap(),
        StageOutcome::Staged
    );
    assert_eq!(
        s.stage(&catalog, &"tee-1".into()).unwrap(),
        StageOutcome::AlreadyStaged
    );
    assert_eq!(staged(&s), ["tee-1"]);
}

#[test]
fn staging_unknown_garments_fails() {
    let catalog = catalog();
    let mut s = session();
    assert!(matches!(
        s.stage(&catalog, &"nope".into()).unwrap_err(),
        VestiaryError::UnknownGarment(_)
    ));
    assert!(s.staging().is_empty());
}

#[test]
fn wearing_from_staging_moves_the_id() {
    let catalog = catalog();
    let mut s = session();
    s.stage(&catalog, &"tee-1".into()).unwrap();
    s.stage(&catalog, &"jeans-1".into()).unwrap();

    let outcome = s.wear(&catalog, &"tee-1".into()).unwrap();
    assert_eq!(
        outcome,
        WearOutcome {
            evicted: None,
            already_worn: false
        }
    );
    assert_eq!(staged(&s), ["jeans-1"]);
    assert_eq!(s.worn()[&Category::Tops].as_str(), "tee-1");
    assert_eq!(s.selected().map(|id| id.as_str()), Some("tee-1"));
}

#[test]
fn category_eviction_returns_the_occupant_to_queue_end() {
    let catalog = catalog();
    let mut s = session();
    s.stage(&catalog, &"tee-1".into()).unwrap();
    s.stage(&catalog, &"jeans-1".into()).unwrap();
    s.wear(&catalog, &"tee-1".into()).unwrap();

    // An unstaged second top replaces the worn one.
    let outcome = s.wear(&catalog, &"tee-2".into()).unwrap();
    assert_eq!(
        outcome.evicted.as_ref().map(|id| id.as_str()),
        Some("tee-1")
    );
    assert!(!outcome.already_worn);
    assert_eq!(staged(&s), ["jeans-1", "tee-1"]);
    assert_eq!(s.worn().len(), 1);
    assert_eq!(s.worn()[&Category::Tops].as_str(), "tee-2");
    assert_eq!(s.selected().map(|id| id.as_str()), Some("tee-2"));
}

#[test]
fn ids_are_conserved_across_wear_unwear_clear() {
    let catalog = catalog();
    let mut s = session();
    for id in ["tee-1", "jeans-1", "jacket-1"] {
        s.stage(&catalog, &id.into()).unwrap();
    }

    s.wear(&catalog, &"tee-1".into()).unwrap();
    s.wear(&catalog, &"tee-2".into()).unwrap(); // implicit stage-and-wear adds one id
    s.unwear(&"tee-2".into()).unwrap();
    s.clear_all();

    assert!(s.worn().is_empty());
    assert_eq!(staged(&s), ["jeans-1", "jacket-1", "tee-1", "tee-2"]);
}

#[test]
fn re_wearing_the_worn_garment_only_reselects() {
    let catalog = catalog();
    let mut s = session();
    s.wear(&catalog, &"tee-1".into()).unwrap();
    s.wear(&catalog, &"jeans-1".into()).unwrap();
    assert_eq!(s.selected().map(|id| id.as_str()), Some("jeans-1"));

    let outcome = s.wear(&catalog, &"tee-1".into()).unwrap();
    assert!(outcome.already_worn);
    assert!(outcome.evicted.is_none());
    assert_eq!(s.selected().map(|id| id.as_str()), Some("tee-1"));
    assert_eq!(s.worn().len(), 2);
    assert!(s.staging().is_empty());
}

#[test]
fn re_wear_consumes_a_staged_duplicate() {
    let catalog = catalog();
    let mut s = session();
    s.wear(&catalog, &"tee-1".into()).unwrap();
    s.stage(&catalog, &"tee-1".into()).unwrap();
    assert_eq!(staged(&s), ["tee-1"]);

    let outcome = s.wear(&catalog, &"tee-1".into()).unwrap();
    assert!(outcome.already_worn);
    assert!(s.staging().is_empty());
    assert_eq!(s.worn()[&Category::Tops].as_str(), "tee-1");
}

#[test]
fn unwear_returns_to_queue_end_and_clears_selection() {
    let catalog = catalog();
    let mut s = session();
    s.stage(&catalog, &"jeans-1".into()).unwrap();
    s.wear(&catalog, &"tee-1".into()).unwrap();

    s.unwear(&"tee-1".into()).unwrap();
    assert_eq!(staged(&s), ["jeans-1", "tee-1"]);
    assert!(s.worn().is_empty());
    assert!(s.selected().is_none());
}

#[test]
fn unwear_keeps_an_unrelated_selection() {
    let catalog = catalog();
    let mut s = session();
    s.wear(&catalog, &"tee-1".into()).unwrap();
    s.wear(&catalog, &"jeans-1".into()).unwrap();

    s.unwear(&"tee-1".into()).unwrap();
    assert_eq!(s.selected().map(|id| id.as_str()), Some("jeans-1"));
}

#[test]
fn unwear_of_an_unworn_garment_is_an_error() {
    let catalog = catalog();
    let mut s = session();
    s.stage(&catalog, &"tee-1".into()).unwrap();

    let err = s.unwear(&"tee-1".into()).unwrap_err();
    assert!(matches!(err, VestiaryError::NotWorn(_)));
    assert_eq!(staged(&s), ["tee-1"]);
}

#[test]
fn clear_all_appends_worn_in_category_order() {
    let catalog = catalog();
    let mut s = session();
    s.stage(&catalog, &"bag-1".into()).unwrap();
    // Wear out of category order on purpose.
    s.wear(&catalog, &"boots-1".into()).unwrap();
    s.wear(&catalog, &"tee-1".into()).unwrap();
    s.wear(&catalog, &"jeans-1".into()).unwrap();

    s.clear_all();
    assert_eq!(staged(&s), ["bag-1", "tee-1", "jeans-1", "boots-1"]);
    assert!(s.worn().is_empty());
    assert!(s.selected().is_none());
}

#[test]
fn recommendations_pick_catalog_ordered_complements() {
    let catalog = catalog();
    let s = session();

    let picks = s.recommendations_for(&catalog, &"tee-1".into()).unwrap();
    let ids: Vec<&str> = picks.iter().map(|g| g.id.as_str()).collect();
    // tee-2 shares the anchor category; the cap stops before bag-1.
    assert_eq!(ids, ["jeans-1", "jacket-1", "boots-1"]);
    assert_eq!(picks.len(), MAX_RECOMMENDATIONS);
}

#[test]
fn recommendations_skip_staged_and_worn_items() {
    let catalog = catalog();
    let mut s = session();
    s.stage(&catalog, &"jeans-1".into()).unwrap();
    s.wear(&catalog, &"jacket-1".into()).unwrap();

    let picks = s.recommendations_for(&catalog, &"tee-1".into()).unwrap();
    let ids: Vec<&str> = picks.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, ["boots-1", "bag-1"]);

    // A pure read: nothing moved.
    assert_eq!(staged(&s), ["jeans-1"]);
    assert_eq!(s.worn().len(), 1);
}

#[test]
fn recommendations_for_unknown_anchors_fail() {
    let catalog = catalog();
    let s = session();
    assert!(matches!(
        s.recommendations_for(&catalog, &"nope".into()).unwrap_err(),
        VestiaryError::UnknownGarment(_)
    ));
}

#[test]
fn pose_moves_accumulate_and_reset_restores_exactly() {
    let mut s = session();
    let start = s.pose();

    s.move_pose(Vec3::new(0.5, 0.0, -0.25));
    s.move_pose(Vec3::new(0.5, 1.0, 0.0));
    assert_eq!(s.pose().position, start.position + Vec3::new(1.0, 1.0, -0.25));

    s.rotate_pose(std::f32::consts::FRAC_PI_2);
    s.rotate_pose(std::f32::consts::FRAC_PI_2);
    assert_eq!(s.pose().rotation_rad.y, std::f32::consts::PI);

    s.reset_pose();
    assert_eq!(s.pose(), start);
}

#[test]
fn yaw_accumulates_without_wrapping() {
    let mut s = session();
    for _ in 0..4 {
        s.rotate_pose(std::f32::consts::PI);
    }
    let yaw = s.pose().rotation_rad.y;
    // Two full turns: kept as-is, never normalized back into [0, 2*pi).
    assert!(yaw > std::f32::consts::TAU);
    assert!((yaw - 4.0 * std::f32::consts::PI).abs() < 1e-4);
}
