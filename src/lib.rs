//! Vestiary is an outfit composition engine for virtual fitting rooms.
//!
//! Vestiary v0.2.0 focuses on a deterministic, renderer-agnostic core that turns a
//! garment catalog plus per-session try-on state into an ordered draw list (`RenderList`).
//!
//! # Pipeline overview
//!
//! 1. **Load**: `CatalogSource -> Catalog` (validated garments and saved outfits)
//! 2. **Fit**: `FittingSession` operations (stage, wear, unwear, pose) move garment ids
//!    between the staging queue and the worn outfit
//! 3. **Project**: `FittingSession + Catalog -> RenderList` (avatar first, then worn
//!    garments in canonical category order)
//!
//! The key design constraints in v0.2.0:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: projection is pure and stable for a given session + catalog.
//! - **No IO in the engine**: catalog IO is front-loaded in [`CatalogSource`] implementations,
//!   and persistence sits behind [`OutfitSink`].
//! - **At most one garment per category** on the worn outfit, maintained by every operation.
//!
//! # Getting started
//!
//! - For end-user usage, see the repository README.
//! - For a detailed, standalone walkthrough of the API and architecture, see [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod catalog;
mod foundation;
mod session;
mod transform;
mod view;

/// High-level, standalone documentation for Vestiary's concepts and architecture.
pub mod guide;

pub use catalog::dsl::{CatalogBuilder, GarmentBuilder, SavedOutfitBuilder};
pub use catalog::model::{FitLabel, Garment, PhysicsHints, SavedOutfit};
pub use catalog::query::{
    WardrobeFilter, brand_facets, category_counts, color_facets, filter_garments,
};
pub use catalog::store::{Catalog, CatalogSource, JsonCatalogFile};
pub use foundation::core::{
    AvatarPose, Category, GarmentId, GarmentOffset, OutfitId, Vec3, WorldTransform,
};
pub use foundation::error::{VestiaryError, VestiaryResult};
pub use session::bootstrap::SessionBootstrap;
pub use session::engine::{
    AvatarConfig, FittingSession, MAX_RECOMMENDATIONS, StageOutcome, WearOutcome,
};
pub use session::snapshot::{LoggingOutfitSink, OutfitEntry, OutfitSink, OutfitSnapshot};
pub use transform::compose::compose_transform;
pub use view::plan::{RenderInstruction, RenderList, category_glyph, project};
