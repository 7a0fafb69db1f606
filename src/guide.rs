//! # Vestiary guide (v0.2.0)
//!
//! This module is a standalone, end-to-end walkthrough of Vestiary's architecture and public API.
//! It is intentionally detailed so future phases (and external integrations) can build on a shared
//! mental model of what "a try-on" means in this codebase.
//!
//! If you are looking for copy/paste commands, start with the repository `README.md`.
//! If you are implementing new features, start here.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Catalog`](crate::Catalog): validated, immutable snapshot of garments and saved outfits
//! - [`Garment`](crate::Garment): one catalog entry (category, model reference, offset, hints)
//! - [`FittingSession`](crate::FittingSession): per-user try-on state (staging queue, worn
//!   outfit, selection, avatar pose)
//! - [`AvatarPose`](crate::AvatarPose): where the avatar stands and how it is turned
//! - [`RenderList`](crate::RenderList): ordered, renderer-agnostic draw list for one frame
//! - [`OutfitSink`](crate::OutfitSink): the seam where save/share snapshots leave the engine
//!
//! The pipeline is explicitly staged:
//!
//! 1. Load a catalog: [`Catalog::from_source`](crate::Catalog::from_source)
//! 2. Mutate the session: [`FittingSession::stage`](crate::FittingSession::stage),
//!    [`FittingSession::wear`](crate::FittingSession::wear),
//!    [`FittingSession::unwear`](crate::FittingSession::unwear), pose operations
//! 3. Project a frame: [`project`](crate::project)
//!
//! ---
//!
//! ## "No IO in the engine" (and why)
//!
//! Vestiary wants session mutation and projection to be deterministic, testable, and portable.
//! To do that, engine code never reaches into the filesystem (or network).
//! Instead:
//!
//! - catalog IO happens through [`CatalogSource`](crate::CatalogSource), front-loaded into a
//!   [`Catalog`](crate::Catalog) before any session exists
//! - persistence and sharing happen through [`OutfitSink`](crate::OutfitSink), after the engine
//!   has produced an [`OutfitSnapshot`](crate::OutfitSnapshot)
//!
//! The default source is [`JsonCatalogFile`](crate::JsonCatalogFile), which reads one JSON file.
//! [`LoggingOutfitSink`](crate::LoggingOutfitSink) is a development stand-in sink that logs and
//! discards.
//!
//! This design makes it straightforward to add a future source or sink backed by:
//! - an in-memory store
//! - a commerce backend
//! - a remote object store
//! without changing engine logic.
//!
//! ---
//!
//! ## One garment per category (Vestiary's outfit contract)
//!
//! The worn outfit holds **at most one garment per category**, always:
//!
//! - wearing into an occupied category evicts the occupant back to the staging queue
//! - the worn outfit iterates in canonical category order ([`Category::ALL`](crate::Category::ALL))
//! - the render list emits worn garments in that same order, after the avatar
//!
//! If you integrate Vestiary with an external renderer, this is the most important contract to
//! preserve: for unchanged session state, the draw list is identical call after call, so renderers
//! can diff or cache against it.
//!
//! ---
//!
//! ## Building a catalog (Rust DSL)
//!
//! JSON is supported via Serde, but for programmatic usage prefer the builder DSL.
//!
//! The following example builds a two-garment catalog, wears both pieces, and projects a frame.
//!
//! ```rust
//! use vestiary::{
//!     AvatarConfig, CatalogBuilder, Category, FittingSession, GarmentBuilder, project,
//! };
//!
//! # fn main() -> vestiary::VestiaryResult<()> {
//! let catalog = CatalogBuilder::new()
//!     .garment(
//!         GarmentBuilder::new("tee-1", Category::Tops, "Premium Cotton Tee")
//!             .brand("StyleCorp")
//!             .color("white")
//!             .model_ref("models/tshirt.glb")
//!             .build()?,
//!     )?
//!     .garment(
//!         GarmentBuilder::new("jeans-1", Category::Bottoms, "Black Jeans")
//!             .brand("DenimCo")
//!             .color("black")
//!             .model_ref("models/jeans.glb")
//!             .build()?,
//!     )?
//!     .build()?;
//!
//! let mut session = FittingSession::new(AvatarConfig::default())?;
//! session.wear(&catalog, &"tee-1".into())?;
//! session.wear(&catalog, &"jeans-1".into())?;
//!
//! let list = project(&session, &catalog)?;
//! assert_eq!(list.instructions.len(), 3); // avatar + two garments
//! assert_eq!(list.instructions[0].model_ref, "avatar.glb");
//! # Ok(())
//! # }
//! ```
//!
//! Notes:
//!
//! - [`Garment::validate`](crate::Garment::validate) is called by the builder.
//! - Wearing an unstaged catalog garment is allowed; it is an implicit stage-and-wear.
//!
//! ---
//!
//! ## Model paths and validation
//!
//! For `model_ref` fields (garments and the avatar), v0.2.0 enforces:
//!
//! - **relative** paths (no leading `/`)
//! - OS-agnostic separators (`\` normalized to `/`)
//! - no `..` components
//!
//! These checks happen during garment and avatar validation.
//!
//! Important: validation checks that the path is well-formed, but does not require that the file
//! exists. The engine never loads models; missing assets surface in the consuming renderer.
//!
//! ---
//!
//! ## Staging and wearing: the session state machine
//!
//! The session moves garment ids between two places, conserving them:
//!
//! - [`FittingSession::stage`](crate::FittingSession::stage) appends to the staging queue;
//!   staging an id twice reports [`StageOutcome::AlreadyStaged`](crate::StageOutcome) and
//!   changes nothing
//! - [`FittingSession::wear`](crate::FittingSession::wear) removes one staged occurrence (if
//!   any), evicts the category occupant (if any) back to the queue, and updates the selection
//! - [`FittingSession::unwear`](crate::FittingSession::unwear) returns a worn garment to the end
//!   of the queue; unwearing a garment that is not worn is an error
//! - [`FittingSession::clear_all`](crate::FittingSession::clear_all) returns every worn garment
//!   to the queue, keeping existing queue order first
//!
//! Recommendations ([`FittingSession::recommendations_for`](crate::FittingSession::recommendations_for))
//! are a pure read: up to [`MAX_RECOMMENDATIONS`](crate::MAX_RECOMMENDATIONS) catalog-ordered
//! garments from other categories that are not already staged or worn.
//!
//! ---
//!
//! ## Projection: from session to `RenderList`
//!
//! [`project`](crate::project) produces one [`RenderInstruction`](crate::RenderInstruction) per
//! drawn model:
//!
//! - the avatar comes first, placed at the session pose with an identity offset
//! - each worn garment follows in canonical category order, placed by
//!   [`compose_transform`](crate::compose_transform) (componentwise pose + offset; offsets are
//!   never rotated into the pose)
//! - garment [`PhysicsHints`](crate::PhysicsHints) pass through only while
//!   [`FittingSession::set_physics_enabled`](crate::FittingSession::set_physics_enabled) has
//!   turned the session flag on; the engine never interprets them
//!
//! Projection does not mutate the session, so callers may re-project freely after every
//! operation.
//!
//! ---
//!
//! ## Saving and sharing
//!
//! [`OutfitSnapshot::capture`](crate::OutfitSnapshot::capture) resolves the worn outfit into an
//! ordered, named list. Snapshots cross the [`OutfitSink`](crate::OutfitSink) seam:
//!
//! - `save_outfit` persists under a user-chosen name; sinks reject an empty outfit
//! - `share_outfit` hands the snapshot to whatever sharing transport the host provides
//!
//! Saved outfits come back through catalog data as [`SavedOutfit`](crate::SavedOutfit) entries,
//! and [`SessionBootstrap`](crate::SessionBootstrap) re-applies them to a fresh session
//! (best-effort; dangling references are logged and skipped, because links outlive catalog
//! snapshots).
