//! Deep-link session bootstrap.
//!
//! Fitting sessions can start from a shared link that references a single
//! catalog item, a saved outfit, or both. Bootstrapping is best-effort: links
//! outlive catalog snapshots, so references that no longer resolve are logged
//! and skipped instead of failing the whole session.

use crate::{
    catalog::store::Catalog,
    foundation::core::{GarmentId, OutfitId},
    session::engine::FittingSession,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Starting references for a new session, typically parsed from a share link.
pub struct SessionBootstrap {
    /// Garment to stage once the session exists.
    pub initial_item: Option<GarmentId>,
    /// Saved outfit whose garments are worn, in stored order.
    pub initial_outfit: Option<OutfitId>,
}

impl SessionBootstrap {
    /// Apply the bootstrap references to a fresh `session`.
    ///
    /// The outfit is applied first (each garment worn in stored order), then
    /// the single item is staged. Every reference that fails to resolve
    /// against `catalog` is skipped with a warning; the session keeps
    /// whatever did resolve.
    pub fn apply(&self, session: &mut FittingSession, catalog: &Catalog) {
        if let Some(outfit_id) = &self.initial_outfit {
            match catalog.outfit(outfit_id) {
                Some(outfit) => {
                    for garment_id in &outfit.garment_ids {
                        if let Err(error) = session.wear(catalog, garment_id) {
                            tracing::warn!(
                                outfit = %outfit_id,
                                garment = %garment_id,
                                %error,
                                "skipping unresolvable outfit garment"
                            );
                        }
                    }
                }
                None => {
                    tracing::warn!(outfit = %outfit_id, "skipping unknown outfit reference");
                }
            }
        }

        if let Some(item_id) = &self.initial_item
            && let Err(error) = session.stage(catalog, item_id)
        {
            tracing::warn!(item = %item_id, %error, "skipping unknown item reference");
        }
    }
}
