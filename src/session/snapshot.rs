//! Outfit snapshots and the save/share seam.
//!
//! A snapshot is a point-in-time, resolved copy of the worn outfit in
//! canonical category order. Snapshots cross the [`OutfitSink`] seam to
//! whatever persistence or sharing transport the host application provides;
//! the engine itself never touches storage.

use crate::{
    catalog::store::Catalog,
    foundation::core::GarmentId,
    foundation::error::{VestiaryError, VestiaryResult},
    session::engine::FittingSession,
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// One worn garment in a snapshot, resolved to its display name.
pub struct OutfitEntry {
    /// Garment id, stable across catalog snapshots.
    pub id: GarmentId,
    /// Display name at capture time.
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Resolved copy of the worn outfit, ordered by canonical category order.
pub struct OutfitSnapshot {
    /// Worn garments, one per occupied category.
    pub entries: Vec<OutfitEntry>,
}

impl OutfitSnapshot {
    /// Capture the worn outfit of `session`, resolving names via `catalog`.
    ///
    /// Fails with [`VestiaryError::UnknownGarment`] when a worn id does not
    /// resolve, which can happen if the catalog snapshot changed under a
    /// long-lived session.
    pub fn capture(session: &FittingSession, catalog: &Catalog) -> VestiaryResult<Self> {
        let mut entries = Vec::with_capacity(session.worn().len());
        for id in session.worn().values() {
            let garment = catalog.garment(id)?;
            entries.push(OutfitEntry {
                id: garment.id.clone(),
                name: garment.name.clone(),
            });
        }
        Ok(Self { entries })
    }

    /// Number of garments in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot holds no garments.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Destination for captured outfits.
///
/// Hosts implement this to persist outfits or to hand them to a sharing
/// transport.
pub trait OutfitSink {
    /// Persist `snapshot` under a user-chosen `name`.
    ///
    /// Implementations must reject an empty snapshot; there is nothing to
    /// restore from one.
    fn save_outfit(&mut self, name: &str, snapshot: &OutfitSnapshot) -> VestiaryResult<()>;

    /// Hand `snapshot` to the sharing transport.
    fn share_outfit(&mut self, snapshot: &OutfitSnapshot) -> VestiaryResult<()>;
}

#[derive(Clone, Copy, Debug, Default)]
/// Sink that logs snapshots and discards them.
///
/// Useful as a development stand-in while a host wires up real persistence.
pub struct LoggingOutfitSink;

impl OutfitSink for LoggingOutfitSink {
    fn save_outfit(&mut self, name: &str, snapshot: &OutfitSnapshot) -> VestiaryResult<()> {
        if snapshot.is_empty() {
            return Err(VestiaryError::validation("cannot save an empty outfit"));
        }
        tracing::info!(outfit = name, garments = snapshot.len(), "outfit snapshot saved");
        Ok(())
    }

    fn share_outfit(&mut self, snapshot: &OutfitSnapshot) -> VestiaryResult<()> {
        tracing::info!(garments = snapshot.len(), "outfit snapshot shared");
        Ok(())
    }
}
