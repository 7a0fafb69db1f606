use std::{
    collections::HashMap,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    catalog::model::{Garment, SavedOutfit},
    foundation::core::{GarmentId, OutfitId},
    foundation::error::{VestiaryError, VestiaryResult},
};

/// Read-only accessor delivering garments and saved outfits.
///
/// Implementations own whatever IO they need; [`Catalog::from_source`]
/// front-loads that IO once at session start so every later engine operation
/// stays pure.
pub trait CatalogSource {
    /// List every available garment in catalog order.
    fn list_garments(&self) -> VestiaryResult<Vec<Garment>>;

    /// List previously saved outfits.
    fn list_saved_outfits(&self) -> VestiaryResult<Vec<SavedOutfit>>;
}

#[derive(Clone, Debug)]
/// Immutable, validated snapshot of the clothing catalog.
///
/// Garment order is preserved from the source: recommendation derivation and
/// wardrobe listings both surface items in catalog order.
pub struct Catalog {
    garments: Vec<Garment>,
    ids_by_garment: HashMap<GarmentId, usize>,
    outfits: Vec<SavedOutfit>,
    ids_by_outfit: HashMap<OutfitId, usize>,
}

impl Catalog {
    /// Build a validated catalog from already-loaded entries.
    ///
    /// Rejects malformed entries and duplicate garment/outfit ids. Outfit
    /// garment references are not resolved here; stale references are handled
    /// at session bootstrap.
    pub fn new(garments: Vec<Garment>, outfits: Vec<SavedOutfit>) -> VestiaryResult<Self> {
        let mut ids_by_garment = HashMap::with_capacity(garments.len());
        for (index, garment) in garments.iter().enumerate() {
            garment.validate()?;
            if ids_by_garment.insert(garment.id.clone(), index).is_some() {
                return Err(VestiaryError::validation(format!(
                    "duplicate garment id '{}'",
                    garment.id
                )));
            }
        }

        let mut ids_by_outfit = HashMap::with_capacity(outfits.len());
        for (index, outfit) in outfits.iter().enumerate() {
            outfit.validate()?;
            if ids_by_outfit.insert(outfit.id.clone(), index).is_some() {
                return Err(VestiaryError::validation(format!(
                    "duplicate outfit id '{}'",
                    outfit.id
                )));
            }
        }

        Ok(Self {
            garments,
            ids_by_garment,
            outfits,
            ids_by_outfit,
        })
    }

    /// Build a catalog by querying `source` once.
    pub fn from_source(source: &dyn CatalogSource) -> VestiaryResult<Self> {
        let garments = source.list_garments()?;
        let outfits = source.list_saved_outfits()?;
        tracing::debug!(
            garments = garments.len(),
            outfits = outfits.len(),
            "catalog snapshot loaded"
        );
        Self::new(garments, outfits)
    }

    /// Lookup a garment, failing with [`VestiaryError::UnknownGarment`] when absent.
    pub fn garment(&self, id: &GarmentId) -> VestiaryResult<&Garment> {
        self.get(id)
            .ok_or_else(|| VestiaryError::unknown_garment(id))
    }

    /// Lookup a garment by id.
    pub fn get(&self, id: &GarmentId) -> Option<&Garment> {
        self.ids_by_garment
            .get(id)
            .map(|&index| &self.garments[index])
    }

    /// Whether a garment id exists in the catalog.
    pub fn contains(&self, id: &GarmentId) -> bool {
        self.ids_by_garment.contains_key(id)
    }

    /// All garments in catalog order.
    pub fn garments(&self) -> &[Garment] {
        &self.garments
    }

    /// Lookup a saved outfit by id.
    pub fn outfit(&self, id: &OutfitId) -> Option<&SavedOutfit> {
        self.ids_by_outfit
            .get(id)
            .map(|&index| &self.outfits[index])
    }

    /// All saved outfits in source order.
    pub fn outfits(&self) -> &[SavedOutfit] {
        &self.outfits
    }

    /// Number of garments in the catalog.
    pub fn len(&self) -> usize {
        self.garments.len()
    }

    /// Whether the catalog holds no garments.
    pub fn is_empty(&self) -> bool {
        self.garments.is_empty()
    }
}

#[derive(Clone, Debug)]
/// Catalog source backed by a single JSON file.
///
/// The file holds a `garments` array plus an optional `outfits` array; each
/// list call re-reads the file, and [`Catalog::from_source`] is the intended
/// way to snapshot it once.
pub struct JsonCatalogFile {
    path: PathBuf,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct CatalogFile {
    garments: Vec<Garment>,
    #[serde(default)]
    outfits: Vec<SavedOutfit>,
}

impl JsonCatalogFile {
    /// Build a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> VestiaryResult<CatalogFile> {
        let f = File::open(&self.path)
            .with_context(|| format!("open catalog '{}'", self.path.display()))?;
        let r = BufReader::new(f);
        serde_json::from_reader(r).map_err(|e| {
            VestiaryError::serde(format!("parse catalog '{}': {e}", self.path.display()))
        })
    }
}

impl CatalogSource for JsonCatalogFile {
    fn list_garments(&self) -> VestiaryResult<Vec<Garment>> {
        Ok(self.read_file()?.garments)
    }

    fn list_saved_outfits(&self) -> VestiaryResult<Vec<SavedOutfit>> {
        Ok(self.read_file()?.outfits)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/store.rs"]
mod tests;
