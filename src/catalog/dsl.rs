use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::{
    catalog::model::{FitLabel, Garment, PhysicsHints, SavedOutfit},
    catalog::store::Catalog,
    foundation::core::{Category, GarmentId, GarmentOffset, OutfitId},
    foundation::error::{VestiaryError, VestiaryResult},
};

/// Builder for a single [`Garment`].
pub struct GarmentBuilder {
    id: GarmentId,
    category: Category,
    name: String,
    brand: String,
    color: String,
    fabric: Option<String>,
    size: Option<String>,
    model_ref: String,
    offset: GarmentOffset,
    fit_data: BTreeMap<String, FitLabel>,
    physics_hints: Option<PhysicsHints>,
    is_new: bool,
    is_wishlisted: bool,
}

impl GarmentBuilder {
    /// Start a garment with the required identity fields.
    pub fn new(id: impl Into<GarmentId>, category: Category, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category,
            name: name.into(),
            brand: String::new(),
            color: String::new(),
            fabric: None,
            size: None,
            model_ref: String::new(),
            offset: GarmentOffset::default(),
            fit_data: BTreeMap::new(),
            physics_hints: None,
            is_new: false,
            is_wishlisted: false,
        }
    }

    /// Set the brand name.
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the primary color name.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the fabric description.
    pub fn fabric(mut self, fabric: impl Into<String>) -> Self {
        self.fabric = Some(fabric.into());
        self
    }

    /// Set the size label.
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Set the relative model path consumed by the renderer.
    pub fn model_ref(mut self, model_ref: impl Into<String>) -> Self {
        self.model_ref = model_ref.into();
        self
    }

    /// Set the placement offset relative to the avatar origin.
    pub fn offset(mut self, offset: GarmentOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Add a per-region fit label.
    pub fn fit(mut self, region: impl Into<String>, label: FitLabel) -> Self {
        self.fit_data.insert(region.into(), label);
        self
    }

    /// Attach cloth simulation hints.
    pub fn physics_hints(mut self, hints: PhysicsHints) -> Self {
        self.physics_hints = Some(hints);
        self
    }

    /// Mark the garment as a new arrival.
    pub fn new_arrival(mut self, is_new: bool) -> Self {
        self.is_new = is_new;
        self
    }

    /// Mark the garment as wishlisted.
    pub fn wishlisted(mut self, is_wishlisted: bool) -> Self {
        self.is_wishlisted = is_wishlisted;
        self
    }

    /// Validate and build the garment.
    pub fn build(self) -> VestiaryResult<Garment> {
        let garment = Garment {
            id: self.id,
            category: self.category,
            name: self.name,
            brand: self.brand,
            color: self.color,
            fabric: self.fabric,
            size: self.size,
            model_ref: self.model_ref,
            offset: self.offset,
            fit_data: self.fit_data,
            physics_hints: self.physics_hints,
            is_new: self.is_new,
            is_wishlisted: self.is_wishlisted,
        };
        garment.validate()?;
        Ok(garment)
    }
}

/// Builder for a [`SavedOutfit`].
pub struct SavedOutfitBuilder {
    id: OutfitId,
    name: String,
    garment_ids: Vec<GarmentId>,
    created_at: DateTime<Utc>,
}

impl SavedOutfitBuilder {
    /// Start an outfit; `created_at` defaults to now.
    pub fn new(id: impl Into<OutfitId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            garment_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Append a garment id to the outfit.
    pub fn garment(mut self, id: impl Into<GarmentId>) -> Self {
        self.garment_ids.push(id.into());
        self
    }

    /// Override the creation timestamp.
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    /// Validate and build the outfit.
    pub fn build(self) -> VestiaryResult<SavedOutfit> {
        let outfit = SavedOutfit {
            id: self.id,
            name: self.name,
            garment_ids: self.garment_ids,
            created_at: self.created_at,
        };
        outfit.validate()?;
        Ok(outfit)
    }
}

#[derive(Default)]
/// Builder for a whole [`Catalog`].
pub struct CatalogBuilder {
    garments: Vec<Garment>,
    outfits: Vec<SavedOutfit>,
}

impl CatalogBuilder {
    /// Start an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a garment, rejecting duplicate ids eagerly.
    pub fn garment(mut self, garment: Garment) -> VestiaryResult<Self> {
        if self.garments.iter().any(|g| g.id == garment.id) {
            return Err(VestiaryError::validation(format!(
                "duplicate garment id '{}'",
                garment.id
            )));
        }
        self.garments.push(garment);
        Ok(self)
    }

    /// Append a saved outfit, rejecting duplicate ids eagerly.
    pub fn outfit(mut self, outfit: SavedOutfit) -> VestiaryResult<Self> {
        if self.outfits.iter().any(|o| o.id == outfit.id) {
            return Err(VestiaryError::validation(format!(
                "duplicate outfit id '{}'",
                outfit.id
            )));
        }
        self.outfits.push(outfit);
        Ok(self)
    }

    /// Validate and build the catalog.
    pub fn build(self) -> VestiaryResult<Catalog> {
        Catalog::new(self.garments, self.outfits)
    }
}
