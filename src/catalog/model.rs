use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::foundation::core::{Category, GarmentId, GarmentOffset, OutfitId};
use crate::foundation::error::{VestiaryError, VestiaryResult};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A single catalog clothing entry.
///
/// A garment is a pure data model that can be:
/// - built programmatically (see [`crate::GarmentBuilder`])
/// - serialized/deserialized via Serde (JSON)
///
/// Garments are created once by the catalog accessor and never mutated by a
/// fitting session; the session only moves references between its staging
/// queue and worn outfit.
pub struct Garment {
    /// Unique garment identifier.
    pub id: GarmentId,
    /// Category this garment occupies when worn.
    pub category: Category,
    /// Display name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Primary color name.
    pub color: String,
    /// Optional fabric description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fabric: Option<String>,
    /// Optional size label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Relative path to the 3D model consumed by the external renderer.
    pub model_ref: String,
    /// Placement offset relative to the avatar origin.
    #[serde(default)]
    pub offset: GarmentOffset,
    /// Qualitative fit label per body region, as supplied by catalog data.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fit_data: BTreeMap<String, FitLabel>,
    /// Optional cloth simulation hints passed through to the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physics_hints: Option<PhysicsHints>,
    /// Marks a recent catalog addition.
    #[serde(default)]
    pub is_new: bool,
    /// Marks a wishlisted item.
    #[serde(default)]
    pub is_wishlisted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Qualitative fit rating for one body region.
///
/// Labels come fixed from catalog data; no fit computation happens here.
pub enum FitLabel {
    /// Noticeably tighter than the regular cut.
    Tight,
    /// Close to the body.
    Fitted,
    /// Standard cut.
    Regular,
    /// Slightly looser than the regular cut.
    Relaxed,
    /// Noticeably looser than the regular cut.
    Loose,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Cloth simulation hints attached to a garment.
///
/// These values are never interpreted here; they are copied onto render
/// instructions when the session's physics flag is on, and the renderer owns
/// whatever simulation they configure.
pub struct PhysicsHints {
    /// Cloth mass.
    pub mass: f32,
    /// Cloth elasticity.
    pub elasticity: f32,
    /// Surface friction.
    pub friction: f32,
    /// Motion damping.
    pub damping: f32,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A previously saved outfit delivered by the catalog accessor.
pub struct SavedOutfit {
    /// Unique outfit identifier.
    pub id: OutfitId,
    /// User-facing outfit name.
    pub name: String,
    /// Garment ids making up the outfit.
    pub garment_ids: Vec<GarmentId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Garment {
    /// Validate garment invariants.
    pub fn validate(&self) -> VestiaryResult<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(VestiaryError::validation("garment id must be non-empty"));
        }
        if self.name.trim().is_empty() {
            return Err(VestiaryError::validation(format!(
                "garment '{}' name must be non-empty",
                self.id
            )));
        }
        if self.brand.trim().is_empty() {
            return Err(VestiaryError::validation(format!(
                "garment '{}' brand must be non-empty",
                self.id
            )));
        }
        if self.color.trim().is_empty() {
            return Err(VestiaryError::validation(format!(
                "garment '{}' color must be non-empty",
                self.id
            )));
        }
        if let Some(fabric) = &self.fabric
            && fabric.trim().is_empty()
        {
            return Err(VestiaryError::validation(format!(
                "garment '{}' fabric must be non-empty when set",
                self.id
            )));
        }
        if let Some(size) = &self.size
            && size.trim().is_empty()
        {
            return Err(VestiaryError::validation(format!(
                "garment '{}' size must be non-empty when set",
                self.id
            )));
        }
        validate_rel_source(&self.model_ref, &format!("garment '{}' model_ref", self.id))?;
        validate_offset(&self.offset, &format!("garment '{}' offset", self.id))?;

        for region in self.fit_data.keys() {
            if region.trim().is_empty() {
                return Err(VestiaryError::validation(format!(
                    "garment '{}' fit_data region must be non-empty",
                    self.id
                )));
            }
        }

        if let Some(hints) = &self.physics_hints {
            hints.validate(&format!("garment '{}'", self.id))?;
        }

        Ok(())
    }
}

impl PhysicsHints {
    /// Validate hint payload invariants.
    pub fn validate(&self, kind: &str) -> VestiaryResult<()> {
        for (name, value) in [
            ("mass", self.mass),
            ("elasticity", self.elasticity),
            ("friction", self.friction),
            ("damping", self.damping),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(VestiaryError::validation(format!(
                    "{kind} physics_hints.{name} must be finite and >= 0",
                )));
            }
        }
        Ok(())
    }
}

impl SavedOutfit {
    /// Validate outfit invariants.
    ///
    /// Garment ids are checked for well-formedness only; whether they resolve
    /// against the current catalog is a session bootstrap concern, since saved
    /// outfits may legitimately outlive catalog entries.
    pub fn validate(&self) -> VestiaryResult<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(VestiaryError::validation("outfit id must be non-empty"));
        }
        if self.name.trim().is_empty() {
            return Err(VestiaryError::validation(format!(
                "outfit '{}' name must be non-empty",
                self.id
            )));
        }
        if self.garment_ids.is_empty() {
            return Err(VestiaryError::validation(format!(
                "outfit '{}' must reference at least one garment",
                self.id
            )));
        }
        for id in &self.garment_ids {
            if id.as_str().trim().is_empty() {
                return Err(VestiaryError::validation(format!(
                    "outfit '{}' garment ids must be non-empty",
                    self.id
                )));
            }
        }
        Ok(())
    }
}

pub(crate) fn validate_rel_source(source: &str, field: &str) -> VestiaryResult<()> {
    if source.trim().is_empty() {
        return Err(VestiaryError::validation(format!(
            "{field} must be non-empty"
        )));
    }
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(VestiaryError::validation(format!(
            "{field} must be a relative path"
        )));
    }
    for part in s.split('/') {
        if part == ".." {
            return Err(VestiaryError::validation(format!(
                "{field} must not contain '..'"
            )));
        }
    }
    Ok(())
}

fn validate_offset(offset: &GarmentOffset, field: &str) -> VestiaryResult<()> {
    if !offset.position.is_finite() {
        return Err(VestiaryError::validation(format!(
            "{field} position must be finite"
        )));
    }
    if !offset.rotation_rad.is_finite() {
        return Err(VestiaryError::validation(format!(
            "{field} rotation_rad must be finite"
        )));
    }
    if !offset.scale.is_finite() || offset.scale.min_element() <= 0.0 {
        return Err(VestiaryError::validation(format!(
            "{field} scale must be finite and > 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
