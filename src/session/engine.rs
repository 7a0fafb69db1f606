use std::collections::BTreeMap;

use crate::{
    catalog::model::{Garment, validate_rel_source},
    catalog::store::Catalog,
    foundation::core::{AvatarPose, Category, GarmentId, Vec3},
    foundation::error::{VestiaryError, VestiaryResult},
};

/// Maximum number of pairing recommendations returned per anchor garment.
pub const MAX_RECOMMENDATIONS: usize = 3;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Avatar asset reference and starting pose for a fitting session.
pub struct AvatarConfig {
    /// Relative path to the avatar model consumed by the renderer.
    pub model_ref: String,
    /// Pose the session starts with; `reset_pose` returns to it exactly.
    #[serde(default)]
    pub initial_pose: AvatarPose,
}

impl Default for AvatarConfig {
    /// Canonical fitting-room placement: `avatar.glb` stood at `(0, -1, 0)`.
    fn default() -> Self {
        Self {
            model_ref: "avatar.glb".to_string(),
            initial_pose: AvatarPose {
                position: Vec3::new(0.0, -1.0, 0.0),
                rotation_rad: Vec3::ZERO,
            },
        }
    }
}

impl AvatarConfig {
    /// Validate the avatar model reference.
    pub fn validate(&self) -> VestiaryResult<()> {
        validate_rel_source(&self.model_ref, "avatar model_ref")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Result of a staging request.
pub enum StageOutcome {
    /// The garment was appended to the staging queue.
    Staged,
    /// The garment was already staged; nothing changed.
    AlreadyStaged,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Result of a wear request.
pub struct WearOutcome {
    /// Previous occupant of the category, now back in the staging queue.
    pub evicted: Option<GarmentId>,
    /// The garment was already worn; only the selection changed.
    pub already_worn: bool,
}

#[derive(Clone, Debug)]
/// Mutable state of one virtual fitting-room session.
///
/// The session owns the staging queue, the worn outfit, the inspector
/// selection, and the avatar pose. It stores garment ids only; garment data
/// stays in the [`Catalog`], which is passed into the operations that resolve
/// ids.
///
/// Every operation is synchronous and runs to completion; it either fully
/// applies or fully rejects, and callers re-project after each one. The worn
/// outfit never holds two garments of the same category.
pub struct FittingSession {
    avatar: AvatarConfig,
    staging: Vec<GarmentId>,
    worn: BTreeMap<Category, GarmentId>,
    selected: Option<GarmentId>,
    pose: AvatarPose,
    initial_pose: AvatarPose,
    physics_enabled: bool,
}

impl FittingSession {
    /// Start an empty session for `avatar`.
    pub fn new(avatar: AvatarConfig) -> VestiaryResult<Self> {
        avatar.validate()?;
        let initial_pose = avatar.initial_pose;
        Ok(Self {
            avatar,
            staging: Vec::new(),
            worn: BTreeMap::new(),
            selected: None,
            pose: initial_pose,
            initial_pose,
            physics_enabled: false,
        })
    }

    /// Append a catalog garment to the staging queue.
    ///
    /// Staging an id already in the queue changes nothing and reports
    /// [`StageOutcome::AlreadyStaged`]; catalog browsers bulk-add without
    /// checking first.
    pub fn stage(&mut self, catalog: &Catalog, id: &GarmentId) -> VestiaryResult<StageOutcome> {
        let garment = catalog.garment(id)?;
        if self.staging.contains(&garment.id) {
            return Ok(StageOutcome::AlreadyStaged);
        }
        self.staging.push(garment.id.clone());
        Ok(StageOutcome::Staged)
    }

    #[tracing::instrument(skip(self, catalog))]
    /// Wear a catalog garment, evicting any current occupant of its category
    /// back to the staging queue.
    ///
    /// The garment may come from the staging queue or directly from the
    /// catalog (an unstaged wear is an implicit stage-and-wear). Re-wearing
    /// the garment already worn in its category updates only the selection
    /// and reports `already_worn = true`.
    pub fn wear(&mut self, catalog: &Catalog, id: &GarmentId) -> VestiaryResult<WearOutcome> {
        let garment = catalog.garment(id)?;
        let category = garment.category;

        if self.worn.get(&category) == Some(&garment.id) {
            remove_one(&mut self.staging, &garment.id);
            self.selected = Some(garment.id.clone());
            return Ok(WearOutcome {
                evicted: None,
                already_worn: true,
            });
        }

        remove_one(&mut self.staging, &garment.id);
        let evicted = self.worn.insert(category, garment.id.clone());
        if let Some(previous) = &evicted {
            self.staging.push(previous.clone());
            tracing::debug!(category = %category, evicted = %previous, "evicted to staging");
        }
        self.selected = Some(garment.id.clone());
        Ok(WearOutcome {
            evicted,
            already_worn: false,
        })
    }

    /// Take a worn garment off and return it to the end of the staging queue.
    ///
    /// Fails with [`VestiaryError::NotWorn`] when the id is not currently
    /// worn; state is unchanged in that case. A matching selection is
    /// cleared.
    pub fn unwear(&mut self, id: &GarmentId) -> VestiaryResult<()> {
        let Some(category) = self
            .worn
            .iter()
            .find_map(|(category, worn_id)| (worn_id == id).then_some(*category))
        else {
            return Err(VestiaryError::not_worn(id));
        };
        self.worn.remove(&category);
        self.staging.push(id.clone());
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        Ok(())
    }

    /// Return every worn garment to the staging queue and clear the
    /// selection.
    ///
    /// Existing staging order is kept; worn garments append after it in
    /// canonical category order.
    pub fn clear_all(&mut self) {
        let worn = std::mem::take(&mut self.worn);
        for (_, id) in worn {
            self.staging.push(id);
        }
        self.selected = None;
    }

    /// Up to [`MAX_RECOMMENDATIONS`] catalog garments that pair with `id`.
    ///
    /// Candidates surface in catalog order and must have a different id, a
    /// different category, and no presence in the staging queue or the worn
    /// outfit. Pure read; session state is untouched.
    pub fn recommendations_for<'c>(
        &self,
        catalog: &'c Catalog,
        id: &GarmentId,
    ) -> VestiaryResult<Vec<&'c Garment>> {
        let anchor = catalog.garment(id)?;
        let mut picks = Vec::new();
        for candidate in catalog.garments() {
            if candidate.id == anchor.id || candidate.category == anchor.category {
                continue;
            }
            if self.staging.contains(&candidate.id) || self.is_worn(&candidate.id) {
                continue;
            }
            picks.push(candidate);
            if picks.len() == MAX_RECOMMENDATIONS {
                break;
            }
        }
        Ok(picks)
    }

    /// Translate the avatar pose by `delta`.
    ///
    /// Unbounded: no collision or ground clamp happens here.
    pub fn move_pose(&mut self, delta: Vec3) {
        self.pose.position += delta;
    }

    /// Add a yaw delta in radians to the avatar rotation.
    ///
    /// Yaw accumulates without wrapping, so repeated turns in one direction
    /// grow monotonically; renderers may normalize for display.
    pub fn rotate_pose(&mut self, delta_yaw_rad: f32) {
        self.pose.rotation_rad.y += delta_yaw_rad;
    }

    /// Restore the pose captured at session start, exactly.
    pub fn reset_pose(&mut self) {
        self.pose = self.initial_pose;
    }

    /// Whether `id` is currently worn in any category.
    pub fn is_worn(&self, id: &GarmentId) -> bool {
        self.worn.values().any(|worn_id| worn_id == id)
    }

    /// Whether render projections attach garment physics hints.
    pub fn physics_enabled(&self) -> bool {
        self.physics_enabled
    }

    /// Toggle pass-through of garment physics hints to the renderer.
    pub fn set_physics_enabled(&mut self, enabled: bool) {
        self.physics_enabled = enabled;
    }

    /// Avatar configuration for this session.
    pub fn avatar(&self) -> &AvatarConfig {
        &self.avatar
    }

    /// Staged garment ids in queue order.
    pub fn staging(&self) -> &[GarmentId] {
        &self.staging
    }

    /// Worn garment ids keyed by category.
    pub fn worn(&self) -> &BTreeMap<Category, GarmentId> {
        &self.worn
    }

    /// Currently inspected garment id, if any.
    pub fn selected(&self) -> Option<&GarmentId> {
        self.selected.as_ref()
    }

    /// Current avatar pose.
    pub fn pose(&self) -> AvatarPose {
        self.pose
    }

    /// Pose captured at session start.
    pub fn initial_pose(&self) -> AvatarPose {
        self.initial_pose
    }
}

/// Remove the first staged occurrence of `id`, if any.
fn remove_one(staging: &mut Vec<GarmentId>, id: &GarmentId) -> bool {
    if let Some(index) = staging.iter().position(|staged| staged == id) {
        staging.remove(index);
        return true;
    }
    false
}

#[cfg(test)]
#[path = "../../tests/unit/session/engine.rs"]
mod tests;
