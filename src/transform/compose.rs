//! Pose/offset composition helpers.

use crate::foundation::core::{AvatarPose, GarmentOffset, WorldTransform};

#[inline]
/// Combine the avatar pose with a garment's local offset.
///
/// Canonical composition:
/// - position: componentwise sum (offsets live in avatar-local axis-aligned
///   space and are never rotated into the pose)
/// - rotation: componentwise sum of Euler angles
/// - scale: passes through from the offset (a pose carries no scale)
///
/// Deterministic and side-effect free; called once per worn garment per
/// projection.
pub fn compose_transform(pose: AvatarPose, offset: GarmentOffset) -> WorldTransform {
    WorldTransform {
        position: pose.position + offset.position,
        rotation_rad: pose.rotation_rad + offset.rotation_rad,
        scale: offset.scale,
    }
}
