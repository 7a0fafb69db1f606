pub use glam::Vec3;

#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Stable identifier of a catalog garment.
pub struct GarmentId(pub String);

impl GarmentId {
    /// Build an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GarmentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for GarmentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&GarmentId> for GarmentId {
    fn from(id: &GarmentId) -> Self {
        id.clone()
    }
}

impl std::fmt::Display for GarmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Stable identifier of a saved outfit.
pub struct OutfitId(pub String);

impl OutfitId {
    /// Build an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OutfitId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OutfitId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OutfitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Closed set of garment categories.
///
/// Declaration order doubles as the canonical category order: worn-outfit
/// iteration and render-list emission both follow it, so renderers see a
/// stable sequence for unchanged state.
pub enum Category {
    /// Shirts, tees, and blouses.
    Tops,
    /// Trousers, jeans, and skirts.
    Bottoms,
    /// One-piece dresses.
    Dresses,
    /// Jackets and coats layered over tops.
    Outerwear,
    /// Footwear.
    Shoes,
    /// Bags, belts, and similar extras.
    Accessories,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 6] = [
        Category::Tops,
        Category::Bottoms,
        Category::Dresses,
        Category::Outerwear,
        Category::Shoes,
        Category::Accessories,
    ];

    /// Lowercase wire name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Dresses => "dresses",
            Category::Outerwear => "outerwear",
            Category::Shoes => "shoes",
            Category::Accessories => "accessories",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Garment placement relative to the avatar origin.
///
/// Offsets are defined in avatar-local axis-aligned space: they are added to
/// the avatar pose componentwise, never rotated into it.
pub struct GarmentOffset {
    /// Position offset added to the avatar position.
    #[serde(default)]
    pub position: Vec3,
    /// Euler rotation offset in radians, added to the avatar rotation.
    #[serde(default)]
    pub rotation_rad: Vec3,
    /// Per-axis scale; passes through to the world transform unchanged.
    #[serde(default = "default_offset_scale")]
    pub scale: Vec3, // default (1,1,1)
}

impl Default for GarmentOffset {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation_rad: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

fn default_offset_scale() -> Vec3 {
    Vec3::ONE
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Avatar placement in the scene, independent of any garment.
pub struct AvatarPose {
    /// World position.
    #[serde(default)]
    pub position: Vec3,
    /// Euler rotation in radians; yaw is the `y` component.
    #[serde(default)]
    pub rotation_rad: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Fully resolved world-space placement handed to the renderer.
pub struct WorldTransform {
    /// World position.
    pub position: Vec3,
    /// Euler rotation in radians.
    pub rotation_rad: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}
