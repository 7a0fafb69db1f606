use crate::foundation::core::GarmentId;

/// Convenience result type used across Vestiary.
pub type VestiaryResult<T> = Result<T, VestiaryError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum VestiaryError {
    /// Invalid user-provided or catalog data.
    #[error("validation error: {0}")]
    Validation(String),

    /// An operation referenced a garment id absent from the catalog.
    #[error("unknown garment '{0}'")]
    UnknownGarment(GarmentId),

    /// A removal targeted a garment that is not currently worn.
    #[error("garment '{0}' is not worn")]
    NotWorn(GarmentId),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VestiaryError {
    /// Build a [`VestiaryError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VestiaryError::UnknownGarment`] value.
    pub fn unknown_garment(id: impl Into<GarmentId>) -> Self {
        Self::UnknownGarment(id.into())
    }

    /// Build a [`VestiaryError::NotWorn`] value.
    pub fn not_worn(id: impl Into<GarmentId>) -> Self {
        Self::NotWorn(id.into())
    }

    /// Build a [`VestiaryError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
