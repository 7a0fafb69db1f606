//! Render-list projection.
//!
//! [`project`] flattens a fitting session plus its catalog into an ordered,
//! renderer-agnostic draw list: the avatar first, then each worn garment in
//! canonical category order. The engine stops at this list; mesh loading,
//! lighting, and cloth draping belong to the consuming renderer.

use crate::{
    catalog::model::PhysicsHints,
    catalog::store::Catalog,
    foundation::core::{Category, GarmentOffset, WorldTransform},
    foundation::error::VestiaryResult,
    session::engine::FittingSession,
    transform::compose::compose_transform,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One model to draw, fully placed in world space.
pub struct RenderInstruction {
    /// Relative path of the model asset.
    pub model_ref: String,
    /// World placement after pose/offset composition.
    pub transform: WorldTransform,
    /// Cloth simulation hints, present only when session physics is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physics_hints: Option<PhysicsHints>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Ordered draw list for one projected frame.
pub struct RenderList {
    /// Instructions in draw order.
    pub instructions: Vec<RenderInstruction>,
}

#[tracing::instrument(skip(session, catalog))]
/// Project `session` into an ordered draw list.
///
/// The avatar renders first, placed at the session pose with an identity
/// offset, and never carries physics hints. Worn garments follow in canonical
/// category order, each placed by composing the avatar pose with the
/// garment's fitted offset. When session physics is on, garment hints pass
/// through to the instruction untouched; they are never interpreted here.
///
/// Projection is a pure read: the same session and catalog produce an
/// identical list every time.
pub fn project(session: &FittingSession, catalog: &Catalog) -> VestiaryResult<RenderList> {
    let mut instructions = Vec::with_capacity(1 + session.worn().len());
    instructions.push(RenderInstruction {
        model_ref: session.avatar().model_ref.clone(),
        transform: compose_transform(session.pose(), GarmentOffset::default()),
        physics_hints: None,
    });

    for id in session.worn().values() {
        let garment = catalog.garment(id)?;
        let physics_hints = if session.physics_enabled() {
            garment.physics_hints
        } else {
            None
        };
        instructions.push(RenderInstruction {
            model_ref: garment.model_ref.clone(),
            transform: compose_transform(session.pose(), garment.offset),
            physics_hints,
        });
    }

    Ok(RenderList { instructions })
}

/// Display glyph for a category, used by wardrobe listings.
pub fn category_glyph(category: Category) -> &'static str {
    match category {
        Category::Tops => "👕",
        Category::Bottoms => "👖",
        Category::Dresses => "👗",
        Category::Outerwear => "🧥",
        Category::Shoes => "👟",
        Category::Accessories => "👜",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/plan.rs"]
mod tests;
