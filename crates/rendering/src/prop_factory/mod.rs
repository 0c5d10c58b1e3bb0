//! Procedural prop factory: blueprints for houses, trees, fences, street
//! lamps and roads, and the systems that turn them into meshes under the
//! assembly part carriers.

pub mod blueprints;
mod materials;
mod systems;
pub mod types;

pub use blueprints::{
    blueprint_for, fence_blueprint, house_blueprint, road_blueprint, skyline_blueprint,
    street_lamp_blueprint, tree_blueprint,
};
pub use systems::{attach_prop_visuals, spawn_blueprint};
pub use types::{
    PieceMaterial, PieceShape, PropBlueprint, PropBody, PropLight, PropMaterials, PropPiece,
    PropVisualsAttached,
};

pub(crate) use materials::ensure_materials;
