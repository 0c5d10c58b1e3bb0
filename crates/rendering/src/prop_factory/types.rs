use std::collections::HashMap;

use bevy::prelude::*;

// ---------------------------------------------------------------------------
// Blueprint description
// ---------------------------------------------------------------------------

/// Geometry of one piece, in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PieceShape {
    Cuboid {
        width: f32,
        height: f32,
        depth: f32,
    },
    /// Cylinder with different top and bottom radii.
    Frustum {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        sides: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        sides: u32,
    },
    Sphere {
        radius: f32,
        segments: u32,
    },
}

/// Surface of a piece. Each variant maps to one shared material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceMaterial {
    Brick,
    WindowGlass,
    Roof,
    Door,
    Bark,
    Foliage,
    FenceWood,
    LampMetal,
    LampBulb,
    Asphalt,
    RoadLine,
    Skyline,
}

impl PieceMaterial {
    pub const ALL: [PieceMaterial; 12] = [
        PieceMaterial::Brick,
        PieceMaterial::WindowGlass,
        PieceMaterial::Roof,
        PieceMaterial::Door,
        PieceMaterial::Bark,
        PieceMaterial::Foliage,
        PieceMaterial::FenceWood,
        PieceMaterial::LampMetal,
        PieceMaterial::LampBulb,
        PieceMaterial::Asphalt,
        PieceMaterial::RoadLine,
        PieceMaterial::Skyline,
    ];
}

/// One mesh of a prop, positioned relative to the prop body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropPiece {
    pub shape: PieceShape,
    /// Centre of the piece.
    pub offset: Vec3,
    pub yaw: f32,
    pub material: PieceMaterial,
    pub casts_shadow: bool,
}

/// A point light carried by a prop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropLight {
    pub offset: Vec3,
    pub color: Color,
    pub intensity: f32,
    pub range: f32,
}

/// Fully-described prop: what `spawn_blueprint` turns into entities.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropBlueprint {
    /// Designed orientation of the whole prop about Y.
    pub yaw: f32,
    pub pieces: Vec<PropPiece>,
    pub lights: Vec<PropLight>,
}

impl PropBlueprint {
    pub fn with_yaw(yaw: f32) -> Self {
        Self {
            yaw,
            ..default()
        }
    }

    pub fn piece(
        &mut self,
        shape: PieceShape,
        offset: Vec3,
        material: PieceMaterial,
    ) -> &mut PropPiece {
        self.pieces.push(PropPiece {
            shape,
            offset,
            yaw: 0.0,
            material,
            casts_shadow: true,
        });
        let last = self.pieces.len() - 1;
        &mut self.pieces[last]
    }
}

// ---------------------------------------------------------------------------
// Components / resources
// ---------------------------------------------------------------------------

/// Child of a part carrier holding the prop's meshes and its designed yaw.
#[derive(Component)]
pub struct PropBody;

/// Marker placed on carriers once their visuals are attached.
#[derive(Component)]
pub struct PropVisualsAttached;

/// Shared material handles, one per `PieceMaterial`.
#[derive(Resource, Clone)]
pub struct PropMaterials {
    pub handles: HashMap<PieceMaterial, Handle<StandardMaterial>>,
}

impl PropMaterials {
    pub fn get(&self, material: PieceMaterial) -> Handle<StandardMaterial> {
        self.handles.get(&material).cloned().unwrap_or_default()
    }
}
