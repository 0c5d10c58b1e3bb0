use std::f32::consts::FRAC_PI_4;

use bevy::prelude::*;

use assembly::parts::{PropKind, PropSpec};

use super::types::{PieceMaterial, PieceShape, PropBlueprint, PropLight};

// ---------------------------------------------------------------------------
// Prop builders
// ---------------------------------------------------------------------------
//
// Every builder is a pure function of its arguments. Offsets are relative to
// the prop body, whose origin sits on the prop's footprint.

/// Brick house: body, two front windows, a four-sided roof and a door.
///
/// Proportions scale with `size`; window and door panels keep a fixed size.
pub fn house_blueprint(size: f32) -> PropBlueprint {
    let mut bp = PropBlueprint::default();

    bp.piece(
        PieceShape::Cuboid {
            width: 2.0 * size,
            height: 3.0 * size,
            depth: 2.0 * size,
        },
        Vec3::new(0.0, 1.5 * size, 0.0),
        PieceMaterial::Brick,
    );

    for i in 0..2 {
        bp.piece(
            PieceShape::Cuboid {
                width: 0.4,
                height: 0.5,
                depth: 0.1,
            },
            Vec3::new(-0.6 + i as f32 * 1.2, 2.0 * size, 1.01 * size),
            PieceMaterial::WindowGlass,
        );
    }

    // Four sides turned 45 degrees so the roof edges line up with the walls.
    bp.piece(
        PieceShape::Cone {
            radius: 1.7 * size,
            height: 1.5 * size,
            sides: 4,
        },
        Vec3::new(0.0, 3.75 * size, 0.0),
        PieceMaterial::Roof,
    )
    .yaw = FRAC_PI_4;

    bp.piece(
        PieceShape::Cuboid {
            width: 0.6,
            height: 1.0,
            depth: 0.1,
        },
        Vec3::new(0.0, 0.5 * size, 1.01 * size),
        PieceMaterial::Door,
    );

    bp
}

/// Round tree: tapered trunk under a spherical crown.
pub fn tree_blueprint(size: f32) -> PropBlueprint {
    let mut bp = PropBlueprint::default();

    bp.piece(
        PieceShape::Frustum {
            radius_top: 0.3 * size,
            radius_bottom: 0.4 * size,
            height: 2.0 * size,
            sides: 8,
        },
        Vec3::new(0.0, size, 0.0),
        PieceMaterial::Bark,
    );

    bp.piece(
        PieceShape::Sphere {
            radius: 1.2 * size,
            segments: 8,
        },
        Vec3::new(0.0, 2.5 * size, 0.0),
        PieceMaterial::Foliage,
    );

    bp
}

/// Fence section: four posts joined by two rails.
pub fn fence_blueprint(yaw: f32) -> PropBlueprint {
    let mut bp = PropBlueprint::with_yaw(yaw);

    for i in 0..4 {
        bp.piece(
            PieceShape::Cuboid {
                width: 0.2,
                height: 1.8,
                depth: 0.2,
            },
            Vec3::new(i as f32 - 1.5, 0.9, 0.0),
            PieceMaterial::FenceWood,
        );
    }

    for rail_y in [1.2, 0.6] {
        bp.piece(
            PieceShape::Cuboid {
                width: 3.5,
                height: 0.15,
                depth: 0.15,
            },
            Vec3::new(0.0, rail_y, 0.0),
            PieceMaterial::FenceWood,
        );
    }

    bp
}

/// Lamp head height above the footprint.
pub const LAMP_HEAD_Y: f32 = 3.5;

/// Street lamp: metal pole, glowing bulb and a short-range warm light.
pub fn street_lamp_blueprint() -> PropBlueprint {
    let mut bp = PropBlueprint::default();

    bp.piece(
        PieceShape::Frustum {
            radius_top: 0.1,
            radius_bottom: 0.12,
            height: LAMP_HEAD_Y,
            sides: 8,
        },
        Vec3::new(0.0, LAMP_HEAD_Y * 0.5, 0.0),
        PieceMaterial::LampMetal,
    );

    bp.piece(
        PieceShape::Sphere {
            radius: 0.3,
            segments: 8,
        },
        Vec3::new(0.0, LAMP_HEAD_Y, 0.0),
        PieceMaterial::LampBulb,
    );

    bp.lights.push(PropLight {
        offset: Vec3::new(0.0, LAMP_HEAD_Y, 0.0),
        color: Color::srgb(1.0, 1.0, 0.0),
        intensity: 40_000.0,
        range: 10.0,
    });

    bp
}

/// Road slab with a painted centre line. The slab only receives shadows.
pub fn road_blueprint(length: f32, yaw: f32) -> PropBlueprint {
    let mut bp = PropBlueprint::with_yaw(yaw);

    bp.piece(
        PieceShape::Cuboid {
            width: length,
            height: 0.2,
            depth: 3.0,
        },
        Vec3::new(0.0, 0.5, 0.0),
        PieceMaterial::Asphalt,
    )
    .casts_shadow = false;

    bp.piece(
        PieceShape::Cuboid {
            width: length * 0.8,
            height: 0.25,
            depth: 0.2,
        },
        Vec3::new(0.0, 0.65, 0.0),
        PieceMaterial::RoadLine,
    )
    .casts_shadow = false;

    bp
}

/// Blueprint for a part's prop spec.
///
/// Houses, trees and lamps are rotationally plain; only fences and roads
/// carry the placement yaw.
pub fn blueprint_for(spec: &PropSpec) -> PropBlueprint {
    match spec.kind {
        PropKind::House { size } => house_blueprint(size),
        PropKind::Tree { size } => tree_blueprint(size),
        PropKind::Fence => fence_blueprint(spec.yaw),
        PropKind::StreetLamp => street_lamp_blueprint(),
        PropKind::Road { length } => road_blueprint(length, spec.yaw),
    }
}

// ---------------------------------------------------------------------------
// Placeholder skyline
// ---------------------------------------------------------------------------

/// Number of blocks in the placeholder skyline.
pub const SKYLINE_BLOCKS: u32 = 14;

/// Low-poly skyline used when the backdrop texture cannot be loaded.
///
/// Blocks stand on `base_y` and spread over `width` centred on X = 0.
/// Heights come from a fixed hash of the block index, so the placeholder is
/// identical on every run.
pub fn skyline_blueprint(width: f32, base_y: f32) -> PropBlueprint {
    let mut bp = PropBlueprint::default();
    let block_width = width / SKYLINE_BLOCKS as f32;

    for i in 0..SKYLINE_BLOCKS {
        let hash = i.wrapping_mul(7).wrapping_add(3).wrapping_mul(13) % 11;
        let height = 6.0 + hash as f32 * 2.2;
        let x = -width * 0.5 + (i as f32 + 0.5) * block_width;
        bp.piece(
            PieceShape::Cuboid {
                width: block_width * 0.9,
                height,
                depth: 1.0,
            },
            Vec3::new(x, base_y + height * 0.5, 0.0),
            PieceMaterial::Skyline,
        )
        .casts_shadow = false;
    }

    bp
}
