use std::collections::HashMap;

use bevy::prelude::*;

use crate::brick_texture::brick_image;

use super::types::{PieceMaterial, PropMaterials};

// ---------------------------------------------------------------------------
// Material table
// ---------------------------------------------------------------------------

/// Surface parameters for a piece material. Brick gets its texture attached
/// separately in `ensure_materials`.
pub(crate) fn material_for(kind: PieceMaterial) -> StandardMaterial {
    match kind {
        PieceMaterial::Brick => StandardMaterial {
            perceptual_roughness: 0.8,
            metallic: 0.2,
            ..default()
        },
        PieceMaterial::WindowGlass => StandardMaterial {
            base_color: Color::srgb_u8(0x87, 0xCE, 0xEB),
            emissive: Color::srgb_u8(0x4A, 0x90, 0xE2).to_linear() * 0.3,
            ..default()
        },
        PieceMaterial::Roof => StandardMaterial {
            base_color: Color::srgb_u8(0x8B, 0x45, 0x13),
            perceptual_roughness: 0.9,
            ..default()
        },
        PieceMaterial::Door => StandardMaterial {
            base_color: Color::srgb_u8(0x65, 0x43, 0x21),
            ..default()
        },
        PieceMaterial::Bark => StandardMaterial {
            base_color: Color::srgb_u8(0x8B, 0x45, 0x13),
            perceptual_roughness: 1.0,
            ..default()
        },
        PieceMaterial::Foliage => StandardMaterial {
            base_color: Color::srgb_u8(0x22, 0x8B, 0x22),
            perceptual_roughness: 0.8,
            ..default()
        },
        PieceMaterial::FenceWood => StandardMaterial {
            base_color: Color::srgb_u8(0xD2, 0x69, 0x1E),
            perceptual_roughness: 0.9,
            ..default()
        },
        PieceMaterial::LampMetal => StandardMaterial {
            base_color: Color::srgb_u8(0x44, 0x44, 0x44),
            metallic: 0.7,
            perceptual_roughness: 0.3,
            ..default()
        },
        PieceMaterial::LampBulb => StandardMaterial {
            base_color: Color::srgb_u8(0xFF, 0xFF, 0xAA),
            emissive: LinearRgba::rgb(1.0, 1.0, 0.0) * 0.8,
            ..default()
        },
        PieceMaterial::Asphalt => StandardMaterial {
            base_color: Color::srgb_u8(0x40, 0x40, 0x40),
            perceptual_roughness: 0.95,
            ..default()
        },
        PieceMaterial::RoadLine => StandardMaterial {
            base_color: Color::WHITE,
            ..default()
        },
        // Distant silhouettes; flat so they read as a backdrop.
        PieceMaterial::Skyline => StandardMaterial {
            base_color: Color::srgb(0.42, 0.48, 0.58),
            perceptual_roughness: 1.0,
            unlit: true,
            ..default()
        },
    }
}

/// Return the shared prop materials, creating and inserting them on first
/// use.
pub(crate) fn ensure_materials(
    commands: &mut Commands,
    materials: &mut Assets<StandardMaterial>,
    images: &mut Assets<Image>,
    existing: &Option<Res<PropMaterials>>,
) -> PropMaterials {
    if let Some(ref m) = existing {
        return (**m).clone();
    }

    let brick_texture = images.add(brick_image());

    let handles: HashMap<_, _> = PieceMaterial::ALL
        .iter()
        .map(|&kind| {
            let mut material = material_for(kind);
            if kind == PieceMaterial::Brick {
                material.base_color_texture = Some(brick_texture.clone());
            }
            (kind, materials.add(material))
        })
        .collect();

    let prop_materials = PropMaterials { handles };
    commands.insert_resource(prop_materials.clone());
    prop_materials
}
