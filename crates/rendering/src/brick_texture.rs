//! Procedural brick texture for house walls.

use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

pub const BRICK_TEX_SIZE: usize = 256;
pub const BRICK_WIDTH: usize = 64;
pub const BRICK_HEIGHT: usize = 32;
/// Every other course is shifted by half a brick.
pub const COURSE_OFFSET: usize = 32;

pub const BRICK_RGBA: [u8; 4] = [0xC1, 0x4A, 0x3A, 0xFF];
pub const MORTAR_RGBA: [u8; 4] = [0x8B, 0x36, 0x26, 0xFF];

/// True when pixel `(x, y)` falls on a 2 px mortar line.
pub fn is_mortar(x: usize, y: usize) -> bool {
    let course = y / BRICK_HEIGHT;
    if y % BRICK_HEIGHT < 2 {
        return true;
    }
    let shift = if course % 2 == 1 { COURSE_OFFSET } else { 0 };
    (x + shift) % BRICK_WIDTH < 2
}

/// Raw RGBA8 pixels, row-major, `size` square.
pub fn brick_pixels(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size * size * 4);
    for y in 0..size {
        for x in 0..size {
            let rgba = if is_mortar(x, y) {
                MORTAR_RGBA
            } else {
                BRICK_RGBA
            };
            data.extend_from_slice(&rgba);
        }
    }
    data
}

pub fn brick_image() -> Image {
    let size = BRICK_TEX_SIZE as u32;
    let mut image = Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        brick_pixels(BRICK_TEX_SIZE),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    );
    // Tiles across the house walls.
    image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::Repeat,
        ..ImageSamplerDescriptor::linear()
    });
    image
}
