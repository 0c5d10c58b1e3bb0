//! Seeded scatter of the miniature town.
//!
//! All randomness is drawn here, from the caller's RNG, in a fixed order:
//! houses, trees, fences, street lamps, then roads. The prop factory only
//! ever sees the sampled numbers.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::ops::Range;

use rand::Rng;

use crate::config::START_HEIGHT_BASE;
use crate::parts::{AssemblyPart, PropKind, PropSpec};

/// One part to spawn: what to build and how it animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartSpec {
    pub prop: PropSpec,
    pub part: AssemblyPart,
}

pub const HOUSE_COUNT: usize = 8;
pub const TREE_COUNT: usize = 12;
pub const FENCE_COUNT: usize = 10;
pub const STREET_LAMP_COUNT: usize = 6;

/// Length of every road slab.
pub const ROAD_LENGTH: f32 = 25.0;

/// Fixed road placements: `(x, z, yaw)`. Two east-west, two north-south.
pub const ROAD_PLACEMENTS: [(f32, f32, f32); 4] = [
    (0.0, -8.0, 0.0),
    (0.0, 8.0, 0.0),
    (-8.0, 0.0, FRAC_PI_2),
    (8.0, 0.0, FRAC_PI_2),
];

/// Resting heights per prop kind. Houses settle relative to their size.
const HOUSE_TARGET_PER_SIZE: f32 = 1.5;
const TREE_TARGET: f32 = 1.0;
const FENCE_TARGET: f32 = 0.9;
const STREET_LAMP_TARGET: f32 = 0.0;
const ROAD_TARGET: f32 = 0.5;

pub fn total_part_count() -> usize {
    HOUSE_COUNT + TREE_COUNT + FENCE_COUNT + STREET_LAMP_COUNT + ROAD_PLACEMENTS.len()
}

fn sample(rng: &mut impl Rng, range: Range<f32>) -> f32 {
    rng.gen_range(range)
}

fn heights(base_offset: Range<f32>) -> Range<f32> {
    START_HEIGHT_BASE + base_offset.start..START_HEIGHT_BASE + base_offset.end
}

/// Generate every part of the scene from `rng`.
pub fn generate_layout(rng: &mut impl Rng) -> Vec<PartSpec> {
    let mut parts = Vec::with_capacity(total_part_count());

    for _ in 0..HOUSE_COUNT {
        let x = sample(rng, -12.0..12.0);
        let z = sample(rng, -12.0..12.0);
        let size = sample(rng, 0.8..1.2);
        let start_height = sample(rng, heights(0.0..30.0));
        let activation_delay = sample(rng, 0.0..0.4);
        let rotation_speed = sample(rng, 1.0..3.0);
        parts.push(PartSpec {
            prop: PropSpec {
                kind: PropKind::House { size },
                x,
                z,
                yaw: 0.0,
            },
            part: AssemblyPart {
                start_height,
                target_height: HOUSE_TARGET_PER_SIZE * size,
                activation_delay,
                rotation_speed,
            },
        });
    }

    for _ in 0..TREE_COUNT {
        let x = sample(rng, -14.0..14.0);
        let z = sample(rng, -14.0..14.0);
        let size = sample(rng, 0.7..1.1);
        let start_height = sample(rng, heights(0.0..25.0));
        let activation_delay = sample(rng, 0.1..0.5);
        let rotation_speed = sample(rng, 0.5..2.0);
        parts.push(PartSpec {
            prop: PropSpec {
                kind: PropKind::Tree { size },
                x,
                z,
                yaw: 0.0,
            },
            part: AssemblyPart {
                start_height,
                target_height: TREE_TARGET,
                activation_delay,
                rotation_speed,
            },
        });
    }

    for _ in 0..FENCE_COUNT {
        let x = sample(rng, -13.0..13.0);
        let z = sample(rng, -13.0..13.0);
        let yaw = sample(rng, 0.0..TAU);
        let start_height = sample(rng, heights(0.0..20.0));
        let activation_delay = sample(rng, 0.15..0.55);
        let rotation_speed = sample(rng, 1.0..2.5);
        parts.push(PartSpec {
            prop: PropSpec {
                kind: PropKind::Fence,
                x,
                z,
                yaw,
            },
            part: AssemblyPart {
                start_height,
                target_height: FENCE_TARGET,
                activation_delay,
                rotation_speed,
            },
        });
    }

    for _ in 0..STREET_LAMP_COUNT {
        let x = sample(rng, -11.0..11.0);
        let z = sample(rng, -11.0..11.0);
        let start_height = sample(rng, heights(5.0..35.0));
        let activation_delay = sample(rng, 0.2..0.6);
        let rotation_speed = sample(rng, 0.8..2.0);
        parts.push(PartSpec {
            prop: PropSpec {
                kind: PropKind::StreetLamp,
                x,
                z,
                yaw: 0.0,
            },
            part: AssemblyPart {
                start_height,
                target_height: STREET_LAMP_TARGET,
                activation_delay,
                rotation_speed,
            },
        });
    }

    for &(x, z, yaw) in &ROAD_PLACEMENTS {
        let start_height = sample(rng, heights(-5.0..10.0));
        let activation_delay = sample(rng, 0.05..0.35);
        let rotation_speed = sample(rng, 0.5..1.5);
        parts.push(PartSpec {
            prop: PropSpec {
                kind: PropKind::Road {
                    length: ROAD_LENGTH,
                },
                x,
                z,
                yaw,
            },
            part: AssemblyPart {
                start_height,
                target_height: ROAD_TARGET,
                activation_delay,
                rotation_speed,
            },
        });
    }

    parts
}
