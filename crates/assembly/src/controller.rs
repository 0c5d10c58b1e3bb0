//! Assembly animation controller.
//!
//! Maps global progress plus each part's fixed parameters to the part's pose:
//! a staggered ease-out drop with a decaying spin and a wobble confined to
//! the transition. Pure functions; the system only writes the results.

use std::f32::consts::PI;

use bevy::prelude::*;

use crate::config::AssemblyConfig;
use crate::parts::{AssemblyPart, PartRegistry};
use crate::scroll::AssemblyProgress;

/// Instantaneous pose of a part's carrier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartPose {
    pub y: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub rotation_z: f32,
}

impl PartPose {
    /// Rotation as a quaternion, applying X then Y then Z.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation_x,
            self.rotation_y,
            self.rotation_z,
        )
    }
}

// =============================================================================
// Pure helpers
// =============================================================================

/// Position of `progress` inside a part's personal window, clamped to `[0, 1]`.
///
/// A delay outside `[0, 1]` is clamped into it first.
pub fn local_progress(progress: f32, activation_delay: f32, window: f32) -> f32 {
    let delay = activation_delay.clamp(0.0, 1.0);
    ((progress - delay) / window).clamp(0.0, 1.0)
}

/// Front-loaded deceleration: `1 - (1 - t)^3`.
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Pose of `part` at global `progress`.
///
/// `progress` is expected in `[0, 1]`; the caller clamps it.
pub fn part_pose(progress: f32, part: &AssemblyPart, config: &AssemblyConfig) -> PartPose {
    let local = local_progress(progress, part.activation_delay, config.window);
    let eased = ease_out_cubic(local);

    // Settled parts land exactly on target; `a - (a - b)` is not always `b`.
    let y = if local >= 1.0 {
        part.target_height
    } else {
        part.start_height - (part.start_height - part.target_height) * eased
    };

    let rotation_y = (1.0 - eased) * PI * config.spin_turns * part.rotation_speed;

    let (rotation_x, rotation_z) = if local > 0.0 && local < 1.0 {
        (
            (local * config.wobble_frequency_x * PI).sin() * config.wobble_amplitude,
            (local * config.wobble_frequency_z * PI).cos() * config.wobble_amplitude,
        )
    } else {
        (0.0, 0.0)
    };

    PartPose {
        y,
        rotation_x,
        rotation_y,
        rotation_z,
    }
}

/// Whether `part` has reached its resting pose at `progress`.
pub fn is_settled(progress: f32, part: &AssemblyPart, config: &AssemblyConfig) -> bool {
    local_progress(progress, part.activation_delay, config.window) >= 1.0
}

/// Number of settled parts among `parts`.
pub fn settled_count<'a>(
    progress: f32,
    parts: impl IntoIterator<Item = &'a AssemblyPart>,
    config: &AssemblyConfig,
) -> usize {
    parts
        .into_iter()
        .filter(|part| is_settled(progress, part, config))
        .count()
}

// =============================================================================
// System
// =============================================================================

/// Recompute every registered part's transform from the current progress.
///
/// Runs once at startup and then only when progress changes; there is no
/// per-part dirty tracking.
pub fn apply_assembly(
    progress: Res<AssemblyProgress>,
    config: Res<AssemblyConfig>,
    registry: Res<PartRegistry>,
    mut parts: Query<(&AssemblyPart, &mut Transform)>,
) {
    let progress = progress.0.clamp(0.0, 1.0);

    for entity in registry.iter() {
        let Ok((part, mut transform)) = parts.get_mut(entity) else {
            continue;
        };
        let pose = part_pose(progress, part, &config);
        transform.translation.y = pose.y;
        transform.rotation = pose.rotation();
    }
}
