//! Parts and the part registry.
//!
//! Each part is a carrier entity: its `Transform` is owned by the assembly
//! controller, and the rendering crate hangs the prop's visuals underneath it.

use bevy::prelude::*;

use crate::layout::{generate_layout, PartSpec};
use crate::scene_rng::SceneRng;

// =============================================================================
// Components
// =============================================================================

/// Fixed animation parameters of one spawned prop.
///
/// `start_height >= target_height` is the usual case. A part with the
/// opposite ordering rises into place instead of falling; that is allowed.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct AssemblyPart {
    /// World-space Y at spawn.
    pub start_height: f32,
    /// World-space Y once settled.
    pub target_height: f32,
    /// Global progress that must elapse before this part starts moving.
    pub activation_delay: f32,
    /// Multiplier on the spin traversed during the descent.
    pub rotation_speed: f32,
}

/// What kind of prop a carrier holds, with the sizing parameters the prop
/// factory needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropKind {
    House { size: f32 },
    Tree { size: f32 },
    Fence,
    StreetLamp,
    Road { length: f32 },
}

/// Placement of a prop on the base platform.
///
/// `yaw` is the prop's designed orientation. It is applied to the prop body,
/// not to the carrier, so the spin-down never overrides it. Fences and roads
/// therefore keep their yaw once settled instead of snapping back to 0.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PropSpec {
    pub kind: PropKind,
    pub x: f32,
    pub z: f32,
    pub yaw: f32,
}

// =============================================================================
// Registry
// =============================================================================

/// Ordered list of every carrier spawned at startup.
///
/// Entries are appended once and never removed for the life of the app.
#[derive(Resource, Default, Debug)]
pub struct PartRegistry {
    pub entries: Vec<Entity>,
}

impl PartRegistry {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entries.iter().copied()
    }
}

// =============================================================================
// Systems
// =============================================================================

/// Spawn one carrier per part drawn from the seeded layout.
///
/// Carriers start at their spawn height; the controller pass that follows
/// in the same schedule gives them their initial pose.
pub fn spawn_assembly_parts(
    mut commands: Commands,
    mut rng: ResMut<SceneRng>,
    mut registry: ResMut<PartRegistry>,
) {
    let layout = generate_layout(&mut rng.0);

    for spec in &layout {
        let entity = spawn_part(&mut commands, spec);
        registry.entries.push(entity);
    }

    info!("Assembly: spawned {} parts", registry.len());
}

fn spawn_part(commands: &mut Commands, spec: &PartSpec) -> Entity {
    commands
        .spawn((
            spec.part,
            spec.prop,
            Transform::from_xyz(spec.prop.x, spec.part.start_height, spec.prop.z),
            Visibility::default(),
        ))
        .id()
}
