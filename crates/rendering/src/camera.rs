use bevy::prelude::*;

/// Slow sway of the camera in front of the town.
///
/// The camera never orbits fully: it traces a small ellipse around
/// `(0, height, distance)` and keeps looking at `look_at`.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CameraRig {
    pub height: f32,
    /// Distance from the origin along +Z at rest.
    pub distance: f32,
    /// Half-width of the sway along X.
    pub sway_x: f32,
    /// Half-depth of the sway along Z.
    pub sway_z: f32,
    /// Sway angular speed in radians per second.
    pub speed: f32,
    pub look_at: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            height: 18.0,
            distance: 45.0,
            sway_x: 3.0,
            sway_z: 2.0,
            speed: 0.1,
            look_at: Vec3::new(0.0, 5.0, 0.0),
            fov_degrees: 50.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Camera position after `elapsed` seconds.
pub fn rig_position(rig: &CameraRig, elapsed: f32) -> Vec3 {
    let angle = elapsed * rig.speed;
    Vec3::new(
        angle.sin() * rig.sway_x,
        rig.height,
        rig.distance + angle.cos() * rig.sway_z,
    )
}

/// Marker for the scene camera.
#[derive(Component)]
pub struct SceneCamera;

pub fn setup_camera(mut commands: Commands, rig: Option<Res<CameraRig>>) {
    let rig = rig.map(|r| r.clone()).unwrap_or_default();
    let pos = rig_position(&rig, 0.0);

    commands.spawn((
        SceneCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: rig.fov_degrees.to_radians(),
            near: rig.near,
            far: rig.far,
            ..default()
        }),
        Transform::from_translation(pos).looking_at(rig.look_at, Vec3::Y),
    ));
    commands.insert_resource(rig);
}

/// System: move the camera along its sway path every frame.
///
/// Aspect ratio follows the window through the engine's camera update, so
/// there is no resize handling here.
pub fn drift_camera(
    time: Res<Time>,
    rig: Res<CameraRig>,
    mut query: Query<&mut Transform, With<SceneCamera>>,
) {
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    let pos = rig_position(&rig, time.elapsed_secs());
    *transform = Transform::from_translation(pos).looking_at(rig.look_at, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::headless_app;

    #[test]
    fn test_rest_position() {
        let rig = CameraRig::default();
        assert_eq!(rig_position(&rig, 0.0), Vec3::new(0.0, 18.0, 47.0));
    }

    #[test]
    fn test_sway_stays_in_ellipse() {
        let rig = CameraRig::default();
        for i in 0..200 {
            let p = rig_position(&rig, i as f32 * 1.7);
            assert_eq!(p.y, rig.height);
            assert!(p.x.abs() <= rig.sway_x + 1e-4);
            assert!((p.z - rig.distance).abs() <= rig.sway_z + 1e-4);
        }
    }

    #[test]
    fn test_quarter_period_reaches_full_sway() {
        let rig = CameraRig::default();
        let quarter = std::f32::consts::FRAC_PI_2 / rig.speed;
        let p = rig_position(&rig, quarter);
        assert!((p.x - rig.sway_x).abs() < 1e-4);
        assert!((p.z - rig.distance).abs() < 1e-4);
    }

    #[test]
    fn test_setup_spawns_one_camera_looking_at_target() {
        let mut app = headless_app();
        app.add_systems(Startup, setup_camera);
        app.add_systems(Update, drift_camera);
        app.update();
        app.update();

        let mut q = app
            .world_mut()
            .query_filtered::<(&Transform, &Projection), With<SceneCamera>>();
        let cams: Vec<_> = q.iter(app.world()).collect();
        assert_eq!(cams.len(), 1);
        let (transform, projection) = cams[0];
        let Projection::Perspective(p) = projection else {
            panic!("scene camera should be perspective");
        };
        assert!((p.fov - 50f32.to_radians()).abs() < 1e-6);

        let rig = CameraRig::default();
        let to_target = (rig.look_at - transform.translation).normalize();
        assert!(transform.forward().dot(to_target) > 0.9999);
    }

    #[test]
    fn test_custom_rig_is_kept() {
        let mut app = headless_app();
        app.insert_resource(CameraRig {
            height: 30.0,
            ..default()
        });
        app.add_systems(Startup, setup_camera);
        app.update();
        assert_eq!(app.world().resource::<CameraRig>().height, 30.0);
    }
}
