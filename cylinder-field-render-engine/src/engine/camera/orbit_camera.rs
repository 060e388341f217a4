use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::render_settings::{
    CAMERA_START, ORBIT_DAMPING, ORBIT_MAX_DISTANCE, ORBIT_MAX_PITCH, ORBIT_MIN_DISTANCE,
};

const YAW_SENSITIVITY: f32 = 0.005;
const PITCH_SENSITIVITY: f32 = 0.004;

/// Orbit camera pose: the camera circles `focus` at `distance`, at the
/// given yaw and pitch (elevation above the horizon plane).
#[derive(Resource)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl OrbitCamera {
    /// Camera position implied by the current orbit pose.
    pub fn position(&self) -> Vec3 {
        let offset = Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        );
        self.focus + offset * self.distance
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // The start pose looks down the +X axis at the grid origin.
        Self {
            focus: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance: Vec3::from_array(CAMERA_START).length(),
        }
    }
}

/// Drive the scene camera from mouse input.
///
/// Left-drag orbits, the wheel dollies within the distance limits, and
/// right-drag pans the focus across the ground plane (no screen-space
/// panning). Pitch stays in `[0, ORBIT_MAX_PITCH]` so the camera never
/// sinks below the horizon. The transform eases toward the target pose
/// instead of snapping.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        orbit.yaw += mouse_delta.x * YAW_SENSITIVITY;
        orbit.pitch = (orbit.pitch + mouse_delta.y * PITCH_SENSITIVITY).clamp(0.0, ORBIT_MAX_PITCH);
    }

    // Line and pixel scroll units accumulate into one dolly amount.
    let mut scroll_accum = 0.0;
    for event in scroll_events.read() {
        scroll_accum += match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        let dolly_speed = orbit.distance * 0.1;
        orbit.distance =
            (orbit.distance - scroll_accum * dolly_speed).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        let right = Vec3::new(orbit.yaw.sin(), 0.0, -orbit.yaw.cos());
        let forward = Vec3::new(-orbit.yaw.cos(), 0.0, -orbit.yaw.sin());
        let pan_speed = orbit.distance * 0.001;
        orbit.focus += (right * -mouse_delta.x + forward * mouse_delta.y) * pan_speed;
    }

    let target_pos = orbit.position();
    let target_rot = Transform::from_translation(target_pos)
        .looking_at(orbit.focus, Vec3::Y)
        .rotation;

    // Frame-rate independent easing equivalent to ORBIT_DAMPING per
    // frame at 60 fps.
    let smoothing = 1.0 - (1.0 - ORBIT_DAMPING).powf(time.delta_secs() * 60.0);
    camera_transform.translation = camera_transform.translation.lerp(target_pos, smoothing);
    camera_transform.rotation = camera_transform.rotation.slerp(target_rot, smoothing);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pose_matches_the_configured_start() {
        let orbit = OrbitCamera::default();
        let position = orbit.position();
        assert!((position - Vec3::from_array(CAMERA_START)).length() < 1e-4);
    }

    #[test]
    fn position_respects_distance_and_pitch() {
        let orbit = OrbitCamera {
            focus: Vec3::new(75.0, 0.0, 75.0),
            yaw: 1.2,
            pitch: 0.8,
            distance: 250.0,
        };
        let offset = orbit.position() - orbit.focus;
        assert!((offset.length() - 250.0).abs() < 1e-3);
        assert!(offset.y > 0.0);
    }
}
