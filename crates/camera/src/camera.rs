use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Travel speed in world units per second.
const MOVE_SPEED: f32 = 2.5;

/// Pitch is kept strictly short of ±90°, where yaw becomes degenerate.
const PITCH_LIMIT_DEG: f32 = 89.0;

/// World up hint. Fixed for the camera's lifetime; used to derive the
/// strafe axis and the view basis.
const WORLD_UP: Vec3 = Vec3::Y;

/// Starting state for a [`FlyCamera`]. Angles are in degrees.
///
/// The default stands at `(0, 0, 3)`
/// looking down `-Z` (`yaw = -90`, which wraps to `270`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw_deg: f32,
    pub pitch_deg: f32,
    pub delta_time: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            yaw_deg: -90.0,
            pitch_deg: 0.0,
            delta_time: 0.0,
        }
    }
}

/// First-person free-fly camera.
///
/// Owns a world position and a yaw/pitch orientation in degrees. The look
/// direction is computed from the angles on demand, so no mutator can leave
/// it stale. Movement is scaled by the frame duration injected through
/// [`set_delta_time`](FlyCamera::set_delta_time) once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyCamera {
    pub position: Vec3,
    yaw_deg: f32,
    pitch_deg: f32,
    delta_time: f32,
}

impl FlyCamera {
    pub fn new(pose: CameraPose) -> Self {
        Self {
            position: pose.position,
            yaw_deg: wrap_yaw(pose.yaw_deg),
            pitch_deg: pose.pitch_deg.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG),
            delta_time: pose.delta_time,
        }
    }

    /// Yaw in degrees, wrapped into [0, 360).
    pub fn yaw_deg(&self) -> f32 {
        self.yaw_deg
    }

    /// Pitch in degrees, always inside [-89, 89].
    pub fn pitch_deg(&self) -> f32 {
        self.pitch_deg
    }

    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Current state as a serializable pose.
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            yaw_deg: self.yaw_deg,
            pitch_deg: self.pitch_deg,
            delta_time: self.delta_time,
        }
    }

    /// Rotate the heading. Yaw feeds only sine/cosine, so the sum is wrapped
    /// into [0, 360) to keep the stored angle from growing without bound.
    pub fn add_yaw(&mut self, delta_deg: f32) {
        self.yaw_deg = wrap_yaw(self.yaw_deg + delta_deg);
    }

    /// Tilt the view. Out-of-range values clamp to the ±89° limit rather
    /// than being rejected; repeated large deltas park exactly on the bound.
    pub fn add_pitch(&mut self, delta_deg: f32) {
        self.pitch_deg = (self.pitch_deg + delta_deg).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
    }

    /// Store the latest frame duration in seconds. Not validated; zero or
    /// negative values simply produce zero or reversed movement.
    pub fn set_delta_time(&mut self, dt: f32) {
        self.delta_time = dt;
    }

    /// Unit look vector for the current yaw/pitch.
    pub fn direction(&self) -> Vec3 {
        let yaw = self.yaw_deg.to_radians();
        let pitch = self.pitch_deg.to_radians();
        // Analytically unit length already; the normalize guards against
        // floating-point drift.
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    pub fn move_forward(&mut self) {
        self.position += self.direction() * (MOVE_SPEED * self.delta_time);
    }

    pub fn move_backward(&mut self) {
        self.position -= self.direction() * (MOVE_SPEED * self.delta_time);
    }

    pub fn move_right(&mut self) {
        self.position -= self.strafe_axis() * (MOVE_SPEED * self.delta_time);
    }

    pub fn move_left(&mut self) {
        self.position += self.strafe_axis() * (MOVE_SPEED * self.delta_time);
    }

    pub fn move_forward_left(&mut self) {
        self.move_forward();
        self.move_left();
    }

    pub fn move_forward_right(&mut self) {
        self.move_forward();
        self.move_right();
    }

    pub fn move_backward_left(&mut self) {
        self.move_backward();
        self.move_left();
    }

    pub fn move_backward_right(&mut self) {
        self.move_backward();
        self.move_right();
    }

    /// Right-handed view transform looking down `direction()` with the world
    /// up hint. The pitch clamp keeps the direction off the up axis, where
    /// this would degenerate.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.direction(), WORLD_UP)
    }

    // cross(up, direction) points to the camera's left; strafing right
    // subtracts it. The operand order fixes the left/right sign convention.
    fn strafe_axis(&self) -> Vec3 {
        WORLD_UP.cross(self.direction()).normalize()
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(CameraPose::default())
    }
}

fn wrap_yaw(deg: f32) -> f32 {
    deg.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn default_looks_down_negative_z() {
        let cam = FlyCamera::default();
        assert!(close(cam.direction(), Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn direction_is_unit_length_everywhere() {
        for (yaw, pitch) in [
            (0.0, 0.0),
            (37.5, 12.25),
            (180.0, -45.0),
            (359.0, 88.9),
            (720.0, -200.0),
            (-1234.5, 67.8),
        ] {
            let cam = FlyCamera::new(CameraPose {
                yaw_deg: yaw,
                pitch_deg: pitch,
                ..CameraPose::default()
            });
            assert!((cam.direction().length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn zero_deltas_leave_direction_unchanged() {
        let mut cam = FlyCamera::default();
        cam.add_yaw(33.0);
        cam.add_pitch(-12.0);
        let before = cam.direction();
        cam.add_yaw(0.0);
        cam.add_pitch(0.0);
        assert!(close(cam.direction(), before));
    }

    #[test]
    fn pitch_clamps_and_parks_on_the_bound() {
        let mut cam = FlyCamera::default();
        for _ in 0..5 {
            cam.add_pitch(50.0);
        }
        assert_eq!(cam.pitch_deg(), 89.0);
        cam.add_pitch(10.0);
        assert_eq!(cam.pitch_deg(), 89.0);

        for _ in 0..10 {
            cam.add_pitch(-77.0);
        }
        assert_eq!(cam.pitch_deg(), -89.0);
        cam.add_pitch(-0.1);
        assert_eq!(cam.pitch_deg(), -89.0);
    }

    #[test]
    fn yaw_wraps_into_one_turn() {
        let mut cam = FlyCamera::default();
        let before = cam.direction();
        cam.add_yaw(720.0);
        assert!(cam.yaw_deg() >= 0.0 && cam.yaw_deg() < 360.0);
        assert!(close(cam.direction(), before));

        cam.add_yaw(-90.0 - cam.yaw_deg());
        assert_eq!(cam.yaw_deg(), 270.0);
    }

    #[test]
    fn forward_backward_round_trips() {
        let mut cam = FlyCamera::default();
        cam.set_delta_time(0.016);
        let start = cam.position;
        cam.move_forward();
        cam.move_backward();
        assert!(close(cam.position, start));
    }

    #[test]
    fn strafe_round_trips() {
        let mut cam = FlyCamera::new(CameraPose {
            yaw_deg: 42.0,
            pitch_deg: -10.0,
            ..CameraPose::default()
        });
        cam.set_delta_time(0.016);
        let start = cam.position;
        cam.move_right();
        cam.move_left();
        assert!(close(cam.position, start));
    }

    #[test]
    fn move_right_goes_right_of_the_heading() {
        // Looking down -Z, right is +X.
        let mut cam = FlyCamera::default();
        cam.set_delta_time(0.1);
        cam.move_right();
        assert!(cam.position.x > 0.0);
        assert!(cam.position.y.abs() < EPS);

        let mut cam = FlyCamera::default();
        cam.set_delta_time(0.1);
        cam.move_left();
        assert!(cam.position.x < 0.0);
    }

    #[test]
    fn diagonal_is_the_sum_of_both_cardinals() {
        let mut diagonal = FlyCamera::default();
        diagonal.set_delta_time(0.02);
        diagonal.move_forward_left();

        let mut stepped = FlyCamera::default();
        stepped.set_delta_time(0.02);
        stepped.move_forward();
        stepped.move_left();

        assert!(close(diagonal.position, stepped.position));
    }

    #[test]
    fn movement_scales_with_delta_time() {
        let mut cam = FlyCamera::default();
        cam.set_delta_time(0.0);
        cam.move_forward();
        assert!(close(cam.position, Vec3::new(0.0, 0.0, 3.0)));

        cam.set_delta_time(1.0);
        cam.move_forward();
        // One second at 2.5 units/s straight down -Z.
        assert!(close(cam.position, Vec3::new(0.0, 0.0, 0.5)));
    }

    #[test]
    fn view_fixture_at_the_default_start() {
        let cam = FlyCamera::default();
        let view = cam.view();

        // Rotation part is identity, translation carries (0, 0, -3).
        assert!((view.x_axis - glam::Vec4::X).length() < EPS);
        assert!((view.y_axis - glam::Vec4::Y).length() < EPS);
        assert!((view.z_axis - glam::Vec4::Z).length() < EPS);
        assert!((view.w_axis - glam::Vec4::new(0.0, 0.0, -3.0, 1.0)).length() < EPS);
    }

    #[test]
    fn pose_round_trips_through_serde() {
        let mut cam = FlyCamera::default();
        cam.add_yaw(15.0);
        cam.add_pitch(-30.0);
        cam.position = Vec3::new(1.0, 2.0, -4.0);

        let json = serde_json::to_string(&cam.pose()).unwrap();
        let pose: CameraPose = serde_json::from_str(&json).unwrap();
        let restored = FlyCamera::new(pose);
        assert!(close(restored.direction(), cam.direction()));
        assert!(close(restored.position, cam.position));
    }
}
