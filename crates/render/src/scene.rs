use glam::{Mat4, Vec3};

/// World-space cube centers for the demo field.
const CUBE_OFFSETS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

const TILT_AXIS: Vec3 = Vec3::new(1.0, 0.3, 0.5);

/// Spin rate for the animated cubes, degrees per second.
const SPIN_DEG_PER_SEC: f32 = 50.0;

/// The ten-cube field the camera flies through.
///
/// Cube `i` is tilted by `20° * i` about a fixed axis; every third cube
/// also spins with elapsed time.
#[derive(Debug, Clone)]
pub struct CubeField {
    offsets: Vec<Vec3>,
}

impl CubeField {
    pub fn new() -> Self {
        Self {
            offsets: CUBE_OFFSETS.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Cube centers in world space.
    pub fn positions(&self) -> &[Vec3] {
        &self.offsets
    }

    /// Model transform for cube `index` at `elapsed` seconds.
    pub fn model(&self, index: usize, elapsed: f32) -> Mat4 {
        let mut angle_deg = 20.0 * index as f32;
        if index % 3 == 0 {
            angle_deg += elapsed * SPIN_DEG_PER_SEC;
        }
        Mat4::from_translation(self.offsets[index])
            * Mat4::from_axis_angle(TILT_AXIS.normalize(), angle_deg.to_radians())
    }
}

impl Default for CubeField {
    fn default() -> Self {
        Self::new()
    }
}
