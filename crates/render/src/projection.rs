use glam::Mat4;

/// Perspective projection parameters.
///
/// Owned by the render layer; the camera only ever hands over a view
/// matrix and knows nothing about field of view or viewport shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Viewport width over height.
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for Projection {
    /// Fixed 45° projection for an 800x600 viewport.
    fn default() -> Self {
        Self {
            fov_y_deg: 45.0,
            aspect: 800.0 / 600.0,
            z_near: 0.1,
            z_far: 100.0,
        }
    }
}

impl Projection {
    /// Right-handed perspective matrix with zero-to-one depth.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_deg.to_radians(),
            self.aspect,
            self.z_near,
            self.z_far,
        )
    }
}
