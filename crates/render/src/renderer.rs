use glam::{Mat4, Vec4};

use crate::{CubeField, Projection};

/// Everything the renderer consumes for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// The camera's world-to-eye transform, queried once per frame.
    pub view: Mat4,
    /// Seconds since the scene started animating.
    pub elapsed: f32,
    /// Texture blend factor, stepped by the arrow keys.
    pub blend: f32,
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the scene and the frame's view transform, combines
/// the view with its own projection, and produces output. It never mutates
/// the camera or the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(
        &self,
        scene: &CubeField,
        frame: &FrameInput,
        projection: &Projection,
    ) -> Self::Output;
}

/// Debug text renderer — workaround for a GPU backend.
///
/// Projects each cube center through `projection * view * model` and
/// reports clip-space visibility and depth. Useful for CLI output,
/// logging, and testing the frame loop.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(
        &self,
        scene: &CubeField,
        frame: &FrameInput,
        projection: &Projection,
    ) -> String {
        let _span = tracing::debug_span!("render_frame").entered();

        // The camera's position falls out of the inverted view transform.
        let eye = frame.view.inverse().w_axis;
        let view_proj = projection.matrix() * frame.view;

        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame (t={:.2}s, blend={:.1}) ===\n",
            frame.elapsed, frame.blend
        ));
        out.push_str(&format!(
            "Eye: ({:.2}, {:.2}, {:.2})\n",
            eye.x, eye.y, eye.z
        ));

        for (i, offset) in scene.positions().iter().enumerate() {
            let model = scene.model(i, frame.elapsed);
            let clip = view_proj * model * Vec4::W;
            let status = if in_frustum(clip) {
                format!("depth={:.3}", clip.z / clip.w)
            } else {
                "clipped".to_string()
            };
            out.push_str(&format!(
                "  cube[{i}] pos=({:.1}, {:.1}, {:.1}) {status}\n",
                offset.x, offset.y, offset.z
            ));
        }

        out
    }
}

// Zero-to-one depth convention, matching `Projection::matrix`.
fn in_frustum(clip: Vec4) -> bool {
    clip.w > 0.0
        && clip.x.abs() <= clip.w
        && clip.y.abs() <= clip.w
        && clip.z >= 0.0
        && clip.z <= clip.w
}

#[cfg(test)]
mod tests {
    use super::*;
    use freefly_camera::{CameraPose, FlyCamera};

    fn frame_for(cam: &FlyCamera, elapsed: f32) -> FrameInput {
        FrameInput {
            view: cam.view(),
            elapsed,
            blend: 0.2,
        }
    }

    #[test]
    fn default_start_sees_the_origin_cube() {
        let cam = FlyCamera::default();
        let out = DebugTextRenderer::new().render(
            &CubeField::new(),
            &frame_for(&cam, 0.0),
            &Projection::default(),
        );

        let eye_line = out.lines().find(|l| l.starts_with("Eye:")).expect("eye line");
        assert!(eye_line.contains("3.00"));
        assert!(out.contains("cube[0]"));
        // The origin cube is three units ahead, well inside the frustum.
        let origin_line = out
            .lines()
            .find(|l| l.contains("cube[0]"))
            .expect("origin cube line");
        assert!(origin_line.contains("depth="));
    }

    #[test]
    fn cubes_behind_the_camera_are_clipped() {
        // Turn the camera around: looking down +Z, the field is behind.
        let mut cam = FlyCamera::default();
        cam.add_yaw(180.0);
        let out = DebugTextRenderer::new().render(
            &CubeField::new(),
            &frame_for(&cam, 0.0),
            &Projection::default(),
        );

        let origin_line = out
            .lines()
            .find(|l| l.contains("cube[0]"))
            .expect("origin cube line");
        assert!(origin_line.contains("clipped"));
    }

    #[test]
    fn every_cube_is_reported() {
        let cam = FlyCamera::default();
        let out = DebugTextRenderer::new().render(
            &CubeField::new(),
            &frame_for(&cam, 1.0),
            &Projection::default(),
        );
        assert_eq!(out.lines().filter(|l| l.contains("cube[")).count(), 10);
    }

    #[test]
    fn blend_factor_is_surfaced() {
        let cam = FlyCamera::default();
        let out = DebugTextRenderer::new().render(
            &CubeField::new(),
            &FrameInput {
                view: cam.view(),
                elapsed: 0.0,
                blend: 0.4,
            },
            &Projection::default(),
        );
        assert!(out.contains("blend=0.4"));
    }
}
