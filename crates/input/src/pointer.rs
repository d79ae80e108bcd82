use glam::Vec2;

use crate::Action;

/// Pointer-motion to look-delta mapping.
///
/// The first motion event after construction (or [`reset`](Self::reset))
/// only latches the reference position, so a window gaining pointer capture
/// doesn't produce a view jump.
///
/// Sign convention: a positive x-offset turns the view left (negative yaw),
/// a positive y-offset (screen-down) tilts it down (negative pitch).
#[derive(Debug, Clone, Copy)]
pub struct PointerLook {
    last: Option<Vec2>,
    /// Degrees of rotation per pixel of pointer travel.
    pub sensitivity: f32,
}

impl PointerLook {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            last: None,
            sensitivity,
        }
    }

    /// Feed an absolute pointer position; returns the look action for the
    /// offset since the previous event, or `None` on the latching event.
    pub fn motion(&mut self, x: f32, y: f32) -> Option<Action> {
        let pos = Vec2::new(x, y);
        let last = self.last.replace(pos)?;
        let offset = pos - last;
        Some(Action::Look {
            yaw_deg: -offset.x * self.sensitivity,
            pitch_deg: -offset.y * self.sensitivity,
        })
    }

    /// Drop the reference position; the next event latches again. Call on
    /// focus loss or pointer re-capture.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl Default for PointerLook {
    fn default() -> Self {
        Self::new(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_event_only_latches() {
        let mut look = PointerLook::default();
        assert_eq!(look.motion(400.0, 300.0), None);
        assert!(look.motion(400.0, 300.0).is_some());
    }

    #[test]
    fn positive_x_offset_turns_left() {
        let mut look = PointerLook::default();
        look.motion(0.0, 0.0);
        let Some(Action::Look { yaw_deg, pitch_deg }) = look.motion(10.0, 0.0) else {
            panic!("expected a look action");
        };
        assert!(yaw_deg < 0.0);
        assert_eq!(pitch_deg, 0.0);
    }

    #[test]
    fn dragging_up_looks_up() {
        let mut look = PointerLook::default();
        look.motion(100.0, 100.0);
        // Screen y decreases toward the top.
        let Some(Action::Look { pitch_deg, .. }) = look.motion(100.0, 80.0) else {
            panic!("expected a look action");
        };
        assert!(pitch_deg > 0.0);
    }

    #[test]
    fn sensitivity_scales_the_delta() {
        let mut look = PointerLook::new(0.5);
        look.motion(0.0, 0.0);
        let Some(Action::Look { yaw_deg, .. }) = look.motion(8.0, 0.0) else {
            panic!("expected a look action");
        };
        assert!((yaw_deg - (-4.0)).abs() < 1e-6);
    }

    #[test]
    fn reset_latches_again() {
        let mut look = PointerLook::default();
        look.motion(0.0, 0.0);
        look.reset();
        assert_eq!(look.motion(500.0, 500.0), None);
    }
}
