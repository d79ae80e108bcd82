/// A high-level action produced by the input layer.
///
/// The frame loop consumes actions, never raw key or pointer events. This
/// keeps interactive and scripted input on the same path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Rotate the view by yaw/pitch deltas in degrees.
    Look { yaw_deg: f32, pitch_deg: f32 },
    /// Move the camera one frame step in the given direction.
    Move(MoveDir),
    /// Step the texture blend factor up one notch.
    BlendUp,
    /// Step the texture blend factor down one notch.
    BlendDown,
    /// Close the application.
    Quit,
    /// No-op (used for input that hasn't been bound yet).
    Noop,
}

/// Eight-way movement relative to the current heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDir {
    Forward,
    Backward,
    Left,
    Right,
    ForwardLeft,
    ForwardRight,
    BackwardLeft,
    BackwardRight,
}

impl MoveDir {
    /// Collapse forward/strafe axes into an eight-way direction.
    ///
    /// Positive `forward` is ahead, positive `strafe` is to the right.
    /// Opposed keys cancel to `None`.
    pub fn from_axes(forward: i32, strafe: i32) -> Option<Self> {
        match (forward.signum(), strafe.signum()) {
            (1, 0) => Some(Self::Forward),
            (-1, 0) => Some(Self::Backward),
            (0, -1) => Some(Self::Left),
            (0, 1) => Some(Self::Right),
            (1, -1) => Some(Self::ForwardLeft),
            (1, 1) => Some(Self::ForwardRight),
            (-1, -1) => Some(Self::BackwardLeft),
            (-1, 1) => Some(Self::BackwardRight),
            _ => None,
        }
    }
}
