//! Free-fly camera: yaw/pitch orientation, movement, and view transform.
//!
//! # Invariants
//! - The look direction is derived from yaw/pitch on demand, never stored.
//! - `direction()` is unit length at every observation point.
//! - Pitch stays inside [-89, 89] degrees so the look direction never
//!   reaches the poles where the view basis degenerates.
//! - Yaw wraps into [0, 360); only its sine/cosine ever matter.

mod camera;
mod view;

pub use camera::{CameraPose, FlyCamera};
pub use view::look_at;

pub fn crate_info() -> &'static str {
    "freefly-camera v0.1.0"
}
