//! Desktop input mapped to high-level camera actions.
//!
//! # Invariants
//! - Consumers see [`Action`]s, never raw key or pointer events.
//! - Debounce and pointer sensitivity live here, not in the camera.
//! - All input state is an explicit bundle ([`InputState`]); nothing is
//!   process-global.

mod action;
mod bindings;
mod pointer;
mod repeat;
mod state;
mod stepped;

pub use action::{Action, MoveDir};
pub use bindings::{Bindings, Key, ParseKeyError};
pub use pointer::PointerLook;
pub use repeat::RepeatGate;
pub use state::InputState;
pub use stepped::SteppedValue;

pub fn crate_info() -> &'static str {
    "freefly-input v0.1.0"
}
