//! Frame timing: supplies the per-frame elapsed seconds that scale camera
//! movement.
//!
//! # Invariants
//! - The clock never drives anything; consumers pull the delta once per
//!   frame and inject it where it's needed.
//! - Time is passed in explicitly, so tests are deterministic.

mod clock;

pub use clock::FrameClock;

pub fn crate_info() -> &'static str {
    "freefly-frame v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("frame"));
    }
}
