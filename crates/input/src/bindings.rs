use std::str::FromStr;

use thiserror::Error;

/// Windowing-system-independent key identity.
///
/// Only the keys the application binds are modeled; anything else maps to
/// [`Action::Noop`](crate::Action::Noop) at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// Error for key names that don't resolve to a [`Key`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key name: {0:?}")]
pub struct ParseKeyError(pub String);

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "w" => Ok(Self::W),
            "a" => Ok(Self::A),
            "s" => Ok(Self::S),
            "d" => Ok(Self::D),
            "left" | "arrow-left" => Ok(Self::ArrowLeft),
            "right" | "arrow-right" => Ok(Self::ArrowRight),
            "esc" | "escape" => Ok(Self::Escape),
            _ => Err(ParseKeyError(s.to_string())),
        }
    }
}

/// Rebindable key roles. The default is WASD to move, arrows to step the
/// blend factor, escape to quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bindings {
    pub forward: Key,
    pub backward: Key,
    pub left: Key,
    pub right: Key,
    pub blend_up: Key,
    pub blend_down: Key,
    pub quit: Key,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            forward: Key::W,
            backward: Key::S,
            left: Key::A,
            right: Key::D,
            blend_up: Key::ArrowRight,
            blend_down: Key::ArrowLeft,
            quit: Key::Escape,
        }
    }
}
