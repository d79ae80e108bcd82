use std::collections::HashSet;
use std::time::Instant;

use crate::{Action, Bindings, Key, MoveDir, PointerLook, RepeatGate};

/// Explicit input context bundle: held keys, pointer-look state, and the
/// debounce gates for the stepped keys.
///
/// Event handlers mutate this bundle and the frame loop polls it once per
/// frame; no input state lives in globals.
#[derive(Debug)]
pub struct InputState {
    bindings: Bindings,
    keys_held: HashSet<Key>,
    pub pointer: PointerLook,
    blend_up_gate: RepeatGate,
    blend_down_gate: RepeatGate,
}

impl InputState {
    pub fn new(bindings: Bindings) -> Self {
        Self {
            bindings,
            keys_held: HashSet::new(),
            pointer: PointerLook::default(),
            blend_up_gate: RepeatGate::default(),
            blend_down_gate: RepeatGate::default(),
        }
    }

    pub fn key_pressed(&mut self, key: Key) {
        self.keys_held.insert(key);
    }

    pub fn key_released(&mut self, key: Key) {
        self.keys_held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.keys_held.contains(&key)
    }

    /// Feed an absolute pointer position through the look mapping.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> Option<Action> {
        self.pointer.motion(x, y)
    }

    /// Collapse the held keys into this frame's actions.
    ///
    /// Held movement keys merge into a single eight-way [`Action::Move`]
    /// (opposed keys cancel); the blend keys pass through their repeat
    /// gates; quit is reported while its key is down.
    pub fn poll(&mut self, now: Instant) -> Vec<Action> {
        let mut actions = Vec::new();

        if self.keys_held.contains(&self.bindings.quit) {
            tracing::debug!("quit requested");
            actions.push(Action::Quit);
        }

        let forward = i32::from(self.is_held(self.bindings.forward))
            - i32::from(self.is_held(self.bindings.backward));
        let strafe = i32::from(self.is_held(self.bindings.right))
            - i32::from(self.is_held(self.bindings.left));
        if let Some(dir) = MoveDir::from_axes(forward, strafe) {
            actions.push(Action::Move(dir));
        }

        if self.keys_held.contains(&self.bindings.blend_up) {
            self.blend_up_gate.fire(now, || actions.push(Action::BlendUp));
        }
        if self.keys_held.contains(&self.bindings.blend_down) {
            self.blend_down_gate
                .fire(now, || actions.push(Action::BlendDown));
        }

        actions
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(Bindings::default())
    }
}
