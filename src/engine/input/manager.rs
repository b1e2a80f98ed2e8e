// Input manager - winit events in, per-frame intent snapshot out

use std::collections::HashMap;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::action::{default_bindings, Action};
use super::state::InputState;

/// Movement intent captured once per frame and passed into the avatar
/// update. The simulation never reads raw input state directly, so there
/// is no hidden cross-frame coupling.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveIntent {
    /// Forward axis in {-1, 0, 1}
    pub forward: f32,
    /// Strafe axis in {-1, 0, 1}; positive is right
    pub strafe: f32,
    /// Run modifier held
    pub run: bool,
    /// Jump pressed this frame (edge-triggered)
    pub jump: bool,
}

/// Maps raw keyboard events onto actions and tracks their state.
pub struct InputManager {
    bindings: HashMap<KeyCode, Action>,
    state: InputState,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            bindings: default_bindings().into_iter().collect(),
            state: InputState::new(),
        }
    }

    /// Process a keyboard event from winit.
    ///
    /// Key repeats are ignored so edge-triggered actions fire once per
    /// physical press.
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };
        let Some(&action) = self.bindings.get(&key_code) else {
            return;
        };
        match event.state {
            ElementState::Pressed => {
                if !event.repeat {
                    self.state.press(action);
                }
            }
            ElementState::Released => {
                self.state.release(action);
            }
        }
    }

    /// Snapshot this frame's movement intent.
    pub fn move_intent(&self) -> MoveIntent {
        let axis = |positive: Action, negative: Action| {
            let mut value = 0.0;
            if self.state.is_pressed(positive) {
                value += 1.0;
            }
            if self.state.is_pressed(negative) {
                value -= 1.0;
            }
            value
        };

        MoveIntent {
            forward: axis(Action::MoveForward, Action::MoveBackward),
            strafe: axis(Action::StrafeRight, Action::StrafeLeft),
            run: self.state.is_pressed(Action::Run),
            jump: self.state.just_pressed(Action::Jump),
        }
    }

    /// True on the frame the quit action goes down.
    pub fn quit_requested(&self) -> bool {
        self.state.just_pressed(Action::Quit)
    }

    /// Roll edge state over; call once per frame after the snapshot.
    pub fn end_frame(&mut self) {
        self.state.end_frame();
    }

    #[allow(dead_code)]
    pub fn state(&self) -> &InputState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut InputState {
        &mut self.state
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
