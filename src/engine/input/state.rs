// Frame-coherent action state tracking

use super::action::Action;
use std::collections::HashSet;

/// Pressed / just-pressed / just-released tracking for all actions.
///
/// "Just" sets hold edge events for exactly one frame; `end_frame` rolls
/// them over after the frame's snapshot has been taken.
#[derive(Debug, Default)]
pub struct InputState {
    /// Actions currently held down
    pressed: HashSet<Action>,

    /// Actions that went down this frame (press edges)
    just_pressed: HashSet<Action>,

    /// Actions that went up this frame (release edges)
    just_released: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was pressed this frame (edge-triggered)
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was released this frame
    #[allow(dead_code)]
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Clear edge state for the next frame.
    /// Call once per frame after the frame's snapshot has been taken.
    pub(crate) fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Reset all input state
    #[allow(dead_code)]
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }
}
