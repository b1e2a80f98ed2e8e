// Input handling system
//
// Keyboard input for a single local player, folded into an explicit
// per-frame snapshot.
//
// ## Architecture
//
// - `action`: Defines game actions and the default key bindings
// - `state`: Pressed / just-pressed / just-released action tracking
// - `manager`: Maps winit events onto actions and snapshots `MoveIntent`
//
// ## Usage Example
//
// ```rust
// use engine::input::InputManager;
//
// let mut input = InputManager::new();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Once per frame, snapshot the intent and roll edges over
// let intent = input.move_intent();
// // ... feed `intent` into the simulation ...
// input.end_frame();
// ```

pub mod action;
pub mod manager;
pub mod state;

// Re-export commonly used types
pub use action::Action;
pub use manager::{InputManager, MoveIntent};
pub use state::InputState;
