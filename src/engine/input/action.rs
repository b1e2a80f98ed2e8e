// Game action definitions and key bindings

use winit::keyboard::KeyCode;

/// Every input action the demo responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveForward,
    MoveBackward,
    StrafeLeft,
    StrafeRight,
    Run,
    Jump,

    // Meta actions
    Quit,
}

/// Default keyboard bindings (WASD + shift to run, space to jump)
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        // Movement (WASD - standard gaming layout)
        (KeyCode::KeyW, Action::MoveForward),
        (KeyCode::KeyS, Action::MoveBackward),
        (KeyCode::KeyA, Action::StrafeLeft),
        (KeyCode::KeyD, Action::StrafeRight),
        (KeyCode::ShiftLeft, Action::Run),
        (KeyCode::ShiftRight, Action::Run),
        (KeyCode::Space, Action::Jump),
        // Meta
        (KeyCode::Escape, Action::Quit),
    ]
}
