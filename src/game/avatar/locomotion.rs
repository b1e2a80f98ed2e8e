// Locomotion state selection and movement tuning

use crate::engine::input::MoveIntent;

/// The discrete movement mode the avatar is in. Exactly one is active at
/// a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionState {
    /// Standing still
    Idle,
    /// Walking in the camera-forward direction
    WalkForward,
    /// Running in the camera-forward direction
    RunForward,
    /// Backpedaling
    WalkBackward,
    /// Side-stepping left
    StrafeLeft,
    /// Side-stepping right
    StrafeRight,
    /// Mid-jump; holds until the jump arc lands
    Jump,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self::Idle
    }
}

impl LocomotionState {
    /// Name of the clip driving this state.
    pub fn clip_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::WalkForward => "walk",
            Self::RunForward => "run",
            Self::WalkBackward => "walk_back",
            Self::StrafeLeft => "strafe_left",
            Self::StrafeRight => "strafe_right",
            Self::Jump => "jump",
        }
    }
}

/// Derive the state the avatar wants to be in from movement intent alone.
///
/// Forward/backward intent wins over strafe when both are held. Jump is
/// never produced here; it pre-empts through the trigger path instead.
pub fn desired_state(intent: &MoveIntent) -> LocomotionState {
    if intent.forward > 0.0 {
        if intent.run {
            LocomotionState::RunForward
        } else {
            LocomotionState::WalkForward
        }
    } else if intent.forward < 0.0 {
        LocomotionState::WalkBackward
    } else if intent.strafe < 0.0 {
        LocomotionState::StrafeLeft
    } else if intent.strafe > 0.0 {
        LocomotionState::StrafeRight
    } else {
        LocomotionState::Idle
    }
}

/// Movement tuning shared by every avatar.
#[derive(Debug, Clone)]
pub struct LocomotionTuning {
    /// Walking speed (units/second)
    pub walk_speed: f32,
    /// Running speed (units/second)
    pub run_speed: f32,
    /// Backpedal speed as a fraction of walking speed
    pub backpedal_factor: f32,
    /// Exponential smoothing rate pulling actual speed toward target speed
    pub accel_rate: f32,
    /// Crossfade length for locomotion transitions (seconds)
    pub blend_duration: f32,
    /// Crossfade length into the jump clip (seconds)
    pub jump_blend_in: f32,
}

/// Baseline tuning matching the reference character.
pub const BASE_TUNING: LocomotionTuning = LocomotionTuning {
    walk_speed: 2.4,
    run_speed: 4.8,
    backpedal_factor: 0.8,
    accel_rate: 8.0,
    blend_duration: 0.10,
    jump_blend_in: 0.12,
};

impl Default for LocomotionTuning {
    fn default() -> Self {
        BASE_TUNING
    }
}

impl LocomotionTuning {
    /// Target speed for a locomotion state.
    pub fn target_speed(&self, state: LocomotionState) -> f32 {
        match state {
            LocomotionState::WalkForward => self.walk_speed,
            LocomotionState::WalkBackward => self.walk_speed * self.backpedal_factor,
            LocomotionState::StrafeLeft | LocomotionState::StrafeRight => self.walk_speed,
            LocomotionState::RunForward => self.run_speed,
            LocomotionState::Idle | LocomotionState::Jump => 0.0,
        }
    }

    /// Smooth `speed` toward `target` for one frame.
    ///
    /// The blend factor is capped at 1 so a long frame lands exactly on
    /// the target instead of overshooting past it.
    pub fn smooth_speed(&self, speed: f32, target: f32, dt: f32) -> f32 {
        speed + (target - speed) * (self.accel_rate * dt).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(forward: f32, strafe: f32, run: bool) -> MoveIntent {
        MoveIntent {
            forward,
            strafe,
            run,
            jump: false,
        }
    }

    #[test]
    fn test_neutral_intent_is_idle() {
        assert_eq!(desired_state(&intent(0.0, 0.0, false)), LocomotionState::Idle);
    }

    #[test]
    fn test_forward_walks_or_runs() {
        assert_eq!(
            desired_state(&intent(1.0, 0.0, false)),
            LocomotionState::WalkForward
        );
        assert_eq!(
            desired_state(&intent(1.0, 0.0, true)),
            LocomotionState::RunForward
        );
    }

    #[test]
    fn test_backward_ignores_run_modifier() {
        assert_eq!(
            desired_state(&intent(-1.0, 0.0, true)),
            LocomotionState::WalkBackward
        );
    }

    #[test]
    fn test_strafe_directions() {
        assert_eq!(
            desired_state(&intent(0.0, -1.0, false)),
            LocomotionState::StrafeLeft
        );
        assert_eq!(
            desired_state(&intent(0.0, 1.0, false)),
            LocomotionState::StrafeRight
        );
    }

    #[test]
    fn test_forward_intent_wins_over_strafe() {
        assert_eq!(
            desired_state(&intent(1.0, 1.0, false)),
            LocomotionState::WalkForward
        );
        assert_eq!(
            desired_state(&intent(-1.0, -1.0, false)),
            LocomotionState::WalkBackward
        );
    }

    #[test]
    fn test_target_speed_table() {
        let tuning = LocomotionTuning::default();
        assert_eq!(tuning.target_speed(LocomotionState::Idle), 0.0);
        assert_eq!(tuning.target_speed(LocomotionState::WalkForward), 2.4);
        assert_eq!(tuning.target_speed(LocomotionState::RunForward), 4.8);
        assert!((tuning.target_speed(LocomotionState::WalkBackward) - 2.4 * 0.8).abs() < 1e-6);
        assert_eq!(tuning.target_speed(LocomotionState::StrafeLeft), 2.4);
        assert_eq!(tuning.target_speed(LocomotionState::StrafeRight), 2.4);
        assert_eq!(tuning.target_speed(LocomotionState::Jump), 0.0);
    }

    #[test]
    fn test_speed_smoothing_converges_without_overshoot() {
        let tuning = LocomotionTuning::default();
        let target = 2.4;
        let dt = 1.0 / 60.0;

        let mut speed = 0.0;
        let mut previous = speed;
        for _ in 0..60 {
            speed = tuning.smooth_speed(speed, target, dt);
            assert!(speed > previous, "speed must strictly increase");
            assert!(speed <= target, "speed must never overshoot the target");
            previous = speed;
        }
        assert!((target - speed).abs() < 1e-3);
    }

    #[test]
    fn test_speed_smoothing_clamps_large_dt() {
        let tuning = LocomotionTuning::default();
        // 8.0 * 1.0 would be a blend factor of 8 without the clamp.
        let speed = tuning.smooth_speed(0.0, 2.4, 1.0);
        assert_eq!(speed, 2.4);
    }

    #[test]
    fn test_clip_names_are_distinct() {
        let states = [
            LocomotionState::Idle,
            LocomotionState::WalkForward,
            LocomotionState::RunForward,
            LocomotionState::WalkBackward,
            LocomotionState::StrafeLeft,
            LocomotionState::StrafeRight,
            LocomotionState::Jump,
        ];
        let mut names = std::collections::HashSet::new();
        for state in states {
            assert!(names.insert(state.clip_name()), "duplicate clip name");
        }
    }
}
