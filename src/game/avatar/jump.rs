// Parametric jump arc with a decaying forward impulse

use glam::Vec3;

/// Forward impulse captured when jumping out of forward movement
/// (units/second).
pub const JUMP_FORWARD_POWER: f32 = 4.0;
/// Linear decay applied to the forward impulse (units/second per second).
pub const JUMP_FORWARD_DECAY: f32 = 2.5;
/// Height of the arc at its halfway point.
pub const JUMP_PEAK_HEIGHT: f32 = 1.2;

/// Floor for the total duration so the phase division stays finite.
const MIN_JUMP_DURATION: f32 = 0.01;

/// The three tunable phases making up one jump.
#[derive(Debug, Clone)]
pub struct JumpTiming {
    /// Crossfade into the jump clip
    pub blend_in: f32,
    /// Time spent at the top of the animation
    pub hold: f32,
    /// Crossfade back out
    pub blend_out: f32,
}

impl JumpTiming {
    /// Total airborne time in seconds.
    pub fn total(&self) -> f32 {
        (self.blend_in + self.hold + self.blend_out).max(MIN_JUMP_DURATION)
    }
}

impl Default for JumpTiming {
    fn default() -> Self {
        Self {
            blend_in: 0.12,
            hold: 0.45,
            blend_out: 0.18,
        }
    }
}

/// Vertical offset of the arc at normalized phase `x` in [0, 1].
///
/// A parabola that is zero at both ends and peaks at `JUMP_PEAK_HEIGHT`
/// when `x` is 0.5.
pub fn arc_height(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    JUMP_PEAK_HEIGHT * 4.0 * x * (1.0 - x)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JumpPhase {
    Grounded,
    Airborne,
}

/// Displacement contributed by the jump for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpStep {
    /// Horizontal displacement from the decaying forward impulse.
    pub horizontal: Vec3,
    /// Vertical offset of the arc, applied in the model transform rather
    /// than to the kinematic position.
    pub height: f32,
}

/// Generates a fixed-duration parabolic arc plus an optional decaying
/// forward impulse. Independent of the blend system; the state machine
/// drives the matching clip transition separately.
#[derive(Debug)]
pub struct JumpArc {
    phase: JumpPhase,
    elapsed: f32,
    timing: JumpTiming,
    forward_dir: Vec3,
    forward_speed: f32,
}

impl JumpArc {
    pub fn new(timing: JumpTiming) -> Self {
        Self {
            phase: JumpPhase::Grounded,
            elapsed: 0.0,
            timing,
            forward_dir: Vec3::ZERO,
            forward_speed: 0.0,
        }
    }

    /// Leave the ground.
    ///
    /// `forward` carries the impulse direction when the jump was triggered
    /// out of forward movement; strafe-only and standing jumps get no
    /// impulse. Ignored while already airborne: the arc always runs to
    /// completion.
    pub fn trigger(&mut self, forward: Option<Vec3>) {
        if self.phase == JumpPhase::Airborne {
            return;
        }
        self.phase = JumpPhase::Airborne;
        self.elapsed = 0.0;
        match forward {
            Some(dir) => {
                self.forward_dir = dir;
                self.forward_speed = JUMP_FORWARD_POWER;
            }
            None => {
                self.forward_dir = Vec3::ZERO;
                self.forward_speed = 0.0;
            }
        }
    }

    pub fn is_airborne(&self) -> bool {
        self.phase == JumpPhase::Airborne
    }

    /// Airborne time so far.
    #[allow(dead_code)]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[allow(dead_code)]
    pub fn total_duration(&self) -> f32 {
        self.timing.total()
    }

    /// Remaining impulse magnitude.
    #[allow(dead_code)]
    pub fn forward_speed(&self) -> f32 {
        self.forward_speed
    }

    /// Advance the arc by one frame.
    ///
    /// The forward impulse is applied before it decays, and the decay
    /// floors at zero so the impulse never reverses. Once elapsed time
    /// reaches the total duration the arc lands; the returned height is
    /// zero on that frame.
    pub fn update(&mut self, dt: f32) -> JumpStep {
        if self.phase == JumpPhase::Grounded {
            return JumpStep::default();
        }

        let mut step = JumpStep::default();
        if self.forward_speed > 0.0 {
            step.horizontal = self.forward_dir * self.forward_speed * dt;
            self.forward_speed = (self.forward_speed - JUMP_FORWARD_DECAY * dt).max(0.0);
        }

        self.elapsed += dt;
        step.height = arc_height(self.elapsed / self.timing.total());
        if self.elapsed >= self.timing.total() {
            self.phase = JumpPhase::Grounded;
        }
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arc_height_endpoints_and_peak() {
        assert_eq!(arc_height(0.0), 0.0);
        assert_eq!(arc_height(1.0), 0.0);
        assert_relative_eq!(arc_height(0.5), JUMP_PEAK_HEIGHT, epsilon = 1e-6);
    }

    #[test]
    fn test_arc_height_is_symmetric() {
        for i in 0..=20 {
            let x = i as f32 / 20.0;
            assert_relative_eq!(arc_height(x), arc_height(1.0 - x), epsilon = 1e-5);
        }
    }

    #[test]
    fn test_default_timing_total() {
        let timing = JumpTiming::default();
        assert_relative_eq!(timing.total(), 0.75, epsilon = 1e-6);
    }

    #[test]
    fn test_grounded_update_is_inert() {
        let mut jump = JumpArc::new(JumpTiming::default());
        let step = jump.update(0.1);
        assert_eq!(step.height, 0.0);
        assert_eq!(step.horizontal, Vec3::ZERO);
        assert!(!jump.is_airborne());
    }

    #[test]
    fn test_trigger_starts_airborne_phase() {
        let mut jump = JumpArc::new(JumpTiming::default());
        jump.trigger(None);
        assert!(jump.is_airborne());
        assert_eq!(jump.elapsed(), 0.0);
        assert_eq!(jump.forward_speed(), 0.0);
    }

    #[test]
    fn test_forward_trigger_captures_impulse() {
        let mut jump = JumpArc::new(JumpTiming::default());
        jump.trigger(Some(Vec3::new(0.0, 0.0, -1.0)));
        assert_eq!(jump.forward_speed(), JUMP_FORWARD_POWER);
    }

    #[test]
    fn test_impulse_decays_linearly_and_floors_at_zero() {
        let mut jump = JumpArc::new(JumpTiming {
            blend_in: 1.0,
            hold: 1.0,
            blend_out: 1.0,
        });
        jump.trigger(Some(Vec3::new(0.0, 0.0, -1.0)));

        let step = jump.update(0.1);
        // Impulse applies at full power before decaying.
        assert_relative_eq!(step.horizontal.z, -JUMP_FORWARD_POWER * 0.1, epsilon = 1e-6);
        assert_relative_eq!(
            jump.forward_speed(),
            JUMP_FORWARD_POWER - JUMP_FORWARD_DECAY * 0.1,
            epsilon = 1e-6
        );

        // 4.0 / 2.5 = 1.6 seconds drains the impulse completely.
        for _ in 0..20 {
            jump.update(0.1);
        }
        assert_eq!(jump.forward_speed(), 0.0);
    }

    #[test]
    fn test_lands_after_total_duration() {
        let mut jump = JumpArc::new(JumpTiming::default());
        jump.trigger(None);

        let dt = 1.0 / 60.0;
        let mut frames = 0;
        while jump.is_airborne() {
            jump.update(dt);
            frames += 1;
            assert!(frames < 120, "jump never landed");
        }
        // 0.75s at 60Hz is 45 frames, give or take float accumulation.
        assert!((45..=46).contains(&frames), "landed after {frames} frames");
    }

    #[test]
    fn test_height_follows_parabola() {
        let mut jump = JumpArc::new(JumpTiming::default());
        jump.trigger(None);

        let total = jump.total_duration();
        let step = jump.update(total / 2.0);
        assert_relative_eq!(step.height, JUMP_PEAK_HEIGHT, epsilon = 1e-5);

        let step = jump.update(total / 2.0);
        assert_relative_eq!(step.height, 0.0, epsilon = 1e-5);
        assert!(!jump.is_airborne());
    }

    #[test]
    fn test_retrigger_while_airborne_is_ignored() {
        let mut jump = JumpArc::new(JumpTiming::default());
        jump.trigger(None);
        jump.update(0.3);
        let elapsed = jump.elapsed();

        jump.trigger(Some(Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(jump.elapsed(), elapsed);
        assert_eq!(jump.forward_speed(), 0.0);
    }
}
