// Crossfade blending between two clip players

use super::clip::{ClipId, ClipRegistry};
use super::pose::Pose;

/// Blend length used when no explicit duration is given.
pub const DEFAULT_BLEND: f32 = 0.18;
/// Shortest allowed blend; floors the duration so progress never divides
/// by zero.
const MIN_BLEND: f32 = 0.01;

/// Time-bounded linear interpolation between two playing clips, masking a
/// discontinuous animation switch.
///
/// Exactly one crossfade exists per avatar. Requesting a new blend while
/// one is active replaces it outright: the in-progress interpolation is
/// discarded, not chained.
#[derive(Debug)]
pub struct Crossfade {
    from: ClipId,
    to: ClipId,
    t: f32,
    duration: f32,
}

impl Crossfade {
    /// An inactive crossfade resting on `initial`.
    pub fn new(initial: ClipId) -> Self {
        Self {
            from: initial,
            to: initial,
            t: 1.0,
            duration: DEFAULT_BLEND,
        }
    }

    /// Begin a new blend, replacing any blend already in flight.
    pub fn start(&mut self, from: ClipId, to: ClipId, seconds: f32) {
        self.from = from;
        self.to = to;
        self.t = 0.0;
        self.duration = seconds.max(MIN_BLEND);
    }

    /// Advance blend progress by `dt` seconds. `tick(0.0)` never changes
    /// progress, and a finished blend stays finished until `start`.
    pub fn tick(&mut self, dt: f32) {
        if self.t < 1.0 {
            self.t = (self.t + dt / self.duration).min(1.0);
        }
    }

    /// True while the blend is still in progress.
    pub fn is_active(&self) -> bool {
        self.t < 1.0
    }

    /// Blend progress in [0, 1].
    #[allow(dead_code)]
    pub fn progress(&self) -> f32 {
        self.t
    }

    #[allow(dead_code)]
    pub fn from(&self) -> ClipId {
        self.from
    }

    #[allow(dead_code)]
    pub fn to(&self) -> ClipId {
        self.to
    }

    /// The currently visible pose.
    ///
    /// While active, every bone present in either endpoint is interpolated
    /// component-wise; once finished this is the "to" player's pose with
    /// no interpolation overhead.
    pub fn blended_pose(&self, registry: &ClipRegistry) -> Pose {
        if !self.is_active() {
            return registry.pose(self.to);
        }
        let a = registry.pose(self.from);
        let b = registry.pose(self.to);
        Pose::lerp(&a, &b, self.t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::avatar::clip::{AnimationClip, ClipEvaluator};
    use approx::assert_relative_eq;
    use glam::{Mat4, Vec3};
    use std::sync::Arc;

    /// Evaluator returning a constant translation on every bone.
    struct ConstClip {
        offset: f32,
        bone_count: usize,
    }

    impl ClipEvaluator for ConstClip {
        fn evaluate(&self, _time: f32) -> Pose {
            Pose::new(vec![
                Mat4::from_translation(Vec3::new(self.offset, 0.0, 0.0));
                self.bone_count
            ])
        }
    }

    fn registry_with(a_offset: f32, a_bones: usize, b_offset: f32, b_bones: usize) -> (ClipRegistry, ClipId, ClipId) {
        let mut registry = ClipRegistry::new();
        let a = registry.register(AnimationClip::new(
            "a",
            1.0,
            Arc::new(ConstClip {
                offset: a_offset,
                bone_count: a_bones,
            }),
        ));
        let b = registry.register(AnimationClip::new(
            "b",
            1.0,
            Arc::new(ConstClip {
                offset: b_offset,
                bone_count: b_bones,
            }),
        ));
        (registry, a, b)
    }

    #[test]
    fn test_new_crossfade_is_inactive() {
        let (registry, a, _) = registry_with(1.0, 2, 2.0, 2);
        let fade = Crossfade::new(a);
        assert!(!fade.is_active());
        assert_relative_eq!(fade.blended_pose(&registry).bone(0).w_axis.x, 1.0);
    }

    #[test]
    fn test_start_resets_progress() {
        let (_registry, a, b) = registry_with(1.0, 2, 2.0, 2);
        let mut fade = Crossfade::new(a);
        fade.start(a, b, 0.1);
        assert!(fade.is_active());
        assert_eq!(fade.progress(), 0.0);
    }

    #[test]
    fn test_blend_endpoints_match_source_poses() {
        let (registry, a, b) = registry_with(1.0, 2, 5.0, 2);
        let mut fade = Crossfade::new(a);
        fade.start(a, b, 1.0);

        // Progress 0: exactly the "from" pose.
        assert_relative_eq!(fade.blended_pose(&registry).bone(0).w_axis.x, 1.0, epsilon = 1e-6);

        // Progress 1: exactly the "to" pose.
        fade.tick(1.0);
        assert_relative_eq!(fade.blended_pose(&registry).bone(0).w_axis.x, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_blend_midpoint() {
        let (registry, a, b) = registry_with(0.0, 1, 10.0, 1);
        let mut fade = Crossfade::new(a);
        fade.start(a, b, 1.0);
        fade.tick(0.5);
        assert_relative_eq!(fade.blended_pose(&registry).bone(0).w_axis.x, 5.0, epsilon = 1e-5);
    }

    #[test]
    fn test_missing_bones_blend_against_identity() {
        let (registry, a, b) = registry_with(4.0, 1, 8.0, 3);
        let mut fade = Crossfade::new(a);
        fade.start(a, b, 1.0);
        fade.tick(0.5);

        let pose = fade.blended_pose(&registry);
        assert_eq!(pose.bone_count(), 3);
        // Bone 2 exists only in "b": blends identity (0) against 8.
        assert_relative_eq!(pose.bone(2).w_axis.x, 4.0, epsilon = 1e-5);
    }

    #[test]
    fn test_completes_exactly_once() {
        let (_registry, a, b) = registry_with(1.0, 1, 2.0, 1);
        let mut fade = Crossfade::new(a);
        fade.start(a, b, 0.1);

        let mut deactivations = 0;
        let mut was_active = fade.is_active();
        for _ in 0..20 {
            fade.tick(0.016);
            if was_active && !fade.is_active() {
                deactivations += 1;
            }
            was_active = fade.is_active();
        }
        assert_eq!(deactivations, 1);
        assert!(!fade.is_active());
        assert_eq!(fade.progress(), 1.0);
    }

    #[test]
    fn test_tick_zero_is_idempotent() {
        let (_registry, a, b) = registry_with(1.0, 1, 2.0, 1);
        let mut fade = Crossfade::new(a);
        fade.start(a, b, 0.5);
        fade.tick(0.1);
        let progress = fade.progress();
        for _ in 0..100 {
            fade.tick(0.0);
        }
        assert_eq!(fade.progress(), progress);
    }

    #[test]
    fn test_restart_replaces_active_blend() {
        let (_registry, a, b) = registry_with(1.0, 1, 2.0, 1);
        let mut fade = Crossfade::new(a);
        fade.start(a, b, 0.5);
        fade.tick(0.25);
        assert!(fade.progress() > 0.0);

        // A new request discards the in-flight blend and restarts.
        fade.start(b, a, 0.5);
        assert_eq!(fade.progress(), 0.0);
        assert_eq!(fade.from(), b);
        assert_eq!(fade.to(), a);
    }

    #[test]
    fn test_duration_floor() {
        let (_registry, a, b) = registry_with(1.0, 1, 2.0, 1);
        let mut fade = Crossfade::new(a);
        fade.start(a, b, 0.0);
        // A floored duration still produces a finite blend.
        fade.tick(0.001);
        assert!(fade.progress() > 0.0);
        fade.tick(1.0);
        assert!(!fade.is_active());
    }
}
