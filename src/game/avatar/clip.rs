// Animation clips and looping playback

use std::fmt;
use std::sync::Arc;

use super::pose::Pose;

/// Smallest clip length accepted. Shorter (or non-positive) durations are
/// clamped so playhead wrapping never divides by zero.
pub const MIN_CLIP_DURATION: f32 = 0.001;

/// Evaluates a clip's bone hierarchy at a point in time.
///
/// Implemented by the model-import subsystem; the demo ships a procedural
/// stand-in in `game::rig`.
pub trait ClipEvaluator: Send + Sync {
    /// Per-bone matrices for the given playhead time in seconds.
    fn evaluate(&self, time: f32) -> Pose;
}

/// A named, fixed-duration animation track over a skeleton's bones.
///
/// Immutable once created; owned by the `ClipRegistry` for the session.
#[derive(Clone)]
pub struct AnimationClip {
    name: String,
    duration: f32,
    evaluator: Arc<dyn ClipEvaluator>,
}

impl AnimationClip {
    pub fn new(name: &str, duration: f32, evaluator: Arc<dyn ClipEvaluator>) -> Self {
        Self {
            name: name.to_string(),
            duration: duration.max(MIN_CLIP_DURATION),
            evaluator,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Clip length in seconds, always positive.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Evaluate the bone hierarchy at `time`.
    pub fn sample(&self, time: f32) -> Pose {
        self.evaluator.evaluate(time)
    }
}

impl fmt::Debug for AnimationClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationClip")
            .field("name", &self.name)
            .field("duration", &self.duration)
            .finish()
    }
}

/// Plays one clip on a looping playhead.
#[derive(Debug)]
pub struct ClipPlayer {
    clip: AnimationClip,
    playhead: f32,
}

impl ClipPlayer {
    pub fn new(clip: AnimationClip) -> Self {
        Self {
            clip,
            playhead: 0.0,
        }
    }

    /// Move the playhead forward by `dt` seconds, wrapping modulo the clip
    /// duration. Negative `dt` is ignored.
    pub fn advance(&mut self, dt: f32) {
        if dt < 0.0 {
            return;
        }
        self.playhead = (self.playhead + dt) % self.clip.duration();
    }

    /// Current playhead time in seconds, in `[0, duration)`.
    #[allow(dead_code)]
    pub fn playhead(&self) -> f32 {
        self.playhead
    }

    #[allow(dead_code)]
    pub fn clip(&self) -> &AnimationClip {
        &self.clip
    }

    /// Bone transforms at the current playhead.
    pub fn current_pose(&self) -> Pose {
        self.clip.sample(self.playhead)
    }
}

/// Handle to a `ClipPlayer` owned by a `ClipRegistry`.
///
/// Copyable index into the fixed player table; the "current" and "target"
/// animators are retargeted by reassigning handles, never by holding
/// references into the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipId(usize);

/// Owns every clip player for the session.
///
/// All players advance every frame whether or not they are currently
/// visible, so switching back to a previously active state resumes
/// mid-clip instead of restarting.
#[derive(Debug, Default)]
pub struct ClipRegistry {
    players: Vec<ClipPlayer>,
}

impl ClipRegistry {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
        }
    }

    /// Add a clip and return the handle to its player.
    pub fn register(&mut self, clip: AnimationClip) -> ClipId {
        let id = ClipId(self.players.len());
        self.players.push(ClipPlayer::new(clip));
        id
    }

    /// Look up a player handle by clip name.
    pub fn find(&self, name: &str) -> Option<ClipId> {
        self.players
            .iter()
            .position(|p| p.clip.name() == name)
            .map(ClipId)
    }

    /// The player behind a handle. Handles are only issued by `register`,
    /// so the lookup cannot miss.
    pub fn player(&self, id: ClipId) -> &ClipPlayer {
        &self.players[id.0]
    }

    /// Current pose of one player.
    pub fn pose(&self, id: ClipId) -> Pose {
        self.players[id.0].current_pose()
    }

    /// Advance every player by `dt`.
    pub fn advance_all(&mut self, dt: f32) {
        for player in &mut self.players {
            player.advance(dt);
        }
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
