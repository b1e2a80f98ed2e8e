// Avatar animation and locomotion
//
// Everything that decides what the character plays and where it stands:
// - Pose data and component-wise blending
// - Clip playback over a fixed player registry
// - Crossfade transitions between clips
// - Locomotion state selection and movement tuning
// - The parametric jump arc

pub mod avatar;
pub mod clip;
pub mod crossfade;
pub mod jump;
pub mod locomotion;
pub mod pose;

// Re-export commonly used types
pub use avatar::{Avatar, ClipSet, Kinematics, GROUND_HEIGHT};
pub use clip::{AnimationClip, ClipEvaluator, ClipId, ClipPlayer, ClipRegistry};
pub use crossfade::Crossfade;
pub use jump::{JumpArc, JumpStep, JumpTiming};
pub use locomotion::{desired_state, LocomotionState, LocomotionTuning};
pub use pose::Pose;

/// Rig assembly errors
#[derive(Debug, thiserror::Error)]
pub enum RigError {
    #[error("missing animation clip: {0}")]
    MissingClip(String),
}
