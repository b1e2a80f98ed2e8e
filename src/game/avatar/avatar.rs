// Avatar: ties clip playback, blending, locomotion and the jump arc together

use glam::{Mat4, Vec3};
use log::debug;

use crate::core::math::{forward_from_yaw, right_from_yaw};
use crate::engine::input::MoveIntent;

use super::clip::{ClipId, ClipRegistry};
use super::crossfade::Crossfade;
use super::jump::{JumpArc, JumpTiming};
use super::locomotion::{desired_state, LocomotionState, LocomotionTuning};
use super::pose::Pose;
use super::RigError;

/// Resting height of the character origin above the ground plane.
pub const GROUND_HEIGHT: f32 = 0.4;
/// Drops the mesh so the feet touch the ground.
const FOOT_Y_OFFSET: f32 = -0.57;
/// The source model faces the camera by default; spin it around.
const MODEL_YAW_OFFSET: f32 = 180.0;
/// Uniform mesh scale.
const MODEL_SCALE: f32 = 0.5;
/// Movement vectors shorter than this are treated as zero.
const MOVE_EPSILON: f32 = 1e-3;

/// Clip player handles for each locomotion state.
#[derive(Debug, Clone, Copy)]
pub struct ClipSet {
    pub idle: ClipId,
    pub walk: ClipId,
    pub run: ClipId,
    pub walk_back: ClipId,
    pub strafe_left: ClipId,
    pub strafe_right: ClipId,
    pub jump: ClipId,
}

impl ClipSet {
    /// Resolve the set from the standard clip names registered in
    /// `registry`.
    pub fn from_registry(registry: &ClipRegistry) -> Result<Self, RigError> {
        let find = |state: LocomotionState| {
            let name = state.clip_name();
            registry
                .find(name)
                .ok_or_else(|| RigError::MissingClip(name.to_string()))
        };
        Ok(Self {
            idle: find(LocomotionState::Idle)?,
            walk: find(LocomotionState::WalkForward)?,
            run: find(LocomotionState::RunForward)?,
            walk_back: find(LocomotionState::WalkBackward)?,
            strafe_left: find(LocomotionState::StrafeLeft)?,
            strafe_right: find(LocomotionState::StrafeRight)?,
            jump: find(LocomotionState::Jump)?,
        })
    }

    /// Player handle for a locomotion state.
    pub fn for_state(&self, state: LocomotionState) -> ClipId {
        match state {
            LocomotionState::Idle => self.idle,
            LocomotionState::WalkForward => self.walk,
            LocomotionState::RunForward => self.run,
            LocomotionState::WalkBackward => self.walk_back,
            LocomotionState::StrafeLeft => self.strafe_left,
            LocomotionState::StrafeRight => self.strafe_right,
            LocomotionState::Jump => self.jump,
        }
    }
}

/// Position, facing and smoothed speed of the avatar.
#[derive(Debug, Clone)]
pub struct Kinematics {
    /// World position of the character origin.
    pub position: Vec3,
    /// Facing yaw in degrees; follows the camera yaw.
    pub yaw_deg: f32,
    /// Smoothed horizontal speed (units/second).
    pub speed: f32,
    /// Current vertical offset of the jump arc.
    pub jump_height: f32,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, GROUND_HEIGHT, 0.0),
            yaw_deg: 0.0,
            speed: 0.0,
            jump_height: 0.0,
        }
    }
}

/// A player-controlled character: seven always-running clip players, one
/// crossfade, the locomotion state machine and the jump arc.
///
/// The whole simulation is a single `update` per rendered frame driven by
/// an explicit input snapshot; nothing here reads input or time on its
/// own.
#[derive(Debug)]
pub struct Avatar {
    registry: ClipRegistry,
    clips: ClipSet,
    state: LocomotionState,
    /// Player the avatar last finished blending to.
    current: ClipId,
    /// Player the active (or most recent) blend heads toward.
    target: ClipId,
    crossfade: Crossfade,
    jump: JumpArc,
    kinematics: Kinematics,
    tuning: LocomotionTuning,
}

impl Avatar {
    /// Build an avatar over a registry holding the standard clip names.
    pub fn new(registry: ClipRegistry) -> Result<Self, RigError> {
        let clips = ClipSet::from_registry(&registry)?;
        Ok(Self::with_clips(registry, clips))
    }

    /// Build an avatar with an already-resolved clip set.
    pub fn with_clips(registry: ClipRegistry, clips: ClipSet) -> Self {
        Self {
            registry,
            clips,
            state: LocomotionState::default(),
            current: clips.idle,
            target: clips.idle,
            crossfade: Crossfade::new(clips.idle),
            jump: JumpArc::new(JumpTiming::default()),
            kinematics: Kinematics::default(),
            tuning: LocomotionTuning::default(),
        }
    }

    /// Advance the avatar one frame.
    ///
    /// `intent` is this frame's input snapshot and `camera_yaw_deg` the
    /// orbit camera yaw the movement basis is derived from.
    pub fn update(&mut self, intent: &MoveIntent, camera_yaw_deg: f32, dt: f32) {
        self.kinematics.yaw_deg = camera_yaw_deg;

        // Jump pre-empts every other transition while grounded. The
        // forward impulse is captured only when forward intent is held at
        // the trigger instant; strafe-only jumps go straight up.
        if intent.jump && !self.jump.is_airborne() {
            let impulse = if intent.forward > 0.0 {
                Some(forward_from_yaw(camera_yaw_deg))
            } else {
                None
            };
            self.jump.trigger(impulse);
            self.crossfade
                .start(self.current, self.clips.jump, self.tuning.jump_blend_in);
            self.target = self.clips.jump;
            self.set_state(LocomotionState::Jump);
        }

        // Every player keeps running, visible or not, so a state switch
        // resumes mid-clip instead of restarting.
        self.registry.advance_all(dt);
        self.crossfade.tick(dt);
        if !self.crossfade.is_active() {
            self.current = self.target;
        }

        // Locomotion transitions are frozen while airborne; the jump clip
        // holds until the arc lands.
        if !self.jump.is_airborne() {
            let desired = desired_state(intent);
            let want = self.clips.for_state(desired);
            if want != self.target {
                self.crossfade
                    .start(self.current, want, self.tuning.blend_duration);
                self.target = want;
                self.set_state(desired);
            }
        }

        // Speed eases toward the state's target; movement is camera-relative.
        let target_speed = self.tuning.target_speed(self.state);
        self.kinematics.speed =
            self.tuning
                .smooth_speed(self.kinematics.speed, target_speed, dt);

        let forward = forward_from_yaw(camera_yaw_deg);
        let right = right_from_yaw(camera_yaw_deg);
        let mut move_vec = forward * intent.forward + right * intent.strafe;
        if move_vec.length() > MOVE_EPSILON {
            move_vec = move_vec.normalize();
        }
        self.kinematics.position += move_vec * self.kinematics.speed * dt;

        let step = self.jump.update(dt);
        self.kinematics.position += step.horizontal;
        self.kinematics.position.y = GROUND_HEIGHT;
        self.kinematics.jump_height = step.height;
    }

    fn set_state(&mut self, state: LocomotionState) {
        if self.state != state {
            debug!("locomotion {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }

    /// The currently visible blended pose, consumed as skinning uniforms.
    pub fn skinning_pose(&self) -> Pose {
        self.crossfade.blended_pose(&self.registry)
    }

    /// World transform for the character mesh: position plus jump height
    /// and foot offset, facing yaw, uniform scale.
    pub fn world_transform(&self) -> Mat4 {
        let translation = self.kinematics.position
            + Vec3::new(0.0, self.kinematics.jump_height + FOOT_Y_OFFSET, 0.0);
        Mat4::from_translation(translation)
            * Mat4::from_rotation_y((self.kinematics.yaw_deg + MODEL_YAW_OFFSET).to_radians())
            * Mat4::from_scale(Vec3::splat(MODEL_SCALE))
    }

    pub fn state(&self) -> LocomotionState {
        self.state
    }

    pub fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }

    pub fn position(&self) -> Vec3 {
        self.kinematics.position
    }

    #[allow(dead_code)]
    pub fn crossfade(&self) -> &Crossfade {
        &self.crossfade
    }

    #[allow(dead_code)]
    pub fn is_airborne(&self) -> bool {
        self.jump.is_airborne()
    }

    #[allow(dead_code)]
    pub fn registry(&self) -> &ClipRegistry {
        &self.registry
    }
}
