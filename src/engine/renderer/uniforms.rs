// GPU uniform layouts for the skinned character pass

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use super::camera::OrbitCamera;

/// Upper bound on bones uploaded to the skinning palette.
pub const MAX_BONES: usize = 100;

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Create a new camera uniform from a camera
    pub fn new(camera: &OrbitCamera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}

/// Per-mesh model matrix uniform
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

impl ModelUniform {
    pub fn new(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
        }
    }

    /// Identity transform for static scenery
    #[allow(dead_code)]
    pub fn identity() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

/// Bone palette uniform fed to the skinning vertex stage
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct SkinningUniform {
    pub bones: [[[f32; 4]; 4]; MAX_BONES],
}

impl SkinningUniform {
    /// Fill the palette from per-bone matrices. Missing bones stay
    /// identity and bones past `MAX_BONES` are dropped.
    pub fn from_bones(bones: &[Mat4]) -> Self {
        let mut palette = [Mat4::IDENTITY.to_cols_array_2d(); MAX_BONES];
        for (slot, matrix) in palette.iter_mut().zip(bones.iter()) {
            *slot = matrix.to_cols_array_2d();
        }
        Self { bones: palette }
    }

    /// All-identity palette for unskinned meshes
    pub fn neutral() -> Self {
        Self {
            bones: [Mat4::IDENTITY.to_cols_array_2d(); MAX_BONES],
        }
    }
}

impl Default for SkinningUniform {
    fn default() -> Self {
        Self::neutral()
    }
}
