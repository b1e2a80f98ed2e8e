// Per-bone pose data and blending

use glam::Mat4;

/// The complete set of per-bone transform matrices at one instant.
///
/// Bone transforms are indexed by bone id. Indices past the end of the
/// sequence read as the identity transform, so poses sampled from clips
/// with differing bone counts blend cleanly.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    bones: Vec<Mat4>,
}

impl Pose {
    pub fn new(bones: Vec<Mat4>) -> Self {
        Self { bones }
    }

    /// A pose of `count` identity transforms.
    pub fn identity(count: usize) -> Self {
        Self {
            bones: vec![Mat4::IDENTITY; count],
        }
    }

    /// Number of bones this pose carries.
    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    /// Transform for a bone id; identity when the pose has no such bone.
    pub fn bone(&self, index: usize) -> Mat4 {
        self.bones.get(index).copied().unwrap_or(Mat4::IDENTITY)
    }

    /// All bone transforms in bone-id order.
    pub fn bones(&self) -> &[Mat4] {
        &self.bones
    }

    /// Interpolate two poses component-wise.
    ///
    /// Each of the 16 matrix components is lerped independently over the
    /// union of both poses' bone indices. This is intentionally not a
    /// decomposed translation/rotation/scale blend: the reference behavior
    /// is reproduced exactly, including its visual imprecision for large
    /// rotation deltas.
    pub fn lerp(a: &Pose, b: &Pose, t: f32) -> Pose {
        let t = t.clamp(0.0, 1.0);
        let count = a.bone_count().max(b.bone_count());
        let bones = (0..count)
            .map(|i| a.bone(i) * (1.0 - t) + b.bone(i) * t)
            .collect();
        Self { bones }
    }
}
