//! Instance transformation data for GPU rendering.
//!
//! Per-instance data like position, rotation, and scale is converted into a
//! packed matrix form that a render collaborator can copy straight into a
//! GPU buffer for instanced drawing. The engine itself never talks to the
//! GPU; it only guarantees the packed layout.

use cgmath::One;

/// A transform: position, rotation (as quaternion), and uniform scale.
///
/// Used both as the external root transform handed to the engine every frame
/// and, packed via [`to_raw`](Instance::to_raw), as the per-part output the
/// renderer consumes. Scale is uniform because fractal parts only ever shrink
/// evenly from level to level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instance {
    pub position: cgmath::Vector3<f32>,
    pub rotation: cgmath::Quaternion<f32>,
    pub scale: f32,
}

impl Instance {
    /// Create a new instance with identity transformation (no move, rotate, or scale).
    pub fn new() -> Self {
        Self {
            position: cgmath::Vector3::new(0.0, 0.0, 0.0),
            // `Quaternion::one()` is the identity quaternion (no rotation)
            rotation: cgmath::Quaternion::one(),
            scale: 1.0,
        }
    }

    pub fn to_matrix(&self) -> cgmath::Matrix4<f32> {
        cgmath::Matrix4::from_translation(self.position)
            * cgmath::Matrix4::from(self.rotation)
            * cgmath::Matrix4::from_scale(self.scale)
    }

    pub fn to_raw(&self) -> InstanceRaw {
        InstanceRaw {
            model: self.to_matrix().into(),
        }
    }
}

impl Default for Instance {
    fn default() -> Self {
        Self::new()
    }
}

/**
 * The raw instance is the exact byte layout handed to the GPU.
 *
 * One 4x4 column-major model matrix per part: orthonormal rotation scaled
 * uniformly, translated to the part's world position. `Pod` so whole level
 * buffers can be reinterpreted with `bytemuck::cast_slice` without copying.
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
}

impl InstanceRaw {
    /// Compose the packed matrix directly from world state, skipping the
    /// intermediate [`Instance`]. This is what the update kernel emits.
    pub fn from_world(
        position: cgmath::Vector3<f32>,
        rotation: cgmath::Quaternion<f32>,
        scale: f32,
    ) -> Self {
        Instance {
            position,
            rotation,
            scale,
        }
        .to_raw()
    }
}
