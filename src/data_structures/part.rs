//! Per-level flat storage for fractal parts.
//!
//! The tree is never represented as a pointer graph. Each depth level is a
//! flat array of [`FractalPart`]s, and the parent of part `i` at level `L` is
//! simply part `i / 5` at level `L - 1`. That keeps iteration cache-friendly
//! and lets a whole level be updated in parallel while the parent level is
//! read shared.

use bytemuck::Zeroable;
use cgmath::{One, Rad, Rotation3};

use crate::{
    config::CHILD_COUNT,
    data_structures::instance::InstanceRaw,
    hash::SmallXxHash,
};

/// One rigid node of the fractal tree.
///
/// `local_direction` and `local_rotation` are fixed at construction (the
/// canonical child slot), `world_position`/`world_rotation` are recomputed
/// every frame from the parent, and `spin_angle` accumulates monotonically.
/// External code never writes the world fields directly.
#[derive(Clone, Copy, Debug)]
pub struct FractalPart {
    pub local_direction: cgmath::Vector3<f32>,
    pub local_rotation: cgmath::Quaternion<f32>,
    pub world_position: cgmath::Vector3<f32>,
    pub world_rotation: cgmath::Quaternion<f32>,
    pub spin_angle: f32,
}

impl FractalPart {
    /// Template part for one of the five canonical child slots.
    pub fn template(child_index: usize) -> Self {
        Self {
            local_direction: child_directions()[child_index],
            local_rotation: child_rotations()[child_index],
            world_position: cgmath::Vector3::new(0.0, 0.0, 0.0),
            world_rotation: cgmath::Quaternion::one(),
            spin_angle: 0.0,
        }
    }
}

/// The five canonical child offset directions: up, right, left, forward, back.
pub fn child_directions() -> [cgmath::Vector3<f32>; CHILD_COUNT] {
    [
        cgmath::Vector3::unit_y(),
        cgmath::Vector3::unit_x(),
        -cgmath::Vector3::unit_x(),
        cgmath::Vector3::unit_z(),
        -cgmath::Vector3::unit_z(),
    ]
}

/// Fixed orientation offset for each canonical child slot, chosen so every
/// child's local up-axis points along its offset direction.
pub fn child_rotations() -> [cgmath::Quaternion<f32>; CHILD_COUNT] {
    let quarter = std::f32::consts::FRAC_PI_2;
    [
        cgmath::Quaternion::one(),
        cgmath::Quaternion::from_angle_z(Rad(-quarter)),
        cgmath::Quaternion::from_angle_z(Rad(quarter)),
        cgmath::Quaternion::from_angle_x(Rad(quarter)),
        cgmath::Quaternion::from_angle_x(Rad(-quarter)),
    ]
}

/// One depth layer of the tree: `5^level` parts, the matrix buffer the kernel
/// writes into, and the per-part colour words derived once at construction.
///
/// `parts` and `matrices` stay index-aligned for the lifetime of the level;
/// neither is ever resized after construction.
pub struct Level {
    pub parts: Vec<FractalPart>,
    pub matrices: Vec<InstanceRaw>,
    pub colors: Vec<u32>,
}

impl Level {
    /// Build level `level_index` with `part_count` parts. Non-root parts cycle
    /// through the five canonical child slots; the root uses slot 0 (up,
    /// identity). Colour words come from the hash primitive seeded per level,
    /// so they are reproducible across runs for a fixed `seed`.
    pub fn new(level_index: usize, part_count: usize, seed: i32) -> Self {
        let level_hash = SmallXxHash::seed(seed).eat(level_index as i32);
        let parts = (0..part_count)
            .map(|i| FractalPart::template(i % CHILD_COUNT))
            .collect();
        let colors = (0..part_count)
            .map(|i| level_hash.eat(i as i32).value())
            .collect();
        // Overwritten in full on the first frame, so zeroed bytes are fine.
        let matrices = vec![InstanceRaw::zeroed(); part_count];
        Self {
            parts,
            matrices,
            colors,
        }
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
