//! Render contract between the engine and its rendering collaborator.
//!
//! The engine never issues draw calls or buffer uploads. Instead it exposes
//! one [`LevelInstances`] view per tree level: a contiguous slice of packed
//! matrices, the matching procedural colour words, and the element count.
//! The collaborator uploads those (e.g. as an instance buffer behind a
//! single instanced draw per level) and owns everything GPU-side.
//!
//! The contract is single-writer/single-reader per frame, enforced by call
//! order rather than locks: slices are valid from the moment `update`
//! returns until the next `update` overwrites them in place.

use crate::data_structures::instance::InstanceRaw;

/// Data for instanced rendering of one tree level.
///
/// `matrices` and `colors` are index-aligned; `amount` is their shared
/// length (`5^level`). Both slices are `Pod`-backed, so an upload is a
/// single `bytemuck::cast_slice` away.
pub struct LevelInstances<'a> {
    pub matrices: &'a [InstanceRaw],
    pub colors: &'a [u32],
    pub amount: usize,
    pub level: usize,
}
