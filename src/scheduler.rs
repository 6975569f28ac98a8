//! Depth-ordered parallel execution of level batches.
//!
//! One frame is a chain of fork-join batches: the root is updated
//! synchronously, then every deeper level is swept as one rayon batch over
//! its index range. A batch only starts after the previous level's batch has
//! joined, so kernel invocations always read finalized parent state. Within
//! a batch the work is chunked one child-group of five at a time, matching
//! parent locality; distribution inside a batch carries no ordering
//! requirement at all.

use rayon::prelude::*;

use crate::{
    config::{CHILD_COUNT, SagMode},
    data_structures::{instance::Instance, part::Level},
    kernel,
};

/// Run one frame's full update pass over all levels.
///
/// Returns only after the deepest level's batch has joined, at which point
/// every level's matrix buffer holds this frame's complete output. There is
/// no mid-frame cancellation path; a slow frame simply finishes late.
pub fn run_frame(levels: &mut [Level], root: &Instance, spin_delta: f32, sag: SagMode) {
    let root_level = &mut levels[0];
    kernel::update_root(
        &mut root_level.parts[0],
        &mut root_level.matrices[0],
        root,
        spin_delta,
    );

    let mut scale = root.scale;
    // Split so each batch borrows its parent level shared and its own level
    // exclusively; the parent relation is `i / 5`, not a stored pointer.
    for depth in 1..levels.len() {
        scale *= 0.5;
        let (done, remaining) = levels.split_at_mut(depth);
        run_level(&done[depth - 1], &mut remaining[0], spin_delta, scale, sag);
    }
}

/// Dispatch one level as a parallel batch of kernel invocations.
fn run_level(parents: &Level, level: &mut Level, spin_delta: f32, scale: f32, sag: SagMode) {
    let parent_parts = &parents.parts;
    level
        .parts
        .par_chunks_mut(CHILD_COUNT)
        .zip(level.matrices.par_chunks_mut(CHILD_COUNT))
        .enumerate()
        .for_each(|(group, (parts, matrices))| {
            let parent = &parent_parts[group];
            for (part, matrix) in parts.iter_mut().zip(matrices.iter_mut()) {
                kernel::update_child(parent, part, matrix, spin_delta, scale, sag);
            }
        });
}
