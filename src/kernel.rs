//! The per-part update kernel.
//!
//! Pure functions mapping one parent part plus one child part to the child's
//! new world state and its packed output matrix. Invocation `i` of a level
//! reads only `parents[i / 5]` and writes only `parts[i]` and `matrices[i]`,
//! which is what makes whole-level parallel execution safe.

use cgmath::{InnerSpace, Rad, Rotation3};

use crate::{
    config::SagMode,
    data_structures::{
        instance::{Instance, InstanceRaw},
        part::FractalPart,
    },
};

/// Offset of a child from its parent, in multiples of the child's scale.
const CHILD_OFFSET: f32 = 1.5;

/// Update the root part from the externally supplied root transform.
///
/// The root has no parent: its world state is the host's transform composed
/// with the root's own accumulated spin. With a zero spin rate this is an
/// exact pass-through of the external transform.
pub fn update_root(
    part: &mut FractalPart,
    matrix: &mut InstanceRaw,
    root: &Instance,
    spin_delta: f32,
) {
    part.spin_angle += spin_delta;
    part.world_rotation =
        root.rotation * (part.local_rotation * cgmath::Quaternion::from_angle_y(Rad(part.spin_angle)));
    part.world_position = root.position;
    *matrix = InstanceRaw::from_world(part.world_position, part.world_rotation, root.scale);
}

/// Update one child part from its (already updated) parent.
///
/// Composition order is parent orientation first, fixed local slot offset
/// second, dynamic spin last; the order is not commutative and changing it
/// changes the shape. In `Sag` mode the parent orientation is first bent
/// towards the ground proportionally to how far the composed up-axis tilts
/// away from world-up, and the child then hangs off its own bent orientation
/// rather than the parent's offset direction.
pub fn update_child(
    parent: &FractalPart,
    part: &mut FractalPart,
    matrix: &mut InstanceRaw,
    spin_delta: f32,
    scale: f32,
    sag: SagMode,
) {
    part.spin_angle += spin_delta;
    let spin = cgmath::Quaternion::from_angle_y(Rad(part.spin_angle));

    match sag {
        SagMode::Rigid => {
            part.world_rotation = parent.world_rotation * (part.local_rotation * spin);
            part.world_position = parent.world_position
                + parent.world_rotation * (CHILD_OFFSET * scale * part.local_direction);
        }
        SagMode::Sag { max_angle } => {
            let up = cgmath::Vector3::unit_y();
            let up_axis = (parent.world_rotation * part.local_rotation) * up;
            let sag_axis = up.cross(up_axis);
            let sag_magnitude = sag_axis.magnitude();
            // A child pointing straight up has nothing to sag around; fall
            // back to the parent's rotation unperturbed.
            let base_rotation = if sag_magnitude > 0.0 {
                let sag_rotation = cgmath::Quaternion::from_axis_angle(
                    sag_axis / sag_magnitude,
                    Rad(max_angle * sag_magnitude),
                );
                sag_rotation * parent.world_rotation
            } else {
                parent.world_rotation
            };
            part.world_rotation = base_rotation * (part.local_rotation * spin);
            part.world_position = parent.world_position
                + part.world_rotation * cgmath::Vector3::new(0.0, CHILD_OFFSET * scale, 0.0);
        }
    }

    *matrix = InstanceRaw::from_world(part.world_position, part.world_rotation, scale);
}
