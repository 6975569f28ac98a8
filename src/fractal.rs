//! The fractal engine facade.
//!
//! A [`Fractal`] owns the whole tree: per-level part arrays, matrix buffers,
//! and colour words. The host integrator constructs it once, calls
//! [`update`](Fractal::update) every frame with the elapsed time and the
//! root's external transform, and afterwards hands the level buffers to its
//! render collaborator. Changing the depth means dropping the fractal and
//! constructing a new one; the tree shape never changes mid-flight.

use instant::Duration;
use log::debug;

use crate::{
    config::{ConfigError, FractalConfig, CHILD_COUNT},
    data_structures::{
        instance::{Instance, InstanceRaw},
        part::{FractalPart, Level},
    },
    render::LevelInstances,
    scheduler,
};

pub struct Fractal {
    config: FractalConfig,
    levels: Vec<Level>,
}

impl Fractal {
    /// Build the fixed tree described by `config`.
    ///
    /// Level `L` gets `5^L` parts; all arrays are allocated here and never
    /// resized afterwards. A rejected configuration leaves no partial state.
    pub fn new(config: FractalConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let levels = (0..config.depth as usize)
            .scan(1usize, |count, level| {
                let part_count = *count;
                *count *= CHILD_COUNT;
                Some(Level::new(level, part_count, config.seed))
            })
            .collect::<Vec<_>>();
        debug!(
            "fractal allocated: depth {}, {} parts total",
            config.depth,
            levels.iter().map(Level::len).sum::<usize>()
        );
        Ok(Self { config, levels })
    }

    /// Advance the animation by `dt` and rebuild every matrix buffer.
    ///
    /// `root` is the externally driven world transform of the tree's root.
    /// The call returns only once the deepest level's batch has completed,
    /// so all buffers read afterwards hold this frame's output. `update`
    /// has no failure path.
    pub fn update(&mut self, dt: Duration, root: &Instance) {
        let spin_delta = self.config.spin_rate * dt.as_secs_f32();
        scheduler::run_frame(&mut self.levels, root, spin_delta, self.config.sag);
    }

    pub fn config(&self) -> &FractalConfig {
        &self.config
    }

    /// Number of levels, equal to the configured depth.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Total part count across all levels, `(5^depth - 1) / 4`.
    pub fn part_count(&self) -> usize {
        self.levels.iter().map(Level::len).sum()
    }

    /// This frame's packed matrices for one level, index-aligned with the
    /// level's parts. Contents are overwritten in place by the next `update`;
    /// callers must not hold on to them across frames.
    pub fn matrices(&self, level: usize) -> Option<&[InstanceRaw]> {
        self.levels.get(level).map(|l| l.matrices.as_slice())
    }

    /// Procedural colour words for one level, fixed at construction.
    pub fn colors(&self, level: usize) -> Option<&[u32]> {
        self.levels.get(level).map(|l| l.colors.as_slice())
    }

    /// Part state for one level. Read-only: world state is derived, and
    /// external writes would break the engine's aliasing guarantees.
    pub fn parts(&self, level: usize) -> Option<&[FractalPart]> {
        self.levels.get(level).map(|l| l.parts.as_slice())
    }

    /// Per-level views for the render collaborator, in depth order.
    pub fn level_instances(&self) -> Vec<LevelInstances<'_>> {
        self.levels
            .iter()
            .enumerate()
            .map(|(level, l)| LevelInstances {
                matrices: &l.matrices,
                colors: &l.colors,
                amount: l.len(),
                level,
            })
            .collect()
    }
}
