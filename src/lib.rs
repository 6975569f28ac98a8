//! frac-ngin
//!
//! A procedural hierarchical-animation engine: a fixed-shape fractal tree of
//! rigid parts whose per-frame world transforms are computed parent-first
//! across tree levels and packed into contiguous matrix buffers for a GPU
//! instanced-rendering path. The engine owns all part and matrix state and
//! speaks no GPU API itself; a render collaborator consumes the buffers it
//! publishes each frame.
//!
//! High-level modules
//! - `config`: construction-time configuration and validation
//! - `data_structures`: part state, per-level flat arrays, instance transforms
//! - `fractal`: the engine facade owning the tree and driving frames
//! - `hash`: deterministic 32-bit hashing for procedural variation
//! - `kernel`: the pure per-part transform-update function
//! - `render`: the buffer-handoff contract with the rendering collaborator
//! - `scheduler`: depth-ordered parallel batch execution per level
//!

pub mod config;
pub mod data_structures;
pub mod fractal;
pub mod hash;
pub mod kernel;
pub mod render;
pub mod scheduler;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use config::{ConfigError, FractalConfig, SagMode};
pub use data_structures::instance::{Instance, InstanceRaw};
pub use fractal::Fractal;
