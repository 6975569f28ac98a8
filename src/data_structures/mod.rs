//! Engine data structures: parts, levels, and instance transforms.
//!
//! This module contains the core data types for the fractal tree:
//!
//! - `instance` holds per-instance transformation data and its packed GPU layout
//! - `part` contains the fractal part state and the per-level flat arrays

pub mod instance;
pub mod part;
