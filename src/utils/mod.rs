//! Utility functions and helpers.
//!
//! This module contains the size formatting and path rendering helpers shared
//! by both tools.

pub mod path;
pub mod size;

pub use path::get_norm_path;
pub use size::size_to_str;
