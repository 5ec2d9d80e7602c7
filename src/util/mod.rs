//! Utility functions.
//!
//! This module provides layout constants for the plot renderer, number
//! formatting shared by the renderer and the axis inputs, and size parsing
//! for off-screen renders.

mod formatters;
mod layout_config;
mod size;

pub use formatters::{format_bound, format_tick};
pub use layout_config::PlotLayoutConfig;
pub use size::parse_size;
