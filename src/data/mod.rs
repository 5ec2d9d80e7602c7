//! Data sources for the plot.
//!
//! This module reads series from delimited text files and builds the
//! built-in demo data.

mod demo;
mod reader;

pub use demo::demo_series;
pub use reader::{series_color, DataReader};
