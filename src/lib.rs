//! termplot - An interactive line/point plot widget for the terminal.
//!
//! termplot draws one or more `(x, y)` series onto a braille-resolution
//! canvas with labelled axes, and lets the user fit the view to the data
//! with a key press or a button.
//!
//! # Features
//!
//! - Braille point lines and half-block lines
//! - Auto-scaling over the union of all series
//! - Bounds shared with the caller, so text fields and buttons drive the view
//! - Focus-gated keyboard rescale
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```ignore
//! use ratatui::style::Color;
//! use termplot::plot::{Plot, PlotOption, Series, ViewBounds};
//! use termplot::shared::Shared;
//!
//! let bounds = ViewBounds::new();
//! let data = Shared::new(vec![Series::from_vecs(
//!     vec![0.0, 1.0, 2.0, 3.0],
//!     vec![0.0, 1.0, 4.0, 9.0],
//!     Color::Blue,
//! )]);
//! let mut plot = Plot::new(PlotOption::new(data, &bounds));
//!
//! // Unset bounds are fitted on the first render
//! for line in plot.render_lines(40, 12) {
//!     println!("{}", line);
//! }
//! println!("x range: {:?}", bounds.x_range());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod data;
pub mod error;
pub mod input;
pub mod plot;
pub mod shared;
pub mod ui;
pub mod util;

pub use error::{PlotError, Result};
