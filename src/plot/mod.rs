//! Plot widget - data model, autoscaling, coordinate mapping, rendering
//! and event handling.
//!
//! The widget never owns the data it draws. Series buffers and the four view
//! bounds are [`Shared`](crate::shared::Shared) handles that the caller keeps
//! a clone of, so text fields, buttons and the widget all see the same state.

mod autoscale;
mod bounds;
mod event;
mod mapping;
mod render;
mod widget;

use std::str::FromStr;

use ratatui::style::Color;

use crate::error::PlotError;
use crate::shared::Shared;

pub use autoscale::{autoscale, data_extent, Axis};
pub use bounds::{Bound, SharedBound, ViewBounds, ViewWindow};
pub use event::PlotEvent;
pub use mapping::{arange, linear_map, linspace, Projection};
pub use render::PlotRenderer;
pub use widget::{FocusState, Plot, PlotOption, RESCALE_KEY};

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesStyle {
    /// Thin braille line through consecutive points.
    #[default]
    Point,
    /// Half-block line through consecutive points.
    Block,
}

impl SeriesStyle {
    /// Get the style name.
    pub fn name(self) -> &'static str {
        match self {
            SeriesStyle::Point => "point",
            SeriesStyle::Block => "block",
        }
    }
}

impl FromStr for SeriesStyle {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "point" | "line" => Ok(SeriesStyle::Point),
            "block" => Ok(SeriesStyle::Block),
            other => Err(PlotError::unsupported_style(other)),
        }
    }
}

/// Shared numeric buffer observed by the widget.
pub type SharedBuffer = Shared<Vec<f64>>;

/// Shared, ordered series list. Insertion order is draw order.
pub type SeriesCollection = Shared<Vec<Series>>;

/// One plotted series.
#[derive(Debug, Clone)]
pub struct Series {
    /// X values.
    pub x: SharedBuffer,
    /// Y values, paired by index with `x`.
    pub y: SharedBuffer,
    /// Line color.
    pub color: Color,
    /// Draw style.
    pub style: SeriesStyle,
}

impl Series {
    /// Create a series over existing shared buffers.
    pub fn new(x: SharedBuffer, y: SharedBuffer, color: Color) -> Self {
        Self {
            x,
            y,
            color,
            style: SeriesStyle::default(),
        }
    }

    /// Create a series that takes ownership of fresh buffers.
    pub fn from_vecs(x: Vec<f64>, y: Vec<f64>, color: Color) -> Self {
        Self::new(Shared::new(x), Shared::new(y), color)
    }

    /// Set the draw style.
    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    /// Number of drawable (x, y) pairs.
    pub fn len(&self) -> usize {
        self.x.borrow().len().min(self.y.borrow().len())
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
