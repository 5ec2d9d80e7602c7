//! Layout configuration constants for the plot canvas.
//!
//! All distances are in canvas dots (2 per terminal column, 4 per row).

/// Configuration for tick placement and plot margins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotLayoutConfig {
    /// Vertical distance between y tick labels.
    pub y_tick_spacing: usize,
    /// Horizontal distance between x tick labels.
    pub x_tick_spacing: usize,
    /// Inset reserved on the left for the y label column.
    pub y_axis_offset: usize,
    /// Space reserved at the bottom for the x labels.
    pub x_axis_margin: usize,
    /// Distance of the x label row from the bottom edge.
    pub x_label_offset: usize,
    /// Distance of the x tick mark row from the bottom edge.
    pub x_mark_offset: usize,
    /// How far x labels start left of their nominal position.
    pub x_label_shift: usize,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            y_tick_spacing: 8,
            x_tick_spacing: 12,
            y_axis_offset: 14,
            x_axis_margin: 10,
            x_label_offset: 4,
            x_mark_offset: 6,
            x_label_shift: 4,
        }
    }
}

impl PlotLayoutConfig {
    /// Number of y ticks that fit in `height` dots.
    pub fn y_tick_count(&self, height: usize) -> usize {
        height / self.y_tick_spacing.max(1)
    }

    /// Number of x ticks that fit in `width` dots.
    pub fn x_tick_count(&self, width: usize) -> usize {
        width / self.x_tick_spacing.max(1)
    }
}
