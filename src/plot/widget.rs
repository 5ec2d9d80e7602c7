//! The interactive plot component.

use crossterm::event::MouseButton;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Color,
    widgets::Widget,
};

use super::autoscale::{autoscale, fit_axis, Axis};
use super::bounds::{SharedBound, ViewBounds};
use super::event::PlotEvent;
use super::render::PlotRenderer;
use super::SeriesCollection;
use crate::util::PlotLayoutConfig;

/// Character that triggers autoscale while the plot has focus.
pub const RESCALE_KEY: char = 'r';

/// Construction options. Every field is a handle shared with the caller.
#[derive(Debug, Clone, Default)]
pub struct PlotOption {
    /// Series to draw.
    pub data: SeriesCollection,
    /// Left edge of the view.
    pub xmin: SharedBound,
    /// Right edge of the view.
    pub xmax: SharedBound,
    /// Bottom edge of the view.
    pub ymin: SharedBound,
    /// Top edge of the view.
    pub ymax: SharedBound,
}

impl PlotOption {
    /// Options over an existing collection and set of bounds.
    pub fn new(data: SeriesCollection, bounds: &ViewBounds) -> Self {
        Self {
            data,
            xmin: bounds.xmin.clone(),
            xmax: bounds.xmax.clone(),
            ymin: bounds.ymin.clone(),
            ymax: bounds.ymax.clone(),
        }
    }

    fn bounds(&self) -> ViewBounds {
        ViewBounds {
            xmin: self.xmin.clone(),
            xmax: self.xmax.clone(),
            ymin: self.ymin.clone(),
            ymax: self.ymax.clone(),
        }
    }
}

/// Whether the plot holds input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// Not accepting keyboard triggers.
    #[default]
    Unfocused,
    /// Accepting keyboard triggers.
    Focused,
}

/// Interactive line plot.
///
/// Render it with `frame.render_widget(&mut plot, area)`. The area it was
/// last rendered into is kept for hit testing pointer events.
#[derive(Debug)]
pub struct Plot {
    option: PlotOption,
    layout: PlotLayoutConfig,
    focus: FocusState,
    area: Option<Rect>,
    background: Color,
}

impl Plot {
    /// Create a plot over the caller's state.
    pub fn new(option: PlotOption) -> Self {
        Self {
            option,
            layout: PlotLayoutConfig::default(),
            focus: FocusState::Unfocused,
            area: None,
            background: Color::Reset,
        }
    }

    /// Set the color painted behind ticks and series.
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Current focus state.
    pub fn focus(&self) -> FocusState {
        self.focus
    }

    /// True while focused; callers use it for border styling.
    pub fn is_active(&self) -> bool {
        self.focus == FocusState::Focused
    }

    /// Give the plot focus.
    pub fn take_focus(&mut self) {
        if self.focus != FocusState::Focused {
            tracing::debug!("plot focused");
        }
        self.focus = FocusState::Focused;
    }

    /// Drop focus, e.g. when the caller moves focus to another component.
    pub fn blur(&mut self) {
        if self.focus != FocusState::Unfocused {
            tracing::debug!("plot unfocused");
        }
        self.focus = FocusState::Unfocused;
    }

    /// Screen area of the last render.
    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    /// Fit the view to all series. Works regardless of focus.
    pub fn auto_scale(&self) {
        let data = self.option.data.borrow();
        autoscale(&data, &self.option.bounds());
    }

    /// Offer an event to the plot. Returns whether it was consumed.
    pub fn handle_event(&mut self, event: &PlotEvent) -> bool {
        if let PlotEvent::PointerPress {
            column,
            row,
            button: MouseButton::Left,
        } = *event
        {
            if self.contains(column, row) {
                self.take_focus();
                return true;
            }
        }

        if self.focus == FocusState::Unfocused {
            return false;
        }

        match event {
            PlotEvent::Rescale | PlotEvent::Character(RESCALE_KEY) => {
                self.auto_scale();
                true
            },
            _ => false,
        }
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        self.area
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    /// Fit any axis that has an unset bound.
    fn fit_unset_axes(&self) {
        let bounds = self.option.bounds();
        let data = self.option.data.borrow();
        let window = bounds.window();
        if window.x.is_none() {
            fit_axis(&data, &bounds, Axis::X);
        }
        if window.y.is_none() {
            fit_axis(&data, &bounds, Axis::Y);
        }
    }

    /// Render off-screen at `width` x `height` cells and return the rows.
    pub fn render_lines(&mut self, width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        Widget::render(&mut *self, area, &mut buf);
        (0..height)
            .map(|y| {
                (0..width)
                    .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol().to_string()))
                    .collect()
            })
            .collect()
    }
}

impl Widget for &mut Plot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.area = Some(area);
        self.fit_unset_axes();
        let window = self.option.bounds().window();
        let data = self.option.data.borrow();
        PlotRenderer::new(&self.layout)
            .background(self.background)
            .render(&data, window, area, buf);
    }
}
