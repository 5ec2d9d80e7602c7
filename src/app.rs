//! Application state and logic.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::input::AxisInput;
use crate::plot::{Plot, PlotEvent, PlotOption, Series, SeriesCollection, ViewBounds};
use crate::shared::Shared;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Number of axis inputs (xmin, xmax, ymin, ymax).
pub const INPUT_COUNT: usize = 4;

/// Screen areas from the last draw, used for mouse hit testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct HitAreas {
    /// Axis input fields, in [`App::inputs`] order.
    pub inputs: [Rect; INPUT_COUNT],
    /// The auto-scale button.
    pub button: Rect,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Plotted series, shared with the plot.
    pub series: SeriesCollection,
    /// View bounds, shared with the plot and the inputs.
    pub bounds: ViewBounds,
    /// The plot widget.
    pub plot: Plot,
    /// Axis inputs: xmin, xmax, ymin, ymax.
    pub inputs: [AxisInput; INPUT_COUNT],
    /// Index of the input being edited.
    pub active_input: Option<usize>,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Areas recorded by the last draw.
    pub hit_areas: HitAreas,
}

impl App {
    /// Create a new application instance.
    pub fn new(series: Vec<Series>, bounds: ViewBounds) -> Self {
        let series = Shared::new(series);
        let plot = Plot::new(PlotOption::new(series.clone(), &bounds));
        let inputs = [
            AxisInput::new("xmin", bounds.xmin.clone()),
            AxisInput::new("xmax", bounds.xmax.clone()),
            AxisInput::new("ymin", bounds.ymin.clone()),
            AxisInput::new("ymax", bounds.ymax.clone()),
        ];
        let count = series.borrow().len();

        Self {
            series,
            bounds,
            plot,
            inputs,
            active_input: None,
            status: format!("{} series loaded", count),
            theme: Theme::GruvboxDark,
            hit_areas: HitAreas::default(),
        }
    }

    /// Handle one terminal event. Returns `true` when the app should quit.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        // The plot sees every event first
        if let Some(plot_event) = PlotEvent::from_crossterm(event) {
            if self.dispatch_to_plot(&plot_event) {
                return false;
            }
        }

        match event {
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                self.click(mouse.column, mouse.row);
                false
            },
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(*key),
            _ => false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if (key.modifiers, key.code) == (KeyModifiers::CONTROL, KeyCode::Char('c')) {
            return true;
        }

        // Input mode - handle separately
        if self.active_input.is_some() {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.focus_plot(),
                KeyCode::Tab => self.focus_next(),
                KeyCode::BackTab => self.focus_prev(),
                KeyCode::Backspace => self.input_backspace(),
                KeyCode::Char(c) => self.input_char(c),
                _ => {},
            }
            return false;
        }

        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q')) | (KeyModifiers::NONE, KeyCode::Esc) => {
                return true
            },

            // Focus
            (KeyModifiers::NONE, KeyCode::Tab) => self.focus_next(),
            (_, KeyCode::BackTab) => self.focus_prev(),

            // Features
            (KeyModifiers::NONE, KeyCode::Char('a')) => self.auto_scale(),
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => self.cycle_theme(),
            (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                self.status =
                    "Help: click plot or Tab to focus, r/a=auto-scale, T=theme, q=quit".to_string();
            },
            _ => {},
        }
        false
    }

    /// Offer an event to the plot first. Returns whether it consumed it.
    pub fn dispatch_to_plot(&mut self, event: &PlotEvent) -> bool {
        if !self.plot.handle_event(event) {
            return false;
        }
        match event {
            PlotEvent::PointerPress { .. } => {
                self.finish_input();
                self.status = "Plot focused (r: auto-scale)".to_string();
            },
            _ => self.status = "Auto-scaled".to_string(),
        }
        true
    }

    /// Fit the view to the data, regardless of focus.
    pub fn auto_scale(&mut self) {
        self.plot.auto_scale();
        self.sync_inputs();
        self.status = "Auto-scaled".to_string();
    }

    /// Refresh every input that is not being edited.
    pub fn sync_inputs(&mut self) {
        for input in &mut self.inputs {
            input.sync();
        }
    }

    /// Give focus to the plot.
    pub fn focus_plot(&mut self) {
        self.finish_input();
        self.plot.take_focus();
    }

    /// Start editing input `index`.
    pub fn focus_input(&mut self, index: usize) {
        if index >= INPUT_COUNT {
            return;
        }
        self.finish_input();
        self.plot.blur();
        self.inputs[index].start();
        self.active_input = Some(index);
        self.status = format!("Editing {}", self.inputs[index].label());
    }

    /// Move focus forward: plot, xmin, xmax, ymin, ymax, plot.
    pub fn focus_next(&mut self) {
        match self.active_input {
            None => self.focus_input(0),
            Some(i) if i + 1 < INPUT_COUNT => self.focus_input(i + 1),
            Some(_) => self.focus_plot(),
        }
    }

    /// Move focus backward.
    pub fn focus_prev(&mut self) {
        match self.active_input {
            None => self.focus_input(INPUT_COUNT - 1),
            Some(0) => self.focus_plot(),
            Some(i) => self.focus_input(i - 1),
        }
    }

    /// Type into the active input.
    pub fn input_char(&mut self, c: char) {
        if let Some(i) = self.active_input {
            self.inputs[i].input(c);
        }
    }

    /// Delete from the active input.
    pub fn input_backspace(&mut self) {
        if let Some(i) = self.active_input {
            self.inputs[i].backspace();
        }
    }

    /// Handle a left click the plot did not consume.
    pub fn click(&mut self, column: u16, row: u16) {
        let pos = Position::new(column, row);
        if self.hit_areas.button.contains(pos) {
            self.auto_scale();
            return;
        }
        if let Some(i) = self
            .hit_areas
            .inputs
            .iter()
            .position(|area| area.contains(pos))
        {
            self.focus_input(i);
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    fn finish_input(&mut self) {
        if let Some(i) = self.active_input.take() {
            self.inputs[i].finish();
        }
    }
}
