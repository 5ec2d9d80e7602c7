//! User interface rendering.

mod controls;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

pub use theme::ThemeColors;

/// Height of the axis controls box, borders included.
const CONTROLS_HEIGHT: u16 = 5;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Plot, controls, status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(CONTROLS_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let border = if app.plot.is_active() {
        colors.border_active
    } else {
        colors.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Plot ")
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(chunks[0]);
    f.render_widget(block, chunks[0]);
    app.plot.set_background(colors.bg);
    f.render_widget(&mut app.plot, inner);

    controls::draw_controls(f, app, chunks[1], &colors);

    status_bar::draw_status(f, chunks[2], &app.status, &colors);

    keymap_bar::draw_keymap(
        f,
        chunks[3],
        app.active_input.is_some(),
        app.plot.is_active(),
        &colors,
    );
}
