//! Axis range fields and the auto-scale button.

use crate::app::{App, INPUT_COUNT};
use crate::input::AxisInput;
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const LABEL_WIDTH: u16 = 9;
const FIELD_WIDTH: u16 = 14;
const SEPARATOR: &str = " to ";
const BUTTON_LABEL: &str = "[Auto-scale]";

/// Draw the controls box and record where its fields landed.
pub(super) fn draw_controls(f: &mut Frame<'_>, app: &mut App, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" View ")
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let rows = [
        ("X Range:", inner.y),
        ("Y Range:", inner.y + inner.height.saturating_sub(1)),
    ];
    let mut fields = [Rect::default(); INPUT_COUNT];

    for (axis, (label, y)) in rows.into_iter().enumerate() {
        let label_area = Rect::new(inner.x, y, LABEL_WIDTH, 1).intersection(inner);
        f.render_widget(
            Paragraph::new(label).style(Style::default().fg(colors.label)),
            label_area,
        );

        let min_x = inner.x + LABEL_WIDTH;
        let sep_x = min_x + FIELD_WIDTH;
        let max_x = sep_x + SEPARATOR.width() as u16;

        let lo = Rect::new(min_x, y, FIELD_WIDTH, 1).intersection(inner);
        let sep = Rect::new(sep_x, y, SEPARATOR.width() as u16, 1).intersection(inner);
        let hi = Rect::new(max_x, y, FIELD_WIDTH, 1).intersection(inner);

        draw_field(f, &app.inputs[axis * 2], lo, colors);
        f.render_widget(
            Paragraph::new(SEPARATOR).style(Style::default().fg(colors.text)),
            sep,
        );
        draw_field(f, &app.inputs[axis * 2 + 1], hi, colors);

        fields[axis * 2] = lo;
        fields[axis * 2 + 1] = hi;
    }

    let button_width = BUTTON_LABEL.width() as u16;
    let button = Rect::new(
        inner.right().saturating_sub(button_width),
        inner.y,
        button_width,
        1,
    )
    .intersection(inner);
    f.render_widget(
        Paragraph::new(BUTTON_LABEL).style(
            Style::default()
                .fg(colors.button)
                .add_modifier(Modifier::BOLD),
        ),
        button,
    );

    app.hit_areas.inputs = fields;
    app.hit_areas.button = button;
}

fn draw_field(f: &mut Frame<'_>, input: &AxisInput, area: Rect, colors: &ThemeColors) {
    let line = if input.is_editing() {
        Line::from(vec![
            Span::styled(input.buffer(), Style::default().fg(colors.text)),
            Span::styled(
                " ",
                Style::default().fg(colors.cursor_fg).bg(colors.cursor_bg),
            ),
        ])
    } else {
        Line::from(Span::styled(input.buffer(), Style::default().fg(colors.text)))
    };
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(colors.input_bg)),
        area,
    );
}
