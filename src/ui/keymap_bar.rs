//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(
    f: &mut Frame<'_>,
    area: Rect,
    editing: bool,
    plot_active: bool,
    colors: &ThemeColors,
) {
    let keymap_text = if editing {
        "Type a number | Backspace:delete | Tab/S-Tab:next/prev | Enter/Esc:done"
    } else if plot_active {
        "r:auto-scale | a:auto-scale | Tab:inputs | T:theme | q/Esc:quit"
    } else {
        "click plot:focus | a:auto-scale | Tab:focus | T:theme | q/Esc:quit"
    };

    let paragraph = Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
