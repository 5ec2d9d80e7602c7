//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Label text color.
    pub label: Color,
    /// Border color.
    pub border: Color,
    /// Border color of the focused plot.
    pub border_active: Color,
    /// Input field background.
    pub input_bg: Color,
    /// Button text color.
    pub button: Color,
    /// Cursor foreground color.
    pub cursor_fg: Color,
    /// Cursor background color.
    pub cursor_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                label: Color::Rgb(184, 187, 38),
                border: Color::Rgb(102, 92, 84),
                border_active: Color::Rgb(175, 215, 255),
                input_bg: Color::Rgb(50, 50, 50),
                button: Color::Rgb(142, 192, 124),
                cursor_fg: Color::Rgb(40, 40, 40),
                cursor_bg: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                label: Color::Rgb(121, 116, 14),
                border: Color::Rgb(213, 196, 161),
                border_active: Color::Rgb(7, 102, 120),
                input_bg: Color::Rgb(235, 219, 178),
                button: Color::Rgb(102, 123, 3),
                cursor_fg: Color::Rgb(251, 245, 234),
                cursor_bg: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_border_stands_out() {
        for theme in [Theme::GruvboxDark, Theme::GruvboxLight] {
            let colors = ThemeColors::from_theme(&theme);
            assert_ne!(colors.border, colors.border_active);
        }
    }
}
