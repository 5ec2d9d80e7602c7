//! Events understood by the plot widget.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

/// A UI event offered to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotEvent {
    /// Mouse button pressed at a terminal cell.
    PointerPress {
        /// Column of the pointer.
        column: u16,
        /// Row of the pointer.
        row: u16,
        /// Which button.
        button: MouseButton,
    },
    /// Mouse button released at a terminal cell.
    PointerRelease {
        /// Column of the pointer.
        column: u16,
        /// Row of the pointer.
        row: u16,
        /// Which button.
        button: MouseButton,
    },
    /// A typed character.
    Character(char),
    /// Request to fit the view to the data.
    Rescale,
}

impl PlotEvent {
    /// Convert a terminal event, if the widget has a use for it.
    ///
    /// Key releases and modified keys (other than shift) are dropped.
    pub fn from_crossterm(event: &Event) -> Option<Self> {
        match event {
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(button) => Some(PlotEvent::PointerPress {
                    column: mouse.column,
                    row: mouse.row,
                    button,
                }),
                MouseEventKind::Up(button) => Some(PlotEvent::PointerRelease {
                    column: mouse.column,
                    row: mouse.row,
                    button,
                }),
                _ => None,
            },
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                match (key.modifiers.difference(KeyModifiers::SHIFT), key.code) {
                    (KeyModifiers::NONE, KeyCode::Char(c)) => Some(PlotEvent::Character(c)),
                    _ => None,
                }
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn mouse_presses_and_releases_convert() {
        assert_eq!(
            PlotEvent::from_crossterm(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 4)),
            Some(PlotEvent::PointerPress {
                column: 3,
                row: 4,
                button: MouseButton::Left
            })
        );
        assert_eq!(
            PlotEvent::from_crossterm(&mouse(MouseEventKind::Up(MouseButton::Right), 1, 2)),
            Some(PlotEvent::PointerRelease {
                column: 1,
                row: 2,
                button: MouseButton::Right
            })
        );
        assert_eq!(
            PlotEvent::from_crossterm(&mouse(MouseEventKind::Moved, 1, 2)),
            None
        );
    }

    #[test]
    fn plain_characters_convert() {
        let r = Event::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE));
        assert_eq!(PlotEvent::from_crossterm(&r), Some(PlotEvent::Character('r')));

        let upper = Event::Key(KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT));
        assert_eq!(PlotEvent::from_crossterm(&upper), Some(PlotEvent::Character('R')));

        let ctrl = Event::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(PlotEvent::from_crossterm(&ctrl), None);

        let tab = Event::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert_eq!(PlotEvent::from_crossterm(&tab), None);
    }
}
