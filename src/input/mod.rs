//! Axis limit text fields.
//!
//! Each field edits one shared bound. Every edit re-parses the text; a valid
//! number is written through to the plot immediately, anything else leaves
//! the previous bound in place.

use crate::plot::{Bound, SharedBound};
use crate::util::format_bound;

/// Text field bound to one axis limit.
#[derive(Debug)]
pub struct AxisInput {
    label: &'static str,
    bound: SharedBound,
    buffer: String,
    editing: bool,
}

impl AxisInput {
    /// Create a field showing the current value of `bound`.
    pub fn new(label: &'static str, bound: SharedBound) -> Self {
        let mut input = Self {
            label,
            bound,
            buffer: String::new(),
            editing: false,
        };
        input.sync();
        input
    }

    /// Field label.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Current text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Check if the field is being edited.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Start editing.
    pub fn start(&mut self) {
        self.editing = true;
    }

    /// Stop editing and show the bound's current value.
    pub fn finish(&mut self) {
        self.editing = false;
        self.sync();
    }

    /// Add a character.
    pub fn input(&mut self, c: char) {
        self.buffer.push(c);
        self.on_change();
    }

    /// Remove the last character.
    pub fn backspace(&mut self) {
        self.buffer.pop();
        self.on_change();
    }

    /// Refresh the text from the bound unless the user is typing.
    pub fn sync(&mut self) {
        if self.editing {
            return;
        }
        self.buffer = match self.bound.get() {
            Bound::Value(v) => format_bound(v),
            Bound::Unset => String::new(),
        };
    }

    fn on_change(&mut self) {
        match self.buffer.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => self.bound.set(Bound::Value(v)),
            _ => tracing::debug!(field = self.label, text = %self.buffer, "ignoring invalid bound"),
        }
    }
}
