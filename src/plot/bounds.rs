//! View bounds.

use crate::shared::SharedCell;

/// One axis limit. `Unset` means "not yet scaled".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Bound {
    /// No value yet; the axis is fitted to the data before drawing.
    #[default]
    Unset,
    /// A finite limit.
    Value(f64),
}

impl Bound {
    /// Convert a raw float. Non-finite values (`±inf`, `NaN`) mean unset.
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Bound::Value(value)
        } else {
            Bound::Unset
        }
    }

    /// The limit, if set.
    pub fn value(self) -> Option<f64> {
        match self {
            Bound::Unset => None,
            Bound::Value(v) => Some(v),
        }
    }
}

impl From<f64> for Bound {
    fn from(value: f64) -> Self {
        Bound::from_f64(value)
    }
}

impl From<Option<f64>> for Bound {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Bound::Unset, Bound::from_f64)
    }
}

/// A bound shared between the widget and its caller.
pub type SharedBound = SharedCell<Bound>;

/// Handles to the four view limits.
#[derive(Debug, Clone, Default)]
pub struct ViewBounds {
    /// Left edge.
    pub xmin: SharedBound,
    /// Right edge.
    pub xmax: SharedBound,
    /// Bottom edge.
    pub ymin: SharedBound,
    /// Top edge.
    pub ymax: SharedBound,
}

impl ViewBounds {
    /// Fresh handles, all unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh handles initialised from raw floats.
    pub fn from_raw(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        let bounds = Self::new();
        bounds.xmin.set(Bound::from_f64(xmin));
        bounds.xmax.set(Bound::from_f64(xmax));
        bounds.ymin.set(Bound::from_f64(ymin));
        bounds.ymax.set(Bound::from_f64(ymax));
        bounds
    }

    /// Resolved x range, if both limits are set.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        Some((self.xmin.get().value()?, self.xmax.get().value()?))
    }

    /// Resolved y range, if both limits are set.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        Some((self.ymin.get().value()?, self.ymax.get().value()?))
    }

    /// Snapshot of the current window.
    pub fn window(&self) -> ViewWindow {
        ViewWindow {
            x: self.x_range(),
            y: self.y_range(),
        }
    }
}

/// Plain snapshot of the view rectangle taken at render time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewWindow {
    /// `(xmin, xmax)` if resolved.
    pub x: Option<(f64, f64)>,
    /// `(ymin, ymax)` if resolved.
    pub y: Option<(f64, f64)>,
}
