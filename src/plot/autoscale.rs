//! Fitting the view to the data.

use super::bounds::{Bound, ViewBounds};
use super::Series;

/// Which axis to measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

/// Union of finite values on `axis` over every series.
///
/// Returns `None` when no series has a finite value on that axis.
pub fn data_extent(series: &[Series], axis: Axis) -> Option<(f64, f64)> {
    let mut extent: Option<(f64, f64)> = None;
    for s in series {
        let values = match axis {
            Axis::X => s.x.borrow(),
            Axis::Y => s.y.borrow(),
        };
        for &v in values.iter().filter(|v| v.is_finite()) {
            extent = Some(match extent {
                None => (v, v),
                Some((min, max)) => (min.min(v), max.max(v)),
            });
        }
    }
    extent
}

/// Fit all four bounds to the union bounding box of `series`.
///
/// An axis with no data keeps its previous bounds.
pub fn autoscale(series: &[Series], bounds: &ViewBounds) {
    fit_axis(series, bounds, Axis::X);
    fit_axis(series, bounds, Axis::Y);
}

/// Fit one axis. Returns whether the bounds were written.
pub(crate) fn fit_axis(series: &[Series], bounds: &ViewBounds, axis: Axis) -> bool {
    let Some((min, max)) = data_extent(series, axis) else {
        tracing::debug!(?axis, "autoscale skipped, no data on axis");
        return false;
    };

    let (lo, hi) = match axis {
        Axis::X => (&bounds.xmin, &bounds.xmax),
        Axis::Y => (&bounds.ymin, &bounds.ymax),
    };
    lo.set(Bound::Value(min));
    hi.set(Bound::Value(max));
    tracing::debug!(?axis, min, max, "autoscaled axis");
    true
}
