//! Coordinate mapping and range helpers.

/// Affine map of `value` from `[a1, a2]` onto `[b1, b2]`.
///
/// A degenerate domain (`a1 == a2`) maps everything to the middle of the
/// range.
pub fn linear_map(value: f64, a1: f64, a2: f64, b1: f64, b2: f64) -> f64 {
    if a2 == a1 {
        return (b1 + b2) / 2.0;
    }
    b1 + (value - a1) * (b2 - b1) / (a2 - a1)
}

/// `num` evenly spaced values from `start` to `stop`, both inclusive.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num)
                .map(|i| if i == num - 1 { stop } else { start + step * i as f64 })
                .collect()
        },
    }
}

/// Values from `start` stepping by `step` while `<= stop`.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    let count = ((stop - start) / step).floor();
    if count < 0.0 {
        return Vec::new();
    }
    (0..=count as usize).map(|i| start + step * i as f64).collect()
}

/// Data space to canvas space, in dots.
///
/// x maps `[xmin, xmax]` onto `[left, right]`; y maps `[ymin, ymax]` onto
/// `[bottom, top]` with `bottom > top`, so larger values sit higher on
/// screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Data x domain.
    pub x_domain: (f64, f64),
    /// Data y domain.
    pub y_domain: (f64, f64),
    /// Canvas x range `(left, right)`.
    pub x_range: (f64, f64),
    /// Canvas y range `(bottom, top)`.
    pub y_range: (f64, f64),
}

impl Projection {
    /// Project a point without rounding.
    pub fn project(&self, x: f64, y: f64) -> (f64, f64) {
        (
            linear_map(x, self.x_domain.0, self.x_domain.1, self.x_range.0, self.x_range.1),
            linear_map(y, self.y_domain.0, self.y_domain.1, self.y_range.0, self.y_range.1),
        )
    }
}

const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const TOP: u8 = 4;
const BOTTOM: u8 = 8;

fn outcode((x, y): (f64, f64), xmax: f64, ymax: f64) -> u8 {
    let mut code = 0;
    if x < 0.0 {
        code |= LEFT;
    } else if x > xmax {
        code |= RIGHT;
    }
    if y < 0.0 {
        code |= TOP;
    } else if y > ymax {
        code |= BOTTOM;
    }
    code
}

/// Clip a segment to `[0, xmax] x [0, ymax]` (Cohen-Sutherland).
///
/// ratatui's canvas drops a line outright when either end falls outside its
/// bounds, so segments are trimmed to the dot grid before drawing. Returns
/// `None` when the segment misses the box or has a non-finite end.
pub(crate) fn clip_segment(
    mut p0: (f64, f64),
    mut p1: (f64, f64),
    xmax: f64,
    ymax: f64,
) -> Option<((f64, f64), (f64, f64))> {
    if ![p0.0, p0.1, p1.0, p1.1].iter().all(|v| v.is_finite()) || xmax < 0.0 || ymax < 0.0 {
        return None;
    }
    // Each pass moves one end onto an edge; eight passes cover both ends.
    for _ in 0..8 {
        let (c0, c1) = (outcode(p0, xmax, ymax), outcode(p1, xmax, ymax));
        if c0 | c1 == 0 {
            return Some((p0, p1));
        }
        if c0 & c1 != 0 {
            return None;
        }
        let out = if c0 != 0 { c0 } else { c1 };
        let (dx, dy) = (p1.0 - p0.0, p1.1 - p0.1);
        let clipped = if out & BOTTOM != 0 {
            (p0.0 + dx * (ymax - p0.1) / dy, ymax)
        } else if out & TOP != 0 {
            (p0.0 + dx * (0.0 - p0.1) / dy, 0.0)
        } else if out & RIGHT != 0 {
            (xmax, p0.1 + dy * (xmax - p0.0) / dx)
        } else {
            (0.0, p0.1 + dy * (0.0 - p0.0) / dx)
        };
        if out == c0 {
            p0 = clipped;
        } else {
            p1 = clipped;
        }
    }
    None
}
