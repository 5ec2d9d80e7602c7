//! Built-in demo series.

use std::f64::consts::PI;

use ratatui::style::Color;

use crate::plot::{arange, Series, SeriesStyle};

const STEP: f64 = 0.1;

/// Two waves: `2 sin(x)` over `[0, 4π]` and `2/3 cos(x)` over `[0, 8π]`.
pub fn demo_series() -> Vec<Series> {
    let x1 = arange(0.0, 4.0 * PI, STEP);
    let y1 = x1.iter().map(|v| v.sin() * 2.0).collect();

    let x2 = arange(0.0, 8.0 * PI, STEP);
    let y2 = x2.iter().map(|v| 2.0 / 3.0 * v.cos()).collect();

    vec![
        Series::from_vecs(x1, y1, Color::Blue),
        Series::from_vecs(x2, y2, Color::Red).with_style(SeriesStyle::Block),
    ]
}
