//! Tick and series rendering through ratatui's [`Canvas`].
//!
//! Geometry is computed on a braille dot grid (2x4 dots per cell). Point
//! series are drawn on that grid directly; block series use half-block
//! pixels, so their dot coordinates are halved on both axes.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Widget,
    },
};

use super::bounds::ViewWindow;
use super::mapping::{clip_segment, linspace, Projection};
use super::{Series, SeriesStyle};
use crate::util::{format_tick, PlotLayoutConfig};

/// Braille dots per terminal column.
const DOTS_PER_COL: usize = 2;
/// Braille dots per terminal row.
const DOTS_PER_ROW: usize = 4;

/// A tick label placed at a dot position.
#[derive(Debug)]
struct Label {
    x: i64,
    y: i64,
    text: String,
}

/// One clipped segment in whole dots, y growing downward.
type Segment = ((usize, usize), (usize, usize));

/// Draws ticks and series geometry for one frame.
#[derive(Debug, Clone, Copy)]
pub struct PlotRenderer<'a> {
    layout: &'a PlotLayoutConfig,
    background: Color,
}

impl<'a> PlotRenderer<'a> {
    /// Create a renderer using `layout`.
    pub fn new(layout: &'a PlotLayoutConfig) -> Self {
        Self {
            layout,
            background: Color::Reset,
        }
    }

    /// Background color painted under the plot.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Data-to-canvas transform for a canvas of `width` x `height` dots.
    pub fn projection(
        &self,
        x_domain: (f64, f64),
        y_domain: (f64, f64),
        width: usize,
        height: usize,
    ) -> Projection {
        let right = width.saturating_sub(1) as f64;
        let bottom = height.saturating_sub(self.layout.x_axis_margin) as f64;
        Projection {
            x_domain,
            y_domain,
            x_range: (self.layout.y_axis_offset as f64, right),
            y_range: (bottom, 0.0),
        }
    }

    /// Y tick values, top of the canvas first.
    pub fn y_ticks(&self, (ymin, ymax): (f64, f64), height: usize) -> Vec<f64> {
        let mut ticks = linspace(ymin, ymax, self.layout.y_tick_count(height));
        ticks.reverse();
        ticks
    }

    /// X tick values, left to right.
    pub fn x_ticks(&self, (xmin, xmax): (f64, f64), width: usize) -> Vec<f64> {
        linspace(xmin, xmax, self.layout.x_tick_count(width))
    }

    /// Render everything for `window` into `area`.
    ///
    /// An unresolved axis draws no ticks, and no series are drawn unless both
    /// axes are resolved. Series paint over the labels, later series over
    /// earlier ones.
    pub fn render(&self, series: &[Series], window: ViewWindow, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let width = usize::from(area.width) * DOTS_PER_COL;
        let height = usize::from(area.height) * DOTS_PER_ROW;

        let mut labels = Vec::new();
        if let Some(y) = window.y {
            self.y_labels(y, height, &mut labels);
        }
        if let Some(x) = window.x {
            self.x_labels(x, width, height, &mut labels);
        }
        self.render_labels(&labels, area, buf);

        if let (Some(x), Some(y)) = (window.x, window.y) {
            let projection = self.projection(x, y, width, height);
            for s in series {
                let segments = segments(s, &projection, width, height);
                if !segments.is_empty() {
                    self.render_series(&segments, s, area, buf);
                }
            }
        }
    }

    fn y_labels(&self, y: (f64, f64), height: usize, labels: &mut Vec<Label>) {
        let spacing = self.layout.y_tick_spacing;
        for (i, tick) in self.y_ticks(y, height).into_iter().enumerate() {
            labels.push(Label {
                x: 0,
                y: (i * spacing) as i64,
                text: format!("{}-", format_tick(tick)),
            });
        }
    }

    fn x_labels(&self, x: (f64, f64), width: usize, height: usize, labels: &mut Vec<Label>) {
        let layout = self.layout;
        let height = height as i64;
        let label_y = height - layout.x_label_offset as i64;
        let mark_y = height - layout.x_mark_offset as i64;
        for (i, tick) in self.x_ticks(x, width).into_iter().enumerate() {
            let pos = (i * layout.x_tick_spacing + layout.y_axis_offset) as i64
                - layout.x_label_shift as i64;
            labels.push(Label {
                x: pos,
                y: label_y,
                text: format_tick(tick),
            });
            labels.push(Label {
                x: pos,
                y: mark_y,
                text: "  |".to_string(),
            });
        }
    }

    /// Labels go through a canvas whose bounds are whole cells, so each one
    /// lands on the cell holding its dot position.
    fn render_labels(&self, labels: &[Label], area: Rect, buf: &mut Buffer) {
        let rows = i64::from(area.height);
        let placed: Vec<(f64, f64, String)> = labels
            .iter()
            .filter_map(|label| {
                let row = label.y.div_euclid(DOTS_PER_ROW as i64);
                let col = label.x.div_euclid(DOTS_PER_COL as i64);
                if row < 0 || row >= rows {
                    return None;
                }
                // Text starting left of the canvas loses its leading chars
                let skip = usize::try_from(-col).unwrap_or(0);
                let text: String = label.text.chars().skip(skip).collect();
                Some((col.max(0) as f64, (rows - 1 - row) as f64, text))
            })
            .collect();

        Canvas::default()
            .background_color(self.background)
            .x_bounds([0.0, f64::from(area.width - 1)])
            .y_bounds([0.0, f64::from(area.height - 1)])
            .paint(|ctx| {
                for (x, y, text) in &placed {
                    ctx.print(*x, *y, text.clone());
                }
            })
            .render(area, buf);
    }

    fn render_series(&self, segments: &[Segment], series: &Series, area: Rect, buf: &mut Buffer) {
        // Braille dots per grid pixel, per axis
        let (marker, scale) = match series.style {
            SeriesStyle::Point => (Marker::Braille, 1),
            SeriesStyle::Block => (Marker::HalfBlock, 2),
        };
        let cols = usize::from(area.width) * DOTS_PER_COL / scale;
        let rows = usize::from(area.height) * DOTS_PER_ROW / scale;
        let top = (rows - 1) as f64;
        let color = series.color;

        Canvas::default()
            .marker(marker)
            .background_color(self.background)
            .x_bounds([0.0, (cols - 1) as f64])
            .y_bounds([0.0, top])
            .paint(|ctx| {
                for &((x0, y0), (x1, y1)) in segments {
                    ctx.draw(&CanvasLine::new(
                        (x0 / scale) as f64,
                        top - (y0 / scale) as f64,
                        (x1 / scale) as f64,
                        top - (y1 / scale) as f64,
                        color,
                    ));
                }
            })
            .render(area, buf);
    }
}

/// Project consecutive points and clip each connecting segment to the grid.
fn segments(series: &Series, projection: &Projection, width: usize, height: usize) -> Vec<Segment> {
    let xs = series.x.borrow();
    let ys = series.y.borrow();
    let points: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys.iter())
        .map(|(&x, &y)| projection.project(x, y))
        .collect();

    let xmax = width.saturating_sub(1) as f64;
    let ymax = height.saturating_sub(1) as f64;
    points
        .windows(2)
        .filter_map(|pair| clip_segment(pair[0], pair[1], xmax, ymax))
        .map(|(a, b)| {
            (
                (a.0.floor() as usize, a.1.floor() as usize),
                (b.0.floor() as usize, b.1.floor() as usize),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(x: (f64, f64), y: (f64, f64)) -> ViewWindow {
        ViewWindow {
            x: Some(x),
            y: Some(y),
        }
    }

    fn bare_layout() -> PlotLayoutConfig {
        PlotLayoutConfig {
            y_tick_spacing: 1000,
            x_tick_spacing: 1000,
            y_axis_offset: 0,
            x_axis_margin: 1,
            ..PlotLayoutConfig::default()
        }
    }

    fn render(
        layout: &PlotLayoutConfig,
        series: &[Series],
        window: ViewWindow,
        cols: u16,
        rows: u16,
    ) -> Buffer {
        let area = Rect::new(0, 0, cols, rows);
        let mut buf = Buffer::empty(area);
        PlotRenderer::new(layout).render(series, window, area, &mut buf);
        buf
    }

    fn lines(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    fn any_cell_colored(buf: &Buffer, color: Color) -> bool {
        buf.content.iter().any(|cell| cell.fg == color)
    }

    #[test]
    fn projection_spans_the_drawable_area() {
        let layout = PlotLayoutConfig::default();
        let renderer = PlotRenderer::new(&layout);
        let p = renderer.projection((0.0, 3.0), (0.0, 9.0), 20, 10);
        assert_eq!(p.project(0.0, 9.0), (14.0, 0.0));
        assert_eq!(p.project(3.0, 0.0), (19.0, 0.0));

        let tall = renderer.projection((0.0, 3.0), (0.0, 9.0), 20, 40);
        assert_eq!(tall.project(0.0, 0.0), (14.0, 30.0));
        assert_eq!(tall.project(0.0, 9.0), (14.0, 0.0));
    }

    #[test]
    fn y_ticks_count_and_order() {
        let layout = PlotLayoutConfig::default();
        let renderer = PlotRenderer::new(&layout);
        let ticks = renderer.y_ticks((0.0, 10.0), 48);
        assert_eq!(ticks.len(), 48 / layout.y_tick_spacing);
        assert_eq!(ticks, vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
        assert!(ticks.windows(2).all(|w| w[0] > w[1]));
        assert!(renderer.y_ticks((0.0, 1.0), 7).is_empty());
    }

    #[test]
    fn x_ticks_ascend() {
        let layout = PlotLayoutConfig::default();
        let renderer = PlotRenderer::new(&layout);
        let ticks = renderer.x_ticks((-1.0, 1.0), 60);
        assert_eq!(ticks, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn labels_land_on_their_rows() {
        let layout = PlotLayoutConfig::default();
        let buf = render(&layout, &[], window((0.0, 5.0), (0.0, 10.0)), 40, 12);
        let lines = lines(&buf);
        assert!(lines[0].starts_with(" 10.00-"));
        assert!(lines[2].starts_with(" 8.00-"));
        // x labels sit one row above the bottom, marks two rows above it
        assert_eq!(&lines[11][5..10], " 0.00");
        assert_eq!(&lines[10][5..8], "  |");
    }

    #[test]
    fn background_fills_the_area() {
        let layout = PlotLayoutConfig::default();
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        PlotRenderer::new(&layout)
            .background(Color::Black)
            .render(&[], ViewWindow::default(), area, &mut buf);
        assert!(buf.content.iter().all(|cell| cell.bg == Color::Black));
    }

    #[test]
    fn degenerate_series_render_without_geometry() {
        let layout = PlotLayoutConfig::default();
        let series = vec![
            Series::from_vecs(vec![], vec![], Color::Red),
            Series::from_vecs(vec![1.0], vec![1.0], Color::Blue),
        ];
        let buf = render(&layout, &series, window((0.0, 2.0), (0.0, 2.0)), 20, 10);
        assert!(!any_cell_colored(&buf, Color::Red));
        assert!(!any_cell_colored(&buf, Color::Blue));
    }

    #[test]
    fn degenerate_window_draws_at_the_midpoint() {
        let layout = PlotLayoutConfig::default();
        let series = vec![Series::from_vecs(
            vec![0.0, 5.0],
            vec![3.0, 7.0],
            Color::Cyan,
        )];
        let buf = render(&layout, &series, window((1.0, 1.0), (2.0, 2.0)), 20, 10);
        // x midpoint of [14, 39] is dot 26, y midpoint of [30, 0] is dot 15
        let cell = &buf[(13, 3)];
        assert_eq!(cell.fg, Color::Cyan);
        assert_ne!(cell.symbol(), " ");
        let colored = buf.content.iter().filter(|c| c.fg == Color::Cyan).count();
        assert_eq!(colored, 1);
    }

    #[test]
    fn point_and_block_styles_use_their_glyphs() {
        let layout = bare_layout();
        let series = vec![
            Series::from_vecs(vec![0.0, 1.0], vec![1.0, 1.0], Color::Blue),
            Series::from_vecs(vec![0.0, 1.0], vec![0.0, 0.0], Color::Red)
                .with_style(SeriesStyle::Block),
        ];
        let buf = render(&layout, &series, window((0.0, 1.0), (0.0, 1.0)), 4, 2);
        // y = 1 is the top dot row, y = 0 projects onto the last dot row
        assert_eq!(lines(&buf), vec!["⠉⠉⠉⠉".to_string(), "▄▄▄▄".to_string()]);
        assert_eq!(buf[(0, 0)].fg, Color::Blue);
        assert_eq!(buf[(3, 1)].fg, Color::Red);
    }

    #[test]
    fn later_series_paint_over_earlier_ones() {
        let layout = bare_layout();
        let series = vec![
            Series::from_vecs(vec![0.0, 1.0], vec![0.5, 0.5], Color::Blue),
            Series::from_vecs(vec![0.0, 1.0], vec![0.5, 0.5], Color::Green),
        ];
        let buf = render(&layout, &series, window((0.0, 1.0), (0.0, 1.0)), 4, 2);
        assert_eq!(buf[(1, 0)].fg, Color::Green);
    }

    #[test]
    fn far_out_of_view_segments_are_clipped() {
        let layout = PlotLayoutConfig::default();
        let series = vec![Series::from_vecs(
            vec![-1e12, 1e12],
            vec![0.5, 0.5],
            Color::Magenta,
        )];
        let buf = render(&layout, &series, window((0.0, 1e-9), (0.0, 1.0)), 20, 10);
        assert_eq!(buf[(19, 3)].fg, Color::Magenta);
        assert_eq!(buf[(7, 3)].fg, Color::Magenta);
    }

    #[test]
    fn unresolved_axis_skips_series() {
        let layout = PlotLayoutConfig::default();
        let series = vec![Series::from_vecs(vec![0.0, 1.0], vec![0.0, 1.0], Color::Red)];
        let half = ViewWindow {
            x: Some((0.0, 1.0)),
            y: None,
        };
        let buf = render(&layout, &series, half, 20, 10);
        assert!(lines(&buf).iter().all(|l| !l.contains('-')));
        assert!(!any_cell_colored(&buf, Color::Red));
    }
}
