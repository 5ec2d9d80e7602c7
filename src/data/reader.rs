//! Delimited text reader.
//!
//! One row per line. Columns are separated by commas or whitespace; the
//! first column is x and every further column is one y series. Lines
//! starting with `#` are comments, and a first row that is not numeric is
//! taken as a header.

use std::path::Path;

use ratatui::style::Color;

use crate::error::{PlotError, Result};
use crate::plot::{Series, SeriesStyle};

const PALETTE: [Color; 6] = [
    Color::Blue,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
];

/// Color for the `index`-th series.
pub fn series_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Reads series from text files.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read a file into series drawn with `style`.
    pub fn read_file(path: &Path, style: SeriesStyle) -> Result<Vec<Series>> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| PlotError::file_open(path.to_path_buf(), e))?;
        let series = Self::parse(&text, style)?;
        tracing::info!(
            path = %path.display(),
            series = series.len(),
            style = style.name(),
            "loaded data file"
        );
        Ok(series)
    }

    /// Parse file contents into series drawn with `style`.
    pub fn parse(text: &str, style: SeriesStyle) -> Result<Vec<Series>> {
        let mut columns: Option<Vec<Vec<f64>>> = None;
        let mut seen_row = false;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|f| !f.is_empty())
                .collect();

            let values: std::result::Result<Vec<f64>, _> =
                fields.iter().map(|f| f.parse::<f64>()).collect();
            let values = match values {
                Ok(v) => v,
                Err(_) if !seen_row => {
                    seen_row = true;
                    continue;
                },
                Err(e) => return Err(PlotError::parse(line_no, e.to_string())),
            };
            seen_row = true;

            if values.len() < 2 {
                return Err(PlotError::parse(
                    line_no,
                    "expected an x column and at least one y column",
                ));
            }

            let cols = columns.get_or_insert_with(|| vec![Vec::new(); values.len()]);
            if cols.len() != values.len() {
                return Err(PlotError::parse(
                    line_no,
                    format!("expected {} columns, found {}", cols.len(), values.len()),
                ));
            }
            for (col, v) in cols.iter_mut().zip(values) {
                col.push(v);
            }
        }

        let Some(mut columns) = columns else {
            return Ok(Vec::new());
        };
        let x = columns.remove(0);
        Ok(columns
            .into_iter()
            .enumerate()
            .map(|(i, y)| Series::from_vecs(x.clone(), y, series_color(i)).with_style(style))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_comma_and_whitespace_columns() {
        let text = "# squares and cubes\nx, sq, cube\n0, 0, 0\n1 1 1\n2,\t4, 8\n\n3, 9, 27\n";
        let series = DataReader::parse(text, SeriesStyle::Block).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(*series[0].x.borrow(), vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(*series[0].y.borrow(), vec![0.0, 1.0, 4.0, 9.0]);
        assert_eq!(*series[1].y.borrow(), vec![0.0, 1.0, 8.0, 27.0]);
        assert_eq!(series[1].style, SeriesStyle::Block);
        assert_eq!(series[0].color, Color::Blue);
        assert_eq!(series[1].color, Color::Red);
    }

    #[test]
    fn ragged_rows_report_their_line() {
        let err = DataReader::parse("0 1\n1 2 3\n", SeriesStyle::Point).unwrap_err();
        assert!(matches!(err, PlotError::Parse { line: 2, .. }));
    }

    #[test]
    fn non_numeric_rows_after_the_first_are_errors() {
        let err = DataReader::parse("0 1\nfoo bar\n", SeriesStyle::Point).unwrap_err();
        assert!(matches!(err, PlotError::Parse { line: 2, .. }));
    }

    #[test]
    fn single_column_is_rejected() {
        let err = DataReader::parse("1\n2\n", SeriesStyle::Point).unwrap_err();
        assert!(matches!(err, PlotError::Parse { line: 1, .. }));
    }

    #[test]
    fn empty_input_gives_no_series() {
        assert!(DataReader::parse("# nothing\n\n", SeriesStyle::Point)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "-5 1\n5 2").unwrap();
        let series = DataReader::read_file(file.path(), SeriesStyle::Point).unwrap();
        assert_eq!(*series[0].x.borrow(), vec![-5.0, 5.0]);
    }

    #[test]
    fn missing_file_is_a_file_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DataReader::read_file(&dir.path().join("nope.csv"), SeriesStyle::Point)
            .unwrap_err();
        assert!(matches!(err, PlotError::FileOpen { .. }));
    }
}
