//! Terminal size arguments.

use crate::error::{PlotError, Result};

/// Parse a `WIDTHxHEIGHT` size such as `80x24`. Both sides must be non-zero.
pub fn parse_size(s: &str) -> Result<(u16, u16)> {
    let invalid = || PlotError::InvalidSize(s.to_string());
    let (w, h) = s
        .trim()
        .split_once(|c| c == 'x' || c == 'X')
        .ok_or_else(invalid)?;
    let w: u16 = w.trim().parse().map_err(|_| invalid())?;
    let h: u16 = h.trim().parse().map_err(|_| invalid())?;
    if w == 0 || h == 0 {
        return Err(invalid());
    }
    Ok((w, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_width_and_height() {
        assert_eq!(parse_size("80x24").unwrap(), (80, 24));
        assert_eq!(parse_size(" 40X12 ").unwrap(), (40, 12));
    }

    #[test]
    fn rejects_bad_sizes() {
        for bad in ["80", "x24", "0x10", "10x0", "axb", "-1x5", "70000x5"] {
            assert!(
                matches!(parse_size(bad), Err(PlotError::InvalidSize(ref s)) if s == bad),
                "{bad}"
            );
        }
    }
}
