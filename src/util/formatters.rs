//! Shared number formatting.

/// Format a tick label: fixed sign, two decimals, `+` shown as a space.
///
/// Non-finite values render as `?`.
pub fn format_tick(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    format!("{:+.2}", val).replace('+', " ")
}

/// Format a bound for an editable text field.
pub fn format_bound(val: f64) -> String {
    let s = format!("{}", val);
    if s.len() > 12 {
        format!("{:.6e}", val)
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_keep_sign_alignment() {
        assert_eq!(format_tick(1.0), " 1.00");
        assert_eq!(format_tick(-1.005), "-1.00");
        assert_eq!(format_tick(12.5), " 12.50");
        assert_eq!(format_tick(0.0), " 0.00");
        assert_eq!(format_tick(f64::NAN), "?");
    }

    #[test]
    fn bounds_stay_short() {
        assert_eq!(format_bound(2.5), "2.5");
        assert_eq!(format_bound(-10.0), "-10");
        assert_eq!(format_bound(1.0 / 3.0), "3.333333e-1");
    }
}
