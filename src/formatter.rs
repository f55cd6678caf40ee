//! Fixed width field formatting
//!
//! Bulletin formats are column exact: every helper in this module
//! returns a string of exactly the requested width, or reports that
//! it could not.

/// Number of decimals that allows `value` to fit into `width` characters,
/// sign and decimal point included, clamped to `[0, max_precision]`.
pub fn dynamic_precision(value: f64, width: usize, max_precision: usize) -> usize {
    if value == 0.0 {
        return max_precision;
    }
    let magnitude = value.abs().log10().floor() as i64;
    let spare = if value < 0.0 {
        width as i64 - 3 - magnitude
    } else {
        width as i64 - 2 - magnitude
    };
    spare.clamp(0, max_precision as i64) as usize
}

/// Renders `value` right justified into `width` characters, using as many
/// decimals (up to `max_precision`) as the width allows.
/// The result may be wider than `width` for values whose integer part
/// does not fit: use [fixed_double] to detect that case.
pub fn format_fixed_double(value: f64, width: usize, max_precision: usize) -> String {
    let precision = dynamic_precision(value, width, max_precision);
    format!("{:>width$.precision$}", value, width = width, precision = precision)
}

/// [format_fixed_double] with a post-format width check.
/// Returns None when the rendered value overflows its column.
pub fn fixed_double(value: f64, width: usize, max_precision: usize) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let formatted = format_fixed_double(value, width, max_precision);
    if formatted.len() > width {
        None
    } else {
        Some(formatted)
    }
}

/// Renders `value` with a constant precision into `width` characters.
/// Returns None when the rendered value overflows its column.
pub fn fixed(value: f64, width: usize, precision: usize) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let formatted = format!("{:>width$.precision$}", value, width = width, precision = precision);
    if formatted.len() > width {
        None
    } else {
        Some(formatted)
    }
}

/// Blank field
pub fn blank(width: usize) -> String {
    " ".repeat(width)
}

/// Left justified, space padded field.
/// Caller is responsible for the length check.
pub fn left(content: &str, width: usize) -> String {
    format!("{:<width$}", content, width = width)
}

/// Right justified integer field, None on overflow
pub fn integer(value: i64, width: usize) -> Option<String> {
    let formatted = format!("{:>width$}", value, width = width);
    if formatted.len() > width {
        None
    } else {
        Some(formatted)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn precision_estimate() {
        assert_eq!(dynamic_precision(0.0, 5, 2), 2);
        assert_eq!(dynamic_precision(1.5, 5, 2), 2);
        assert_eq!(dynamic_precision(123.4, 5, 2), 1);
        assert_eq!(dynamic_precision(-123.4, 5, 2), 0);
        assert_eq!(dynamic_precision(12345.0, 5, 2), 0);
        assert_eq!(dynamic_precision(0.001, 5, 1), 1);
    }
    #[test]
    fn fixed_width_rendering() {
        assert_eq!(format_fixed_double(1.5, 5, 2), " 1.50");
        assert_eq!(format_fixed_double(-1.5, 5, 1), " -1.5");
        assert_eq!(format_fixed_double(123.46, 5, 2), "123.5");
        assert_eq!(format_fixed_double(0.0, 5, 1), "  0.0");
        assert_eq!(format_fixed_double(999999.0, 6, 2), "999999");
    }
    #[test]
    fn overflow_detection() {
        assert!(fixed_double(1234567.0, 5, 1).is_none());
        assert!(fixed_double(f64::NAN, 5, 1).is_none());
        assert_eq!(fixed_double(12.0, 5, 1), Some(" 12.0".to_string()));
        assert!(fixed(100.0, 4, 1).is_none());
        assert_eq!(integer(9999, 4), Some("9999".to_string()));
        assert!(integer(10000, 4).is_none());
    }
}
