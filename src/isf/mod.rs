//! ISF / IMS1.0 line encoders.
//!
//! Every encoder builds one complete line, validating each field on the fly.
//! The first invalid mandatory field aborts the line: nothing is appended
//! to the output buffer and one message is reported. Optional fields that
//! are absent are rendered as blanks.
use hifitime::Epoch;

use crate::{
    diagnostics::Diagnostics,
    formatter::{blank, fixed, fixed_double, integer, left},
};

mod header;
mod netmag;
mod origin;
mod phase;

pub use header::{write_begin, Comment, DataType, EventId, MessageId};
pub use netmag::NetmagLine;
pub use origin::OriginLine;
pub use phase::PhaseLine;

/// Maximal ISF line length
pub const LINE_LEN: usize = 140;

/// Author column width
pub const AUTHOR_LEN: usize = 9;

/// Origin and arrival ID column width
pub const ID_LEN: usize = 8;

/// Magnitude type column width
pub const MAGTYPE_LEN: usize = 5;

/// Station code column width
pub const STA_LEN: usize = 5;

/// Phase code column width
pub const PHASE_LEN: usize = 8;

/// Region name maximal length
pub const REGION_LEN: usize = 65;

/// Origin block banner
pub const ORIGIN_HEAD: &str = "   Date       Time        Err   RMS Latitude Longitude  Smaj  Smin  Az Depth   Err Ndef Nsta Gap  mdist  Mdist Qual   Author      OrigID";

/// Network magnitude block banner
pub const NETMAG_HEAD: &str = "Magnitude  Err Nsta Author      OrigID";

/// Phase block banner
pub const PHASE_HEAD: &str = "Sta     Dist  EvAz Phase        Time      TRes  Azim AzRes   Slow   SRes Def   SNR       Amp   Per Qual Magnitude    ArrID";

/// Message terminator
pub const STOP: &str = "STOP";

/// Appends one of the fixed banners
pub fn write_banner(buf: &mut String, banner: &str) {
    buf.push_str(banner);
    buf.push('\n');
}

/// Outcome of one field check: formatted field or the abort reason
pub(crate) type Field = Result<String, String>;

/// Optional real number with constant precision.
/// Out of range values abort the line.
pub(crate) fn optional_fixed(
    value: Option<f64>,
    name: &str,
    range: (f64, f64),
    width: usize,
    precision: usize,
) -> Field {
    match value {
        None => Ok(blank(width)),
        Some(v) => {
            if !(range.0..=range.1).contains(&v) {
                return Err(format!("{} out of range: {}", name, v));
            }
            fixed(v, width, precision).ok_or_else(|| format!("{} does not fit: {}", name, v))
        },
    }
}

/// Optional real number with width dependent precision.
/// Out of range values abort the line.
pub(crate) fn optional_dynamic(
    value: Option<f64>,
    name: &str,
    range: (f64, f64),
    width: usize,
    max_precision: usize,
) -> Field {
    match value {
        None => Ok(blank(width)),
        Some(v) => {
            if !(range.0..=range.1).contains(&v) {
                return Err(format!("{} out of range: {}", name, v));
            }
            fixed_double(v, width, max_precision)
                .ok_or_else(|| format!("{} does not fit: {}", name, v))
        },
    }
}

/// Optional counter. Values above `max` abort the line.
pub(crate) fn optional_count(value: Option<u32>, name: &str, max: u32, width: usize) -> Field {
    match value {
        None => Ok(blank(width)),
        Some(v) => {
            if v > max {
                return Err(format!("{} out of range: {}", name, v));
            }
            integer(v as i64, width).ok_or_else(|| format!("{} does not fit: {}", name, v))
        },
    }
}

/// Amplitude column, 9 characters. Values above 1.0E7 are written
/// without decimals, so the bound applies to the rounded value.
pub(crate) fn amplitude(value: Option<f64>) -> Field {
    match value {
        Some(amp) if !(amp >= 0.0 && amp.round() < 1.0E9) => Err(format!(
            "amplitude out of range: {} (exceeds 9 digits once rounded)",
            amp
        )),
        amp => optional_dynamic(amp, "amplitude", (0.0, 1.0E9), 9, 1),
    }
}

/// Single character flag restricted to `allowed`
pub(crate) fn flag(value: char, allowed: &[char], name: &str) -> Result<char, String> {
    if allowed.contains(&value) {
        Ok(value)
    } else {
        Err(format!("bad {}: '{}'", name, value))
    }
}

/// Left justified identifier. Overlong content aborts the line,
/// it is never truncated.
pub(crate) fn padded(value: &str, width: usize, name: &str) -> Field {
    if value.len() > width {
        Err(format!("{} too long: \"{}\"", name, value))
    } else {
        Ok(left(value, width))
    }
}

/// Magnitude type: overlong content is truncated and reported,
/// the line is still produced.
pub(crate) fn magnitude_type(value: &str, encoder: &str, diag: &mut Diagnostics) -> String {
    if value.len() > MAGTYPE_LEN {
        diag.push(
            encoder,
            format!("magnitude type \"{}\" truncated to {} chars", value, MAGTYPE_LEN),
        );
        left(&value.chars().take(MAGTYPE_LEN).collect::<String>(), MAGTYPE_LEN)
    } else {
        left(value, MAGTYPE_LEN)
    }
}

/// "yyyy/mm/dd" and "hh:mm:ss.ff" decomposition of given epoch
pub(crate) fn date_time(epoch: Epoch) -> Result<(String, String), String> {
    let (y, m, d, hh, mm, ss, nanos) = epoch.to_gregorian_utc();
    if !(0..=9999).contains(&y) {
        return Err(format!("bad year: {}", y));
    }
    Ok((
        format!("{:04}/{:02}/{:02}", y, m, d),
        format!("{:02}:{:02}:{:02}.{:02}", hh, mm, ss, nanos / 10_000_000),
    ))
}

/// Phase arrival time, "hh:mm:ss.sss"
pub fn phase_time(epoch: Epoch) -> String {
    let (_, _, _, hh, mm, ss, nanos) = epoch.to_gregorian_utc();
    format!("{:02}:{:02}:{:02}.{:03}", hh, mm, ss, nanos / 1_000_000)
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn banners_alignment() {
        // value columns end right below their banner label
        assert_eq!(ORIGIN_HEAD.find("Latitude"), Some(36));
        assert_eq!(NETMAG_HEAD.find("Nsta"), Some(15));
        assert_eq!(PHASE_HEAD.find("Def"), Some(73));
        assert_eq!(PHASE_HEAD.find("ArrID"), Some(117));
    }
    #[test]
    fn epoch_decomposition() {
        let t = Epoch::from_gregorian_utc(2024, 3, 15, 7, 4, 9, 123_456_789);
        let (date, time) = date_time(t).unwrap();
        assert_eq!(date, "2024/03/15");
        assert_eq!(time, "07:04:09.12");
        assert_eq!(phase_time(t), "07:04:09.123");
    }
    #[test]
    fn identifiers() {
        assert_eq!(padded("IPGP", 9, "author"), Ok("IPGP     ".to_string()));
        assert!(padded("0123456789", 8, "origin id").is_err());
        let mut diag = Diagnostics::default();
        assert_eq!(magnitude_type("Mwp", "test", &mut diag), "Mwp  ");
        assert!(diag.is_empty());
        assert_eq!(magnitude_type("Mw(mB)", "test", &mut diag), "Mw(mB");
        assert_eq!(diag.len(), 1);
    }
}
