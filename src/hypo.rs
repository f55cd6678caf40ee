//! Hypo2000 "H71SUMM2K" summary line.
//!
//! Column exact (not space delimited) Hypo71 like summary with a four
//! digit year, followed by a five character seismic code and a record ID.
use hifitime::Epoch;

use crate::{
    diagnostics::Diagnostics,
    formatter::{blank, fixed},
    units::Sexagesimal,
};

/// Seismic code length, a hard requirement
pub const SEISMIC_CODE_LEN: usize = 5;

/// Hypo71 location quality
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Quality {
    A,
    B,
    C,
    D,
}

impl Quality {
    /// Quality class from rms (s), horizontal and vertical errors (km).
    /// Returns None when none of them is known.
    pub fn from_errors(rms: Option<f64>, erh: Option<f64>, erz: Option<f64>) -> Option<Self> {
        if rms.is_none() && erh.is_none() && erz.is_none() {
            return None;
        }
        let rms = rms.unwrap_or(f64::MAX);
        let erh = erh.unwrap_or(f64::MAX);
        let erz = erz.unwrap_or(f64::MAX);
        if rms < 0.15 && erh <= 1.0 && erz <= 2.0 {
            Some(Self::A)
        } else if rms < 0.30 && erh <= 2.5 && erz <= 5.0 {
            Some(Self::B)
        } else if rms < 0.50 && erh <= 5.0 {
            Some(Self::C)
        } else {
            Some(Self::D)
        }
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
            Self::D => write!(f, "D"),
        }
    }
}

/// Magnitude letter: "Ml" gives 'L', "Md" gives 'D'
pub fn magnitude_letter(magnitude_type: &str) -> char {
    magnitude_type
        .chars()
        .nth(1)
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or(' ')
}

/// One H71SUMM2K summary line
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine<'a> {
    pub time: Epoch,
    pub latitude: f64,
    pub longitude: f64,
    /// Depth (km)
    pub depth: Option<f64>,
    pub magnitude_type: Option<&'a str>,
    pub magnitude: Option<f64>,
    /// Number of phases
    pub phase_count: Option<u32>,
    /// Azimuthal gap (deg)
    pub gap: Option<f64>,
    /// Closest station distance (km)
    pub min_distance: Option<f64>,
    /// RMS residual (s)
    pub rms: Option<f64>,
    /// Horizontal error (km)
    pub horizontal_error: Option<f64>,
    /// Vertical error (km)
    pub vertical_error: Option<f64>,
    /// Exactly [SEISMIC_CODE_LEN] characters
    pub seismic_code: &'a str,
    pub record_id: &'a str,
}

impl<'a> SummaryLine<'a> {
    pub(crate) const ENCODER: &'static str = "write_h71summ2k";

    /// Renders the summary line, without line terminator.
    /// Returns an empty string when the seismic code is not
    /// exactly five characters long.
    pub fn format(&self, diag: &mut Diagnostics) -> String {
        if self.seismic_code.chars().count() != SEISMIC_CODE_LEN {
            diag.push(
                Self::ENCODER,
                format!(
                    "seismic code must be {} characters long: \"{}\"",
                    SEISMIC_CODE_LEN, self.seismic_code
                ),
            );
            return String::new();
        }

        let mut line = String::with_capacity(100);

        let (y, m, d, hh, mm, ss, nanos) = self.time.to_gregorian_utc();
        let seconds = (ss as u32 * 100 + nanos / 10_000_000) as f64 / 100.0;
        line.push_str(&format!(
            "{:04}{:02}{:02} {:02}{:02}{:6.2}",
            y, m, d, hh, mm, seconds
        ));

        if self.latitude > -90.0 && self.latitude <= 90.0 {
            let lat = Sexagesimal::from_ddeg(self.latitude);
            let hemisphere = if lat.negative { 'S' } else { ' ' };
            line.push_str(&format!("{:3}{}{:5.2}", lat.degrees, hemisphere, lat.minutes));
        } else {
            diag.push(Self::ENCODER, format!("latitude out of range: {}", self.latitude));
            line.push_str(&blank(9));
        }

        if (-180.0..=180.0).contains(&self.longitude) {
            let lon = Sexagesimal::from_ddeg(self.longitude);
            let hemisphere = if lon.negative { ' ' } else { 'E' };
            line.push_str(&format!("{:4}{}{:5.2}", lon.degrees, hemisphere, lon.minutes));
        } else {
            diag.push(Self::ENCODER, format!("longitude out of range: {}", self.longitude));
            line.push_str(&blank(10));
        }

        line.push_str(&self.field(self.depth, "depth", 7, 2, diag));
        line.push(' ');

        match (self.magnitude_type, self.magnitude) {
            (Some(magtype), Some(mag)) => {
                line.push(magnitude_letter(magtype));
                line.push_str(&self.field(Some(mag), "magnitude", 5, 2, diag));
            },
            (None, Some(mag)) => {
                line.push(' ');
                line.push_str(&self.field(Some(mag), "magnitude", 5, 2, diag));
            },
            _ => line.push_str(&blank(6)),
        }

        match self.phase_count {
            Some(n) if n <= 999 => line.push_str(&format!("{:3}", n)),
            Some(n) => {
                diag.push(Self::ENCODER, format!("phase count out of range: {}", n));
                line.push_str(&blank(3));
            },
            None => line.push_str(&blank(3)),
        }

        match self.gap {
            Some(gap) if (0.0..=360.0).contains(&gap) => {
                line.push_str(&format!("{:4}", gap.round() as i64))
            },
            Some(gap) => {
                diag.push(Self::ENCODER, format!("gap out of range: {}", gap));
                line.push_str(&blank(4));
            },
            None => line.push_str(&blank(4)),
        }

        line.push_str(&self.field(self.min_distance, "minimum distance", 5, 1, diag));
        line.push_str(&self.field(self.rms, "rms", 5, 2, diag));
        line.push_str(&self.field(self.horizontal_error, "horizontal error", 5, 1, diag));
        line.push_str(&self.field(self.vertical_error, "vertical error", 5, 1, diag));
        line.push(' ');

        match Quality::from_errors(self.rms, self.horizontal_error, self.vertical_error) {
            Some(quality) => line.push_str(&quality.to_string()),
            None => line.push(' '),
        }
        line.push(' ');
        line.push_str(self.seismic_code);
        line.push(' ');
        line.push_str(self.record_id);
        line
    }

    /// Optional numeric field, blanked and reported when it overflows
    fn field(
        &self,
        value: Option<f64>,
        name: &str,
        width: usize,
        precision: usize,
        diag: &mut Diagnostics,
    ) -> String {
        match value {
            Some(v) => match fixed(v, width, precision) {
                Some(field) => field,
                None => {
                    diag.push(Self::ENCODER, format!("{} does not fit: {}", name, v));
                    blank(width)
                },
            },
            None => blank(width),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn quality_classes() {
        assert_eq!(Quality::from_errors(Some(0.1), Some(0.5), Some(1.0)), Some(Quality::A));
        assert_eq!(Quality::from_errors(Some(0.2), Some(2.0), Some(4.0)), Some(Quality::B));
        assert_eq!(Quality::from_errors(Some(0.4), Some(4.0), None), Some(Quality::C));
        assert_eq!(Quality::from_errors(Some(0.6), None, None), Some(Quality::D));
        assert_eq!(Quality::from_errors(None, None, None), None);
    }
    #[test]
    fn magnitude_letters() {
        assert_eq!(magnitude_letter("Ml"), 'L');
        assert_eq!(magnitude_letter("Md"), 'D');
        assert_eq!(magnitude_letter("MLv"), 'L');
        assert_eq!(magnitude_letter("M"), ' ');
    }
}
