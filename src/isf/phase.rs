use super::{
    amplitude, flag, magnitude_type, optional_dynamic, optional_fixed, padded, ID_LEN, PHASE_LEN,
    STA_LEN,
};
use crate::{
    diagnostics::Diagnostics,
    formatter::{blank, fixed, left},
};

/// One ISF phase (arrival) line.
/// Only the station code is mandatory.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseLine<'a> {
    pub station: &'a str,
    /// Epicentral distance (deg)
    pub distance: Option<f64>,
    /// Event to station azimuth (deg)
    pub event_azimuth: Option<f64>,
    pub phase: &'a str,
    /// Arrival time, preformatted "hh:mm:ss.sss", blank when empty
    pub time: &'a str,
    /// Time residual (s)
    pub time_residual: Option<f64>,
    /// Observed azimuth (deg)
    pub azimuth: Option<f64>,
    /// Azimuth residual (deg)
    pub azimuth_residual: Option<f64>,
    /// Observed slowness (s/deg)
    pub slowness: Option<f64>,
    /// Slowness residual (s/deg)
    pub slowness_residual: Option<f64>,
    /// 'T' or '_'
    pub time_defining: char,
    /// 'A' or '_'
    pub azimuth_defining: char,
    /// 'S' or '_'
    pub slowness_defining: char,
    /// Signal to noise ratio
    pub snr: Option<f64>,
    /// Amplitude (nm)
    pub amplitude: Option<f64>,
    /// Period (s)
    pub period: Option<f64>,
    /// 'a', 'm' or '_'
    pub pick_type: char,
    /// Short period motion: 'c', 'd' or '_'
    pub motion: char,
    /// Detection character: 'i', 'e', 'q' or '_'
    pub detection: char,
    pub magnitude_type: &'a str,
    /// ' ', '<' or '>'
    pub magnitude_indicator: char,
    pub magnitude: Option<f64>,
    pub arrival_id: &'a str,
}

impl<'a> PhaseLine<'a> {
    pub(crate) const ENCODER: &'static str = "write_phase";

    /// Appends the line to `buf`. Returns false when it was not produced.
    pub fn format(&self, buf: &mut String, diag: &mut Diagnostics) -> bool {
        let mut warnings = Diagnostics::default();
        match self.build(&mut warnings) {
            Ok(line) => {
                diag.merge(warnings);
                buf.push_str(&line);
                buf.push('\n');
                true
            },
            Err(e) => {
                diag.push(Self::ENCODER, e);
                false
            },
        }
    }

    fn build(&self, warnings: &mut Diagnostics) -> Result<String, String> {
        let mut line = String::with_capacity(124);

        if self.station.is_empty() {
            return Err("missing station code".to_string());
        }
        line.push_str(&padded(self.station, STA_LEN, "station code")?);
        line.push(' ');

        line.push_str(&optional_fixed(self.distance, "distance", (0.0, 999.99), 6, 2)?);
        line.push(' ');
        line.push_str(&optional_fixed(
            self.event_azimuth,
            "event to station azimuth",
            (0.0, 360.0),
            5,
            1,
        )?);
        line.push(' ');
        line.push_str(&padded(self.phase, PHASE_LEN, "phase code")?);
        line.push(' ');

        if self.time.len() > 12 {
            return Err(format!("bad arrival time: \"{}\"", self.time));
        }
        line.push_str(&left(self.time, 12));
        line.push(' ');

        line.push_str(&optional_dynamic(
            self.time_residual,
            "time residual",
            (-9999.0, 9999.0),
            5,
            1,
        )?);
        line.push(' ');
        line.push_str(&optional_fixed(self.azimuth, "azimuth", (0.0, 360.0), 5, 1)?);
        line.push(' ');
        line.push_str(&optional_dynamic(
            self.azimuth_residual,
            "azimuth residual",
            (-360.0, 360.0),
            5,
            1,
        )?);
        line.push(' ');
        line.push_str(&optional_fixed(self.slowness, "slowness", (0.0, 9999.9), 6, 1)?);
        line.push(' ');
        line.push_str(&optional_dynamic(
            self.slowness_residual,
            "slowness residual",
            (-99999.0, 99999.0),
            6,
            1,
        )?);
        line.push(' ');

        line.push(flag(self.time_defining, &['T', '_'], "time defining flag")?);
        line.push(flag(self.azimuth_defining, &['A', '_'], "azimuth defining flag")?);
        line.push(flag(self.slowness_defining, &['S', '_'], "slowness defining flag")?);
        line.push(' ');

        // out of range snr is reported, but does not abort
        match self.snr {
            Some(snr) => match fixed(snr, 5, 1) {
                Some(field) if (0.0..=999.0).contains(&snr) => line.push_str(&field),
                _ => {
                    warnings.push(Self::ENCODER, format!("snr out of range: {}", snr));
                    line.push_str(&blank(5));
                },
            },
            None => line.push_str(&blank(5)),
        }
        line.push(' ');

        line.push_str(&amplitude(self.amplitude)?);
        line.push(' ');

        match self.period {
            Some(per) if !(0.0..=999.9).contains(&per) => {
                return Err(format!("period out of range: {}", per));
            },
            Some(per) if per >= 99.0 => {
                warnings.push(Self::ENCODER, format!("period {} written with 1 decimal", per));
                line.push_str(&fixed(per, 5, 1).ok_or("period does not fit")?);
            },
            Some(per) => line.push_str(&fixed(per, 5, 2).ok_or("period does not fit")?),
            None => line.push_str(&blank(5)),
        }
        line.push(' ');

        line.push(flag(self.pick_type, &['a', 'm', '_'], "pick type")?);
        let motion = match self.motion {
            'C' => 'c',
            'D' => 'd',
            c => c,
        };
        line.push(flag(motion, &['c', 'd', '_'], "short period motion")?);
        let detection = match self.detection {
            'I' | 'E' | 'Q' => self.detection.to_ascii_lowercase(),
            c => c,
        };
        line.push(flag(detection, &['i', 'e', 'q', '_'], "detection character")?);
        line.push(' ');

        line.push_str(&magnitude_type(self.magnitude_type, Self::ENCODER, warnings));
        line.push(flag(self.magnitude_indicator, &[' ', '<', '>'], "magnitude indicator")?);
        line.push_str(&optional_fixed(self.magnitude, "magnitude", (-1.0, 12.0), 4, 1)?);
        line.push(' ');

        line.push_str(&padded(self.arrival_id, ID_LEN, "arrival id")?);
        Ok(line)
    }
}
