//! GSE2.0 bulletin line encoders.
//!
//! Same validation policy as the [crate::isf] encoders: a bad mandatory
//! field aborts the line, absent optional fields are blanked.
//! GSE2.0 reports up to three network magnitudes on the origin line,
//! and origin errors on a second line right below.
use hifitime::Epoch;

use crate::{
    diagnostics::Diagnostics,
    formatter::{blank, fixed},
    isf::{
        amplitude, flag, magnitude_type, optional_count, optional_dynamic, optional_fixed, padded,
        AUTHOR_LEN, ID_LEN, STA_LEN,
    },
};

/// Origin block banners
pub const ORIGIN_HEAD: [&str; 2] = [
    "Date       Time        Latitude Longitude  Depth  Ndef Nsta Gap  Mag1       N  Mag2       N  Mag3       N  Author    OrigID",
    "       rms   OTErr    Smaj  Smin  Az      Err  mdist  Mdist            Err           Err           Err     Quality",
];

/// Phase block banner
pub const PHASE_HEAD: &str = "Sta     Dist  EvAz Phase   Date       Time          TRes  Azim  AzRes  Slow  SRes Def   SNR       Amp   Per Qual     Mag1      Mag2 ArrID";

/// Number of magnitude slots on the origin line
pub const ORIGIN_MAGNITUDES: usize = 3;

/// Number of magnitude slots on a phase line
pub const PHASE_MAGNITUDES: usize = 2;

/// Phase code column width
pub const PHASE_LEN: usize = 7;

/// One magnitude slot
#[derive(Debug, Clone, PartialEq)]
pub struct GseMagnitude<'a> {
    pub magnitude_type: &'a str,
    pub value: f64,
    pub error: Option<f64>,
    pub nsta: Option<u32>,
}

/// "yyyy/mm/dd" and "hh:mm:ss.s"
fn date_time(epoch: Epoch) -> Result<(String, String), String> {
    let (y, m, d, hh, mm, ss, nanos) = epoch.to_gregorian_utc();
    if !(0..=9999).contains(&y) {
        return Err(format!("bad year: {}", y));
    }
    Ok((
        format!("{:04}/{:02}/{:02}", y, m, d),
        format!("{:02}:{:02}:{:02}.{:01}", hh, mm, ss, nanos / 100_000_000),
    ))
}

fn magnitude_value(value: f64) -> Result<String, String> {
    if !(-1.0..=12.0).contains(&value) {
        return Err(format!("magnitude out of range: {}", value));
    }
    fixed(value, 4, 1).ok_or_else(|| format!("magnitude does not fit: {}", value))
}

/// GSE2.0 origin, two lines
#[derive(Debug, Clone, PartialEq)]
pub struct GseOriginLines<'a> {
    pub time: Epoch,
    /// ' ' or 'f'
    pub time_fixed: char,
    pub time_error: Option<f64>,
    pub rms: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// ' ' or 'f'
    pub epicenter_fixed: char,
    pub semi_major: Option<f64>,
    pub semi_minor: Option<f64>,
    pub strike: Option<i32>,
    pub depth: Option<f64>,
    /// ' ', 'f' or 'd'
    pub depth_fixed: char,
    pub depth_error: Option<f64>,
    pub ndef: Option<u32>,
    pub nsta: Option<u32>,
    pub gap: Option<f64>,
    pub min_distance: Option<f64>,
    pub max_distance: Option<f64>,
    /// Up to [ORIGIN_MAGNITUDES] magnitudes, extra ones are dropped
    pub magnitudes: &'a [GseMagnitude<'a>],
    pub analysis_type: char,
    pub location_method: char,
    pub event_type: &'a str,
    pub author: &'a str,
    pub origin_id: &'a str,
}

impl<'a> GseOriginLines<'a> {
    pub(crate) const ENCODER: &'static str = "write_gse_origin";

    /// Appends both lines to `buf`. Returns false when they were not produced.
    pub fn format(&self, buf: &mut String, diag: &mut Diagnostics) -> bool {
        let mut warnings = Diagnostics::default();
        match self.build(&mut warnings) {
            Ok((main, errors)) => {
                diag.merge(warnings);
                buf.push_str(&main);
                buf.push('\n');
                buf.push_str(&errors);
                buf.push('\n');
                true
            },
            Err(e) => {
                diag.push(Self::ENCODER, e);
                false
            },
        }
    }

    fn build(&self, warnings: &mut Diagnostics) -> Result<(String, String), String> {
        let mut main = String::with_capacity(128);
        let mut errors = String::with_capacity(128);

        let (date, time) = date_time(self.time)?;
        main.push_str(&date);
        main.push(' ');
        main.push_str(&time);
        main.push(flag(self.time_fixed, &[' ', 'f'], "time fixed flag")?);
        main.push(' ');

        let latitude = self
            .latitude
            .ok_or_else(|| "missing latitude".to_string())?;
        if latitude <= -90.0 || latitude > 90.0 {
            return Err(format!("latitude out of range: {}", latitude));
        }
        main.push_str(&fixed(latitude, 8, 4).ok_or("latitude does not fit")?);
        main.push(' ');

        let longitude = self
            .longitude
            .ok_or_else(|| "missing longitude".to_string())?;
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(format!("longitude out of range: {}", longitude));
        }
        main.push_str(&fixed(longitude, 9, 4).ok_or("longitude does not fit")?);
        main.push(flag(self.epicenter_fixed, &[' ', 'f'], "epicenter fixed flag")?);
        main.push(' ');

        match self.depth {
            Some(depth) if depth > 999.0 => {
                return Err(format!("depth out of range: {}", depth));
            },
            Some(depth) => {
                let field = fixed(depth, 5, 1)
                    .ok_or_else(|| format!("depth does not fit: {}", depth))?;
                main.push_str(&field);
            },
            None => main.push_str(&blank(5)),
        }
        main.push(flag(self.depth_fixed, &[' ', 'f', 'd'], "depth fixed flag")?);
        main.push(' ');
        main.push_str(&optional_count(self.ndef, "ndef", 9999, 4)?);
        main.push(' ');
        main.push_str(&optional_count(self.nsta, "nsta", 9999, 4)?);
        main.push(' ');
        match self.gap {
            Some(gap) if (0.0..=360.0).contains(&gap) => {
                main.push_str(&format!("{:>3}", gap.round() as i64));
            },
            Some(gap) => {
                warnings.push(Self::ENCODER, format!("gap out of range: {}", gap));
                main.push_str(&blank(3));
            },
            None => main.push_str(&blank(3)),
        }

        // second line, up to the magnitude errors
        errors.push_str(&blank(5));
        errors.push_str(&optional_fixed(self.rms, "rms", (0.0, 99.99), 5, 2)?);
        errors.push(' ');
        match self.time_error {
            Some(_) => {
                errors.push_str("+-");
                errors.push_str(&optional_fixed(
                    self.time_error,
                    "origin time error",
                    (0.0, 99.99),
                    5,
                    2,
                )?);
            },
            None => errors.push_str(&blank(7)),
        }
        errors.push_str(&blank(3));
        errors.push_str(&optional_fixed(self.semi_major, "semi major axis", (0.0, 999.9), 5, 1)?);
        errors.push(' ');
        errors.push_str(&optional_fixed(self.semi_minor, "semi minor axis", (0.0, 999.9), 5, 1)?);
        errors.push(' ');
        match self.strike {
            Some(strike) if (-1..=360).contains(&strike) => {
                errors.push_str(&format!("{:>3}", strike));
            },
            Some(strike) => return Err(format!("strike out of range: {}", strike)),
            None => errors.push_str(&blank(3)),
        }
        errors.push_str(&blank(2));
        match self.depth_error {
            Some(_) => {
                errors.push_str("+-");
                errors.push_str(&optional_dynamic(
                    self.depth_error,
                    "depth error",
                    (0.0, 9999.0),
                    5,
                    1,
                )?);
            },
            None => errors.push_str(&blank(7)),
        }
        errors.push(' ');
        errors.push_str(&optional_dynamic(
            self.min_distance,
            "minimum distance",
            (0.0, 999999.0),
            6,
            2,
        )?);
        errors.push(' ');
        errors.push_str(&optional_dynamic(
            self.max_distance,
            "maximum distance",
            (0.0, 999999.0),
            6,
            2,
        )?);

        // magnitude slots, on both lines
        if self.magnitudes.len() > ORIGIN_MAGNITUDES {
            warnings.push(
                Self::ENCODER,
                format!(
                    "{} magnitudes, only the first {} are exported",
                    self.magnitudes.len(),
                    ORIGIN_MAGNITUDES
                ),
            );
        }
        for slot in 0..ORIGIN_MAGNITUDES {
            main.push_str(&blank(2));
            errors.push_str(&blank(if slot == 0 { 10 } else { 9 }));
            match self.magnitudes.get(slot) {
                Some(mag) => {
                    main.push_str(&magnitude_type(mag.magnitude_type, Self::ENCODER, warnings));
                    main.push_str(&magnitude_value(mag.value)?);
                    main.push(' ');
                    // the N column only has room for 99 stations
                    match mag.nsta {
                        Some(nsta) if nsta > 99 => {
                            warnings.push(
                                Self::ENCODER,
                                format!(
                                    "{} station count does not fit: {}",
                                    mag.magnitude_type, nsta
                                ),
                            );
                            main.push_str(&blank(2));
                        },
                        nsta => main.push_str(&optional_count(nsta, "magnitude nsta", 99, 2)?),
                    }
                    match mag.error {
                        Some(_) => {
                            errors.push_str("+-");
                            errors.push_str(&optional_fixed(
                                mag.error,
                                "magnitude error",
                                (0.0, 9.9),
                                3,
                                1,
                            )?);
                        },
                        None => errors.push_str(&blank(5)),
                    }
                },
                None => {
                    main.push_str(&blank(12));
                    errors.push_str(&blank(5));
                },
            }
        }

        main.push_str(&blank(2));
        main.push_str(&padded(self.author, AUTHOR_LEN, "author")?);
        main.push(' ');
        main.push_str(&padded(self.origin_id, ID_LEN, "origin id")?);

        errors.push_str(&blank(5));
        errors.push(flag(self.analysis_type, &[' ', 'a', 'm', 'g'], "analysis type")?);
        errors.push(' ');
        errors.push(flag(self.location_method, &[' ', 'i', 'p', 'g', 'o'], "location method")?);
        errors.push(' ');
        if self.event_type.len() != 2 {
            return Err(format!("bad event type: \"{}\"", self.event_type));
        }
        errors.push_str(self.event_type);

        Ok((main, errors))
    }
}

/// GSE2.0 phase line
#[derive(Debug, Clone, PartialEq)]
pub struct GsePhaseLine<'a> {
    pub station: &'a str,
    pub distance: Option<f64>,
    pub event_azimuth: Option<f64>,
    pub phase: &'a str,
    /// Arrival time
    pub time: Epoch,
    pub time_residual: Option<f64>,
    pub azimuth: Option<f64>,
    pub azimuth_residual: Option<f64>,
    pub slowness: Option<f64>,
    pub slowness_residual: Option<f64>,
    pub time_defining: char,
    pub azimuth_defining: char,
    pub slowness_defining: char,
    pub snr: Option<f64>,
    pub amplitude: Option<f64>,
    pub period: Option<f64>,
    pub pick_type: char,
    pub motion: char,
    pub detection: char,
    /// Up to [PHASE_MAGNITUDES] (type, value) pairs
    pub magnitudes: &'a [(&'a str, f64)],
    pub arrival_id: &'a str,
}

impl<'a> GsePhaseLine<'a> {
    pub(crate) const ENCODER: &'static str = "write_gse_phase";

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
        let mut line = String::with_capacity(140);

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

        let (y, m, d, hh, mm, ss, nanos) = self.time.to_gregorian_utc();
        if !(0..=9999).contains(&y) {
            return Err(format!("bad year: {}", y));
        }
        line.push_str(&format!(
            "{:04}/{:02}/{:02} {:02}:{:02}:{:02}.{:03}",
            y,
            m,
            d,
            hh,
            mm,
            ss,
            nanos / 1_000_000
        ));
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
            6,
            1,
        )?);
        line.push(' ');
        line.push_str(&optional_fixed(self.slowness, "slowness", (0.0, 999.9), 5, 1)?);
        line.push(' ');
        line.push_str(&optional_dynamic(
            self.slowness_residual,
            "slowness residual",
            (-9999.0, 9999.0),
            5,
            1,
        )?);
        line.push(' ');

        line.push(flag(self.time_defining, &['T', '_'], "time defining flag")?);
        line.push(flag(self.azimuth_defining, &['A', '_'], "azimuth defining flag")?);
        line.push(flag(self.slowness_defining, &['S', '_'], "slowness defining flag")?);
        line.push(' ');

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
        let motion = self.motion.to_ascii_lowercase();
        line.push(flag(motion, &['c', 'd', '_'], "short period motion")?);
        let detection = self.detection.to_ascii_lowercase();
        line.push(flag(detection, &['i', 'e', 'q', '_'], "detection character")?);

        if self.magnitudes.len() > PHASE_MAGNITUDES {
            warnings.push(
                Self::ENCODER,
                format!(
                    "{} magnitudes, only the first {} are exported",
                    self.magnitudes.len(),
                    PHASE_MAGNITUDES
                ),
            );
        }
        for slot in 0..PHASE_MAGNITUDES {
            line.push(' ');
            match self.magnitudes.get(slot) {
                Some((magtype, value)) => {
                    line.push_str(&magnitude_type(magtype, Self::ENCODER, warnings));
                    line.push_str(&magnitude_value(*value)?);
                },
                None => line.push_str(&blank(9)),
            }
        }
        line.push(' ');
        line.push_str(&padded(self.arrival_id, ID_LEN, "arrival id")?);
        Ok(line)
    }
}
