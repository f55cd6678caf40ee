use hifitime::Epoch;

use super::{
    date_time, flag, optional_count, optional_dynamic, optional_fixed, padded, AUTHOR_LEN, ID_LEN,
};
use crate::{
    diagnostics::Diagnostics,
    formatter::{blank, fixed, integer},
};

/// One ISF origin line.
/// Latitude and longitude are mandatory, every other
/// numeric field is optional and rendered blank when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct OriginLine<'a> {
    pub time: Epoch,
    /// ' ' or 'f'
    pub time_fixed: char,
    /// Origin time error (s)
    pub time_error: Option<f64>,
    /// RMS residual (s)
    pub rms: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// ' ' or 'f'
    pub epicenter_fixed: char,
    /// Error ellipse semi major axis (km)
    pub semi_major: Option<f64>,
    /// Error ellipse semi minor axis (km)
    pub semi_minor: Option<f64>,
    /// Error ellipse strike (deg)
    pub strike: Option<i32>,
    /// Depth (km)
    pub depth: Option<f64>,
    /// ' ', 'f' or 'd'
    pub depth_fixed: char,
    /// Depth error (km)
    pub depth_error: Option<f64>,
    /// Number of defining phases
    pub ndef: Option<u32>,
    /// Number of defining stations
    pub nsta: Option<u32>,
    /// Azimuthal gap (deg)
    pub gap: Option<f64>,
    /// Closest station distance (deg)
    pub min_distance: Option<f64>,
    /// Furthest station distance (deg)
    pub max_distance: Option<f64>,
    /// ' ', 'a', 'm' or 'g'
    pub analysis_type: char,
    /// ' ', 'i', 'p', 'g' or 'o'
    pub location_method: char,
    /// Two characters event type
    pub event_type: &'a str,
    pub author: &'a str,
    pub origin_id: &'a str,
}

impl<'a> OriginLine<'a> {
    pub(crate) const ENCODER: &'static str = "write_origin";

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

        let (date, time) = date_time(self.time)?;
        line.push_str(&date);
        line.push(' ');
        line.push_str(&time);
        line.push(flag(self.time_fixed, &[' ', 'f'], "time fixed flag")?);
        line.push(' ');

        line.push_str(&optional_fixed(self.time_error, "origin time error", (0.0, 99.99), 5, 2)?);
        line.push(' ');
        line.push_str(&optional_fixed(self.rms, "rms", (0.0, 99.99), 5, 2)?);
        line.push(' ');

        let latitude = self
            .latitude
            .ok_or_else(|| "missing latitude".to_string())?;
        if latitude <= -90.0 || latitude > 90.0 {
            return Err(format!("latitude out of range: {}", latitude));
        }
        line.push_str(&fixed(latitude, 8, 4).ok_or("latitude does not fit")?);
        line.push(' ');

        let longitude = self
            .longitude
            .ok_or_else(|| "missing longitude".to_string())?;
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(format!("longitude out of range: {}", longitude));
        }
        line.push_str(&fixed(longitude, 9, 4).ok_or("longitude does not fit")?);
        line.push(flag(self.epicenter_fixed, &[' ', 'f'], "epicenter fixed flag")?);
        line.push(' ');

        line.push_str(&optional_fixed(self.semi_major, "semi major axis", (0.0, 999.9), 5, 1)?);
        line.push(' ');
        line.push_str(&optional_fixed(self.semi_minor, "semi minor axis", (0.0, 999.9), 5, 1)?);
        line.push(' ');

        match self.strike {
            Some(strike) => {
                if !(-1..=360).contains(&strike) {
                    return Err(format!("strike out of range: {}", strike));
                }
                line.push_str(&integer(strike as i64, 3).ok_or("strike does not fit")?);
            },
            None => line.push_str(&blank(3)),
        }
        line.push(' ');

        match self.depth {
            Some(depth) => {
                if depth > 999.0 {
                    return Err(format!("depth out of range: {}", depth));
                }
                let field = fixed(depth, 5, 1)
                    .ok_or_else(|| format!("depth does not fit: {}", depth))?;
                line.push_str(&field);
            },
            None => line.push_str(&blank(5)),
        }
        line.push(flag(self.depth_fixed, &[' ', 'f', 'd'], "depth fixed flag")?);
        line.push(' ');

        line.push_str(&optional_dynamic(self.depth_error, "depth error", (0.0, 9999.0), 4, 1)?);
        line.push(' ');
        line.push_str(&optional_count(self.ndef, "ndef", 9999, 4)?);
        line.push(' ');
        line.push_str(&optional_count(self.nsta, "nsta", 9999, 4)?);
        line.push(' ');

        // out of range gap is reported, but does not abort
        match self.gap {
            Some(gap) if (0.0..=360.0).contains(&gap) => {
                line.push_str(&format!("{:>3}", gap.round() as i64));
            },
            Some(gap) => {
                warnings.push(Self::ENCODER, format!("gap out of range: {}", gap));
                line.push_str(&blank(3));
            },
            None => line.push_str(&blank(3)),
        }
        line.push(' ');

        line.push_str(&optional_dynamic(
            self.min_distance,
            "minimum distance",
            (0.0, 999999.0),
            6,
            2,
        )?);
        line.push(' ');
        line.push_str(&optional_dynamic(
            self.max_distance,
            "maximum distance",
            (0.0, 999999.0),
            6,
            2,
        )?);
        line.push(' ');

        line.push(flag(self.analysis_type, &[' ', 'a', 'm', 'g'], "analysis type")?);
        line.push(' ');
        line.push(flag(self.location_method, &[' ', 'i', 'p', 'g', 'o'], "location method")?);
        line.push(' ');

        if self.event_type.len() != 2 {
            return Err(format!("bad event type: \"{}\"", self.event_type));
        }
        line.push_str(self.event_type);
        line.push(' ');

        line.push_str(&padded(self.author, AUTHOR_LEN, "author")?);
        line.push(' ');
        line.push_str(&padded(self.origin_id, ID_LEN, "origin id")?);

        Ok(line)
    }
}
