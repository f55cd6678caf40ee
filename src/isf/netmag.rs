use super::{flag, magnitude_type, optional_count, optional_fixed, padded, AUTHOR_LEN, ID_LEN};
use crate::{diagnostics::Diagnostics, formatter::fixed};

/// One ISF network magnitude line
#[derive(Debug, Clone, PartialEq)]
pub struct NetmagLine<'a> {
    /// Magnitude type, truncated to 5 characters if longer
    pub magnitude_type: &'a str,
    /// ' ', '<' or '>'
    pub indicator: char,
    pub magnitude: Option<f64>,
    /// Magnitude error
    pub error: Option<f64>,
    /// Number of contributing stations
    pub nsta: Option<u32>,
    pub author: &'a str,
    pub origin_id: &'a str,
}

impl<'a> NetmagLine<'a> {
    pub(crate) const ENCODER: &'static str = "write_netmag";

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
        let mut line = String::with_capacity(40);
        line.push_str(&magnitude_type(self.magnitude_type, Self::ENCODER, warnings));
        line.push(flag(self.indicator, &[' ', '<', '>'], "magnitude indicator")?);

        let magnitude = self
            .magnitude
            .ok_or_else(|| "missing magnitude".to_string())?;
        if !(-1.0..=12.0).contains(&magnitude) {
            return Err(format!("magnitude out of range: {}", magnitude));
        }
        line.push_str(&fixed(magnitude, 4, 1).ok_or("magnitude does not fit")?);
        line.push(' ');

        line.push_str(&optional_fixed(self.error, "magnitude error", (0.0, 9.9), 3, 1)?);
        line.push(' ');
        line.push_str(&optional_count(self.nsta, "nsta", 9999, 4)?);
        line.push(' ');

        line.push_str(&padded(self.author, AUTHOR_LEN, "author")?);
        line.push(' ');
        line.push_str(&padded(self.origin_id, ID_LEN, "origin id")?);
        Ok(line)
    }
}
