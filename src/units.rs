//! Unit conversions consumed by the encoders

/// Kilometers per great circle degree (mean Earth radius 6371 km)
pub const KM_PER_DEGREE: f64 = 111.19492664455873;

/// Converts a great circle distance in degrees to kilometers
pub fn deg2km(degrees: f64) -> f64 {
    degrees * KM_PER_DEGREE
}

/// Converts a distance in kilometers to great circle degrees
pub fn km2deg(km: f64) -> f64 {
    km / KM_PER_DEGREE
}

/// Angle expressed in whole degrees and decimal minutes,
/// as used by Hypo71 like formats
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sexagesimal {
    /// Absolute whole degrees
    pub degrees: u16,
    /// Decimal minutes, within [0, 60)
    pub minutes: f64,
    /// True for southern latitudes / western longitudes
    pub negative: bool,
}

impl Sexagesimal {
    /// Splits a decimal angle, carrying minutes that would
    /// round up to 60 once rendered with two decimals.
    pub fn from_ddeg(angle: f64) -> Self {
        let negative = angle < 0.0;
        let abs = angle.abs();
        let mut degrees = abs.trunc() as u16;
        let mut minutes = (abs - abs.trunc()) * 60.0;
        if (minutes * 100.0).round() >= 6000.0 {
            degrees += 1;
            minutes = 0.0;
        }
        Self {
            degrees,
            minutes,
            negative,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn distance_conversions() {
        assert!((deg2km(1.0) - 111.195).abs() < 1.0E-3);
        assert!((km2deg(deg2km(12.5)) - 12.5).abs() < 1.0E-9);
    }
    #[test]
    fn sexagesimal_split() {
        let s = Sexagesimal::from_ddeg(14.609);
        assert_eq!(s.degrees, 14);
        assert!((s.minutes - 36.54).abs() < 1.0E-6);
        assert!(!s.negative);

        let s = Sexagesimal::from_ddeg(-61.125);
        assert_eq!(s.degrees, 61);
        assert!((s.minutes - 7.5).abs() < 1.0E-6);
        assert!(s.negative);

        let s = Sexagesimal::from_ddeg(10.99999);
        assert_eq!(s.degrees, 11);
        assert_eq!(s.minutes, 0.0);
    }
}
