use super::{CreationInfo, WaveformStreamId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Network magnitude
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Magnitude {
    pub id: String,
    pub origin_id: Option<String>,
    /// Magnitude type (Ml, Md, mb..)
    pub magnitude_type: String,
    pub value: f64,
    pub uncertainty: Option<f64>,
    /// Number of contributing stations
    pub station_count: Option<u32>,
    pub creation_info: CreationInfo,
}

impl Magnitude {
    /// Builds a new [Magnitude]
    pub fn new(id: &str, magnitude_type: &str, value: f64) -> Self {
        Self {
            id: id.to_string(),
            magnitude_type: magnitude_type.to_string(),
            value,
            ..Default::default()
        }
    }
    pub fn with_origin(&self, origin_id: &str) -> Self {
        let mut s = self.clone();
        s.origin_id = Some(origin_id.to_string());
        s
    }
    pub fn with_uncertainty(&self, uncertainty: f64) -> Self {
        let mut s = self.clone();
        s.uncertainty = Some(uncertainty);
        s
    }
    pub fn with_station_count(&self, count: u32) -> Self {
        let mut s = self.clone();
        s.station_count = Some(count);
        s
    }
}

/// Magnitude estimated from one station [super::Amplitude]
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StationMagnitude {
    pub id: String,
    pub origin_id: Option<String>,
    pub amplitude_id: Option<String>,
    pub magnitude_type: String,
    pub value: f64,
    pub waveform_id: Option<WaveformStreamId>,
}

impl StationMagnitude {
    /// Builds a new [StationMagnitude] derived from given amplitude
    pub fn new(id: &str, amplitude_id: &str, magnitude_type: &str, value: f64) -> Self {
        Self {
            id: id.to_string(),
            amplitude_id: Some(amplitude_id.to_string()),
            magnitude_type: magnitude_type.to_string(),
            value,
            ..Default::default()
        }
    }
    pub fn with_waveform_id(&self, waveform_id: WaveformStreamId) -> Self {
        let mut s = self.clone();
        s.waveform_id = Some(waveform_id);
        s
    }
}
