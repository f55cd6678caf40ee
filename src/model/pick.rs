use hifitime::Epoch;

use super::WaveformStreamId;
use crate::types::{EvaluationMode, Onset, Polarity};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Phase detection at one station
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pick {
    pub id: String,
    pub waveform_id: WaveformStreamId,
    pub phase_hint: Option<String>,
    /// Arrival time
    pub time: Epoch,
    pub evaluation_mode: Option<EvaluationMode>,
    /// Horizontal slowness (s/deg)
    pub horizontal_slowness: Option<f64>,
    /// Observed backazimuth (deg)
    pub backazimuth: Option<f64>,
    pub polarity: Option<Polarity>,
    pub onset: Option<Onset>,
}

impl Pick {
    /// Builds a new [Pick]
    pub fn new(id: &str, waveform_id: WaveformStreamId, time: Epoch) -> Self {
        Self {
            id: id.to_string(),
            waveform_id,
            phase_hint: None,
            time,
            evaluation_mode: None,
            horizontal_slowness: None,
            backazimuth: None,
            polarity: None,
            onset: None,
        }
    }
    pub fn with_phase_hint(&self, phase: &str) -> Self {
        let mut s = self.clone();
        s.phase_hint = Some(phase.to_string());
        s
    }
    pub fn with_evaluation_mode(&self, mode: EvaluationMode) -> Self {
        let mut s = self.clone();
        s.evaluation_mode = Some(mode);
        s
    }
    pub fn with_horizontal_slowness(&self, slowness: f64) -> Self {
        let mut s = self.clone();
        s.horizontal_slowness = Some(slowness);
        s
    }
    pub fn with_backazimuth(&self, backazimuth: f64) -> Self {
        let mut s = self.clone();
        s.backazimuth = Some(backazimuth);
        s
    }
    pub fn with_polarity(&self, polarity: Polarity) -> Self {
        let mut s = self.clone();
        s.polarity = Some(polarity);
        s
    }
    pub fn with_onset(&self, onset: Onset) -> Self {
        let mut s = self.clone();
        s.onset = Some(onset);
        s
    }
}

/// Amplitude measured on the waveform of a [Pick]
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Amplitude {
    pub id: String,
    pub pick_id: Option<String>,
    pub amplitude_type: Option<String>,
    /// Amplitude (nm)
    pub value: f64,
    /// Period (s)
    pub period: Option<f64>,
    /// Signal to noise ratio
    pub snr: Option<f64>,
}

impl Amplitude {
    /// Builds a new [Amplitude] measured on given pick
    pub fn new(id: &str, pick_id: &str, value: f64) -> Self {
        Self {
            id: id.to_string(),
            pick_id: Some(pick_id.to_string()),
            value,
            ..Default::default()
        }
    }
    pub fn with_type(&self, amplitude_type: &str) -> Self {
        let mut s = self.clone();
        s.amplitude_type = Some(amplitude_type.to_string());
        s
    }
    pub fn with_period(&self, period: f64) -> Self {
        let mut s = self.clone();
        s.period = Some(period);
        s
    }
    pub fn with_snr(&self, snr: f64) -> Self {
        let mut s = self.clone();
        s.snr = Some(snr);
        s
    }
}
