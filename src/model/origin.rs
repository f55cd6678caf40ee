use hifitime::Epoch;

use super::{CreationInfo, Magnitude, StationMagnitude};
use crate::types::{DefiningFlags, DepthFix, EvaluationMode, EvaluationStatus};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Location quality metrics
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OriginQuality {
    /// RMS of the travel time residuals (s)
    pub standard_error: Option<f64>,
    /// Largest azimuthal gap (deg)
    pub azimuthal_gap: Option<f64>,
    /// Epicentral distance of the closest station (deg)
    pub minimum_distance: Option<f64>,
    /// Epicentral distance of the furthest station (deg)
    pub maximum_distance: Option<f64>,
    /// Number of defining phases
    pub used_phase_count: Option<u32>,
    /// Number of defining stations
    pub used_station_count: Option<u32>,
    /// Ground truth level (GT0, GT5..)
    pub ground_truth_level: Option<String>,
}

/// Horizontal confidence ellipse
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OriginUncertainty {
    /// Semi major axis (km)
    pub max_horizontal: f64,
    /// Semi minor axis (km)
    pub min_horizontal: f64,
    /// Azimuth of the semi major axis (deg, from North)
    pub azimuth: Option<f64>,
}

/// Hypocenter solution
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Origin {
    pub id: String,
    /// Origin time
    pub time: Epoch,
    /// Origin time uncertainty (s)
    pub time_uncertainty: Option<f64>,
    pub time_fixed: bool,
    /// Latitude (ddeg)
    pub latitude: f64,
    /// Latitude uncertainty (km)
    pub latitude_uncertainty: Option<f64>,
    /// Longitude (ddeg)
    pub longitude: f64,
    /// Longitude uncertainty (km)
    pub longitude_uncertainty: Option<f64>,
    pub epicenter_fixed: bool,
    /// Depth (km)
    pub depth: Option<f64>,
    /// Depth uncertainty (km)
    pub depth_uncertainty: Option<f64>,
    pub depth_fix: DepthFix,
    pub quality: OriginQuality,
    pub uncertainty: Option<OriginUncertainty>,
    pub evaluation_mode: Option<EvaluationMode>,
    pub evaluation_status: Option<EvaluationStatus>,
    /// Locator
    pub method_id: Option<String>,
    pub creation_info: CreationInfo,
    pub arrivals: Vec<Arrival>,
    pub station_magnitudes: Vec<StationMagnitude>,
    pub magnitudes: Vec<Magnitude>,
}

impl Origin {
    /// Builds a new [Origin] with no attached records
    pub fn new(id: &str, time: Epoch, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.to_string(),
            time,
            time_uncertainty: None,
            time_fixed: false,
            latitude,
            latitude_uncertainty: None,
            longitude,
            longitude_uncertainty: None,
            epicenter_fixed: false,
            depth: None,
            depth_uncertainty: None,
            depth_fix: DepthFix::default(),
            quality: OriginQuality::default(),
            uncertainty: None,
            evaluation_mode: None,
            evaluation_status: None,
            method_id: None,
            creation_info: CreationInfo::default(),
            arrivals: Vec::new(),
            station_magnitudes: Vec::new(),
            magnitudes: Vec::new(),
        }
    }
    pub fn with_depth(&self, depth: f64) -> Self {
        let mut s = self.clone();
        s.depth = Some(depth);
        s
    }
    pub fn with_depth_uncertainty(&self, uncertainty: f64) -> Self {
        let mut s = self.clone();
        s.depth_uncertainty = Some(uncertainty);
        s
    }
    pub fn with_depth_fix(&self, fix: DepthFix) -> Self {
        let mut s = self.clone();
        s.depth_fix = fix;
        s
    }
    pub fn with_time_uncertainty(&self, uncertainty: f64) -> Self {
        let mut s = self.clone();
        s.time_uncertainty = Some(uncertainty);
        s
    }
    /// Horizontal uncertainties (km)
    pub fn with_horizontal_uncertainty(&self, latitude: f64, longitude: f64) -> Self {
        let mut s = self.clone();
        s.latitude_uncertainty = Some(latitude);
        s.longitude_uncertainty = Some(longitude);
        s
    }
    pub fn with_quality(&self, quality: OriginQuality) -> Self {
        let mut s = self.clone();
        s.quality = quality;
        s
    }
    pub fn with_uncertainty(&self, uncertainty: OriginUncertainty) -> Self {
        let mut s = self.clone();
        s.uncertainty = Some(uncertainty);
        s
    }
    pub fn with_evaluation_mode(&self, mode: EvaluationMode) -> Self {
        let mut s = self.clone();
        s.evaluation_mode = Some(mode);
        s
    }
    pub fn with_evaluation_status(&self, status: EvaluationStatus) -> Self {
        let mut s = self.clone();
        s.evaluation_status = Some(status);
        s
    }
    pub fn with_method(&self, method: &str) -> Self {
        let mut s = self.clone();
        s.method_id = Some(method.to_string());
        s
    }
    pub fn with_creation_info(&self, info: CreationInfo) -> Self {
        let mut s = self.clone();
        s.creation_info = info;
        s
    }
    pub fn with_arrival(&self, arrival: Arrival) -> Self {
        let mut s = self.clone();
        s.arrivals.push(arrival);
        s
    }
    pub fn with_station_magnitude(&self, magnitude: StationMagnitude) -> Self {
        let mut s = self.clone();
        s.station_magnitudes.push(magnitude);
        s
    }
    pub fn with_magnitude(&self, magnitude: Magnitude) -> Self {
        let mut s = self.clone();
        s.magnitudes.push(magnitude);
        s
    }
    /// Horizontal error (km): largest of the two epicentral uncertainties
    pub fn horizontal_error(&self) -> Option<f64> {
        match (self.latitude_uncertainty, self.longitude_uncertainty) {
            (Some(lat), Some(lon)) => Some(lat.max(lon)),
            (Some(lat), None) => Some(lat),
            (None, Some(lon)) => Some(lon),
            (None, None) => self.uncertainty.map(|u| u.max_horizontal),
        }
    }
}

/// Phase interpretation of a [super::Pick] with respect to an [Origin]
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arrival {
    pub pick_id: String,
    /// Phase code
    pub phase: String,
    /// Event to station azimuth (deg)
    pub azimuth: Option<f64>,
    /// Epicentral distance (deg)
    pub distance: Option<f64>,
    /// Travel time residual (s)
    pub time_residual: Option<f64>,
    /// Backazimuth residual (deg)
    pub backazimuth_residual: Option<f64>,
    /// Horizontal slowness residual (s/deg)
    pub horizontal_slowness_residual: Option<f64>,
    /// Takeoff angle (deg)
    pub takeoff_angle: Option<f64>,
    /// Observations used by the locator
    pub defining: DefiningFlags,
    pub weight: Option<f64>,
}

impl Arrival {
    /// Builds a new [Arrival] for given pick and phase
    pub fn new(pick_id: &str, phase: &str) -> Self {
        Self {
            pick_id: pick_id.to_string(),
            phase: phase.to_string(),
            ..Default::default()
        }
    }
    pub fn with_distance(&self, distance: f64) -> Self {
        let mut s = self.clone();
        s.distance = Some(distance);
        s
    }
    pub fn with_azimuth(&self, azimuth: f64) -> Self {
        let mut s = self.clone();
        s.azimuth = Some(azimuth);
        s
    }
    pub fn with_time_residual(&self, residual: f64) -> Self {
        let mut s = self.clone();
        s.time_residual = Some(residual);
        s
    }
    pub fn with_backazimuth_residual(&self, residual: f64) -> Self {
        let mut s = self.clone();
        s.backazimuth_residual = Some(residual);
        s
    }
    pub fn with_slowness_residual(&self, residual: f64) -> Self {
        let mut s = self.clone();
        s.horizontal_slowness_residual = Some(residual);
        s
    }
    pub fn with_takeoff_angle(&self, angle: f64) -> Self {
        let mut s = self.clone();
        s.takeoff_angle = Some(angle);
        s
    }
    pub fn with_defining(&self, flags: DefiningFlags) -> Self {
        let mut s = self.clone();
        s.defining = flags;
        s
    }
    pub fn with_weight(&self, weight: f64) -> Self {
        let mut s = self.clone();
        s.weight = Some(weight);
        s
    }
}
