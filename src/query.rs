//! Data access collaborator.
//!
//! The [crate::bulletin::Bulletin] assembler never reads a database
//! by itself: it goes through a [Query] implementation.
use std::collections::HashMap;

use crate::{
    error::QueryError,
    model::{Amplitude, Arrival, Event, Magnitude, Origin, Pick, StationMagnitude},
};

/// Read operations the bulletin assembler consumes
pub trait Query {
    /// Preferred origin of given event
    fn preferred_origin(&self, event: &Event) -> Result<Option<Origin>, QueryError>;
    /// Preferred magnitude of given event
    fn preferred_magnitude(&self, event: &Event) -> Result<Option<Magnitude>, QueryError>;
    /// Loads the arrivals of given origin.
    /// No-op when the origin already has arrivals.
    fn load_arrivals(&self, origin: &mut Origin) -> Result<(), QueryError>;
    /// Loads the station magnitudes of given origin.
    /// No-op when the origin already has station magnitudes.
    fn load_station_magnitudes(&self, origin: &mut Origin) -> Result<(), QueryError>;
    /// Loads the network magnitudes of given origin.
    /// No-op when the origin already has magnitudes.
    fn load_magnitudes(&self, origin: &mut Origin) -> Result<(), QueryError>;
    /// Picks referenced by the arrivals of given origin.
    /// May contain fewer entries than the origin has arrivals.
    fn picks(&self, origin: &Origin) -> Result<Vec<Pick>, QueryError>;
    /// Amplitudes measured on the picks of given origin
    fn amplitudes(&self, origin: &Origin) -> Result<Vec<Amplitude>, QueryError>;
}

/// In memory [Query] implementation
#[derive(Debug, Default, Clone)]
pub struct MemoryQuery {
    origins: HashMap<String, Origin>,
    magnitudes: HashMap<String, Magnitude>,
    arrivals: HashMap<String, Vec<Arrival>>,
    station_magnitudes: HashMap<String, Vec<StationMagnitude>>,
    picks: HashMap<String, Pick>,
    amplitudes: Vec<Amplitude>,
}

impl MemoryQuery {
    /// Stores an origin, along with its attached records
    pub fn with_origin(&self, origin: Origin) -> Self {
        let mut s = self.clone();
        for magnitude in origin.magnitudes.iter() {
            s.magnitudes.insert(magnitude.id.clone(), magnitude.clone());
        }
        s.origins.insert(origin.id.clone(), origin);
        s
    }
    /// Stores arrivals, loaded on demand for given origin
    pub fn with_arrivals(&self, origin_id: &str, arrivals: Vec<Arrival>) -> Self {
        let mut s = self.clone();
        s.arrivals.insert(origin_id.to_string(), arrivals);
        s
    }
    /// Stores station magnitudes, loaded on demand for given origin
    pub fn with_station_magnitudes(&self, origin_id: &str, stamags: Vec<StationMagnitude>) -> Self {
        let mut s = self.clone();
        s.station_magnitudes.insert(origin_id.to_string(), stamags);
        s
    }
    /// Stores a network magnitude
    pub fn with_magnitude(&self, magnitude: Magnitude) -> Self {
        let mut s = self.clone();
        s.magnitudes.insert(magnitude.id.clone(), magnitude);
        s
    }
    pub fn with_pick(&self, pick: Pick) -> Self {
        let mut s = self.clone();
        s.picks.insert(pick.id.clone(), pick);
        s
    }
    pub fn with_amplitude(&self, amplitude: Amplitude) -> Self {
        let mut s = self.clone();
        s.amplitudes.push(amplitude);
        s
    }
}

impl Query for MemoryQuery {
    fn preferred_origin(&self, event: &Event) -> Result<Option<Origin>, QueryError> {
        match &event.preferred_origin_id {
            Some(id) => Ok(self.origins.get(id).cloned()),
            None => Ok(None),
        }
    }
    fn preferred_magnitude(&self, event: &Event) -> Result<Option<Magnitude>, QueryError> {
        match &event.preferred_magnitude_id {
            Some(id) => Ok(self.magnitudes.get(id).cloned()),
            None => Ok(None),
        }
    }
    fn load_arrivals(&self, origin: &mut Origin) -> Result<(), QueryError> {
        if origin.arrivals.is_empty() {
            if let Some(arrivals) = self.arrivals.get(&origin.id) {
                origin.arrivals = arrivals.clone();
            }
        }
        Ok(())
    }
    fn load_station_magnitudes(&self, origin: &mut Origin) -> Result<(), QueryError> {
        if origin.station_magnitudes.is_empty() {
            if let Some(stamags) = self.station_magnitudes.get(&origin.id) {
                origin.station_magnitudes = stamags.clone();
            }
        }
        Ok(())
    }
    fn load_magnitudes(&self, origin: &mut Origin) -> Result<(), QueryError> {
        if origin.magnitudes.is_empty() {
            let mut magnitudes = self
                .magnitudes
                .values()
                .filter(|m| m.origin_id.as_deref() == Some(origin.id.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            magnitudes.sort_by(|a, b| a.id.cmp(&b.id));
            origin.magnitudes = magnitudes;
        }
        Ok(())
    }
    fn picks(&self, origin: &Origin) -> Result<Vec<Pick>, QueryError> {
        Ok(origin
            .arrivals
            .iter()
            .filter_map(|arrival| self.picks.get(&arrival.pick_id).cloned())
            .collect())
    }
    fn amplitudes(&self, origin: &Origin) -> Result<Vec<Amplitude>, QueryError> {
        Ok(self
            .amplitudes
            .iter()
            .filter(|amp| {
                origin
                    .arrivals
                    .iter()
                    .any(|arrival| amp.pick_id.as_deref() == Some(arrival.pick_id.as_str()))
            })
            .cloned()
            .collect())
    }
}
