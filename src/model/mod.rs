//! In memory seismological data model.
//!
//! An [Origin] owns its [Arrival]s, [StationMagnitude]s and [Magnitude]s.
//! [Pick]s and [Amplitude]s are standalone objects, referenced by ID.
use hifitime::Epoch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod event;
mod magnitude;
mod origin;
mod pick;

pub use event::Event;
pub use magnitude::{Magnitude, StationMagnitude};
pub use origin::{Arrival, Origin, OriginQuality, OriginUncertainty};
pub use pick::{Amplitude, Pick};

/// Authorship of an object
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreationInfo {
    /// Author (person or program)
    pub author: Option<String>,
    /// Agency
    pub agency_id: Option<String>,
    /// Creation time
    pub creation_time: Option<Epoch>,
}

impl CreationInfo {
    pub fn with_author(&self, author: &str) -> Self {
        let mut s = self.clone();
        s.author = Some(author.to_string());
        s
    }
    pub fn with_agency(&self, agency: &str) -> Self {
        let mut s = self.clone();
        s.agency_id = Some(agency.to_string());
        s
    }
    pub fn with_creation_time(&self, t: Epoch) -> Self {
        let mut s = self.clone();
        s.creation_time = Some(t);
        s
    }
}

/// FDSN stream identity
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WaveformStreamId {
    pub network: String,
    pub station: String,
    pub location: String,
    pub channel: String,
}

impl WaveformStreamId {
    /// Builds a new [WaveformStreamId] from its four codes
    pub fn from_nslc(network: &str, station: &str, location: &str, channel: &str) -> Self {
        Self {
            network: network.to_string(),
            station: station.to_string(),
            location: location.to_string(),
            channel: channel.to_string(),
        }
    }
}

impl std::fmt::Display for WaveformStreamId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.network, self.station, self.location, self.channel
        )
    }
}
