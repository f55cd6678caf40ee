//! Closed enumerations shared by the data model and the encoders
use crate::error::ParsingError;
use bitflags::bitflags;
use strum_macros::{Display, EnumString};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bulletin formats the [crate::bulletin::Bulletin] dispatcher knows about
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Format {
    /// GSE2.0 bulletin
    Gse20,
    /// Hypo71 bulletin (not implemented)
    Hypo71,
    /// Hypo2000 bulletin (not implemented)
    Hypo2000,
    /// ISF / IMS1.0 bulletin
    Ims10,
    /// Structured serialization (QuakeML)
    QuakeML,
}

impl Format {
    /// All known formats, in dispatcher order
    pub const ALL: [Format; 5] = [
        Self::Gse20,
        Self::Hypo71,
        Self::Hypo2000,
        Self::Ims10,
        Self::QuakeML,
    ];

    /// Returns true if a builder exists for this format
    pub fn is_implemented(&self) -> bool {
        !matches!(self, Self::Hypo71 | Self::Hypo2000)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Gse20 => write!(f, "GSE2.0"),
            Self::Hypo71 => write!(f, "HYPO71"),
            Self::Hypo2000 => write!(f, "HYPO2000"),
            Self::Ims10 => write!(f, "IMS1.0"),
            Self::QuakeML => write!(f, "QUAKEML"),
        }
    }
}

impl std::str::FromStr for Format {
    type Err = ParsingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        match upper.as_str() {
            "GSE2.0" | "GSE2_0" | "GSE" => Ok(Self::Gse20),
            "HYPO71" => Ok(Self::Hypo71),
            "HYPO2000" => Ok(Self::Hypo2000),
            "IMS1.0" | "IMS1_0" | "ISF" | "IMS" => Ok(Self::Ims10),
            "QUAKEML" | "STRUCTURED" | "XML" => Ok(Self::QuakeML),
            _ => Err(ParsingError::UnknownFormat(s.to_string())),
        }
    }
}

/// How an object was produced
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumString, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EvaluationMode {
    #[strum(to_string = "automatic")]
    Automatic,
    #[strum(to_string = "manual")]
    Manual,
}

impl EvaluationMode {
    /// ISF analysis / pick type code
    pub(crate) fn isf_code(&self) -> char {
        match self {
            Self::Automatic => 'a',
            Self::Manual => 'm',
        }
    }
}

/// Review state of an origin
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumString, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EvaluationStatus {
    #[strum(to_string = "preliminary")]
    Preliminary,
    #[strum(to_string = "confirmed")]
    Confirmed,
    #[strum(to_string = "reviewed")]
    Reviewed,
    #[strum(to_string = "final")]
    Final,
    #[strum(to_string = "rejected")]
    Rejected,
}

/// Event classification, named after QuakeML event types
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumString, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventType {
    #[strum(to_string = "earthquake")]
    Earthquake,
    #[strum(to_string = "induced or triggered event")]
    InducedEarthquake,
    #[strum(to_string = "chemical explosion")]
    ChemicalExplosion,
    #[strum(to_string = "nuclear explosion")]
    NuclearExplosion,
    #[strum(to_string = "landslide")]
    Landslide,
    #[strum(to_string = "rockslide")]
    Rockslide,
    #[strum(to_string = "quarry blast")]
    QuarryBlast,
    #[strum(to_string = "explosion")]
    Explosion,
    #[strum(to_string = "volcanic eruption")]
    VolcanicEruption,
    #[strum(to_string = "not existing")]
    NotExisting,
    #[strum(to_string = "other event")]
    Other,
}

impl EventType {
    /// Two letter code exported in bulletins.
    /// Anything that is not in the table below, including
    /// an unset type, is reported as unknown ("uk").
    pub fn bulletin_code(event_type: Option<Self>) -> &'static str {
        match event_type {
            Some(Self::Earthquake) => "ke",
            Some(Self::InducedEarthquake) => "si",
            Some(Self::ChemicalExplosion) => "kh",
            Some(Self::NuclearExplosion) => "kn",
            Some(Self::Landslide) => "ls",
            Some(Self::Rockslide) => "kr",
            _ => "uk",
        }
    }
}

/// Confidence in the [EventType]
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumString, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventTypeCertainty {
    #[strum(to_string = "known")]
    Known,
    #[strum(to_string = "suspected")]
    Suspected,
}

/// How the depth of an origin was obtained
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DepthFix {
    /// Free depth solution
    #[default]
    Free,
    /// Depth fixed by the analyst or the locator
    Fixed,
    /// Depth constrained by depth phases
    DepthPhases,
}

impl DepthFix {
    pub(crate) fn isf_code(&self) -> char {
        match self {
            Self::Free => ' ',
            Self::Fixed => 'f',
            Self::DepthPhases => 'd',
        }
    }
}

/// First motion polarity of a pick
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumString, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Polarity {
    #[strum(to_string = "positive")]
    Positive,
    #[strum(to_string = "negative")]
    Negative,
    #[strum(to_string = "undecidable")]
    Undecidable,
}

impl Polarity {
    /// Short period motion: compression / dilatation
    pub(crate) fn motion_code(polarity: Option<Self>) -> char {
        match polarity {
            Some(Self::Positive) => 'c',
            Some(Self::Negative) => 'd',
            _ => '_',
        }
    }
}

/// Onset character of a pick
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumString, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Onset {
    #[strum(to_string = "impulsive")]
    Impulsive,
    #[strum(to_string = "emergent")]
    Emergent,
    #[strum(to_string = "questionable")]
    Questionable,
}

impl Onset {
    pub(crate) fn detection_code(onset: Option<Self>) -> char {
        match onset {
            Some(Self::Impulsive) => 'i',
            Some(Self::Emergent) => 'e',
            Some(Self::Questionable) => 'q',
            None => '_',
        }
    }
}

bitflags! {
    /// Observations of an arrival used by the locator
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct DefiningFlags: u8 {
        const TIME = 0x01;
        const AZIMUTH = 0x02;
        const SLOWNESS = 0x04;
    }
}

impl DefiningFlags {
    /// Time, azimuth and slowness defining characters
    pub(crate) fn isf_codes(&self) -> (char, char, char) {
        (
            if self.contains(Self::TIME) { 'T' } else { '_' },
            if self.contains(Self::AZIMUTH) { 'A' } else { '_' },
            if self.contains(Self::SLOWNESS) { 'S' } else { '_' },
        )
    }
}
