use super::CreationInfo;
use crate::types::{EventType, EventTypeCertainty};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Groups one or more origins
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Event {
    pub id: String,
    pub preferred_origin_id: Option<String>,
    pub preferred_magnitude_id: Option<String>,
    pub event_type: Option<EventType>,
    pub type_certainty: Option<EventTypeCertainty>,
    /// Region name
    pub description: Option<String>,
    pub creation_info: CreationInfo,
}

impl Event {
    /// Builds a new [Event]
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }
    pub fn with_preferred_origin(&self, origin_id: &str) -> Self {
        let mut s = self.clone();
        s.preferred_origin_id = Some(origin_id.to_string());
        s
    }
    pub fn with_preferred_magnitude(&self, magnitude_id: &str) -> Self {
        let mut s = self.clone();
        s.preferred_magnitude_id = Some(magnitude_id.to_string());
        s
    }
    pub fn with_type(&self, event_type: EventType) -> Self {
        let mut s = self.clone();
        s.event_type = Some(event_type);
        s
    }
    pub fn with_type_certainty(&self, certainty: EventTypeCertainty) -> Self {
        let mut s = self.clone();
        s.type_certainty = Some(certainty);
        s
    }
    pub fn with_description(&self, description: &str) -> Self {
        let mut s = self.clone();
        s.description = Some(description.to_string());
        s
    }
    /// Two letter code exported in bulletins
    pub fn bulletin_code(&self) -> &'static str {
        EventType::bulletin_code(self.event_type)
    }
}
