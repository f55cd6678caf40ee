//! Export options
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hypo::SEISMIC_CODE_LEN;

/// Record identifier written at the end of a Hypo2000 summary line
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HypoRecordId {
    /// Synthesized by the [crate::ids::IdGenerator]
    #[default]
    Generated,
    /// Public ID of the origin
    OriginId,
}

/// Options of one [crate::bulletin::Bulletin]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExportOptions {
    /// Author column. Falls back to the origin agency, then author.
    pub author: Option<String>,
    /// Message source (MSG_ID)
    pub agency: String,
    /// Region name override for the event line
    pub region: Option<String>,
    /// IMS1.0 data subformat
    pub subformat: String,
    /// Hypo2000 seismic code
    pub hypo_seismic_code: String,
    /// Hypo2000 record identifier policy
    pub hypo_record_id: HypoRecordId,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            author: None,
            agency: "IPGP".to_string(),
            region: None,
            subformat: "short".to_string(),
            hypo_seismic_code: " ".repeat(SEISMIC_CODE_LEN),
            hypo_record_id: HypoRecordId::default(),
        }
    }
}

impl ExportOptions {
    pub fn with_author(&self, author: &str) -> Self {
        let mut s = self.clone();
        s.author = Some(author.to_string());
        s
    }
    pub fn with_agency(&self, agency: &str) -> Self {
        let mut s = self.clone();
        s.agency = agency.to_string();
        s
    }
    pub fn with_region(&self, region: &str) -> Self {
        let mut s = self.clone();
        s.region = Some(region.to_string());
        s
    }
    pub fn with_subformat(&self, subformat: &str) -> Self {
        let mut s = self.clone();
        s.subformat = subformat.to_string();
        s
    }
    pub fn with_seismic_code(&self, code: &str) -> Self {
        let mut s = self.clone();
        s.hypo_seismic_code = code.to_string();
        s
    }
    pub fn with_hypo_record_id(&self, policy: HypoRecordId) -> Self {
        let mut s = self.clone();
        s.hypo_record_id = policy;
        s
    }
}
