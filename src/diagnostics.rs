//! Append only log of encoding diagnostics
#[cfg(feature = "log")]
use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Diagnostics] gathers the human readable messages produced
/// during one encoding pass. Encoders never fail: every rejected
/// or degraded field ends up here, prefixed by the encoder name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics {
    entries: Vec<String>,
}

impl Diagnostics {
    /// Appends one message on behalf of given encoder
    pub fn push(&mut self, encoder: &str, message: impl AsRef<str>) {
        let entry = format!("{}: {}", encoder, message.as_ref());
        #[cfg(feature = "log")]
        warn!("{}", entry);
        self.entries.push(entry);
    }
    /// Number of messages
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    /// True when nothing was reported
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// Iterates messages in emission order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }
    /// Last reported message
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(|s| s.as_str())
    }
    /// Appends all messages of `other`
    pub fn merge(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for entry in self.entries.iter() {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}
