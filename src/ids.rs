//! Identifiers of exported records.
//!
//! Bulletin formats carry short fixed width IDs that stored objects
//! (with their long public IDs) cannot provide. The assembler asks an
//! [IdGenerator] for them, keyed by record kind and index, so that
//! exporting the same origin twice yields the same text.

/// Kind of record an identifier is generated for
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Message envelope (MSG_ID)
    Message,
    /// Event line
    Event,
    /// Origin and network magnitude lines
    Origin,
    /// Phase lines
    Arrival,
    /// Hypo2000 summary line
    Summary,
}

/// Identifier strategy
pub trait IdGenerator {
    /// Identifier of the `index`-th record of given kind,
    /// at most `width` characters long
    fn generate(&self, kind: RecordKind, index: usize, width: usize) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn(RecordKind, usize, usize) -> String,
{
    fn generate(&self, kind: RecordKind, index: usize, width: usize) -> String {
        self(kind, index, width)
    }
}

/// Default strategy: 1-based counters, with an optional prefix
/// for messages and summary lines
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SequentialIds {
    prefix: String,
}

impl SequentialIds {
    /// Builds a generator that prefixes message and summary IDs
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self, kind: RecordKind, index: usize, width: usize) -> String {
        let id = match kind {
            RecordKind::Message | RecordKind::Summary => format!("{}{}", self.prefix, index + 1),
            _ => format!("{}", index + 1),
        };
        id.chars().take(width).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn sequential() {
        let ids = SequentialIds::default();
        assert_eq!(ids.generate(RecordKind::Arrival, 0, 8), "1");
        assert_eq!(ids.generate(RecordKind::Arrival, 41, 8), "42");
        let ids = SequentialIds::with_prefix("OVSM");
        assert_eq!(ids.generate(RecordKind::Message, 0, 20), "OVSM1");
        assert_eq!(ids.generate(RecordKind::Origin, 0, 8), "1");
    }
    #[test]
    fn closures() {
        let ids = |kind: RecordKind, index: usize, _: usize| format!("{:?}{}", kind, index);
        assert_eq!(ids.generate(RecordKind::Event, 3, 8), "Event3");
    }
}
