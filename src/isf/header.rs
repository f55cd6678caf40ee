//! Message envelope and preamble lines
use super::{padded, LINE_LEN, REGION_LEN};
use crate::diagnostics::Diagnostics;

/// Running length bookkeeping of a preamble line:
/// each field must fit into what previous fields left.
struct Budget {
    used: usize,
}

impl Budget {
    fn new(used: usize) -> Self {
        Self { used }
    }
    fn take(&mut self, field: &str, name: &str, separator: usize) -> Result<(), String> {
        let needed = field.len() + separator;
        if self.used + needed > LINE_LEN {
            Err(format!(
                "{} too long: {} chars, {} left",
                name,
                field.len(),
                LINE_LEN.saturating_sub(self.used + separator)
            ))
        } else {
            self.used += needed;
            Ok(())
        }
    }
}

/// "DATA_TYPE type[:subtype] [format[:subformat]]"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataType<'a> {
    pub data_type: &'a str,
    pub subtype: Option<&'a str>,
    pub data_format: Option<&'a str>,
    pub subformat: Option<&'a str>,
}

impl<'a> DataType<'a> {
    const ENCODER: &'static str = "write_data_type";

    /// Appends the line to `buf`. Returns false when it was not produced.
    pub fn format(&self, buf: &mut String, diag: &mut Diagnostics) -> bool {
        match self.build() {
            Ok(line) => {
                buf.push_str(&line);
                buf.push('\n');
                true
            },
            Err(e) => {
                diag.push(Self::ENCODER, e);
                false
            },
        }
    }

    fn build(&self) -> Result<String, String> {
        if self.data_type.is_empty() {
            return Err("missing data type".to_string());
        }
        let mut line = String::from("DATA_TYPE ");
        let mut budget = Budget::new(line.len());

        budget.take(self.data_type, "data type", 0)?;
        line.push_str(self.data_type);

        if let Some(subtype) = self.subtype {
            budget.take(subtype, "data subtype", 1)?;
            line.push(':');
            line.push_str(subtype);
        }
        if let Some(format) = self.data_format {
            budget.take(format, "data format", 1)?;
            line.push(' ');
            line.push_str(format);
            if let Some(subformat) = self.subformat {
                budget.take(subformat, "data subformat", 1)?;
                line.push(':');
                line.push_str(subformat);
            }
        }
        Ok(line)
    }
}

/// "<keyword> evid region". The keyword is "Event" in IMS1.0
/// and "EVENT" in GSE2.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventId<'a> {
    pub keyword: &'a str,
    pub event_id: &'a str,
    pub region: &'a str,
}

impl<'a> EventId<'a> {
    const ENCODER: &'static str = "write_event_id";

    /// Appends the line to `buf`. Returns false when it was not produced.
    pub fn format(&self, buf: &mut String, diag: &mut Diagnostics) -> bool {
        match self.build() {
            Ok(line) => {
                buf.push_str(&line);
                buf.push('\n');
                true
            },
            Err(e) => {
                diag.push(Self::ENCODER, e);
                false
            },
        }
    }

    fn build(&self) -> Result<String, String> {
        if self.event_id.is_empty() {
            return Err("missing event id".to_string());
        }
        if self.event_id.contains(' ') {
            return Err(format!("event id contains spaces: \"{}\"", self.event_id));
        }
        let evid = padded(self.event_id, super::ID_LEN, "event id")?;
        if self.region.len() > REGION_LEN {
            return Err(format!("region too long: \"{}\"", self.region));
        }
        let mut line = format!("{} ", self.keyword);
        let mut budget = Budget::new(line.len());
        budget.take(&evid, "event id", 0)?;
        budget.take(self.region, "region", 1)?;
        line.push_str(&evid);
        line.push(' ');
        line.push_str(self.region);
        Ok(line.trim_end().to_string())
    }
}

/// "MSG_ID id [source]"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MessageId<'a> {
    pub message_id: &'a str,
    pub source: Option<&'a str>,
}

impl<'a> MessageId<'a> {
    const ENCODER: &'static str = "write_msg_id";

    /// Appends the line to `buf`. Returns false when it was not produced.
    pub fn format(&self, buf: &mut String, diag: &mut Diagnostics) -> bool {
        match self.build() {
            Ok(line) => {
                buf.push_str(&line);
                buf.push('\n');
                true
            },
            Err(e) => {
                diag.push(Self::ENCODER, e);
                false
            },
        }
    }

    fn build(&self) -> Result<String, String> {
        if self.message_id.is_empty() || self.message_id.len() > 20 {
            return Err(format!("bad message id: \"{}\"", self.message_id));
        }
        if self.message_id.contains(' ') {
            return Err(format!("message id contains spaces: \"{}\"", self.message_id));
        }
        match self.source {
            Some(source) if !source.is_empty() => {
                if source.len() > 20 || source.contains(' ') {
                    return Err(format!("bad message source: \"{}\"", source));
                }
                Ok(format!("MSG_ID {} {}", self.message_id, source))
            },
            _ => Ok(format!("MSG_ID {}", self.message_id)),
        }
    }
}

/// Free text comment, " (text)"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comment<'a> {
    pub text: &'a str,
}

impl<'a> Comment<'a> {
    const ENCODER: &'static str = "write_comment";

    /// Appends the line to `buf`. Returns false when it was not produced.
    pub fn format(&self, buf: &mut String, diag: &mut Diagnostics) -> bool {
        if self.text.len() + 3 > LINE_LEN {
            diag.push(
                Self::ENCODER,
                format!("comment too long: {} chars", self.text.len()),
            );
            return false;
        }
        buf.push_str(" (");
        buf.push_str(self.text);
        buf.push_str(")\n");
        true
    }
}

/// "BEGIN <version>" and "MSG_TYPE DATA"
pub fn write_begin(buf: &mut String, version: &str) {
    buf.push_str("BEGIN ");
    buf.push_str(version);
    buf.push('\n');
    buf.push_str("MSG_TYPE DATA\n");
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn data_type_line() {
        let mut buf = String::new();
        let mut diag = Diagnostics::default();
        let line = DataType {
            data_type: "BULLETIN",
            subtype: None,
            data_format: Some("IMS1.0"),
            subformat: Some("short"),
        };
        assert!(line.format(&mut buf, &mut diag));
        assert_eq!(buf, "DATA_TYPE BULLETIN IMS1.0:short\n");
        assert!(diag.is_empty());
    }
    #[test]
    fn data_type_cumulative_length() {
        // each field fits the line on its own, not all together
        let long = "X".repeat(70);
        let mut buf = String::new();
        let mut diag = Diagnostics::default();
        let line = DataType {
            data_type: &long,
            subtype: Some(&long),
            data_format: None,
            subformat: None,
        };
        assert!(!line.format(&mut buf, &mut diag));
        assert!(buf.is_empty());
        assert_eq!(diag.len(), 1);
        assert!(diag.last().unwrap().contains("data subtype"));
    }
    #[test]
    fn event_id_line() {
        let mut buf = String::new();
        let mut diag = Diagnostics::default();
        let line = EventId {
            keyword: "Event",
            event_id: "12345",
            region: "Martinique",
        };
        assert!(line.format(&mut buf, &mut diag));
        assert_eq!(buf, "Event 12345    Martinique\n");

        let line = EventId {
            keyword: "EVENT",
            event_id: "ovsm2024abcd",
            region: "",
        };
        assert!(!line.format(&mut buf, &mut diag));
        assert_eq!(diag.len(), 1);
    }
    #[test]
    fn comments() {
        let mut buf = String::new();
        let mut diag = Diagnostics::default();
        assert!(Comment { text: "reviewed" }.format(&mut buf, &mut diag));
        assert_eq!(buf, " (reviewed)\n");
        let long = "c".repeat(LINE_LEN);
        assert!(!Comment { text: &long }.format(&mut buf, &mut diag));
        assert_eq!(diag.len(), 1);
    }
}
