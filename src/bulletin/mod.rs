//! Bulletin assembler.
//!
//! A [Bulletin] is bound to one origin (possibly resolved from an event),
//! attaches the records it needs through a [Query] collaborator, then
//! drives the line encoders to produce complete documents.
use std::{fs::File, io::Write, path::Path};

use itertools::Itertools;

#[cfg(feature = "log")]
use log::{debug, error};

use crate::{
    config::{ExportOptions, HypoRecordId},
    diagnostics::Diagnostics,
    error::FormattingError,
    hypo::SummaryLine,
    ids::{IdGenerator, RecordKind, SequentialIds},
    isf::ID_LEN,
    model::{Amplitude, Arrival, Event, Magnitude, Origin, Pick, StationMagnitude},
    query::Query,
    types::{EventType, Format},
    units::deg2km,
    writer::BufferedWriter,
};

mod gse;
mod ims;
mod quakeml;

/// Records processed during one export
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Counters {
    /// Origins processed
    pub origins: usize,
    /// Picks resolved and processed
    pub picks: usize,
    /// Network magnitudes processed
    pub magnitudes: usize,
}

/// Content of an export
#[derive(Debug, Clone, PartialEq)]
pub enum ExportBody {
    /// Bulletin document
    Text(String),
    /// Format is known but no builder exists for it
    NotImplemented(Format),
    /// Requested format name is not known
    Unrecognized(String),
}

impl ExportBody {
    /// Bulletin document, if one was produced
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExportBody {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::NotImplemented(_) => write!(f, "Not implemented yet"),
            Self::Unrecognized(name) => write!(f, "Unknown bulletin format: {}", name),
        }
    }
}

/// Outcome of one export: the document and what was reported
/// while producing it
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub body: ExportBody,
    pub diagnostics: Diagnostics,
    pub counters: Counters,
}

impl Report {
    /// Bulletin document, if one was produced
    pub fn text(&self) -> Option<&str> {
        self.body.text()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.body)
    }
}

/// State of one encoding pass
#[derive(Debug, Default)]
pub(crate) struct Pass {
    pub diagnostics: Diagnostics,
    pub counters: Counters,
}

/// One arrival with its resolved records
pub(crate) struct PhaseRecord<'b> {
    pub arrival: &'b Arrival,
    pub pick: &'b Pick,
    pub amplitude: Option<&'b Amplitude>,
    pub station_magnitude: Option<&'b StationMagnitude>,
}

/// Bulletin assembler bound to one origin
pub struct Bulletin<'a, Q: Query + ?Sized> {
    query: &'a Q,
    event: Option<Event>,
    origin: Option<Origin>,
    preferred_magnitude: Option<Magnitude>,
    picks: Vec<Pick>,
    amplitudes: Vec<Amplitude>,
    station_magnitudes: Vec<StationMagnitude>,
    options: ExportOptions,
    ids: Box<dyn IdGenerator + 'a>,
    counters: Counters,
    diagnostics: Diagnostics,
}

impl<'a, Q: Query + ?Sized> Bulletin<'a, Q> {
    /// Builds a [Bulletin] bound to given origin
    pub fn new(origin: &Origin, query: &'a Q) -> Self {
        Self {
            query,
            event: None,
            origin: Some(origin.clone()),
            preferred_magnitude: None,
            picks: Vec::new(),
            amplitudes: Vec::new(),
            station_magnitudes: Vec::new(),
            options: ExportOptions::default(),
            ids: Box::new(SequentialIds::default()),
            counters: Counters::default(),
            diagnostics: Diagnostics::default(),
        }
    }

    /// Builds a [Bulletin] bound to the preferred origin of given event.
    /// The origin is resolved by [Self::attach_records].
    pub fn from_event(event: &Event, query: &'a Q) -> Self {
        Self {
            query,
            event: Some(event.clone()),
            origin: None,
            preferred_magnitude: None,
            picks: Vec::new(),
            amplitudes: Vec::new(),
            station_magnitudes: Vec::new(),
            options: ExportOptions::default(),
            ids: Box::new(SequentialIds::default()),
            counters: Counters::default(),
            diagnostics: Diagnostics::default(),
        }
    }

    /// Associates the event the origin belongs to
    pub fn with_event(mut self, event: &Event) -> Self {
        self.event = Some(event.clone());
        self
    }

    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the default [SequentialIds] strategy
    pub fn with_id_generator<G: IdGenerator + 'a>(mut self, ids: G) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Author written in every ISF / GSE line
    pub fn set_author(&mut self, author: &str) {
        self.options.author = Some(author.to_string());
    }

    /// Counters of the last export
    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Diagnostics of the last call
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Bound origin, once resolved
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    /// Preferred magnitude, once resolved
    pub fn preferred_magnitude(&self) -> Option<&Magnitude> {
        self.preferred_magnitude.as_ref()
    }

    /// Resolves the origin and its magnitude, loads missing arrivals,
    /// station magnitudes and magnitudes, then refreshes the pick,
    /// amplitude and station magnitude caches.
    /// Returns false when no origin could be resolved.
    pub fn attach_records(&mut self) -> bool {
        self.diagnostics.clear();
        self.picks.clear();
        self.amplitudes.clear();
        self.station_magnitudes.clear();
        self.preferred_magnitude = None;

        let query = self.query;

        if self.origin.is_none() {
            let Some(event) = &self.event else {
                self.diagnostics.push("attach_records", "no origin nor event");
                return false;
            };
            match query.preferred_origin(event) {
                Ok(Some(origin)) => self.origin = Some(origin),
                Ok(None) => {
                    self.diagnostics.push(
                        "attach_records",
                        format!("event {} has no preferred origin", event.id),
                    );
                    return false;
                },
                Err(e) => {
                    #[cfg(feature = "log")]
                    error!("preferred origin of {}: {}", event.id, e);
                    self.diagnostics.push("attach_records", e.to_string());
                    return false;
                },
            }
        }

        let Some(origin) = self.origin.as_mut() else {
            return false;
        };

        let mut failures = Vec::new();
        if origin.arrivals.is_empty() {
            if let Err(e) = query.load_arrivals(origin) {
                failures.push(format!("arrivals: {}", e));
            }
        }
        if origin.station_magnitudes.is_empty() {
            if let Err(e) = query.load_station_magnitudes(origin) {
                failures.push(format!("station magnitudes: {}", e));
            }
        }
        if origin.magnitudes.is_empty() {
            if let Err(e) = query.load_magnitudes(origin) {
                failures.push(format!("magnitudes: {}", e));
            }
        }

        let mut preferred = None;
        if let Some(event) = &self.event {
            match query.preferred_magnitude(event) {
                Ok(magnitude) => preferred = magnitude,
                Err(e) => failures.push(format!("preferred magnitude: {}", e)),
            }
        }
        self.preferred_magnitude = preferred.or_else(|| origin.magnitudes.first().cloned());

        match query.picks(origin) {
            Ok(picks) => self.picks = picks,
            Err(e) => failures.push(format!("picks: {}", e)),
        }
        match query.amplitudes(origin) {
            Ok(amplitudes) => self.amplitudes = amplitudes,
            Err(e) => failures.push(format!("amplitudes: {}", e)),
        }
        self.station_magnitudes = origin.station_magnitudes.clone();

        for failure in failures {
            #[cfg(feature = "log")]
            error!("{}: {}", origin.id, failure);
            self.diagnostics.push("attach_records", failure);
        }

        #[cfg(feature = "log")]
        debug!(
            "{}: {} arrivals, {} picks, {} amplitudes, {} station magnitudes, {} magnitudes",
            origin.id,
            origin.arrivals.len(),
            self.picks.len(),
            self.amplitudes.len(),
            self.station_magnitudes.len(),
            origin.magnitudes.len()
        );
        true
    }

    /// Produces the bulletin in given format.
    /// Counters and diagnostics are reset on every call.
    pub fn get_bulletin(&mut self, format: Format) -> Report {
        let mut pass = Pass::default();
        let body = match format {
            Format::Ims10 => ExportBody::Text(self.ims_bulletin(&mut pass)),
            Format::Gse20 => ExportBody::Text(self.gse_bulletin(&mut pass)),
            Format::QuakeML => ExportBody::Text(self.quakeml_bulletin(&mut pass)),
            Format::Hypo71 | Format::Hypo2000 => ExportBody::NotImplemented(format),
        };
        self.finish(body, pass)
    }

    /// [Self::get_bulletin] from a format name
    pub fn bulletin_by_name(&mut self, name: &str) -> Report {
        match name.parse::<Format>() {
            Ok(format) => self.get_bulletin(format),
            Err(_) => self.finish(ExportBody::Unrecognized(name.to_string()), Pass::default()),
        }
    }

    /// Hypo2000 (H71SUMM2K) summary line of the bound origin,
    /// using the configured seismic code and record ID policy.
    pub fn hypo2000_summary(&mut self) -> Report {
        let mut pass = Pass::default();
        let line = match &self.origin {
            Some(origin) => {
                pass.counters.origins += 1;
                let record_id = match self.options.hypo_record_id {
                    HypoRecordId::Generated => {
                        self.ids.generate(RecordKind::Summary, 0, usize::MAX)
                    },
                    HypoRecordId::OriginId => origin.id.clone(),
                };
                let magnitude = self.preferred_magnitude.as_ref();
                if magnitude.is_some() {
                    pass.counters.magnitudes += 1;
                }
                SummaryLine {
                    time: origin.time,
                    latitude: origin.latitude,
                    longitude: origin.longitude,
                    depth: origin.depth,
                    magnitude_type: magnitude.map(|m| m.magnitude_type.as_str()),
                    magnitude: magnitude.map(|m| m.value),
                    phase_count: origin.quality.used_phase_count,
                    gap: origin.quality.azimuthal_gap,
                    min_distance: origin.quality.minimum_distance.map(deg2km),
                    rms: origin.quality.standard_error,
                    horizontal_error: origin.horizontal_error(),
                    vertical_error: origin.depth_uncertainty,
                    seismic_code: &self.options.hypo_seismic_code,
                    record_id: &record_id,
                }
                .format(&mut pass.diagnostics)
            },
            None => {
                pass.diagnostics.push(SummaryLine::ENCODER, "no origin attached");
                String::new()
            },
        };
        self.finish(ExportBody::Text(line), pass)
    }

    /// Writes the bulletin in given format to a file.
    /// Paths ending with ".gz" are gzip compressed when the
    /// flate2 feature is enabled.
    pub fn to_file<P: AsRef<Path>>(
        &mut self,
        format: Format,
        path: P,
    ) -> Result<Report, FormattingError> {
        if self.origin.is_none() {
            return Err(FormattingError::NoOrigin);
        }
        let report = self.get_bulletin(format);
        let text = match &report.body {
            ExportBody::Text(text) => text,
            _ => return Err(FormattingError::NotImplemented(format)),
        };

        let path = path.as_ref();
        let fd = File::create(path)?;

        #[cfg(feature = "flate2")]
        let mut writer = if path.extension().map_or(false, |ext| ext == "gz") {
            BufferedWriter::gzip(fd, 6)
        } else {
            BufferedWriter::plain(fd)
        };

        #[cfg(not(feature = "flate2"))]
        let mut writer = BufferedWriter::plain(fd);

        writer.write_all(text.as_bytes())?;
        writer.finish()?;
        Ok(report)
    }

    fn finish(&mut self, body: ExportBody, pass: Pass) -> Report {
        self.counters = pass.counters;
        self.diagnostics = pass.diagnostics;
        Report {
            body,
            diagnostics: self.diagnostics.clone(),
            counters: self.counters,
        }
    }

    /// Author column: configured author, then origin agency, then origin author
    pub(crate) fn author(&self, origin: &Origin) -> String {
        self.options
            .author
            .clone()
            .or_else(|| origin.creation_info.agency_id.clone())
            .or_else(|| origin.creation_info.author.clone())
            .unwrap_or_default()
    }

    /// Two letter event type code
    pub(crate) fn event_type_code(&self) -> &'static str {
        EventType::bulletin_code(self.event.as_ref().and_then(|e| e.event_type))
    }

    /// Event identifier: public ID when it fits the column, generated otherwise
    pub(crate) fn event_id(&self) -> String {
        match &self.event {
            Some(event)
                if !event.id.is_empty() && event.id.len() <= ID_LEN && !event.id.contains(' ') =>
            {
                event.id.clone()
            },
            _ => self.ids.generate(RecordKind::Event, 0, ID_LEN),
        }
    }

    /// Region name of the event line
    pub(crate) fn region(&self) -> String {
        self.options
            .region
            .clone()
            .or_else(|| self.event.as_ref().and_then(|e| e.description.clone()))
            .unwrap_or_default()
    }

    pub(crate) fn message_id(&self) -> String {
        self.ids.generate(RecordKind::Message, 0, 20)
    }

    pub(crate) fn origin_line_id(&self) -> String {
        self.ids.generate(RecordKind::Origin, 0, ID_LEN)
    }

    pub(crate) fn arrival_id(&self, index: usize) -> String {
        self.ids.generate(RecordKind::Arrival, index, ID_LEN)
    }

    /// Magnitudes of the origin, preferred one first
    pub(crate) fn magnitudes<'b>(&'b self, origin: &'b Origin) -> Vec<&'b Magnitude> {
        let preferred = self.preferred_magnitude.as_ref().map(|m| m.id.as_str());
        let mut magnitudes = origin.magnitudes.iter().collect::<Vec<_>>();
        if let Some(preferred) = preferred {
            if let Some(pos) = magnitudes.iter().position(|m| m.id == preferred) {
                let m = magnitudes.remove(pos);
                magnitudes.insert(0, m);
            }
        }
        magnitudes
    }

    /// Arrivals with their resolved pick, amplitude and station magnitude,
    /// ordered by distance then arrival time.
    /// Arrivals whose pick is unknown are left out, silently.
    pub(crate) fn phase_records<'b>(&'b self, origin: &'b Origin) -> Vec<PhaseRecord<'b>> {
        origin
            .arrivals
            .iter()
            .filter_map(|arrival| {
                let pick = self.picks.iter().find(|p| p.id == arrival.pick_id)?;
                let amplitude = self
                    .amplitudes
                    .iter()
                    .find(|a| a.pick_id.as_deref() == Some(pick.id.as_str()));
                let station_magnitude = amplitude.and_then(|amp| {
                    self.station_magnitudes
                        .iter()
                        .find(|m| m.amplitude_id.as_deref() == Some(amp.id.as_str()))
                });
                Some(PhaseRecord {
                    arrival,
                    pick,
                    amplitude,
                    station_magnitude,
                })
            })
            .sorted_by(|a, b| {
                let da = a.arrival.distance.unwrap_or(f64::MAX);
                let db = b.arrival.distance.unwrap_or(f64::MAX);
                da.total_cmp(&db).then_with(|| a.pick.time.cmp(&b.pick.time))
            })
            .collect()
    }
}
