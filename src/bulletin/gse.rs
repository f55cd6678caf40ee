//! GSE2.0 document builder
#[cfg(feature = "log")]
use log::debug;

use super::{
    ims::{analysis_type, location_method},
    Bulletin, Pass,
};
use crate::{
    gse::{GseMagnitude, GseOriginLines, GsePhaseLine, ORIGIN_HEAD, ORIGIN_MAGNITUDES, PHASE_HEAD},
    isf::{write_banner, write_begin, DataType, EventId, MessageId, STOP},
    query::Query,
    types::{Onset, Polarity},
};

/// GSE2.0 version tag
const VERSION: &str = "GSE2.0";

impl<'a, Q: Query + ?Sized> Bulletin<'a, Q> {
    pub(crate) fn gse_bulletin(&self, pass: &mut Pass) -> String {
        let Some(origin) = &self.origin else {
            pass.diagnostics.push(GseOriginLines::ENCODER, "no origin attached");
            return String::new();
        };

        let diag = &mut pass.diagnostics;
        let mut buf = String::with_capacity(4096);

        let author = self.author(origin);
        let origin_id = self.origin_line_id();

        write_begin(&mut buf, VERSION);
        MessageId {
            message_id: &self.message_id(),
            source: Some(self.options.agency.as_str()),
        }
        .format(&mut buf, diag);
        DataType {
            data_type: "BULLETIN",
            subtype: None,
            data_format: Some(VERSION),
            subformat: None,
        }
        .format(&mut buf, diag);

        EventId {
            keyword: "EVENT",
            event_id: &self.event_id(),
            region: &self.region(),
        }
        .format(&mut buf, diag);
        buf.push('\n');

        let magnitudes = self
            .magnitudes(origin)
            .into_iter()
            .map(|m| GseMagnitude {
                magnitude_type: &m.magnitude_type,
                value: m.value,
                error: m.uncertainty,
                nsta: m.station_count,
            })
            .collect::<Vec<_>>();

        for banner in ORIGIN_HEAD {
            write_banner(&mut buf, banner);
        }
        GseOriginLines {
            time: origin.time,
            time_fixed: if origin.time_fixed { 'f' } else { ' ' },
            time_error: origin.time_uncertainty,
            rms: origin.quality.standard_error,
            latitude: Some(origin.latitude),
            longitude: Some(origin.longitude),
            epicenter_fixed: if origin.epicenter_fixed { 'f' } else { ' ' },
            semi_major: origin.uncertainty.map(|u| u.max_horizontal),
            semi_minor: origin.uncertainty.map(|u| u.min_horizontal),
            strike: origin
                .uncertainty
                .and_then(|u| u.azimuth)
                .map(|az| az.round() as i32),
            depth: origin.depth,
            depth_fixed: origin.depth_fix.isf_code(),
            depth_error: origin.depth_uncertainty,
            ndef: origin.quality.used_phase_count,
            nsta: origin.quality.used_station_count,
            gap: origin.quality.azimuthal_gap,
            min_distance: origin.quality.minimum_distance,
            max_distance: origin.quality.maximum_distance,
            magnitudes: &magnitudes,
            analysis_type: analysis_type(origin),
            location_method: location_method(origin),
            event_type: self.event_type_code(),
            author: &author,
            origin_id: &origin_id,
        }
        .format(&mut buf, diag);
        pass.counters.origins += 1;
        pass.counters.magnitudes += magnitudes.len().min(ORIGIN_MAGNITUDES);
        buf.push('\n');

        let records = self.phase_records(origin);
        if !records.is_empty() {
            write_banner(&mut buf, PHASE_HEAD);
            for (index, record) in records.iter().enumerate() {
                let (arrival, pick) = (record.arrival, record.pick);
                let (time_defining, azimuth_defining, slowness_defining) =
                    arrival.defining.isf_codes();
                let phase = if arrival.phase.is_empty() {
                    pick.phase_hint.as_deref().unwrap_or_default()
                } else {
                    arrival.phase.as_str()
                };
                let station_magnitudes = record
                    .station_magnitude
                    .map(|m| vec![(m.magnitude_type.as_str(), m.value)])
                    .unwrap_or_default();
                GsePhaseLine {
                    station: &pick.waveform_id.station,
                    distance: arrival.distance,
                    event_azimuth: arrival.azimuth,
                    phase,
                    time: pick.time,
                    time_residual: arrival.time_residual,
                    azimuth: pick.backazimuth,
                    azimuth_residual: arrival.backazimuth_residual,
                    slowness: pick.horizontal_slowness,
                    slowness_residual: arrival.horizontal_slowness_residual,
                    time_defining,
                    azimuth_defining,
                    slowness_defining,
                    snr: record.amplitude.and_then(|amp| amp.snr),
                    amplitude: record.amplitude.map(|amp| amp.value),
                    period: record.amplitude.and_then(|amp| amp.period),
                    pick_type: pick
                        .evaluation_mode
                        .map(|mode| mode.isf_code())
                        .unwrap_or('_'),
                    motion: Polarity::motion_code(pick.polarity),
                    detection: Onset::detection_code(pick.onset),
                    magnitudes: &station_magnitudes,
                    arrival_id: &self.arrival_id(index),
                }
                .format(&mut buf, diag);
                pass.counters.picks += 1;
            }
            buf.push('\n');
        }

        buf.push_str(STOP);
        buf.push('\n');

        #[cfg(feature = "log")]
        debug!(
            "{}: GSE2.0 bulletin, {} phases, {} diagnostics",
            origin.id,
            pass.counters.picks,
            pass.diagnostics.len()
        );
        buf
    }
}
