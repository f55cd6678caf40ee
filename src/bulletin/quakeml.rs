//! QuakeML 1.2 document builder
use hifitime::Epoch;

#[cfg(feature = "log")]
use log::debug;

use super::{Bulletin, Pass};
use crate::{
    model::{Magnitude, Origin, Pick, StationMagnitude, WaveformStreamId},
    query::Query,
    types::DepthFix,
};

const NAMESPACE_BED: &str = "http://quakeml.org/xmlns/bed/1.2";
const NAMESPACE_QUAKEML: &str = "http://quakeml.org/xmlns/quakeml/1.2";

/// Escapes XML special characters
pub(crate) fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// "yyyy-mm-ddThh:mm:ss.ffffffZ"
pub(crate) fn iso8601(epoch: Epoch) -> String {
    let (y, m, d, hh, mm, ss, nanos) = epoch.to_gregorian_utc();
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:06}Z",
        y,
        m,
        d,
        hh,
        mm,
        ss,
        nanos / 1_000
    )
}

fn depth_type(fix: DepthFix) -> &'static str {
    match fix {
        DepthFix::Free => "from location",
        DepthFix::Fixed => "operator assigned",
        DepthFix::DepthPhases => "constrained by depth phases",
    }
}

/// Indented element writer
struct Xml {
    buf: String,
    depth: usize,
}

impl Xml {
    fn new() -> Self {
        let mut buf = String::with_capacity(8192);
        buf.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        Self { buf, depth: 0 }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.buf.push_str("  ");
        }
    }

    fn open(&mut self, tag: &str, attributes: &[(&str, &str)]) {
        self.indent();
        self.buf.push('<');
        self.buf.push_str(tag);
        for (key, value) in attributes {
            self.buf
                .push_str(&format!(" {}=\"{}\"", key, escape_xml(value)));
        }
        self.buf.push_str(">\n");
        self.depth += 1;
    }

    fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        self.buf.push_str(&format!("</{}>\n", tag));
    }

    fn empty(&mut self, tag: &str, attributes: &[(&str, &str)]) {
        self.indent();
        self.buf.push('<');
        self.buf.push_str(tag);
        for (key, value) in attributes {
            self.buf
                .push_str(&format!(" {}=\"{}\"", key, escape_xml(value)));
        }
        self.buf.push_str("/>\n");
    }

    fn text(&mut self, tag: &str, value: &str) {
        self.indent();
        self.buf
            .push_str(&format!("<{}>{}</{}>\n", tag, escape_xml(value), tag));
    }

    fn optional_text<T: ToString>(&mut self, tag: &str, value: Option<T>) {
        if let Some(value) = value {
            self.text(tag, &value.to_string());
        }
    }

    /// RealQuantity / TimeQuantity
    fn quantity(&mut self, tag: &str, value: &str, uncertainty: Option<f64>) {
        self.open(tag, &[]);
        self.text("value", value);
        self.optional_text("uncertainty", uncertainty);
        self.close(tag);
    }

    fn optional_quantity(&mut self, tag: &str, value: Option<f64>) {
        if let Some(value) = value {
            self.quantity(tag, &value.to_string(), None);
        }
    }

    fn waveform_id(&mut self, id: &WaveformStreamId) {
        self.empty(
            "waveformID",
            &[
                ("networkCode", id.network.as_str()),
                ("stationCode", id.station.as_str()),
                ("locationCode", id.location.as_str()),
                ("channelCode", id.channel.as_str()),
            ],
        );
    }

    fn pick(&mut self, pick: &Pick) {
        self.open("pick", &[("publicID", pick.id.as_str())]);
        self.quantity("time", &iso8601(pick.time), None);
        self.waveform_id(&pick.waveform_id);
        self.optional_quantity("horizontalSlowness", pick.horizontal_slowness);
        self.optional_quantity("backazimuth", pick.backazimuth);
        self.optional_text("onset", pick.onset);
        self.optional_text("phaseHint", pick.phase_hint.as_deref());
        self.optional_text("polarity", pick.polarity);
        self.optional_text("evaluationMode", pick.evaluation_mode);
        self.close("pick");
    }

    fn origin(&mut self, origin: &Origin) {
        self.open("origin", &[("publicID", origin.id.as_str())]);
        self.quantity("time", &iso8601(origin.time), origin.time_uncertainty);
        self.quantity(
            "latitude",
            &origin.latitude.to_string(),
            origin.latitude_uncertainty,
        );
        self.quantity(
            "longitude",
            &origin.longitude.to_string(),
            origin.longitude_uncertainty,
        );
        if let Some(depth) = origin.depth {
            // QuakeML depths are expressed in meters
            self.quantity(
                "depth",
                &(depth * 1000.0).to_string(),
                origin.depth_uncertainty.map(|err| err * 1000.0),
            );
        }
        self.text("depthType", depth_type(origin.depth_fix));
        if origin.time_fixed {
            self.text("timeFixed", "true");
        }
        if origin.epicenter_fixed {
            self.text("epicenterFixed", "true");
        }
        self.optional_text("methodID", origin.method_id.as_deref());

        let quality = &origin.quality;
        self.open("quality", &[]);
        self.optional_text("usedPhaseCount", quality.used_phase_count);
        self.optional_text("usedStationCount", quality.used_station_count);
        self.optional_text("standardError", quality.standard_error);
        self.optional_text("azimuthalGap", quality.azimuthal_gap);
        self.optional_text("groundTruthLevel", quality.ground_truth_level.as_deref());
        self.optional_text("minimumDistance", quality.minimum_distance);
        self.optional_text("maximumDistance", quality.maximum_distance);
        self.close("quality");

        if let Some(uncertainty) = origin.uncertainty {
            self.open("originUncertainty", &[]);
            self.text(
                "maxHorizontalUncertainty",
                &(uncertainty.max_horizontal * 1000.0).to_string(),
            );
            self.text(
                "minHorizontalUncertainty",
                &(uncertainty.min_horizontal * 1000.0).to_string(),
            );
            self.optional_text("azimuthMaxHorizontalUncertainty", uncertainty.azimuth);
            self.text("preferredDescription", "uncertainty ellipse");
            self.close("originUncertainty");
        }

        self.optional_text("evaluationMode", origin.evaluation_mode);
        self.optional_text("evaluationStatus", origin.evaluation_status);

        let info = &origin.creation_info;
        if info.agency_id.is_some() || info.author.is_some() || info.creation_time.is_some() {
            self.open("creationInfo", &[]);
            self.optional_text("agencyID", info.agency_id.as_deref());
            self.optional_text("author", info.author.as_deref());
            self.optional_text("creationTime", info.creation_time.map(iso8601));
            self.close("creationInfo");
        }

        for (index, arrival) in origin.arrivals.iter().enumerate() {
            let id = format!("{}/arrival/{}", origin.id, index + 1);
            self.open("arrival", &[("publicID", id.as_str())]);
            self.text("pickID", &arrival.pick_id);
            self.text("phase", &arrival.phase);
            self.optional_text("azimuth", arrival.azimuth);
            self.optional_text("distance", arrival.distance);
            self.optional_quantity("takeoffAngle", arrival.takeoff_angle);
            self.optional_text("timeResidual", arrival.time_residual);
            self.optional_text("horizontalSlownessResidual", arrival.horizontal_slowness_residual);
            self.optional_text("backazimuthResidual", arrival.backazimuth_residual);
            self.optional_text("timeWeight", arrival.weight);
            self.close("arrival");
        }
        self.close("origin");
    }

    fn station_magnitude(&mut self, origin_id: &str, magnitude: &StationMagnitude) {
        self.open("stationMagnitude", &[("publicID", magnitude.id.as_str())]);
        self.text(
            "originID",
            magnitude.origin_id.as_deref().unwrap_or(origin_id),
        );
        self.quantity("mag", &magnitude.value.to_string(), None);
        self.text("type", &magnitude.magnitude_type);
        self.optional_text("amplitudeID", magnitude.amplitude_id.as_deref());
        if let Some(waveform_id) = &magnitude.waveform_id {
            self.waveform_id(waveform_id);
        }
        self.close("stationMagnitude");
    }

    fn magnitude(&mut self, origin_id: &str, magnitude: &Magnitude) {
        self.open("magnitude", &[("publicID", magnitude.id.as_str())]);
        self.quantity("mag", &magnitude.value.to_string(), magnitude.uncertainty);
        self.text("type", &magnitude.magnitude_type);
        self.text(
            "originID",
            magnitude.origin_id.as_deref().unwrap_or(origin_id),
        );
        self.optional_text("stationCount", magnitude.station_count);
        self.close("magnitude");
    }
}

impl<'a, Q: Query + ?Sized> Bulletin<'a, Q> {
    pub(crate) fn quakeml_bulletin(&self, pass: &mut Pass) -> String {
        let Some(origin) = &self.origin else {
            pass.diagnostics.push("write_quakeml", "no origin attached");
            return String::new();
        };

        let mut xml = Xml::new();
        xml.open(
            "q:quakeml",
            &[("xmlns", NAMESPACE_BED), ("xmlns:q", NAMESPACE_QUAKEML)],
        );
        let parameters_id = format!("smi:local/eventParameters/{}", self.message_id());
        xml.open("eventParameters", &[("publicID", parameters_id.as_str())]);

        let event_id = match &self.event {
            Some(event) => event.id.clone(),
            None => format!("smi:local/event/{}", self.event_id()),
        };
        xml.open("event", &[("publicID", event_id.as_str())]);
        match &self.event {
            Some(event) => {
                xml.text(
                    "preferredOriginID",
                    event.preferred_origin_id.as_deref().unwrap_or(&origin.id),
                );
                let preferred_magnitude = event
                    .preferred_magnitude_id
                    .as_deref()
                    .or(self.preferred_magnitude.as_ref().map(|m| m.id.as_str()));
                xml.optional_text("preferredMagnitudeID", preferred_magnitude);
                xml.optional_text("type", event.event_type);
                xml.optional_text("typeCertainty", event.type_certainty);
            },
            None => {
                xml.text("preferredOriginID", &origin.id);
                xml.optional_text(
                    "preferredMagnitudeID",
                    self.preferred_magnitude.as_ref().map(|m| m.id.as_str()),
                );
            },
        }
        let region = self.region();
        if !region.is_empty() {
            xml.open("description", &[]);
            xml.text("text", &region);
            xml.text("type", "region name");
            xml.close("description");
        }

        let records = self.phase_records(origin);
        for record in records.iter() {
            xml.pick(record.pick);
            pass.counters.picks += 1;
        }
        for record in records.iter() {
            if let Some(amplitude) = record.amplitude {
                xml.open("amplitude", &[("publicID", amplitude.id.as_str())]);
                xml.quantity("genericAmplitude", &amplitude.value.to_string(), None);
                xml.optional_text("type", amplitude.amplitude_type.as_deref());
                xml.optional_quantity("period", amplitude.period);
                xml.optional_text("snr", amplitude.snr);
                xml.optional_text("pickID", amplitude.pick_id.as_deref());
                xml.close("amplitude");
            }
        }

        xml.origin(origin);
        pass.counters.origins += 1;

        for magnitude in self.station_magnitudes.iter() {
            xml.station_magnitude(&origin.id, magnitude);
        }
        for magnitude in self.magnitudes(origin) {
            xml.magnitude(&origin.id, magnitude);
            pass.counters.magnitudes += 1;
        }

        xml.close("event");
        xml.close("eventParameters");
        xml.close("q:quakeml");

        #[cfg(feature = "log")]
        debug!(
            "{}: QuakeML document, {} picks, {} magnitudes",
            origin.id, pass.counters.picks, pass.counters.magnitudes
        );
        xml.buf
    }
}
