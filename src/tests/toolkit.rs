use std::collections::HashMap;
use std::io::Write;

use rand::{distributions::Alphanumeric, Rng};

use crate::prelude::*;

#[derive(Debug)]
pub struct Utf8Buffer {
    pub inner: Vec<u8>,
}

impl Write for Utf8Buffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        for b in buf {
            self.inner.push(*b);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Utf8Buffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    pub fn to_ascii_utf8(&self) -> String {
        std::str::from_utf8(&self.inner).unwrap().to_string()
    }
}

/*
 * Tool to generate random names when we need to produce a file
 */
pub fn random_name(size: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .map(char::from)
        .collect()
}

pub fn generic_formatted_lines_test(utf8_content: &str, test_values: HashMap<usize, &str>) {
    let mut nb_tests = 0usize;
    let total_tests = test_values.len();
    for (nth, line) in utf8_content.lines().enumerate() {
        if let Some(content) = test_values.get(&nth) {
            assert_eq!(line, *content, "line #{} mismatch", nth);
            nb_tests += 1;
        }
    }
    assert_eq!(nb_tests, total_tests);
}

/*
 * Martinique test event: one Ml 3.2 origin located
 * by two stations, MPOM (Pg, with amplitude) and TDBA (Sg).
 */
pub const ORIGIN_ID: &str = "smi:ovsm/origin/2024fxyz";
pub const MAGNITUDE_ID: &str = "smi:ovsm/magnitude/2024fxyz/ml";
pub const EVENT_ID: &str = "ovsm2024";

pub fn origin_time() -> Epoch {
    Epoch::from_gregorian_utc(2024, 3, 15, 7, 4, 9, 120_000_000)
}

pub fn martinique_origin() -> Origin {
    Origin::new(ORIGIN_ID, origin_time(), 14.609, -61.125)
        .with_depth(12.3)
        .with_depth_uncertainty(1.8)
        .with_time_uncertainty(0.35)
        .with_quality(OriginQuality {
            standard_error: Some(0.21),
            azimuthal_gap: Some(142.0),
            minimum_distance: Some(0.12),
            maximum_distance: Some(1.85),
            used_phase_count: Some(18),
            used_station_count: Some(9),
            ground_truth_level: None,
        })
        .with_uncertainty(OriginUncertainty {
            max_horizontal: 2.5,
            min_horizontal: 1.2,
            azimuth: Some(45.0),
        })
        .with_evaluation_mode(EvaluationMode::Manual)
        .with_evaluation_status(EvaluationStatus::Reviewed)
        .with_method("smi:ovsm/method/NLLoc")
        .with_creation_info(CreationInfo::default().with_agency("OVSM"))
}

pub fn martinique_magnitude() -> Magnitude {
    Magnitude::new(MAGNITUDE_ID, "Ml", 3.2)
        .with_origin(ORIGIN_ID)
        .with_uncertainty(0.2)
        .with_station_count(6)
}

pub fn martinique_arrivals() -> Vec<Arrival> {
    vec![
        // listed furthest first: bulletins sort by distance
        Arrival::new("pick/TDBA/Sg", "Sg")
            .with_distance(0.45)
            .with_azimuth(30.0)
            .with_time_residual(0.3)
            .with_defining(DefiningFlags::TIME),
        Arrival::new("pick/MPOM/Pg", "Pg")
            .with_distance(0.12)
            .with_azimuth(215.3)
            .with_time_residual(-0.12)
            .with_defining(DefiningFlags::TIME),
    ]
}

pub fn martinique_picks() -> Vec<Pick> {
    vec![
        Pick::new(
            "pick/MPOM/Pg",
            WaveformStreamId::from_nslc("MQ", "MPOM", "00", "HHZ"),
            Epoch::from_gregorian_utc(2024, 3, 15, 7, 4, 12, 345_000_000),
        )
        .with_phase_hint("Pg")
        .with_evaluation_mode(EvaluationMode::Manual)
        .with_polarity(Polarity::Positive)
        .with_onset(Onset::Impulsive),
        Pick::new(
            "pick/TDBA/Sg",
            WaveformStreamId::from_nslc("MQ", "TDBA", "00", "HHE"),
            Epoch::from_gregorian_utc(2024, 3, 15, 7, 4, 15, 500_000_000),
        )
        .with_evaluation_mode(EvaluationMode::Automatic),
    ]
}

pub fn martinique_amplitude() -> Amplitude {
    Amplitude::new("amp/MPOM", "pick/MPOM/Pg", 1520.0)
        .with_type("AML")
        .with_period(0.25)
        .with_snr(12.5)
}

pub fn martinique_station_magnitude() -> StationMagnitude {
    StationMagnitude::new("stamag/MPOM", "amp/MPOM", "Ml", 3.1)
        .with_waveform_id(WaveformStreamId::from_nslc("MQ", "MPOM", "00", "HHZ"))
}

pub fn martinique_event() -> Event {
    Event::new(EVENT_ID)
        .with_preferred_origin(ORIGIN_ID)
        .with_preferred_magnitude(MAGNITUDE_ID)
        .with_type(EventType::Earthquake)
        .with_description("Martinique")
}

/// [MemoryQuery] holding the complete Martinique event
pub fn martinique_query() -> MemoryQuery {
    let mut query = MemoryQuery::default()
        .with_origin(martinique_origin())
        .with_arrivals(ORIGIN_ID, martinique_arrivals())
        .with_station_magnitudes(ORIGIN_ID, vec![martinique_station_magnitude()])
        .with_magnitude(martinique_magnitude())
        .with_amplitude(martinique_amplitude());
    for pick in martinique_picks() {
        query = query.with_pick(pick);
    }
    query
}
