use crate::{hypo::SummaryLine, prelude::*, tests::toolkit::origin_time, units::deg2km};

const SUMMARY: &str =
    "20240315 0704  9.12 14 36.54  61  7.50  12.30 L 3.20 18 142 13.3 0.21  2.5  1.8 B       1";

fn summary_line<'a>(seismic_code: &'a str, record_id: &'a str) -> SummaryLine<'a> {
    SummaryLine {
        time: origin_time(),
        latitude: 14.609,
        longitude: -61.125,
        depth: Some(12.3),
        magnitude_type: Some("Ml"),
        magnitude: Some(3.2),
        phase_count: Some(18),
        gap: Some(142.0),
        min_distance: Some(deg2km(0.12)),
        rms: Some(0.21),
        horizontal_error: Some(2.5),
        vertical_error: Some(1.8),
        seismic_code,
        record_id,
    }
}

#[test]
fn summary_formatting() {
    let mut diag = Diagnostics::default();
    let line = summary_line("     ", "1").format(&mut diag);
    assert!(diag.is_empty(), "unexpected diagnostics: {}", diag);
    assert_eq!(line, SUMMARY);
}

#[test]
fn summary_seismic_code() {
    let mut diag = Diagnostics::default();
    let line = summary_line("MQ01", "ovsm2024fxyz").format(&mut diag);
    assert!(line.is_empty());
    assert_eq!(diag.len(), 1);
    assert!(diag.last().unwrap().starts_with("write_h71summ2k:"));

    let mut diag = Diagnostics::default();
    let line = summary_line("MQ012", "ovsm2024fxyz").format(&mut diag);
    assert!(diag.is_empty());
    assert!(line.len() >= 80);
    assert!(line.ends_with(" MQ012 ovsm2024fxyz"));
}

#[test]
fn summary_hemispheres() {
    let line = SummaryLine {
        latitude: -14.5,
        longitude: 61.25,
        ..summary_line("     ", "1")
    };
    let mut diag = Diagnostics::default();
    let line = line.format(&mut diag);
    assert!(diag.is_empty());
    assert_eq!(&line[19..28], " 14S30.00");
    assert_eq!(&line[28..38], "  61E15.00");
}

#[test]
fn summary_blank_fields() {
    let line = SummaryLine {
        depth: None,
        magnitude_type: None,
        magnitude: None,
        phase_count: None,
        gap: None,
        min_distance: None,
        rms: None,
        horizontal_error: None,
        vertical_error: None,
        ..summary_line("     ", "1")
    };
    let mut diag = Diagnostics::default();
    let line = line.format(&mut diag);
    assert!(diag.is_empty());
    assert_eq!(&line[38..80], " ".repeat(42));
    assert_eq!(line.len(), 89);
}

#[test]
fn summary_degraded_fields() {
    let line = SummaryLine {
        latitude: 95.0,
        depth: Some(123456.0),
        ..summary_line("     ", "1")
    };
    let mut diag = Diagnostics::default();
    let line = line.format(&mut diag);
    assert_eq!(diag.len(), 2);
    assert_eq!(line.len(), 89);
    assert_eq!(&line[19..28], " ".repeat(9));
}
