use crate::{
    gse::{GseMagnitude, GseOriginLines, GsePhaseLine, ORIGIN_HEAD, PHASE_HEAD},
    prelude::*,
    tests::toolkit::origin_time,
};

fn origin_lines<'a>(magnitudes: &'a [GseMagnitude<'a>]) -> GseOriginLines<'a> {
    GseOriginLines {
        time: origin_time(),
        time_fixed: ' ',
        time_error: Some(0.35),
        rms: Some(0.21),
        latitude: Some(14.609),
        longitude: Some(-61.125),
        epicenter_fixed: ' ',
        semi_major: Some(2.5),
        semi_minor: Some(1.2),
        strike: Some(45),
        depth: Some(12.3),
        depth_fixed: ' ',
        depth_error: Some(1.8),
        ndef: Some(18),
        nsta: Some(9),
        gap: Some(142.0),
        min_distance: Some(0.12),
        max_distance: Some(1.85),
        magnitudes,
        analysis_type: 'm',
        location_method: 'i',
        event_type: "ke",
        author: "OVSM",
        origin_id: "1",
    }
}

fn ml() -> GseMagnitude<'static> {
    GseMagnitude {
        magnitude_type: "Ml",
        value: 3.2,
        error: Some(0.2),
        nsta: Some(6),
    }
}

#[test]
fn origin_lines_formatting() {
    let magnitudes = [ml()];
    let mut buf = String::new();
    let mut diag = Diagnostics::default();
    assert!(origin_lines(&magnitudes).format(&mut buf, &mut diag));
    assert!(diag.is_empty(), "unexpected diagnostics: {}", diag);

    let lines = buf.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);

    let main = lines[0];
    assert_eq!(main.len(), 125);
    assert!(main.starts_with("2024/03/15 07:04:09.1  "));
    assert_eq!(&main[23..31], " 14.6090");
    assert_eq!(&main[32..41], " -61.1250");
    assert_eq!(&main[43..48], " 12.3");
    assert_eq!(&main[60..63], "142");
    assert_eq!(&main[65..77], "Ml    3.2  6");
    assert_eq!(&main[79..91], " ".repeat(12));
    assert_eq!(&main[107..116], "OVSM     ");
    assert_eq!(&main[117..125], "1       ");

    let errors = lines[1];
    assert_eq!(&errors[5..10], " 0.21");
    assert_eq!(&errors[11..18], "+- 0.35");
    assert_eq!(&errors[21..26], "  2.5");
    assert_eq!(&errors[33..36], " 45");
    assert_eq!(&errors[38..45], "+-  1.8");
    assert_eq!(&errors[69..74], "+-0.2");
    assert_eq!(&errors[107..113], "m i ke");

    // banners follow the layout
    assert_eq!(ORIGIN_HEAD[0].find("Latitude"), Some(23));
    assert_eq!(ORIGIN_HEAD[0].find("Mag1"), Some(65));
}

#[test]
fn origin_lines_abort_together() {
    let magnitudes = [ml()];
    let line = GseOriginLines {
        latitude: Some(-90.0),
        ..origin_lines(&magnitudes)
    };
    let mut buf = String::new();
    let mut diag = Diagnostics::default();
    assert!(!line.format(&mut buf, &mut diag));
    assert!(buf.is_empty());
    assert_eq!(diag.len(), 1);
    assert!(diag.last().unwrap().starts_with("write_gse_origin: latitude"));

    // bad magnitude aborts both lines as well
    let magnitudes = [GseMagnitude {
        value: 13.0,
        ..ml()
    }];
    let mut buf = String::new();
    let mut diag = Diagnostics::default();
    assert!(!origin_lines(&magnitudes).format(&mut buf, &mut diag));
    assert!(buf.is_empty());
    assert_eq!(diag.len(), 1);
}

#[test]
fn origin_lines_magnitude_slots() {
    let magnitudes = [
        ml(),
        GseMagnitude {
            magnitude_type: "Md",
            value: 3.0,
            error: None,
            nsta: None,
        },
        GseMagnitude {
            magnitude_type: "Mw",
            value: 3.4,
            error: None,
            nsta: Some(3),
        },
        GseMagnitude {
            magnitude_type: "mb",
            value: 3.9,
            error: None,
            nsta: None,
        },
    ];
    let mut buf = String::new();
    let mut diag = Diagnostics::default();
    assert!(origin_lines(&magnitudes).format(&mut buf, &mut diag));
    assert_eq!(diag.len(), 1);
    assert!(diag.last().unwrap().contains("only the first 3"));

    let main = buf.lines().next().unwrap();
    assert_eq!(&main[79..91], "Md    3.0   ");
    assert_eq!(&main[93..105], "Mw    3.4  3");
    assert!(!main.contains("mb"));
}

#[test]
fn origin_lines_magnitude_station_count_overflow() {
    let magnitudes = [GseMagnitude {
        magnitude_type: "mb",
        value: 4.8,
        error: Some(0.2),
        nsta: Some(150),
    }];
    let mut buf = String::new();
    let mut diag = Diagnostics::default();
    assert!(origin_lines(&magnitudes).format(&mut buf, &mut diag));
    assert_eq!(diag.len(), 1);
    assert!(diag.last().unwrap().starts_with("write_gse_origin: mb station count"));

    let lines = buf.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert_eq!(&lines[0][23..31], " 14.6090");
    assert_eq!(&lines[0][65..77], "mb    4.8   ");
    assert_eq!(&lines[1][69..74], "+-0.2");
}

#[test]
fn phase_line_amplitude_upper_bound() {
    let line = GsePhaseLine {
        station: "MPOM",
        distance: None,
        event_azimuth: None,
        phase: "Pg",
        time: origin_time(),
        time_residual: None,
        azimuth: None,
        azimuth_residual: None,
        slowness: None,
        slowness_residual: None,
        time_defining: '_',
        azimuth_defining: '_',
        slowness_defining: '_',
        snr: None,
        amplitude: Some(999_999_999.96),
        period: None,
        pick_type: '_',
        motion: '_',
        detection: '_',
        magnitudes: &[],
        arrival_id: "1",
    };
    let mut buf = String::new();
    let mut diag = Diagnostics::default();
    assert!(!line.format(&mut buf, &mut diag));
    assert!(buf.is_empty());
    assert_eq!(diag.len(), 1);
    assert!(diag.last().unwrap().starts_with("write_gse_phase: amplitude out of range"));
}

#[test]
fn phase_line_formatting() {
    let magnitudes = [("Ml", 3.1)];
    let line = GsePhaseLine {
        station: "MPOM",
        distance: Some(0.12),
        event_azimuth: Some(215.3),
        phase: "Pg",
        time: Epoch::from_gregorian_utc(2024, 3, 15, 7, 4, 12, 345_000_000),
        time_residual: Some(-0.12),
        azimuth: None,
        azimuth_residual: None,
        slowness: None,
        slowness_residual: None,
        time_defining: 'T',
        azimuth_defining: '_',
        slowness_defining: '_',
        snr: Some(12.5),
        amplitude: Some(1520.0),
        period: Some(0.25),
        pick_type: 'm',
        motion: 'C',
        detection: 'I',
        magnitudes: &magnitudes,
        arrival_id: "1",
    };
    let mut buf = String::new();
    let mut diag = Diagnostics::default();
    assert!(line.format(&mut buf, &mut diag));
    assert!(diag.is_empty(), "unexpected diagnostics: {}", diag);

    let line = buf.trim_end_matches('\n');
    assert_eq!(line.len(), 140);
    assert!(line.starts_with("MPOM    0.12 215.3 Pg      2024/03/15 07:04:12.345  -0.1"));
    assert_eq!(&line[82..85], "T__");
    assert_eq!(&line[86..91], " 12.5");
    assert_eq!(&line[108..111], "mci");
    assert_eq!(&line[112..121], "Ml    3.1");
    assert_eq!(&line[122..131], " ".repeat(9));
    assert_eq!(&line[132..140], "1       ");
    assert_eq!(PHASE_HEAD.find("ArrID"), Some(132));
}

#[test]
fn phase_line_phase_code_too_long() {
    let line = GsePhaseLine {
        station: "MPOM",
        distance: None,
        event_azimuth: None,
        phase: "PKiKPab",
        time: origin_time(),
        time_residual: None,
        azimuth: None,
        azimuth_residual: None,
        slowness: None,
        slowness_residual: None,
        time_defining: '_',
        azimuth_defining: '_',
        slowness_defining: '_',
        snr: None,
        amplitude: None,
        period: None,
        pick_type: '_',
        motion: '_',
        detection: '_',
        magnitudes: &[],
        arrival_id: "1",
    };
    let mut buf = String::new();
    let mut diag = Diagnostics::default();
    assert!(line.format(&mut buf, &mut diag));
    assert!(diag.is_empty());

    let line = GsePhaseLine {
        phase: "PKiKPabc",
        ..line
    };
    let mut buf = String::new();
    assert!(!line.format(&mut buf, &mut diag));
    assert!(buf.is_empty());
    assert_eq!(diag.len(), 1);
}
