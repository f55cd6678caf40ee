use std::io::Write;

use crate::{
    prelude::*,
    tests::toolkit::{martinique_event, martinique_query, random_name, Utf8Buffer},
    writer::BufferedWriter,
};

#[test]
fn buffered_writer() {
    let mut buf = Utf8Buffer::new(1024);
    let mut writer = BufferedWriter::plain(&mut buf);
    writer.write_all(b"BEGIN IMS1.0\n").unwrap();
    writer.write_all(b"STOP\n").unwrap();
    writer.finish().unwrap();
    assert_eq!(buf.to_ascii_utf8(), "BEGIN IMS1.0\nSTOP\n");
}

#[test]
fn bulletin_to_file() {
    let query = martinique_query();
    let event = martinique_event();
    let mut bulletin = Bulletin::from_event(&event, &query);
    assert!(bulletin.attach_records());

    let path = std::env::temp_dir().join(format!("{}.txt", random_name(8)));
    let report = bulletin.to_file(Format::Ims10, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(Some(content.as_str()), report.text());
    assert!(content.starts_with("BEGIN IMS1.0\n"));
    assert!(content.ends_with("STOP\n"));
}

#[test]
fn bulletin_to_file_failures() {
    let query = martinique_query();
    let event = martinique_event();
    let mut bulletin = Bulletin::from_event(&event, &query);

    // origin not resolved yet
    let path = std::env::temp_dir().join(format!("{}.txt", random_name(8)));
    match bulletin.to_file(Format::Ims10, &path) {
        Err(FormattingError::NoOrigin) => {},
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!path.exists());

    assert!(bulletin.attach_records());
    match bulletin.to_file(Format::Hypo71, &path) {
        Err(FormattingError::NotImplemented(Format::Hypo71)) => {},
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!path.exists());
}

#[test]
#[cfg(feature = "flate2")]
fn bulletin_to_gzip_file() {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let query = martinique_query();
    let event = martinique_event();
    let mut bulletin = Bulletin::from_event(&event, &query);
    assert!(bulletin.attach_records());

    let path = std::env::temp_dir().join(format!("{}.txt.gz", random_name(8)));
    let report = bulletin.to_file(Format::Gse20, &path).unwrap();

    let fd = std::fs::File::open(&path).unwrap();
    let mut content = String::new();
    GzDecoder::new(fd).read_to_string(&mut content).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(Some(content.as_str()), report.text());
}

#[test]
#[cfg(feature = "serde")]
fn options_serdes() {
    let options = ExportOptions::default()
        .with_author("OVSM")
        .with_region("Martinique")
        .with_seismic_code("MQ012")
        .with_hypo_record_id(HypoRecordId::OriginId);
    let content = serde_json::to_string(&options).unwrap();
    let parsed: ExportOptions = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, options);

    // missing entries fall back to the defaults
    let parsed: ExportOptions = serde_json::from_str("{\"author\": \"OVSM\"}").unwrap();
    assert_eq!(parsed, ExportOptions::default().with_author("OVSM"));
}

#[test]
#[cfg(feature = "serde")]
fn diagnostics_serdes() {
    let query = martinique_query();
    let event = martinique_event();
    let mut bulletin = Bulletin::from_event(&event, &query);
    bulletin.set_author("OBSERVATOIRE");
    assert!(bulletin.attach_records());
    let report = bulletin.get_bulletin(Format::Ims10);

    let content = serde_json::to_string(&report.diagnostics).unwrap();
    let parsed: Diagnostics = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, report.diagnostics);
}
