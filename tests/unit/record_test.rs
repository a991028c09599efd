//! Unit tests for per-log scanning

use std::io::Cursor;

use arnold_logs::record::{LineScanner, Precedence, RecordError};
use arnold_logs::EntryScan;

use crate::helpers::scan_text;

#[test]
fn leecher_log_summary() {
    let scan = scan_text(
        "INFO started\n\
         STARTDOWNLOAD piece=0\n\
         COMPLETEDDOWNLOAD piece=0\n\
         DOWNLOAD 152340 1200 leecher 6\n\
         FINALCREDIT 12.75\n",
    );
    let download = scan.download.as_ref().unwrap();
    assert_eq!(download.completion_ms, 152340);
    assert_eq!(download.start_secs(), Some(1.2));
    assert_eq!(scan.credit, Some(12.75));
    assert!(!scan.seeder);
    assert!(!scan.is_anomalous());
    assert_eq!(scan.internal_error, None);
}

#[test]
fn seeder_without_download_is_expected() {
    let scan = scan_text("peer 3 seeder=true port=4000\nFINALCREDIT 0\n");
    assert!(scan.seeder);
    assert!(scan.download.is_none());
    assert!(!scan.is_anomalous());
}

#[test]
fn leecher_without_download_is_anomalous() {
    let scan = scan_text("INFO started\nSTARTDOWNLOAD piece=0\n");
    assert!(scan.is_anomalous());
}

#[test]
fn first_records_win() {
    let scan = scan_text(
        "DOWNLOAD 1000 0 leecher 6\n\
         DOWNLOAD 2000 0 leecher 6\n\
         FINALCREDI 1.5\n\
         FINALCREDIT 9\n",
    );
    assert_eq!(scan.download.unwrap().completion_ms, 1000);
    assert_eq!(scan.credit, Some(1.5));
}

#[test]
fn internal_error_line_is_trimmed() {
    let scan = scan_text("ok\n  Internal error: piece 12 requested twice  \nInternal error: later\n");
    assert_eq!(
        scan.internal_error.as_deref(),
        Some("Internal error: piece 12 requested twice")
    );
}

#[test]
fn first_internal_error_stops_at_match() {
    let text = "fine\nInternal error: first\nDOWNLOAD garbage\n";
    let found = EntryScan::first_internal_error(Cursor::new(text.as_bytes().to_vec())).unwrap();
    assert_eq!(found.as_deref(), Some("Internal error: first"));
}

#[test]
fn malformed_download_is_reported_with_line() {
    let err = EntryScan::scan(Cursor::new(b"DOWNLOAD soon 0 leecher 6\n".to_vec())).unwrap_err();
    match err {
        RecordError::Malformed { kind, line, .. } => {
            assert_eq!(kind, "DOWNLOAD");
            assert_eq!(line, "DOWNLOAD soon 0 leecher 6");
        }
        other => panic!("expected malformed record, got {:?}", other),
    }
}

#[test]
fn scanner_handles_crlf_and_invalid_utf8() {
    let bytes = b"first\r\nsec\xffond\nlast".to_vec();
    let lines: Vec<String> = LineScanner::new(Cursor::new(bytes))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(lines, vec!["first", "sec\u{fffd}ond", "last"]);
}

#[test]
fn helper_summary_line_decodes_without_detail() {
    let scan = scan_text("DOWNLOADTIME 1500 250 TitForTatRankingPolicy TFT\nDOWNLOADTIME 1500\n");
    let download = scan.download.unwrap();
    assert_eq!(download.completion_secs(), 1.5);
    assert!(!download.is_summary());

    let scan = scan_text("DOWNLOADTIME 700\n");
    assert!(scan.download.unwrap().is_summary());
}

#[test]
fn last_precedence_follows_the_log() {
    let text = "FINALCREDIT 1\nDOWNLOAD 1000 0 leecher 6\nDOWNLOAD 4000 0 leecher 6\nFINALCREDIT 7\n";
    let scan = EntryScan::scan_with(Cursor::new(text.as_bytes().to_vec()), Precedence::Last).unwrap();
    assert_eq!(scan.download.unwrap().completion_ms, 4000);
    assert_eq!(scan.credit, Some(7.0));
}
