//! # Binary Layer Tests: digit-string conversions
//!
//! Validates fixed-width rendering, group splitting with right padding,
//! integer parsing, and the byte/text/hex/base64 group utilities.

use hpackx_codec::binary::{
    base64_to_groups, groups_to_bytes, groups_to_hex, groups_to_text, hex_to_groups,
    join_groups, split_into_groups, text_to_groups, to_fixed_width_binary, to_integer,
    trace_groups,
};
use hpackx_core::HpackError;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Instant;

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_debug<F: FnOnce()>(f: F) -> String {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = log.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

/// Every byte value survives render-then-parse at width 8.
#[test]
fn test_fixed_width_roundtrip_all_bytes() {
    let t = Instant::now();

    for v in 0u64..256 {
        let bits = to_fixed_width_binary(v, 8);
        assert_eq!(bits.len(), 8, "width violated for {}", v);
        assert_eq!(to_integer(&bits).unwrap(), v);
    }

    let overhead = t.elapsed();
    println!("test_fixed_width_roundtrip_all_bytes: Testing Overhead = {:?}", overhead);
}

#[test]
fn test_fixed_width_padding_and_truncation() {
    assert_eq!(to_fixed_width_binary(2, 8), "00000010");
    assert_eq!(to_fixed_width_binary(0, 8), "00000000");
    assert_eq!(to_fixed_width_binary(5, 3), "101");
    // Only the low bits of an oversized value are kept.
    assert_eq!(to_fixed_width_binary(0b1_0000_0011, 8), "00000011");
    assert_eq!(to_fixed_width_binary(u64::MAX, 8), "11111111");
    assert_eq!(to_fixed_width_binary(1, 12), "000000000001");
}

#[test]
fn test_split_pads_final_group() {
    let groups = split_into_groups("0000001011", 8).unwrap();
    assert_eq!(groups, vec!["00000010".to_string(), "11000000".to_string()]);

    let groups = split_into_groups("00010", 8).unwrap();
    assert_eq!(groups, vec!["00010000".to_string()]);

    assert!(split_into_groups("", 8).unwrap().is_empty());
}

#[test]
fn test_split_rejects_bad_input() {
    assert!(matches!(
        split_into_groups("0102", 8),
        Err(HpackError::InvalidFormat(_))
    ));
    assert!(matches!(
        split_into_groups("0 1", 8),
        Err(HpackError::InvalidFormat(_))
    ));
    assert!(matches!(
        split_into_groups("0101", 0),
        Err(HpackError::InvalidFormat(_))
    ));
}

/// Joining full groups and splitting again gives the same groups back.
#[test]
fn test_join_then_split_is_identity() {
    let t = Instant::now();

    let groups: Vec<String> = [0u64, 1, 2, 60, 127, 255]
        .iter()
        .map(|&v| to_fixed_width_binary(v, 8))
        .collect();
    let joined = join_groups(&groups);
    assert_eq!(joined.len(), 48);
    assert_eq!(split_into_groups(&joined, 8).unwrap(), groups);

    let overhead = t.elapsed();
    println!("test_join_then_split_is_identity: Testing Overhead = {:?}", overhead);
}

#[test]
fn test_to_integer_rejects_bad_input() {
    assert!(matches!(to_integer(""), Err(HpackError::InvalidFormat(_))));
    assert!(matches!(to_integer("+101"), Err(HpackError::InvalidFormat(_))));
    assert!(matches!(to_integer("12"), Err(HpackError::InvalidFormat(_))));
    assert!(matches!(
        to_integer(&"1".repeat(65)),
        Err(HpackError::InvalidFormat(_))
    ));
    assert_eq!(to_integer(&"1".repeat(64)).unwrap(), u64::MAX);
}

#[test]
fn test_text_groups_roundtrip() {
    let groups = text_to_groups("Hi");
    assert_eq!(groups, vec!["01001000".to_string(), "01101001".to_string()]);
    assert_eq!(groups_to_text(&groups).unwrap(), "Hi");

    // Multi-byte UTF-8 spreads over several groups.
    let groups = text_to_groups("é");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups_to_text(&groups).unwrap(), "é");

    assert!(text_to_groups("").is_empty());
}

#[test]
fn test_hex_groups() {
    assert_eq!(
        hex_to_groups("0x0aFF").unwrap(),
        vec!["00001010".to_string(), "11111111".to_string()]
    );
    // Odd length gains a leading zero nibble.
    assert_eq!(
        hex_to_groups("abc").unwrap(),
        vec!["00001010".to_string(), "10111100".to_string()]
    );
    assert!(hex_to_groups("").unwrap().is_empty());
    assert!(hex_to_groups("0X").unwrap().is_empty());
    assert!(matches!(hex_to_groups("zz"), Err(HpackError::InvalidFormat(_))));

    let groups = hex_to_groups("DEADbeef").unwrap();
    assert_eq!(groups_to_hex(&groups).unwrap(), "DEADBEEF");
}

#[test]
fn test_base64_groups() {
    let groups = base64_to_groups("SGk=").unwrap();
    assert_eq!(groups_to_text(&groups).unwrap(), "Hi");
    assert!(base64_to_groups("").unwrap().is_empty());
    assert!(matches!(
        base64_to_groups("not base64!"),
        Err(HpackError::InvalidFormat(_))
    ));
}

#[test]
fn test_groups_to_bytes_requires_full_groups() {
    assert_eq!(groups_to_bytes(&["00000001", "10000000"]).unwrap(), vec![1u8, 128]);
    assert!(groups_to_bytes::<&str>(&[]).unwrap().is_empty());
    assert!(matches!(
        groups_to_bytes(&["0101"]),
        Err(HpackError::InvalidFormat(_))
    ));
    assert!(matches!(
        groups_to_bytes(&["0000000x"]),
        Err(HpackError::InvalidFormat(_))
    ));
    // 0xFF alone is not valid UTF-8.
    assert!(matches!(
        groups_to_text(&["11111111"]),
        Err(HpackError::InvalidFormat(_))
    ));
}

#[test]
fn test_trace_groups_tolerates_malformed_groups() {
    trace_groups(&["00000010", "garbage"], "mixed");
    trace_groups::<String>(&[], "empty");
}

/// A labelled header line is logged even when there are no groups.
#[test]
fn test_trace_groups_logs_label_header() {
    let out = capture_debug(|| trace_groups::<String>(&[], "request"));
    assert!(out.contains("=== request ==="), "missing header: {}", out);
    assert!(out.contains("groups=0"), "missing count: {}", out);

    let out = capture_debug(|| trace_groups(&["00000010", "00111100"], "encoded"));
    assert_eq!(out.matches("=== encoded ===").count(), 1);
    assert!(out.contains("groups=2"));
    assert!(out.contains("decimal=60"));
    assert!(out.contains("hex=3C"));
}
