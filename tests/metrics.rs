#![cfg(feature = "metrics")]
//! Tests for `binaryio` metrics helpers.
//!
//! These tests verify that counters update as expected using
//! `metrics_util::debugging::DebuggingRecorder`.

use binaryio::{BinaryRead, BufferedByteOrderReader, metrics as read_metrics};
use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};

/// Creates a debugging recorder and snapshotter for metrics testing.
fn debugging_recorder_setup() -> (Snapshotter, DebuggingRecorder) {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    (snapshotter, recorder)
}

/// Counter name, labels and value taken from one snapshot.
type Counter = (String, Vec<(String, String)>, u64);

fn counters(snapshotter: &Snapshotter) -> Vec<Counter> {
    snapshotter
        .snapshot()
        .into_vec()
        .into_iter()
        .filter_map(|(k, _, _, v)| match v {
            DebugValue::Counter(c) => Some((
                k.key().name().to_owned(),
                k.key()
                    .labels()
                    .map(|l| (l.key().to_owned(), l.value().to_owned()))
                    .collect(),
                c,
            )),
            _ => None,
        })
        .collect()
}

fn counter_value(entries: &[Counter], name: &str, label: Option<(&str, &str)>) -> u64 {
    entries
        .iter()
        .filter(|(n, labels, _)| {
            n == name
                && label.is_none_or(|(key, value)| {
                    labels.iter().any(|(k, v)| k == key && v == value)
                })
        })
        .map(|(_, _, c)| c)
        .sum()
}

#[test]
fn successful_reads_count_consumed_bytes() {
    let (snapshotter, recorder) = debugging_recorder_setup();
    metrics::with_local_recorder(&recorder, || {
        let mut reader = BufferedByteOrderReader::big_endian(vec![0u8; 16]);
        reader.read_u32().expect("u32");
        reader.read_bytes(3).expect("bytes");
        reader.skip(1).expect("skip");
        reader.read_u16s(2).expect("u16s");
    });
    let entries = counters(&snapshotter);

    assert_eq!(
        counter_value(&entries, read_metrics::BYTES_READ, None),
        12
    );
}

#[test]
fn short_reads_are_labelled_by_operation() {
    let (snapshotter, recorder) = debugging_recorder_setup();
    metrics::with_local_recorder(&recorder, || {
        let mut reader = BufferedByteOrderReader::little_endian(Vec::<u8>::new());
        reader.skip(2).expect_err("skip");
        reader.read_byte().expect_err("byte");
    });
    let entries = counters(&snapshotter);

    assert_eq!(
        counter_value(
            &entries,
            read_metrics::SHORT_READS,
            Some(("operation", "skip"))
        ),
        1
    );
    assert_eq!(
        counter_value(
            &entries,
            read_metrics::SHORT_READS,
            Some(("operation", "byte"))
        ),
        1
    );
    assert_eq!(
        counter_value(
            &entries,
            read_metrics::SHORT_READS,
            Some(("operation", "bytes"))
        ),
        0
    );
}

#[test]
fn integer_eof_counts_as_source_error() {
    let (snapshotter, recorder) = debugging_recorder_setup();
    metrics::with_local_recorder(&recorder, || {
        let mut reader = BufferedByteOrderReader::big_endian(vec![1u8]);
        reader.read_u64().expect_err("u64");
    });
    let entries = counters(&snapshotter);

    assert_eq!(
        counter_value(&entries, read_metrics::SOURCE_ERRORS, None),
        1
    );
}

#[test]
fn fixed_reads_count_consumed_bytes() {
    let (snapshotter, recorder) = debugging_recorder_setup();
    metrics::with_local_recorder(&recorder, || {
        let mut reader = BufferedByteOrderReader::big_endian(vec![0u8, 0, 0, 7, 9]);
        assert_eq!(reader.read_fixed::<u32>().expect("fixed u32"), 7);
        assert_eq!(reader.remaining(), 1);
    });
    let entries = counters(&snapshotter);

    assert_eq!(counter_value(&entries, read_metrics::BYTES_READ, None), 4);
    assert_eq!(counter_value(&entries, read_metrics::SOURCE_ERRORS, None), 0);
}

#[test]
fn fixed_read_past_end_counts_as_source_error() {
    let (snapshotter, recorder) = debugging_recorder_setup();
    metrics::with_local_recorder(&recorder, || {
        let mut reader = BufferedByteOrderReader::little_endian(vec![1u8, 2]);
        reader.read_fixed::<u64>().expect_err("two bytes cannot fill a u64");
    });
    let entries = counters(&snapshotter);

    assert_eq!(counter_value(&entries, read_metrics::SOURCE_ERRORS, None), 1);
    assert_eq!(counter_value(&entries, read_metrics::BYTES_READ, None), 0);
}
