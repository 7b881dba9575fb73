//! Integration tests for the leveled logger
//!
//! These tests verify:
//! - The default-threshold scenario end to end
//! - Per-slot prefixes and flags
//! - File destinations
//! - Independent primary and error loggers

use leveled_logger::prelude::*;
use leveled_logger::emit;
use std::fs;
use std::io::{self, Write};
use tempfile::TempDir;

#[test]
fn test_default_threshold_scenario() {
    let (sink, buffer) = Sink::memory();
    let mut logger = LeveledLogger::new(sink);

    logger.emit(0, &[&"hello"]).unwrap();
    assert!(buffer.contents().contains("hello"));

    logger.emit(1, &[&"world"]).unwrap();
    assert!(!buffer.contents().contains("world"));

    logger.set_threshold(2);
    logger.emit(1, &[&"world"]).unwrap();
    assert!(buffer.contents().contains("world"));
}

#[test]
fn test_threshold_zero_silences_slot_zero() {
    let (sink, buffer) = Sink::memory();
    let mut logger = LeveledLogger::new(sink);
    logger.set_threshold(0);

    logger.emit(0, &[&"silent"]).unwrap();
    logger.emit_line(0, &[&"silent"]).unwrap();
    logger.emit_formatted(0, "silent", &[]).unwrap();

    assert!(buffer.is_empty());
}

#[test]
fn test_prefix_only_affects_its_slot() {
    let (sink, buffer) = Sink::memory();
    let mut logger = LeveledLogger::new(sink);
    logger.set_threshold(SLOT_COUNT as Level);
    logger.set_prefix(5, "X:").unwrap();

    logger.emit(5, &[&"from five"]).unwrap();
    logger.emit(6, &[&"from six"]).unwrap();

    let lines = buffer.lines();
    assert!(lines[0].starts_with("X:"));
    assert!(!lines[1].starts_with("X:"));
    assert_eq!(lines[1], "from six");
}

#[test]
fn test_formatted_without_values_is_literal() {
    let (sink, buffer) = Sink::memory();
    let logger = LeveledLogger::new(sink);

    logger.emit_formatted(0, "rate {} at 100%", &[]).unwrap();
    logger.emit(0, &[&"rate {} at 100%"]).unwrap();

    let lines = buffer.lines();
    assert_eq!(lines[0], "rate {} at 100%");
    assert_eq!(lines[0], lines[1]);
}

#[test]
fn test_short_file_reports_call_site() {
    let (sink, buffer) = Sink::memory();
    let mut logger = LeveledLogger::new(sink);
    logger.set_flags(0, Flags::SHORT_FILE).unwrap();

    let line = line!() + 1;
    logger.emit(0, &[&"located"]).unwrap();
    let macro_line = line!() + 1;
    emit!(logger, 0, "via {}", "macro").unwrap();

    assert_eq!(
        buffer.lines(),
        vec![
            format!("integration_tests.rs:{}: located", line),
            format!("integration_tests.rs:{}: via macro", macro_line),
        ]
    );
}

#[test]
fn test_std_flags_decorate_with_date_and_time() {
    let (sink, buffer) = Sink::memory();
    let mut logger = LeveledLogger::new(sink);
    logger.set_flags(0, Flags::STD).unwrap();

    logger.emit(0, &[&"stamped"]).unwrap();

    // 2025/01/08 10:30:45 stamped
    let line = buffer.contents();
    let (date, rest) = line.split_once(' ').unwrap();
    let (time, message) = rest.split_once(' ').unwrap();
    assert_eq!(date.len(), 10);
    assert_eq!(date.matches('/').count(), 2);
    assert_eq!(time.len(), 8);
    assert_eq!(time.matches(':').count(), 2);
    assert_eq!(message, "stamped\n");
}

#[test]
fn test_microseconds_flag() {
    let (sink, buffer) = Sink::memory();
    let mut logger = LeveledLogger::new(sink);
    logger.set_flags(0, Flags::MICROSECONDS).unwrap();

    logger.emit(0, &[&"precise"]).unwrap();

    let line = buffer.contents();
    let (time, message) = line.split_once(' ').unwrap();
    assert_eq!(time.len(), "01:23:23.123123".len());
    assert_eq!(time.as_bytes()[8], b'.');
    assert_eq!(message, "precise\n");
}

#[test]
fn test_file_destination() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("leveled.log");

    {
        let mut logger = LeveledLogger::builder()
            .sink(Sink::file(&log_file).expect("Failed to open log file"))
            .threshold(3)
            .prefix(2, "[verbose] ")
            .build()
            .unwrap();

        logger.emit(0, &[&"always"]).unwrap();
        logger.emit(2, &[&"verbose"]).unwrap();
        logger.emit(3, &[&"hidden"]).unwrap();
        logger.set_threshold(0);
        logger.emit(0, &[&"muted"]).unwrap();
        logger.flush().expect("Failed to flush");
    }

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "always\n[verbose] verbose\n");
}

#[test]
fn test_primary_and_error_loggers_are_independent() {
    let (out_sink, out_buf) = Sink::memory();
    let (err_sink, err_buf) = Sink::memory();
    let mut ctx = LoggerContext::new(LeveledLogger::new(out_sink), LeveledLogger::new(err_sink));

    ctx.err.set_threshold(5);
    ctx.err.set_prefix(4, "E:").unwrap();

    ctx.out.emit(4, &[&"out four"]).unwrap();
    ctx.err.emit(4, &[&"err four"]).unwrap();

    assert!(out_buf.is_empty());
    assert_eq!(err_buf.contents(), "E:err four\n");
    assert_eq!(ctx.out.threshold(), DEFAULT_THRESHOLD);
    assert_eq!(ctx.out.prefix(4).unwrap(), "");
}

#[test]
fn test_slot_config_serializes() {
    let mut logger = LeveledLogger::new(Sink::memory().0);
    logger.set_prefix(1, "p:").unwrap();
    logger.set_flags(1, Flags::DATE | Flags::SHORT_FILE).unwrap();

    let json = serde_json::to_string(&logger.slot_config(1).unwrap()).unwrap();
    assert_eq!(json, r#"{"prefix":"p:","flags":17}"#);

    let config: SlotConfig = serde_json::from_str(&json).unwrap();
    logger.set_slot_config(7, config).unwrap();
    assert_eq!(logger.prefix(7).unwrap(), "p:");
    assert_eq!(logger.flags(7).unwrap(), Flags::DATE | Flags::SHORT_FILE);
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_destination_failure_surfaces_from_emit() {
    let mut logger = LeveledLogger::new(Sink::from_writer(BrokenPipe));
    logger.set_threshold(2);

    for result in [
        logger.emit(0, &[&"lost"]),
        logger.emit_line(1, &[&"lost"]),
        logger.emit_formatted(0, "lost {}", &[&1]),
        emit!(logger, 1, "lost {}", 2),
    ] {
        let err = result.unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }), "{}", err);
    }

    // Gated-off calls never reach the failing destination
    logger.emit(5, &[&"gated"]).expect("gated call is a no-op");
}

#[test]
fn test_slot_config_rejects_unknown_flag_bits() {
    let err = serde_json::from_str::<SlotConfig>(r#"{"prefix":"p:","flags":255}"#).unwrap_err();
    assert!(err.to_string().contains("unknown bits"), "{}", err);

    let config: SlotConfig = serde_json::from_str(r#"{"prefix":"p:","flags":31}"#).unwrap();
    assert_eq!(config.flags.bits(), 31);
}
