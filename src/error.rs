//! Error types for report construction and response decoding.

use thiserror::Error;

/// Errors from building a report frame.
///
/// All failures are synchronous and detected at construction time; a builder
/// that fails returns no frame at all, never a partially written one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Requested argument payload does not fit the fixed argument buffer.
    #[error("argument payload of {requested} bytes exceeds capacity of {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    /// Custom-frame column range needs more pixel bytes than one packet holds.
    #[error(
        "columns {start_col}..={stop_col} need {needed} pixel bytes, a single packet holds {available}"
    )]
    RowTooWide {
        start_col: u8,
        stop_col: u8,
        needed: usize,
        available: usize,
    },

    /// DPI stage table outside the supported stage count range.
    #[error("DPI stage count {count} outside supported range 1..={max}")]
    TooManyStages { count: usize, max: usize },

    /// The targeted protocol family has no encoding for this operation.
    #[error("operation not supported by this protocol family: {0}")]
    UnsupportedOperation(&'static str),

    /// A raw byte run does not match the length its sub-range declares.
    #[error("byte run of {got} bytes does not match declared length {expected}")]
    PixelRunMismatch { expected: usize, got: usize },
}

/// Errors from decoding a response frame.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Response buffer shorter than one full report.
    #[error("response too short: expected {expected} bytes, got {got}")]
    TooShort { expected: usize, got: usize },

    /// The response echoes a different command than the decoder expects.
    #[error(
        "command echo mismatch: expected {expected_class:#04x}:{expected_id:#04x}, got {got_class:#04x}:{got_id:#04x}"
    )]
    CommandMismatch {
        expected_class: u8,
        expected_id: u8,
        got_class: u8,
        got_id: u8,
    },

    /// Stored checksum does not match the XOR-fold of the frame bytes.
    #[error("stored checksum {stored:#04x} does not match computed {computed:#04x}")]
    ChecksumMismatch { stored: u8, computed: u8 },

    /// A payload byte holds a value outside the field's wire encoding.
    #[error("invalid value for {field}: {value:#04x}")]
    InvalidValue { field: &'static str, value: u8 },
}
