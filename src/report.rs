//! The fixed-size report frame exchanged with the device and its checksum.
//!
//! Every command this crate builds is one [`RazerReport`]: a 91-byte HID
//! feature report with a three-byte transport header, addressing and length
//! fields, an 80-byte argument buffer and a single XOR-fold checksum byte.
//! Builders produce a frame, call [`RazerReport::finalize`] exactly once,
//! and hand the caller an immutable value; the transport serializes it with
//! [`RazerReport::to_wire`] and re-reads responses with
//! [`RazerReport::from_wire`].

use tracing::trace;
use zerocopy::byteorder::{BigEndian, U16};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::error::{ParseError, ReportError};

/// Fixed capacity of the argument buffer.
pub const ARGUMENTS_LEN: usize = 80;

/// Full wire length of one report, report id byte included.
pub const REPORT_LEN: usize = 91;

/// Default transaction id for the standard protocol family.
pub const TRANSACTION_STANDARD: u8 = 0xFF;

/// Transaction marker carried by the extended matrix family.
pub const TRANSACTION_EXTENDED: u8 = 0x3F;

/// Framing generation marker stored in the protocol_type field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ProtocolType {
    /// Legacy framing used by the standard command family.
    Standard = 0x00,
    /// Extended matrix framing (keyboard extended and mouse extended).
    Extended = 0x01,
}

// The XOR fold skips the transport header (report id, status, transaction id)
// and stops before the checksum byte. Wire bytes 3..89.
const FOLD_START: usize = 3;
const FOLD_END: usize = 9 + ARGUMENTS_LEN;

/// One vendor feature report, fully addressed and checksummed.
///
/// Frames are value objects: builders return them finalized, and nothing in
/// this crate mutates a frame after it has been returned. The two
/// post-construction adjustments a caller legitimately needs —
/// [`with_transaction_id`](Self::with_transaction_id) for transport
/// correlation and [`with_remaining_packets`](Self::with_remaining_packets)
/// for multi-packet row uploads — consume the frame and return a
/// re-finalized copy, so a checksum-stale frame is never observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoBytes, FromBytes, KnownLayout, Immutable, Unaligned)]
#[repr(C)]
pub struct RazerReport {
    report_id: u8,
    status: u8,
    transaction_id: u8,
    remaining_packets: U16<BigEndian>,
    protocol_type: u8,
    data_size: u8,
    command_class: u8,
    command_id: u8,
    arguments: [u8; ARGUMENTS_LEN],
    checksum: u8,
    reserved: u8,
}

impl RazerReport {
    /// Allocate a zeroed frame with standard framing.
    ///
    /// `data_size` declares how many argument bytes the builder will write;
    /// requesting more than [`ARGUMENTS_LEN`] fails with
    /// [`ReportError::CapacityExceeded`] and no frame is constructed.
    pub fn new(command_class: u8, command_id: u8, data_size: usize) -> Result<Self, ReportError> {
        if data_size > ARGUMENTS_LEN {
            return Err(ReportError::CapacityExceeded {
                requested: data_size,
                capacity: ARGUMENTS_LEN,
            });
        }
        Ok(Self {
            report_id: 0x00,
            status: 0x00,
            transaction_id: TRANSACTION_STANDARD,
            remaining_packets: U16::new(0),
            protocol_type: ProtocolType::Standard as u8,
            data_size: data_size as u8,
            command_class,
            command_id,
            arguments: [0u8; ARGUMENTS_LEN],
            checksum: 0x00,
            reserved: 0x00,
        })
    }

    /// Allocate a frame with extended matrix framing and the 0x3F
    /// transaction marker.
    pub fn new_extended(
        command_class: u8,
        command_id: u8,
        data_size: usize,
    ) -> Result<Self, ReportError> {
        let mut report = Self::new(command_class, command_id, data_size)?;
        report.protocol_type = ProtocolType::Extended as u8;
        report.transaction_id = TRANSACTION_EXTENDED;
        Ok(report)
    }

    /// Allocate a frame with extended framing but the default transaction
    /// id. Mouse firmware expects the extended argument layout without the
    /// 0x3F marker.
    pub fn new_mouse(
        command_class: u8,
        command_id: u8,
        data_size: usize,
    ) -> Result<Self, ReportError> {
        let mut report = Self::new(command_class, command_id, data_size)?;
        report.protocol_type = ProtocolType::Extended as u8;
        Ok(report)
    }

    /// Compute and store the checksum. Every builder calls this exactly
    /// once, after the last argument byte is written.
    #[must_use]
    pub fn finalize(mut self) -> Self {
        self.checksum = self.compute_checksum();
        self
    }

    /// XOR-fold over the checksummed region of the frame.
    ///
    /// The transport header (report id, status, transaction id) is outside
    /// the fold, as are the checksum byte itself and the reserved trailer.
    pub fn compute_checksum(&self) -> u8 {
        self.as_bytes()[FOLD_START..FOLD_END]
            .iter()
            .fold(0u8, |crc, &b| crc ^ b)
    }

    /// Whether the stored checksum matches the frame's current bytes.
    pub fn checksum_is_valid(&self) -> bool {
        self.checksum == self.compute_checksum()
    }

    /// Replace the transaction id used to correlate request and response.
    #[must_use]
    pub fn with_transaction_id(mut self, transaction_id: u8) -> Self {
        self.transaction_id = transaction_id;
        self.finalize()
    }

    /// Set the count of packets still to come in a multi-packet upload.
    /// Zero (the default) marks a single-packet command or the final chunk.
    #[must_use]
    pub fn with_remaining_packets(mut self, remaining: u16) -> Self {
        self.remaining_packets = U16::new(remaining);
        self.finalize()
    }

    /// Serialize to the wire buffer handed to the transport.
    pub fn to_wire(&self) -> [u8; REPORT_LEN] {
        let mut buf = [0u8; REPORT_LEN];
        buf.copy_from_slice(self.as_bytes());
        buf
    }

    /// Re-read a response buffer as a frame, validating length and checksum.
    pub fn from_wire(buf: &[u8]) -> Result<Self, ParseError> {
        let Ok((report, _rest)) = Self::read_from_prefix(buf) else {
            return Err(ParseError::TooShort {
                expected: REPORT_LEN,
                got: buf.len(),
            });
        };
        let computed = report.compute_checksum();
        if report.checksum != computed {
            trace!(
                stored = report.checksum,
                computed,
                "rejecting response with bad checksum"
            );
            return Err(ParseError::ChecksumMismatch {
                stored: report.checksum,
                computed,
            });
        }
        Ok(report)
    }

    /// Status byte; 0x00 on a freshly built request, device-set on responses.
    pub fn status(&self) -> u8 {
        self.status
    }

    pub fn transaction_id(&self) -> u8 {
        self.transaction_id
    }

    pub fn remaining_packets(&self) -> u16 {
        self.remaining_packets.get()
    }

    pub fn protocol_type(&self) -> u8 {
        self.protocol_type
    }

    /// Length of the meaningful argument payload, not the full buffer.
    pub fn data_size(&self) -> u8 {
        self.data_size
    }

    pub fn command_class(&self) -> u8 {
        self.command_class
    }

    pub fn command_id(&self) -> u8 {
        self.command_id
    }

    pub fn arguments(&self) -> &[u8; ARGUMENTS_LEN] {
        &self.arguments
    }

    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    pub(crate) fn arguments_mut(&mut self) -> &mut [u8; ARGUMENTS_LEN] {
        &mut self.arguments
    }

    pub(crate) fn declared_size(&self) -> usize {
        usize::from(self.data_size)
    }
}
