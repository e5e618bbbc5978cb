//! Multi-packet custom frame uploads.
//!
//! A row wider than one packet's pixel capacity is split into consecutive
//! column ranges. Every packet but the last carries a countdown in the
//! remaining-packets field; the firmware commits the row when it reaches
//! zero. Callers send the packets in order and then apply the frame with the
//! family's custom-frame effect.

use tracing::debug;

use crate::error::ReportError;
use crate::extended;
use crate::report::RazerReport;
use crate::standard;

/// Columns one matrix row packet can carry: the 80-byte argument buffer
/// minus 3 addressing bytes leaves 77, 25 whole pixels.
pub const MAX_COLUMNS_PER_PACKET: usize = (crate::report::ARGUMENTS_LEN - 3) / 3;

fn check_pixels(start_col: u8, pixels: &[u8]) -> Result<usize, ReportError> {
    if pixels.is_empty() || pixels.len() % 3 != 0 {
        return Err(ReportError::PixelRunMismatch {
            expected: pixels.len().next_multiple_of(3).max(3),
            got: pixels.len(),
        });
    }
    let columns = pixels.len() / 3;
    let last_col = usize::from(start_col) + columns - 1;
    if last_col > usize::from(u8::MAX) {
        return Err(ReportError::RowTooWide {
            start_col,
            stop_col: u8::MAX,
            needed: pixels.len(),
            available: (usize::from(u8::MAX) - usize::from(start_col) + 1) * 3,
        });
    }
    Ok(columns)
}

fn row_packets(
    row_index: u8,
    start_col: u8,
    pixels: &[u8],
    columns_per_packet: usize,
    build: impl Fn(u8, u8, u8, &[u8]) -> Result<RazerReport, ReportError>,
) -> Result<Vec<RazerReport>, ReportError> {
    let columns = check_pixels(start_col, pixels)?;
    let packet_count = columns.div_ceil(columns_per_packet);
    debug!(row_index, columns, packet_count, "splitting custom frame row");

    let mut packets = Vec::with_capacity(packet_count);
    for (i, chunk) in pixels.chunks(columns_per_packet * 3).enumerate() {
        let chunk_start = start_col + (i * columns_per_packet) as u8;
        let chunk_stop = chunk_start + (chunk.len() / 3 - 1) as u8;
        let remaining = (packet_count - 1 - i) as u16;
        packets.push(build(row_index, chunk_start, chunk_stop, chunk)?
            .with_remaining_packets(remaining));
    }
    Ok(packets)
}

/// Split one row into standard-framing packets, widest chunks first.
///
/// `pixels` is the full RGB run for columns `start_col` onward; its length
/// must be a nonzero multiple of 3 and the row must end at column 255 or
/// lower.
pub fn standard_row_packets(
    row_index: u8,
    start_col: u8,
    pixels: &[u8],
) -> Result<Vec<RazerReport>, ReportError> {
    row_packets(
        row_index,
        start_col,
        pixels,
        MAX_COLUMNS_PER_PACKET,
        standard::matrix_set_custom_frame,
    )
}

/// Split one row into extended-framing packets.
pub fn extended_row_packets(
    row_index: u8,
    start_col: u8,
    pixels: &[u8],
) -> Result<Vec<RazerReport>, ReportError> {
    row_packets(
        row_index,
        start_col,
        pixels,
        MAX_COLUMNS_PER_PACKET,
        extended::matrix_set_custom_frame,
    )
}

/// Split one row into fixed-size extended packets for firmware that wants
/// every chunk padded to `packet_pixel_bytes`. A short final chunk is
/// zero-padded; its column range still covers only the live pixels.
pub fn extended_row_packets_sized(
    row_index: u8,
    start_col: u8,
    pixels: &[u8],
    packet_pixel_bytes: usize,
) -> Result<Vec<RazerReport>, ReportError> {
    if packet_pixel_bytes == 0
        || packet_pixel_bytes % 3 != 0
        || 3 + packet_pixel_bytes > crate::report::ARGUMENTS_LEN
    {
        return Err(ReportError::CapacityExceeded {
            requested: 3 + packet_pixel_bytes,
            capacity: crate::report::ARGUMENTS_LEN,
        });
    }
    let columns_per_packet = packet_pixel_bytes / 3;
    row_packets(row_index, start_col, pixels, columns_per_packet, |row, start, stop, chunk| {
        let mut payload = vec![0u8; packet_pixel_bytes];
        payload[..chunk.len()].copy_from_slice(chunk);
        extended::matrix_set_custom_frame2(row, start, stop, &payload, packet_pixel_bytes)
    })
}
