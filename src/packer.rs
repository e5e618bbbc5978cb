//! Primitive writers and readers for the argument buffer.
//!
//! Pure data placement: each writer puts one typed value at a fixed byte
//! offset inside a not-yet-finalized report, bounds-checked against the
//! frame's declared `data_size`. Offsets are fixed per command and never
//! move between protocol generations. The matching readers use the same
//! offset conventions on the response side.

use crate::error::ReportError;
use crate::report::RazerReport;
use crate::types::Rgb;

fn check_bounds(report: &RazerReport, offset: usize, len: usize) -> Result<(), ReportError> {
    let end = offset + len;
    if end > report.declared_size() {
        return Err(ReportError::CapacityExceeded {
            requested: end,
            capacity: report.declared_size(),
        });
    }
    Ok(())
}

/// Write a single byte.
pub fn put_u8(report: &mut RazerReport, offset: usize, value: u8) -> Result<(), ReportError> {
    check_bounds(report, offset, 1)?;
    report.arguments_mut()[offset] = value;
    Ok(())
}

/// Write a 16-bit value, most significant byte first. The firmware expects
/// network byte order for polling rate, DPI, idle time and PID fields.
pub fn put_u16_be(report: &mut RazerReport, offset: usize, value: u16) -> Result<(), ReportError> {
    check_bounds(report, offset, 2)?;
    report.arguments_mut()[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
    Ok(())
}

/// Write a 32-bit value, most significant byte first (scroll mode fields).
pub fn put_u32_be(report: &mut RazerReport, offset: usize, value: u32) -> Result<(), ReportError> {
    check_bounds(report, offset, 4)?;
    report.arguments_mut()[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
    Ok(())
}

/// Write an RGB triple as three consecutive bytes.
pub fn put_rgb(report: &mut RazerReport, offset: usize, rgb: &Rgb) -> Result<(), ReportError> {
    check_bounds(report, offset, 3)?;
    report.arguments_mut()[offset..offset + 3].copy_from_slice(&[rgb.r, rgb.g, rgb.b]);
    Ok(())
}

/// Copy a caller-supplied byte run verbatim (pixel data, stage tables).
pub fn put_bytes(report: &mut RazerReport, offset: usize, bytes: &[u8]) -> Result<(), ReportError> {
    check_bounds(report, offset, bytes.len())?;
    report.arguments_mut()[offset..offset + bytes.len()].copy_from_slice(bytes);
    Ok(())
}

/// Copy a byte run whose length must match the declared sub-range length.
pub fn put_run(
    report: &mut RazerReport,
    offset: usize,
    declared_len: usize,
    bytes: &[u8],
) -> Result<(), ReportError> {
    if bytes.len() != declared_len {
        return Err(ReportError::PixelRunMismatch {
            expected: declared_len,
            got: bytes.len(),
        });
    }
    put_bytes(report, offset, bytes)
}

/// Read a single argument byte.
pub fn get_u8(report: &RazerReport, offset: usize) -> u8 {
    report.arguments()[offset]
}

/// Read a big-endian 16-bit argument value.
pub fn get_u16_be(report: &RazerReport, offset: usize) -> u16 {
    u16::from_be_bytes([report.arguments()[offset], report.arguments()[offset + 1]])
}

/// Read a big-endian 32-bit argument value.
pub fn get_u32_be(report: &RazerReport, offset: usize) -> u32 {
    let args = report.arguments();
    u32::from_be_bytes([args[offset], args[offset + 1], args[offset + 2], args[offset + 3]])
}

/// Read an RGB triple.
pub fn get_rgb(report: &RazerReport, offset: usize) -> Rgb {
    let args = report.arguments();
    Rgb::new(args[offset], args[offset + 1], args[offset + 2])
}
