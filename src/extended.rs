//! Extended matrix builders: the newer keyboard protocol generation.
//!
//! Extended commands carry the 0x3F transaction marker and prefix every
//! effect's arguments with a `[storage, led_id]` pair, so one command family
//! drives every addressable zone. Effect ids are shared with the standard
//! family; the framing tells the generations apart.

use crate::error::ReportError;
use crate::ids::{class, matrix};
use crate::packer;
use crate::report::RazerReport;
use crate::standard::row_span_bytes;
use crate::types::{LedId, Rgb, VariableStorage, WaveDirection, WheelDirection};

fn effect(
    id: u8,
    storage: VariableStorage,
    led_id: LedId,
    extra: usize,
) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new_extended(class::MATRIX, id, 2 + extra)?;
    packer::put_u8(&mut report, 0, storage.wire())?;
    packer::put_u8(&mut report, 1, led_id.wire())?;
    Ok(report)
}

pub fn matrix_effect_none(
    storage: VariableStorage,
    led_id: LedId,
) -> Result<RazerReport, ReportError> {
    Ok(effect(matrix::EFFECT_NONE, storage, led_id, 0)?.finalize())
}

pub fn matrix_effect_static(
    storage: VariableStorage,
    led_id: LedId,
    rgb: &Rgb,
) -> Result<RazerReport, ReportError> {
    let mut report = effect(matrix::EFFECT_STATIC, storage, led_id, 3)?;
    packer::put_rgb(&mut report, 2, rgb)?;
    Ok(report.finalize())
}

pub fn matrix_effect_wave(
    storage: VariableStorage,
    led_id: LedId,
    direction: WaveDirection,
) -> Result<RazerReport, ReportError> {
    let mut report = effect(matrix::EFFECT_WAVE, storage, led_id, 1)?;
    packer::put_u8(&mut report, 2, direction.wire())?;
    Ok(report.finalize())
}

/// Rotating wheel variant of the wave effect, used by circular zones.
pub fn matrix_effect_wheel(
    storage: VariableStorage,
    led_id: LedId,
    direction: WheelDirection,
) -> Result<RazerReport, ReportError> {
    let mut report = effect(matrix::EFFECT_WHEEL, storage, led_id, 1)?;
    packer::put_u8(&mut report, 2, direction.wire())?;
    Ok(report.finalize())
}

pub fn matrix_effect_spectrum(
    storage: VariableStorage,
    led_id: LedId,
) -> Result<RazerReport, ReportError> {
    Ok(effect(matrix::EFFECT_SPECTRUM, storage, led_id, 0)?.finalize())
}

/// `speed` 1 (fast) ..= 4 (slow); values outside are clamped.
pub fn matrix_effect_reactive(
    storage: VariableStorage,
    led_id: LedId,
    speed: u8,
    rgb: &Rgb,
) -> Result<RazerReport, ReportError> {
    let mut report = effect(matrix::EFFECT_REACTIVE, storage, led_id, 4)?;
    packer::put_u8(&mut report, 2, speed.clamp(0x01, 0x04))?;
    packer::put_rgb(&mut report, 3, rgb)?;
    Ok(report.finalize())
}

pub fn matrix_effect_breathing_single(
    storage: VariableStorage,
    led_id: LedId,
    rgb: &Rgb,
) -> Result<RazerReport, ReportError> {
    let mut report = effect(matrix::EFFECT_BREATHING_SINGLE, storage, led_id, 3)?;
    packer::put_rgb(&mut report, 2, rgb)?;
    Ok(report.finalize())
}

/// Primary color bytes precede the secondary color bytes.
pub fn matrix_effect_breathing_dual(
    storage: VariableStorage,
    led_id: LedId,
    rgb1: &Rgb,
    rgb2: &Rgb,
) -> Result<RazerReport, ReportError> {
    let mut report = effect(matrix::EFFECT_BREATHING_DUAL, storage, led_id, 6)?;
    packer::put_rgb(&mut report, 2, rgb1)?;
    packer::put_rgb(&mut report, 5, rgb2)?;
    Ok(report.finalize())
}

pub fn matrix_effect_breathing_random(
    storage: VariableStorage,
    led_id: LedId,
) -> Result<RazerReport, ReportError> {
    Ok(effect(matrix::EFFECT_BREATHING_RANDOM, storage, led_id, 0)?.finalize())
}

/// `speed` 1 (fast) ..= 3 (slow); values outside are clamped.
pub fn matrix_effect_starlight_single(
    storage: VariableStorage,
    led_id: LedId,
    speed: u8,
    rgb: &Rgb,
) -> Result<RazerReport, ReportError> {
    let mut report = effect(matrix::EFFECT_STARLIGHT_SINGLE, storage, led_id, 4)?;
    packer::put_u8(&mut report, 2, speed.clamp(0x01, 0x03))?;
    packer::put_rgb(&mut report, 3, rgb)?;
    Ok(report.finalize())
}

pub fn matrix_effect_starlight_dual(
    storage: VariableStorage,
    led_id: LedId,
    speed: u8,
    rgb1: &Rgb,
    rgb2: &Rgb,
) -> Result<RazerReport, ReportError> {
    let mut report = effect(matrix::EFFECT_STARLIGHT_DUAL, storage, led_id, 7)?;
    packer::put_u8(&mut report, 2, speed.clamp(0x01, 0x03))?;
    packer::put_rgb(&mut report, 3, rgb1)?;
    packer::put_rgb(&mut report, 6, rgb2)?;
    Ok(report.finalize())
}

pub fn matrix_effect_starlight_random(
    storage: VariableStorage,
    led_id: LedId,
    speed: u8,
) -> Result<RazerReport, ReportError> {
    let mut report = effect(matrix::EFFECT_STARLIGHT_RANDOM, storage, led_id, 1)?;
    packer::put_u8(&mut report, 2, speed.clamp(0x01, 0x03))?;
    Ok(report.finalize())
}

/// Switch the matrix to displaying the staged custom frame. The extended
/// form takes no storage or zone; the firmware applies the staged buffer.
pub fn matrix_effect_custom_frame() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new_extended(class::MATRIX, matrix::EFFECT_CUSTOM, 2)?.finalize())
}

/// Brightness 0..=255 for one zone.
pub fn matrix_brightness(
    storage: VariableStorage,
    led_id: LedId,
    brightness: u8,
) -> Result<RazerReport, ReportError> {
    let mut report = effect(matrix::SET_BRIGHTNESS, storage, led_id, 1)?;
    packer::put_u8(&mut report, 2, brightness)?;
    Ok(report.finalize())
}

pub fn matrix_get_brightness(
    storage: VariableStorage,
    led_id: LedId,
) -> Result<RazerReport, ReportError> {
    Ok(effect(matrix::GET_BRIGHTNESS, storage, led_id, 0)?.finalize())
}

/// Upload pixel data for one row with extended framing. Same column range
/// rules as the standard variant.
pub fn matrix_set_custom_frame(
    row_index: u8,
    start_col: u8,
    stop_col: u8,
    rgb_data: &[u8],
) -> Result<RazerReport, ReportError> {
    let pixel_len = row_span_bytes(start_col, stop_col)?;
    if rgb_data.len() != pixel_len {
        return Err(ReportError::PixelRunMismatch {
            expected: pixel_len,
            got: rgb_data.len(),
        });
    }
    let mut report =
        RazerReport::new_extended(class::MATRIX, matrix::SET_CUSTOM_FRAME, 3 + pixel_len)?;
    packer::put_u8(&mut report, 0, row_index)?;
    packer::put_u8(&mut report, 1, start_col)?;
    packer::put_u8(&mut report, 2, stop_col)?;
    packer::put_run(&mut report, 3, pixel_len, rgb_data)?;
    Ok(report.finalize())
}

/// Row upload with an explicit packet payload length, for wide matrices
/// whose firmware wants every chunk padded to the same size. `rgb_data`
/// must hold exactly `packet_length` bytes; the column range tells the
/// firmware how many of them are live pixels.
pub fn matrix_set_custom_frame2(
    row_index: u8,
    start_col: u8,
    stop_col: u8,
    rgb_data: &[u8],
    packet_length: usize,
) -> Result<RazerReport, ReportError> {
    if 3 + packet_length > crate::report::ARGUMENTS_LEN {
        return Err(ReportError::CapacityExceeded {
            requested: 3 + packet_length,
            capacity: crate::report::ARGUMENTS_LEN,
        });
    }
    if rgb_data.len() != packet_length {
        return Err(ReportError::PixelRunMismatch {
            expected: packet_length,
            got: rgb_data.len(),
        });
    }
    let mut report =
        RazerReport::new_extended(class::MATRIX, matrix::SET_CUSTOM_FRAME2, 3 + packet_length)?;
    packer::put_u8(&mut report, 0, row_index)?;
    packer::put_u8(&mut report, 1, start_col)?;
    packer::put_u8(&mut report, 2, stop_col)?;
    packer::put_run(&mut report, 3, packet_length, rgb_data)?;
    Ok(report.finalize())
}
