//! Mouse extended matrix builders.
//!
//! Mice that speak the extended argument layout keep the default 0xFF
//! transaction id and address their effects under a separate command class.
//! The family implements the effect subset mouse firmware actually ships;
//! wave, wheel and starlight stay with the keyboard families.

use crate::error::ReportError;
use crate::ids::{class, matrix};
use crate::packer;
use crate::report::RazerReport;
use crate::types::{LedId, Rgb, VariableStorage};

fn effect(
    id: u8,
    storage: VariableStorage,
    led_id: LedId,
    extra: usize,
) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new_mouse(class::MOUSE_MATRIX, id, 2 + extra)?;
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
