//! Standard protocol builders: device identity, classic per-LED control and
//! the legacy matrix effect family.
//!
//! Every builder is a pure function with a fixed `(command_class,
//! command_id)` pair; it packs its arguments, finalizes the checksum and
//! returns an immutable frame. "Get" builders write only their request
//! parameters — the response payload is decoded by [`crate::response`].

use crate::error::ReportError;
use crate::ids::{class, device, led, matrix};
use crate::packer;
use crate::report::RazerReport;
use crate::types::{DeviceMode, LedEffect, LedId, LedState, Rgb, VariableStorage, WaveDirection};

/// Pixel bytes one custom-frame row packet can carry after the three
/// addressing bytes (row, start, stop).
pub const ROW_PIXEL_CAPACITY: usize = crate::report::ARGUMENTS_LEN - 3;

// --- Device ---------------------------------------------------------------

pub fn set_device_mode(mode: DeviceMode, param: u8) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::DEVICE, device::SET_DEVICE_MODE, 2)?;
    packer::put_u8(&mut report, 0, mode.wire())?;
    packer::put_u8(&mut report, 1, param)?;
    Ok(report.finalize())
}

pub fn get_device_mode() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new(class::DEVICE, device::GET_DEVICE_MODE, 0)?.finalize())
}

pub fn get_serial() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new(class::DEVICE, device::GET_SERIAL, 0)?.finalize())
}

pub fn get_firmware_version() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new(class::DEVICE, device::GET_FIRMWARE_VERSION, 0)?.finalize())
}

// --- Classic per-LED ------------------------------------------------------

pub fn set_led_state(
    storage: VariableStorage,
    led_id: LedId,
    state: LedState,
) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::LED, led::SET_STATE, 3)?;
    packer::put_u8(&mut report, 0, storage.wire())?;
    packer::put_u8(&mut report, 1, led_id.wire())?;
    packer::put_u8(&mut report, 2, state.wire())?;
    Ok(report.finalize())
}

pub fn get_led_state(storage: VariableStorage, led_id: LedId) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::LED, led::GET_STATE, 2)?;
    packer::put_u8(&mut report, 0, storage.wire())?;
    packer::put_u8(&mut report, 1, led_id.wire())?;
    Ok(report.finalize())
}

/// Blink with the firmware's fixed 500 ms on/off duty cycle.
pub fn set_led_blinking(
    storage: VariableStorage,
    led_id: LedId,
) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::LED, led::SET_BLINKING, 4)?;
    packer::put_u8(&mut report, 0, storage.wire())?;
    packer::put_u8(&mut report, 1, led_id.wire())?;
    packer::put_u8(&mut report, 2, 0x05)?; // on duration, 100 ms units
    packer::put_u8(&mut report, 3, 0x05)?; // off duration
    Ok(report.finalize())
}

pub fn set_led_rgb(
    storage: VariableStorage,
    led_id: LedId,
    rgb: &Rgb,
) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::LED, led::SET_RGB, 5)?;
    packer::put_u8(&mut report, 0, storage.wire())?;
    packer::put_u8(&mut report, 1, led_id.wire())?;
    packer::put_rgb(&mut report, 2, rgb)?;
    Ok(report.finalize())
}

pub fn get_led_rgb(storage: VariableStorage, led_id: LedId) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::LED, led::GET_RGB, 2)?;
    packer::put_u8(&mut report, 0, storage.wire())?;
    packer::put_u8(&mut report, 1, led_id.wire())?;
    Ok(report.finalize())
}

pub fn set_led_effect(
    storage: VariableStorage,
    led_id: LedId,
    effect: LedEffect,
) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::LED, led::SET_EFFECT, 3)?;
    packer::put_u8(&mut report, 0, storage.wire())?;
    packer::put_u8(&mut report, 1, led_id.wire())?;
    packer::put_u8(&mut report, 2, effect.wire())?;
    Ok(report.finalize())
}

pub fn get_led_effect(storage: VariableStorage, led_id: LedId) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::LED, led::GET_EFFECT, 2)?;
    packer::put_u8(&mut report, 0, storage.wire())?;
    packer::put_u8(&mut report, 1, led_id.wire())?;
    Ok(report.finalize())
}

/// Brightness 0..=255.
pub fn set_led_brightness(
    storage: VariableStorage,
    led_id: LedId,
    brightness: u8,
) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::LED, led::SET_BRIGHTNESS, 3)?;
    packer::put_u8(&mut report, 0, storage.wire())?;
    packer::put_u8(&mut report, 1, led_id.wire())?;
    packer::put_u8(&mut report, 2, brightness)?;
    Ok(report.finalize())
}

pub fn get_led_brightness(
    storage: VariableStorage,
    led_id: LedId,
) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::LED, led::GET_BRIGHTNESS, 2)?;
    packer::put_u8(&mut report, 0, storage.wire())?;
    packer::put_u8(&mut report, 1, led_id.wire())?;
    Ok(report.finalize())
}

// --- Matrix effects -------------------------------------------------------

pub fn matrix_effect_none() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new(class::MATRIX, matrix::EFFECT_NONE, 0)?.finalize())
}

pub fn matrix_effect_wave(direction: WaveDirection) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::MATRIX, matrix::EFFECT_WAVE, 1)?;
    packer::put_u8(&mut report, 0, direction.wire())?;
    Ok(report.finalize())
}

pub fn matrix_effect_spectrum() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new(class::MATRIX, matrix::EFFECT_SPECTRUM, 0)?.finalize())
}

/// `speed` 1 (fast) ..= 4 (slow); values outside are clamped.
pub fn matrix_effect_reactive(speed: u8, rgb: &Rgb) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::MATRIX, matrix::EFFECT_REACTIVE, 4)?;
    packer::put_u8(&mut report, 0, speed.clamp(0x01, 0x04))?;
    packer::put_rgb(&mut report, 1, rgb)?;
    Ok(report.finalize())
}

pub fn matrix_effect_static(rgb: &Rgb) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::MATRIX, matrix::EFFECT_STATIC, 3)?;
    packer::put_rgb(&mut report, 0, rgb)?;
    Ok(report.finalize())
}

/// `speed` 1 (fast) ..= 3 (slow); values outside are clamped.
pub fn matrix_effect_starlight_single(speed: u8, rgb: &Rgb) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::MATRIX, matrix::EFFECT_STARLIGHT_SINGLE, 4)?;
    packer::put_u8(&mut report, 0, speed.clamp(0x01, 0x03))?;
    packer::put_rgb(&mut report, 1, rgb)?;
    Ok(report.finalize())
}

pub fn matrix_effect_starlight_dual(
    speed: u8,
    rgb1: &Rgb,
    rgb2: &Rgb,
) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::MATRIX, matrix::EFFECT_STARLIGHT_DUAL, 7)?;
    packer::put_u8(&mut report, 0, speed.clamp(0x01, 0x03))?;
    packer::put_rgb(&mut report, 1, rgb1)?;
    packer::put_rgb(&mut report, 4, rgb2)?;
    Ok(report.finalize())
}

pub fn matrix_effect_starlight_random(speed: u8) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::MATRIX, matrix::EFFECT_STARLIGHT_RANDOM, 1)?;
    packer::put_u8(&mut report, 0, speed.clamp(0x01, 0x03))?;
    Ok(report.finalize())
}

pub fn matrix_effect_breathing_single(rgb: &Rgb) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::MATRIX, matrix::EFFECT_BREATHING_SINGLE, 3)?;
    packer::put_rgb(&mut report, 0, rgb)?;
    Ok(report.finalize())
}

/// Primary color bytes precede the secondary color bytes.
pub fn matrix_effect_breathing_dual(rgb1: &Rgb, rgb2: &Rgb) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::MATRIX, matrix::EFFECT_BREATHING_DUAL, 6)?;
    packer::put_rgb(&mut report, 0, rgb1)?;
    packer::put_rgb(&mut report, 3, rgb2)?;
    Ok(report.finalize())
}

pub fn matrix_effect_breathing_random() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new(class::MATRIX, matrix::EFFECT_BREATHING_RANDOM, 0)?.finalize())
}

/// Switch the matrix to displaying the staged custom frame.
pub fn matrix_effect_custom_frame(storage: VariableStorage) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::MATRIX, matrix::EFFECT_CUSTOM, 1)?;
    packer::put_u8(&mut report, 0, storage.wire())?;
    Ok(report.finalize())
}

/// Upload pixel data for one row, columns `start_col..=stop_col` inclusive.
///
/// `rgb_data` must hold exactly `3 * (stop_col - start_col + 1)` bytes. A
/// range whose pixel bytes exceed [`ROW_PIXEL_CAPACITY`] fails with
/// [`ReportError::RowTooWide`]; wide rows are split across packets by
/// [`crate::custom_frame`].
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
    let mut report = RazerReport::new(class::MATRIX, matrix::SET_CUSTOM_FRAME, 3 + pixel_len)?;
    packer::put_u8(&mut report, 0, row_index)?;
    packer::put_u8(&mut report, 1, start_col)?;
    packer::put_u8(&mut report, 2, stop_col)?;
    packer::put_run(&mut report, 3, pixel_len, rgb_data)?;
    Ok(report.finalize())
}

/// Validate a column range and return its pixel byte count.
pub(crate) fn row_span_bytes(start_col: u8, stop_col: u8) -> Result<usize, ReportError> {
    if stop_col < start_col {
        return Err(ReportError::RowTooWide {
            start_col,
            stop_col,
            needed: 0,
            available: ROW_PIXEL_CAPACITY,
        });
    }
    let pixel_len = (usize::from(stop_col) - usize::from(start_col) + 1) * 3;
    if pixel_len > ROW_PIXEL_CAPACITY {
        return Err(ReportError::RowTooWide {
            start_col,
            stop_col,
            needed: pixel_len,
            available: ROW_PIXEL_CAPACITY,
        });
    }
    Ok(pixel_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::TRANSACTION_STANDARD;

    #[test]
    fn test_matrix_effect_static_layout() {
        let report = matrix_effect_static(&Rgb::RED).unwrap();
        assert_eq!(report.command_class(), 0x0F);
        assert_eq!(report.command_id(), matrix::EFFECT_STATIC);
        assert_eq!(report.data_size(), 3);
        assert_eq!(report.arguments()[..3], [255, 0, 0]);
        assert_eq!(report.transaction_id(), TRANSACTION_STANDARD);
        // Stored checksum equals an independent XOR of the frame bytes.
        let wire = report.to_wire();
        let folded = wire[3..89].iter().fold(0u8, |acc, &b| acc ^ b);
        assert_eq!(report.checksum(), folded);
    }

    #[test]
    fn test_no_argument_effects_report_zero_size() {
        for report in [
            matrix_effect_none().unwrap(),
            matrix_effect_spectrum().unwrap(),
            matrix_effect_breathing_random().unwrap(),
        ] {
            assert_eq!(report.data_size(), 0);
            assert!(report.checksum_is_valid());
        }
    }

    #[test]
    fn test_breathing_dual_color_order() {
        let report = matrix_effect_breathing_dual(&Rgb::new(1, 2, 3), &Rgb::new(4, 5, 6)).unwrap();
        assert_eq!(report.data_size(), 6);
        assert_eq!(report.arguments()[..6], [1, 2, 3, 4, 5, 6]); // primary first
    }

    #[test]
    fn test_reactive_speed_is_clamped() {
        let report = matrix_effect_reactive(9, &Rgb::GREEN).unwrap();
        assert_eq!(report.arguments()[0], 0x04);
        let report = matrix_effect_reactive(0, &Rgb::GREEN).unwrap();
        assert_eq!(report.arguments()[0], 0x01);
    }

    #[test]
    fn test_starlight_dual_layout() {
        let report =
            matrix_effect_starlight_dual(2, &Rgb::new(9, 8, 7), &Rgb::new(6, 5, 4)).unwrap();
        assert_eq!(report.data_size(), 7);
        assert_eq!(report.arguments()[..7], [2, 9, 8, 7, 6, 5, 4]);
    }

    #[test]
    fn test_led_rgb_layout() {
        let report =
            set_led_rgb(VariableStorage::VarStore, LedId::Logo, &Rgb::new(7, 7, 7)).unwrap();
        assert_eq!(report.command_class(), 0x03);
        assert_eq!(report.arguments()[..5], [0x01, 0x04, 7, 7, 7]);
    }

    #[test]
    fn test_led_blinking_duty_cycle() {
        let report = set_led_blinking(VariableStorage::NoStore, LedId::Macro).unwrap();
        assert_eq!(report.data_size(), 4);
        assert_eq!(report.arguments()[..4], [0x00, 0x07, 0x05, 0x05]);
    }

    #[test]
    fn test_get_builders_write_request_params_only() {
        let report = get_led_brightness(VariableStorage::VarStore, LedId::Backlight).unwrap();
        assert_eq!(report.data_size(), 2);
        assert_eq!(report.arguments()[..2], [0x01, 0x05]);
        assert_eq!(get_serial().unwrap().data_size(), 0);
    }

    #[test]
    fn test_custom_frame_accepts_maximal_range() {
        // 25 columns = 75 pixel bytes is the widest single packet.
        let pixels = vec![0xAA; 25 * 3];
        let report = matrix_set_custom_frame(4, 0, 24, &pixels).unwrap();
        assert_eq!(report.data_size() as usize, 3 + 25 * 3);
        assert_eq!(report.arguments()[..3], [4, 0, 24]);
        assert_eq!(report.arguments()[3], 0xAA);
    }

    #[test]
    fn test_custom_frame_rejects_overwide_range() {
        let pixels = vec![0u8; 26 * 3];
        let err = matrix_set_custom_frame(0, 0, 25, &pixels).unwrap_err();
        assert!(matches!(err, ReportError::RowTooWide { needed: 78, .. }));
    }

    #[test]
    fn test_custom_frame_rejects_pixel_count_mismatch() {
        let err = matrix_set_custom_frame(0, 0, 4, &[0u8; 9]).unwrap_err();
        assert_eq!(
            err,
            ReportError::PixelRunMismatch {
                expected: 15,
                got: 9
            }
        );
    }

    #[test]
    fn test_custom_frame_rejects_inverted_range() {
        assert!(matches!(
            matrix_set_custom_frame(0, 5, 2, &[]),
            Err(ReportError::RowTooWide { .. })
        ));
    }

    #[test]
    fn test_device_mode_layout() {
        let report = set_device_mode(DeviceMode::Driver, 0x00).unwrap();
        assert_eq!(report.command_class(), 0x00);
        assert_eq!(report.command_id(), 0x04);
        assert_eq!(report.arguments()[..2], [0x03, 0x00]);
    }
}
