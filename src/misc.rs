//! Builders outside the lighting families: input behavior, sensor
//! resolution, power management, polling and dongle pairing.

use crate::error::ReportError;
use crate::ids::{class, device, dpi, input, led, notebook, power};
use crate::packer;
use crate::report::{RazerReport, ARGUMENTS_LEN};
use crate::types::{OptimizationMode, PollingRate, PowerMode, VariableStorage};

/// Most DPI stages one stage table can carry.
pub const MAX_DPI_STAGES: usize = 5;

/// Pixel bytes a single-row frame packet can carry after the two
/// addressing bytes (start, stop).
pub const ONE_ROW_PIXEL_CAPACITY: usize = ARGUMENTS_LEN - 2;

// --- Input ----------------------------------------------------------------

/// Enable or disable the Fn-key-free media layer.
pub fn set_fn_key_toggle(enabled: bool) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::INPUT, input::SET_FN_KEY_TOGGLE, 2)?;
    packer::put_u8(&mut report, 1, u8::from(enabled))?;
    Ok(report.finalize())
}

pub fn set_keyswitch_optimization1(mode: OptimizationMode) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::INPUT, input::SET_KEYSWITCH_OPTIMIZATION1, 2)?;
    packer::put_u8(&mut report, 1, mode.wire())?;
    Ok(report.finalize())
}

/// Later firmware revision of the keyswitch optimization write; same
/// argument layout under a different id.
pub fn set_keyswitch_optimization2(mode: OptimizationMode) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::INPUT, input::SET_KEYSWITCH_OPTIMIZATION2, 2)?;
    packer::put_u8(&mut report, 1, mode.wire())?;
    Ok(report.finalize())
}

pub fn get_keyswitch_optimization() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new(class::INPUT, input::GET_KEYSWITCH_OPTIMIZATION, 0)?.finalize())
}

/// Fire the reactive effect once without a keypress.
pub fn matrix_reactive_trigger() -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::INPUT, input::REACTIVE_TRIGGER, 1)?;
    packer::put_u8(&mut report, 0, 0x01)?;
    Ok(report.finalize())
}

/// Scroll wheel mode word; 0 is tactile, 1 is free spin.
pub fn set_scroll_mode(mode: u32) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::INPUT, input::SET_SCROLL_MODE, 4)?;
    packer::put_u32_be(&mut report, 0, mode)?;
    Ok(report.finalize())
}

pub fn get_scroll_mode() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new(class::INPUT, input::GET_SCROLL_MODE, 0)?.finalize())
}

pub fn set_scroll_acceleration(enabled: bool) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::INPUT, input::SET_SCROLL_ACCELERATION, 1)?;
    packer::put_u8(&mut report, 0, u8::from(enabled))?;
    Ok(report.finalize())
}

pub fn get_scroll_acceleration() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new(class::INPUT, input::GET_SCROLL_ACCELERATION, 0)?.finalize())
}

/// Smart reel switches between tactile and free spin based on flick speed.
pub fn set_scroll_smart_reel(enabled: bool) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::INPUT, input::SET_SCROLL_SMART_REEL, 1)?;
    packer::put_u8(&mut report, 0, u8::from(enabled))?;
    Ok(report.finalize())
}

pub fn get_scroll_smart_reel() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new(class::INPUT, input::GET_SCROLL_SMART_REEL, 0)?.finalize())
}

// --- Single-row frame -----------------------------------------------------

/// Upload pixels for a one-row device (strips, mouse mats without a full
/// matrix). Columns `start_col..=stop_col` inclusive; there is no row byte,
/// so the packet fits one more pixel than the matrix row upload.
pub fn one_row_set_custom_frame(
    start_col: u8,
    stop_col: u8,
    rgb_data: &[u8],
) -> Result<RazerReport, ReportError> {
    if stop_col < start_col {
        return Err(ReportError::RowTooWide {
            start_col,
            stop_col,
            needed: 0,
            available: ONE_ROW_PIXEL_CAPACITY,
        });
    }
    let pixel_len = (usize::from(stop_col) - usize::from(start_col) + 1) * 3;
    if pixel_len > ONE_ROW_PIXEL_CAPACITY {
        return Err(ReportError::RowTooWide {
            start_col,
            stop_col,
            needed: pixel_len,
            available: ONE_ROW_PIXEL_CAPACITY,
        });
    }
    if rgb_data.len() != pixel_len {
        return Err(ReportError::PixelRunMismatch {
            expected: pixel_len,
            got: rgb_data.len(),
        });
    }
    let mut report = RazerReport::new(class::LED, led::SET_ONE_ROW_FRAME, 2 + pixel_len)?;
    packer::put_u8(&mut report, 0, start_col)?;
    packer::put_u8(&mut report, 1, stop_col)?;
    packer::put_run(&mut report, 2, pixel_len, rgb_data)?;
    Ok(report.finalize())
}

// --- Polling --------------------------------------------------------------

/// First-generation polling rate. Only 125, 500 and 1000 Hz exist in this
/// encoding; anything else fails with [`ReportError::UnsupportedOperation`].
pub fn set_polling_rate(rate_hz: u16) -> Result<RazerReport, ReportError> {
    let rate = PollingRate::from_hz(rate_hz)
        .ok_or(ReportError::UnsupportedOperation("polling rate not expressible"))?;
    let mut report = RazerReport::new(class::DEVICE, device::SET_POLLING_RATE, 2)?;
    packer::put_u16_be(&mut report, 0, rate.to_hz())?;
    Ok(report.finalize())
}

pub fn get_polling_rate() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new(class::DEVICE, device::GET_POLLING_RATE, 0)?.finalize())
}

/// Second-generation polling rate for HyperPolling firmware; carries the
/// rate and a device-specific argument word.
pub fn set_polling_rate2(rate_hz: u16, argument: u16) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::DEVICE, device::SET_POLLING_RATE2, 4)?;
    packer::put_u16_be(&mut report, 0, rate_hz)?;
    packer::put_u16_be(&mut report, 2, argument)?;
    Ok(report.finalize())
}

pub fn get_polling_rate2() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new(class::DEVICE, device::GET_POLLING_RATE2, 0)?.finalize())
}

// --- Dongle ---------------------------------------------------------------

/// LED indicator behavior of a HyperPolling wireless dongle.
pub fn set_dongle_led_mode(mode: u8) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::DEVICE, device::SET_DONGLE_LED_MODE, 1)?;
    packer::put_u8(&mut report, 0, mode)?;
    Ok(report.finalize())
}

/// First half of the dongle pairing handshake; `pid` is the USB product id
/// of the device being paired.
pub fn dongle_pair_step1(pid: u16) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::DEVICE, device::DONGLE_PAIR_STEP1, 2)?;
    packer::put_u16_be(&mut report, 0, pid)?;
    Ok(report.finalize())
}

pub fn dongle_pair_step2(pid: u16) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::DEVICE, device::DONGLE_PAIR_STEP2, 2)?;
    packer::put_u16_be(&mut report, 0, pid)?;
    Ok(report.finalize())
}

pub fn dongle_unpair(pid: u16) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::DEVICE, device::DONGLE_UNPAIR, 2)?;
    packer::put_u16_be(&mut report, 0, pid)?;
    Ok(report.finalize())
}

// --- DPI ------------------------------------------------------------------

/// Set X and Y resolution in DPI.
pub fn set_dpi_xy(storage: VariableStorage, x: u16, y: u16) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::DPI, dpi::SET_XY, 5)?;
    packer::put_u8(&mut report, 0, storage.wire())?;
    packer::put_u16_be(&mut report, 1, x)?;
    packer::put_u16_be(&mut report, 3, y)?;
    Ok(report.finalize())
}

pub fn get_dpi_xy(storage: VariableStorage) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::DPI, dpi::GET_XY, 1)?;
    packer::put_u8(&mut report, 0, storage.wire())?;
    Ok(report.finalize())
}

/// Byte-resolution DPI for older sensors; each unit is sensor-specific.
pub fn set_dpi_xy_byte(x: u8, y: u8) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::DPI, dpi::SET_XY_BYTE, 2)?;
    packer::put_u8(&mut report, 0, x)?;
    packer::put_u8(&mut report, 1, y)?;
    Ok(report.finalize())
}

pub fn get_dpi_xy_byte() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new(class::DPI, dpi::GET_XY_BYTE, 0)?.finalize())
}

/// Program the DPI stage table.
///
/// `stages` holds 1..=[`MAX_DPI_STAGES`] `(x, y)` pairs; `active_stage` is a
/// zero-based index into it and is clamped to the last stage.
pub fn set_dpi_stages(
    storage: VariableStorage,
    active_stage: u8,
    stages: &[(u16, u16)],
) -> Result<RazerReport, ReportError> {
    if stages.is_empty() || stages.len() > MAX_DPI_STAGES {
        return Err(ReportError::TooManyStages {
            count: stages.len(),
            max: MAX_DPI_STAGES,
        });
    }
    let active = usize::from(active_stage).min(stages.len() - 1) as u8;
    let mut report =
        RazerReport::new(class::DPI, dpi::SET_STAGES, 3 + 4 * stages.len())?;
    packer::put_u8(&mut report, 0, storage.wire())?;
    packer::put_u8(&mut report, 1, active)?;
    packer::put_u8(&mut report, 2, stages.len() as u8)?;
    for (i, &(x, y)) in stages.iter().enumerate() {
        packer::put_u16_be(&mut report, 3 + 4 * i, x)?;
        packer::put_u16_be(&mut report, 5 + 4 * i, y)?;
    }
    Ok(report.finalize())
}

pub fn get_dpi_stages(storage: VariableStorage) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::DPI, dpi::GET_STAGES, 1)?;
    packer::put_u8(&mut report, 0, storage.wire())?;
    Ok(report.finalize())
}

// --- Power ----------------------------------------------------------------

pub fn get_battery_level() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new(class::POWER, power::GET_BATTERY_LEVEL, 0)?.finalize())
}

pub fn get_charging_status() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new(class::POWER, power::GET_CHARGING_STATUS, 0)?.finalize())
}

/// Battery percentage below which the device signals low battery.
pub fn set_low_battery_threshold(percent: u8) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::POWER, power::SET_LOW_BATTERY_THRESHOLD, 1)?;
    packer::put_u8(&mut report, 0, percent)?;
    Ok(report.finalize())
}

pub fn get_low_battery_threshold() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new(class::POWER, power::GET_LOW_BATTERY_THRESHOLD, 0)?.finalize())
}

/// Seconds of inactivity before wireless sleep, clamped to 60..=900.
pub fn set_idle_time(seconds: u16) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::POWER, power::SET_IDLE_TIME, 2)?;
    packer::put_u16_be(&mut report, 0, seconds.clamp(60, 900))?;
    Ok(report.finalize())
}

pub fn get_idle_time() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new(class::POWER, power::GET_IDLE_TIME, 0)?.finalize())
}

pub fn set_dock_brightness(brightness: u8) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::POWER, power::SET_DOCK_BRIGHTNESS, 1)?;
    packer::put_u8(&mut report, 0, brightness)?;
    Ok(report.finalize())
}

pub fn get_dock_brightness() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new(class::POWER, power::GET_DOCK_BRIGHTNESS, 0)?.finalize())
}

/// Charging dock behavior; 0 charges to full, 1 holds the BHO ceiling.
pub fn set_dock_charge_type(charge_type: u8) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::POWER, power::SET_DOCK_CHARGE_TYPE, 1)?;
    packer::put_u8(&mut report, 0, charge_type)?;
    Ok(report.finalize())
}

/// Battery health optimizer charge ceiling in percent; 0 disables it.
pub fn set_bho(threshold: u8) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::POWER, power::SET_BHO, 1)?;
    packer::put_u8(&mut report, 0, threshold)?;
    Ok(report.finalize())
}

pub fn get_bho() -> Result<RazerReport, ReportError> {
    Ok(RazerReport::new(class::POWER, power::GET_BHO, 0)?.finalize())
}

// --- Notebook -------------------------------------------------------------

/// Blade lid brightness. The leading 0x01 selects the backlight target.
pub fn set_blade_brightness(brightness: u8) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::NOTEBOOK, notebook::SET_BRIGHTNESS, 2)?;
    packer::put_u8(&mut report, 0, 0x01)?;
    packer::put_u8(&mut report, 1, brightness)?;
    Ok(report.finalize())
}

pub fn get_blade_brightness() -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::NOTEBOOK, notebook::GET_BRIGHTNESS, 1)?;
    packer::put_u8(&mut report, 0, 0x01)?;
    Ok(report.finalize())
}

/// Performance mode for one thermal zone; `fan_rpm_scaled` is the fan RPM
/// divided by 100, or 0 for automatic.
pub fn set_power_mode(
    zone: u8,
    mode: PowerMode,
    fan_rpm_scaled: u8,
) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::NOTEBOOK, notebook::SET_POWER_MODE, 4)?;
    packer::put_u8(&mut report, 1, zone)?;
    packer::put_u8(&mut report, 2, mode.wire())?;
    packer::put_u8(&mut report, 3, fan_rpm_scaled)?;
    Ok(report.finalize())
}

pub fn get_power_mode(zone: u8) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::NOTEBOOK, notebook::GET_POWER_MODE, 2)?;
    packer::put_u8(&mut report, 1, zone)?;
    Ok(report.finalize())
}

/// CPU/GPU boost level for one zone, valid in custom power mode.
pub fn set_boost(zone: u8, boost: u8) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::NOTEBOOK, notebook::SET_BOOST, 3)?;
    packer::put_u8(&mut report, 1, zone)?;
    packer::put_u8(&mut report, 2, boost)?;
    Ok(report.finalize())
}

pub fn get_boost(zone: u8) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::NOTEBOOK, notebook::GET_BOOST, 2)?;
    packer::put_u8(&mut report, 1, zone)?;
    Ok(report.finalize())
}

/// Manual fan speed for one zone, RPM divided by 100; 0 returns to
/// automatic control.
pub fn set_fan_speed(zone: u8, rpm_scaled: u8) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::NOTEBOOK, notebook::SET_FAN_SPEED, 3)?;
    packer::put_u8(&mut report, 1, zone)?;
    packer::put_u8(&mut report, 2, rpm_scaled)?;
    Ok(report.finalize())
}

pub fn get_fan_speed(zone: u8) -> Result<RazerReport, ReportError> {
    let mut report = RazerReport::new(class::NOTEBOOK, notebook::GET_FAN_SPEED, 2)?;
    packer::put_u8(&mut report, 1, zone)?;
    Ok(report.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polling_rate_is_big_endian() {
        let report = set_polling_rate(1000).unwrap();
        assert_eq!(report.command_class(), 0x00);
        assert_eq!(report.command_id(), device::SET_POLLING_RATE);
        assert_eq!(report.data_size(), 2);
        assert_eq!(report.arguments()[..2], [0x03, 0xE8]);
    }

    #[test]
    fn test_polling_rate_rejects_inexpressible_rate() {
        assert_eq!(
            set_polling_rate(250).unwrap_err(),
            ReportError::UnsupportedOperation("polling rate not expressible")
        );
    }

    #[test]
    fn test_polling_rate2_layout() {
        let report = set_polling_rate2(8000, 0x0001).unwrap();
        assert_eq!(report.data_size(), 4);
        assert_eq!(report.arguments()[..4], [0x1F, 0x40, 0x00, 0x01]);
    }

    #[test]
    fn test_dpi_xy_layout() {
        let report = set_dpi_xy(VariableStorage::VarStore, 1800, 900).unwrap();
        assert_eq!(report.command_class(), 0x04);
        assert_eq!(report.data_size(), 5);
        assert_eq!(report.arguments()[..5], [0x01, 0x07, 0x08, 0x03, 0x84]);
    }

    #[test]
    fn test_dpi_stages_full_table() {
        let stages = [(400, 400), (800, 800), (1600, 1600), (3200, 3200), (6400, 6400)];
        let report = set_dpi_stages(VariableStorage::VarStore, 2, &stages).unwrap();
        assert_eq!(report.data_size() as usize, 3 + 4 * 5);
        assert_eq!(report.arguments()[..3], [0x01, 2, 5]);
        // First stage: 400 = 0x0190 for both axes.
        assert_eq!(report.arguments()[3..7], [0x01, 0x90, 0x01, 0x90]);
        // Last stage: 6400 = 0x1900.
        assert_eq!(report.arguments()[19..23], [0x19, 0x00, 0x19, 0x00]);
    }

    #[test]
    fn test_dpi_stages_rejects_bad_counts() {
        let six = [(800u16, 800u16); 6];
        assert_eq!(
            set_dpi_stages(VariableStorage::NoStore, 0, &six).unwrap_err(),
            ReportError::TooManyStages { count: 6, max: 5 }
        );
        assert!(matches!(
            set_dpi_stages(VariableStorage::NoStore, 0, &[]),
            Err(ReportError::TooManyStages { count: 0, .. })
        ));
    }

    #[test]
    fn test_dpi_stages_clamps_active_stage() {
        let stages = [(800, 800), (1600, 1600)];
        let report = set_dpi_stages(VariableStorage::NoStore, 7, &stages).unwrap();
        assert_eq!(report.arguments()[1], 1);
    }

    #[test]
    fn test_idle_time_clamped_to_firmware_range() {
        assert_eq!(set_idle_time(10).unwrap().arguments()[..2], [0, 60]);
        assert_eq!(set_idle_time(600).unwrap().arguments()[..2], [0x02, 0x58]);
        assert_eq!(set_idle_time(4000).unwrap().arguments()[..2], [0x03, 0x84]);
    }

    #[test]
    fn test_one_row_frame_fits_one_extra_pixel() {
        // 26 columns fit here; the matrix row upload caps at 25.
        let pixels = vec![0x11; 26 * 3];
        let report = one_row_set_custom_frame(0, 25, &pixels).unwrap();
        assert_eq!(report.command_class(), 0x03);
        assert_eq!(report.command_id(), led::SET_ONE_ROW_FRAME);
        assert_eq!(report.data_size() as usize, 2 + 26 * 3);
        assert_eq!(report.arguments()[..2], [0, 25]);

        let too_many = vec![0u8; 27 * 3];
        assert!(matches!(
            one_row_set_custom_frame(0, 26, &too_many),
            Err(ReportError::RowTooWide { needed: 81, .. })
        ));
    }

    #[test]
    fn test_fn_key_toggle_layout() {
        let report = set_fn_key_toggle(true).unwrap();
        assert_eq!(report.command_class(), 0x02);
        assert_eq!(report.data_size(), 2);
        assert_eq!(report.arguments()[..2], [0x00, 0x01]);
    }

    #[test]
    fn test_keyswitch_optimization_revisions_share_layout() {
        let a = set_keyswitch_optimization1(OptimizationMode::Gaming).unwrap();
        let b = set_keyswitch_optimization2(OptimizationMode::Gaming).unwrap();
        assert_eq!(a.arguments(), b.arguments());
        assert_ne!(a.command_id(), b.command_id());
    }

    #[test]
    fn test_reactive_trigger_layout() {
        let report = matrix_reactive_trigger().unwrap();
        assert_eq!(report.command_id(), input::REACTIVE_TRIGGER);
        assert_eq!(report.data_size(), 1);
        assert_eq!(report.arguments()[0], 0x01);
    }

    #[test]
    fn test_scroll_mode_is_big_endian_word() {
        let report = set_scroll_mode(1).unwrap();
        assert_eq!(report.data_size(), 4);
        assert_eq!(report.arguments()[..4], [0, 0, 0, 1]);
    }

    #[test]
    fn test_dongle_pairing_carries_pid() {
        for report in [
            dongle_pair_step1(0x00B7).unwrap(),
            dongle_pair_step2(0x00B7).unwrap(),
            dongle_unpair(0x00B7).unwrap(),
        ] {
            assert_eq!(report.data_size(), 2);
            assert_eq!(report.arguments()[..2], [0x00, 0xB7]);
        }
    }

    #[test]
    fn test_blade_brightness_targets_backlight() {
        let report = set_blade_brightness(200).unwrap();
        assert_eq!(report.command_class(), 0x0E);
        assert_eq!(report.arguments()[..2], [0x01, 200]);
        assert_eq!(get_blade_brightness().unwrap().arguments()[0], 0x01);
    }

    #[test]
    fn test_power_mode_layout() {
        let report = set_power_mode(0x01, PowerMode::Custom, 45).unwrap();
        assert_eq!(report.command_id(), notebook::SET_POWER_MODE);
        assert_eq!(report.data_size(), 4);
        assert_eq!(report.arguments()[..4], [0x00, 0x01, 0x04, 45]);
        assert_eq!(get_power_mode(0x01).unwrap().arguments()[..2], [0x00, 0x01]);
    }

    #[test]
    fn test_fan_and_boost_zone_layout() {
        assert_eq!(set_fan_speed(0x02, 53).unwrap().arguments()[..3], [0x00, 0x02, 53]);
        assert_eq!(set_boost(0x01, 2).unwrap().arguments()[..3], [0x00, 0x01, 2]);
        assert_eq!(get_boost(0x01).unwrap().data_size(), 2);
    }

    #[test]
    fn test_bho_layout() {
        assert_eq!(set_bho(80).unwrap().arguments()[0], 80);
        assert_eq!(get_bho().unwrap().data_size(), 0);
    }

    #[test]
    fn test_get_builders_request_sizes() {
        assert_eq!(get_battery_level().unwrap().data_size(), 0);
        assert_eq!(get_charging_status().unwrap().data_size(), 0);
        assert_eq!(get_dpi_xy(VariableStorage::NoStore).unwrap().data_size(), 1);
        assert_eq!(get_dpi_stages(VariableStorage::VarStore).unwrap().data_size(), 1);
        assert_eq!(get_keyswitch_optimization().unwrap().data_size(), 0);
        assert_eq!(get_polling_rate2().unwrap().data_size(), 0);
    }
}
