//! Response frame decoding.
//!
//! A device response echoes the request's command pair with the status byte
//! set and the answer written into the argument buffer. Decoders here take
//! an already checksum-validated frame (see [`RazerReport::from_wire`]),
//! verify the command echo, and pull typed values out of the same offsets
//! the builders write to.

use crate::error::ParseError;
use crate::ids::{class, device, dpi, input, led, matrix, notebook, power};
use crate::misc::MAX_DPI_STAGES;
use crate::packer;
use crate::report::RazerReport;
use crate::types::{DeviceMode, LedEffect, LedState, OptimizationMode, PowerMode, Rgb};

/// Device-reported status of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    /// Request frame as built by the host; never seen in a response.
    NewCommand = 0x00,
    /// Device is still processing; poll again.
    Busy = 0x01,
    Success = 0x02,
    Failure = 0x03,
    Timeout = 0x04,
    /// Command not implemented by this firmware.
    NotSupported = 0x05,
}

impl Status {
    pub fn from_wire(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Self::NewCommand),
            0x01 => Some(Self::Busy),
            0x02 => Some(Self::Success),
            0x03 => Some(Self::Failure),
            0x04 => Some(Self::Timeout),
            0x05 => Some(Self::NotSupported),
            _ => None,
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

/// Typed status byte of a response frame.
pub fn status(report: &RazerReport) -> Result<Status, ParseError> {
    Status::from_wire(report.status()).ok_or(ParseError::InvalidValue {
        field: "status",
        value: report.status(),
    })
}

/// Check that a response echoes the expected command pair.
pub fn expect(
    report: &RazerReport,
    expected_class: u8,
    expected_id: u8,
) -> Result<(), ParseError> {
    if report.command_class() != expected_class || report.command_id() != expected_id {
        return Err(ParseError::CommandMismatch {
            expected_class,
            expected_id,
            got_class: report.command_class(),
            got_id: report.command_id(),
        });
    }
    Ok(())
}

// --- Device ---------------------------------------------------------------

pub fn decode_device_mode(report: &RazerReport) -> Result<DeviceMode, ParseError> {
    expect(report, class::DEVICE, device::GET_DEVICE_MODE)?;
    let value = packer::get_u8(report, 0);
    DeviceMode::from_wire(value).ok_or(ParseError::InvalidValue {
        field: "device mode",
        value,
    })
}

/// Serial number: up to 22 ASCII bytes, NUL padded.
pub fn decode_serial(report: &RazerReport) -> Result<String, ParseError> {
    expect(report, class::DEVICE, device::GET_SERIAL)?;
    let raw = &report.arguments()[..22];
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    Ok(String::from_utf8_lossy(&raw[..end]).into_owned())
}

/// Firmware version as (major, minor).
pub fn decode_firmware_version(report: &RazerReport) -> Result<(u8, u8), ParseError> {
    expect(report, class::DEVICE, device::GET_FIRMWARE_VERSION)?;
    Ok((packer::get_u8(report, 0), packer::get_u8(report, 1)))
}

pub fn decode_polling_rate(report: &RazerReport) -> Result<u16, ParseError> {
    expect(report, class::DEVICE, device::GET_POLLING_RATE)?;
    Ok(packer::get_u16_be(report, 0))
}

pub fn decode_polling_rate2(report: &RazerReport) -> Result<u16, ParseError> {
    expect(report, class::DEVICE, device::GET_POLLING_RATE2)?;
    Ok(packer::get_u16_be(report, 0))
}

// --- LED ------------------------------------------------------------------

// Per-LED answers sit after the echoed [storage, led_id] pair.

pub fn decode_led_state(report: &RazerReport) -> Result<LedState, ParseError> {
    expect(report, class::LED, led::GET_STATE)?;
    let value = packer::get_u8(report, 2);
    LedState::from_wire(value).ok_or(ParseError::InvalidValue {
        field: "led state",
        value,
    })
}

pub fn decode_led_rgb(report: &RazerReport) -> Result<Rgb, ParseError> {
    expect(report, class::LED, led::GET_RGB)?;
    Ok(packer::get_rgb(report, 2))
}

pub fn decode_led_effect(report: &RazerReport) -> Result<LedEffect, ParseError> {
    expect(report, class::LED, led::GET_EFFECT)?;
    let value = packer::get_u8(report, 2);
    LedEffect::from_wire(value).ok_or(ParseError::InvalidValue {
        field: "led effect",
        value,
    })
}

pub fn decode_led_brightness(report: &RazerReport) -> Result<u8, ParseError> {
    expect(report, class::LED, led::GET_BRIGHTNESS)?;
    Ok(packer::get_u8(report, 2))
}

pub fn decode_extended_brightness(report: &RazerReport) -> Result<u8, ParseError> {
    expect(report, class::MATRIX, matrix::GET_BRIGHTNESS)?;
    Ok(packer::get_u8(report, 2))
}

// --- Input ----------------------------------------------------------------

pub fn decode_keyswitch_optimization(
    report: &RazerReport,
) -> Result<OptimizationMode, ParseError> {
    expect(report, class::INPUT, input::GET_KEYSWITCH_OPTIMIZATION)?;
    let value = packer::get_u8(report, 1);
    OptimizationMode::from_wire(value).ok_or(ParseError::InvalidValue {
        field: "keyswitch optimization",
        value,
    })
}

pub fn decode_scroll_mode(report: &RazerReport) -> Result<u32, ParseError> {
    expect(report, class::INPUT, input::GET_SCROLL_MODE)?;
    Ok(packer::get_u32_be(report, 0))
}

pub fn decode_scroll_acceleration(report: &RazerReport) -> Result<bool, ParseError> {
    expect(report, class::INPUT, input::GET_SCROLL_ACCELERATION)?;
    Ok(packer::get_u8(report, 0) != 0)
}

pub fn decode_scroll_smart_reel(report: &RazerReport) -> Result<bool, ParseError> {
    expect(report, class::INPUT, input::GET_SCROLL_SMART_REEL)?;
    Ok(packer::get_u8(report, 0) != 0)
}

// --- DPI ------------------------------------------------------------------

pub fn decode_dpi_xy(report: &RazerReport) -> Result<(u16, u16), ParseError> {
    expect(report, class::DPI, dpi::GET_XY)?;
    Ok((packer::get_u16_be(report, 1), packer::get_u16_be(report, 3)))
}

pub fn decode_dpi_xy_byte(report: &RazerReport) -> Result<(u8, u8), ParseError> {
    expect(report, class::DPI, dpi::GET_XY_BYTE)?;
    Ok((packer::get_u8(report, 0), packer::get_u8(report, 1)))
}

/// Decoded DPI stage table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpiStages {
    /// Zero-based index of the active stage.
    pub active: u8,
    pub stages: Vec<(u16, u16)>,
}

pub fn decode_dpi_stages(report: &RazerReport) -> Result<DpiStages, ParseError> {
    expect(report, class::DPI, dpi::GET_STAGES)?;
    let count = packer::get_u8(report, 2);
    if count == 0 || usize::from(count) > MAX_DPI_STAGES {
        return Err(ParseError::InvalidValue {
            field: "dpi stage count",
            value: count,
        });
    }
    let stages = (0..usize::from(count))
        .map(|i| (packer::get_u16_be(report, 3 + 4 * i), packer::get_u16_be(report, 5 + 4 * i)))
        .collect();
    Ok(DpiStages {
        active: packer::get_u8(report, 1),
        stages,
    })
}

// --- Power ----------------------------------------------------------------

/// Raw battery level 0..=255; scale by 100/255 for percent.
pub fn decode_battery_level(report: &RazerReport) -> Result<u8, ParseError> {
    expect(report, class::POWER, power::GET_BATTERY_LEVEL)?;
    Ok(packer::get_u8(report, 1))
}

pub fn decode_charging_status(report: &RazerReport) -> Result<bool, ParseError> {
    expect(report, class::POWER, power::GET_CHARGING_STATUS)?;
    Ok(packer::get_u8(report, 1) != 0)
}

pub fn decode_low_battery_threshold(report: &RazerReport) -> Result<u8, ParseError> {
    expect(report, class::POWER, power::GET_LOW_BATTERY_THRESHOLD)?;
    Ok(packer::get_u8(report, 0))
}

pub fn decode_idle_time(report: &RazerReport) -> Result<u16, ParseError> {
    expect(report, class::POWER, power::GET_IDLE_TIME)?;
    Ok(packer::get_u16_be(report, 0))
}

pub fn decode_dock_brightness(report: &RazerReport) -> Result<u8, ParseError> {
    expect(report, class::POWER, power::GET_DOCK_BRIGHTNESS)?;
    Ok(packer::get_u8(report, 0))
}

pub fn decode_bho(report: &RazerReport) -> Result<u8, ParseError> {
    expect(report, class::POWER, power::GET_BHO)?;
    Ok(packer::get_u8(report, 0))
}

// --- Notebook -------------------------------------------------------------

pub fn decode_blade_brightness(report: &RazerReport) -> Result<u8, ParseError> {
    expect(report, class::NOTEBOOK, notebook::GET_BRIGHTNESS)?;
    Ok(packer::get_u8(report, 1))
}

pub fn decode_power_mode(report: &RazerReport) -> Result<PowerMode, ParseError> {
    expect(report, class::NOTEBOOK, notebook::GET_POWER_MODE)?;
    let value = packer::get_u8(report, 2);
    PowerMode::from_wire(value).ok_or(ParseError::InvalidValue {
        field: "power mode",
        value,
    })
}

pub fn decode_boost(report: &RazerReport) -> Result<u8, ParseError> {
    expect(report, class::NOTEBOOK, notebook::GET_BOOST)?;
    Ok(packer::get_u8(report, 2))
}

/// Fan RPM divided by 100, 0 when automatic.
pub fn decode_fan_speed(report: &RazerReport) -> Result<u8, ParseError> {
    expect(report, class::NOTEBOOK, notebook::GET_FAN_SPEED)?;
    Ok(packer::get_u8(report, 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packer::{put_bytes, put_u16_be, put_u8};

    // Build a frame the way a device would answer: echoed command pair with
    // the answer bytes in the argument buffer.
    fn response(cmd_class: u8, cmd_id: u8, size: usize) -> RazerReport {
        RazerReport::new(cmd_class, cmd_id, size).unwrap()
    }

    #[test]
    fn test_status_values() {
        assert_eq!(Status::from_wire(0x02), Some(Status::Success));
        assert!(Status::Success.is_success());
        assert!(!Status::Busy.is_success());
        assert_eq!(Status::from_wire(0x09), None);
    }

    #[test]
    fn test_decode_serial_trims_nul_padding() {
        let mut report = response(class::DEVICE, device::GET_SERIAL, 22);
        put_bytes(&mut report, 0, b"PM1234567890").unwrap();
        let report = report.finalize();
        assert_eq!(decode_serial(&report).unwrap(), "PM1234567890");
    }

    #[test]
    fn test_decode_firmware_version() {
        let mut report = response(class::DEVICE, device::GET_FIRMWARE_VERSION, 2);
        put_u8(&mut report, 0, 2).unwrap();
        put_u8(&mut report, 1, 7).unwrap();
        assert_eq!(decode_firmware_version(&report.finalize()).unwrap(), (2, 7));
    }

    #[test]
    fn test_decode_rejects_wrong_command_echo() {
        let report = response(class::DEVICE, device::GET_SERIAL, 22).finalize();
        let err = decode_firmware_version(&report).unwrap_err();
        assert_eq!(
            err,
            ParseError::CommandMismatch {
                expected_class: 0x00,
                expected_id: 0x81,
                got_class: 0x00,
                got_id: 0x82,
            }
        );
    }

    #[test]
    fn test_decode_led_answers_skip_request_echo() {
        let mut report = response(class::LED, led::GET_BRIGHTNESS, 3);
        put_bytes(&mut report, 0, &[0x01, 0x05, 190]).unwrap();
        assert_eq!(decode_led_brightness(&report.finalize()).unwrap(), 190);

        let mut report = response(class::LED, led::GET_RGB, 5);
        put_bytes(&mut report, 0, &[0x01, 0x04, 10, 20, 30]).unwrap();
        assert_eq!(decode_led_rgb(&report.finalize()).unwrap(), Rgb::new(10, 20, 30));
    }

    #[test]
    fn test_decode_led_effect_rejects_unknown_value() {
        let mut report = response(class::LED, led::GET_EFFECT, 3);
        put_bytes(&mut report, 0, &[0x00, 0x05, 0x0B]).unwrap();
        assert_eq!(
            decode_led_effect(&report.finalize()).unwrap_err(),
            ParseError::InvalidValue {
                field: "led effect",
                value: 0x0B
            }
        );
    }

    #[test]
    fn test_decode_dpi_stages() {
        let mut report = response(class::DPI, dpi::GET_STAGES, 3 + 4 * 2);
        put_bytes(&mut report, 0, &[0x01, 1, 2]).unwrap();
        put_u16_be(&mut report, 3, 800).unwrap();
        put_u16_be(&mut report, 5, 800).unwrap();
        put_u16_be(&mut report, 7, 1600).unwrap();
        put_u16_be(&mut report, 9, 1600).unwrap();
        let decoded = decode_dpi_stages(&report.finalize()).unwrap();
        assert_eq!(decoded.active, 1);
        assert_eq!(decoded.stages, vec![(800, 800), (1600, 1600)]);
    }

    #[test]
    fn test_decode_dpi_stages_rejects_bad_count() {
        let mut report = response(class::DPI, dpi::GET_STAGES, 3);
        put_bytes(&mut report, 0, &[0x00, 0, 6]).unwrap();
        assert_eq!(
            decode_dpi_stages(&report.finalize()).unwrap_err(),
            ParseError::InvalidValue {
                field: "dpi stage count",
                value: 6
            }
        );
    }

    #[test]
    fn test_decode_battery_and_charging() {
        let mut report = response(class::POWER, power::GET_BATTERY_LEVEL, 2);
        put_bytes(&mut report, 0, &[0x00, 0xC8]).unwrap();
        assert_eq!(decode_battery_level(&report.finalize()).unwrap(), 0xC8);

        let mut report = response(class::POWER, power::GET_CHARGING_STATUS, 2);
        put_bytes(&mut report, 0, &[0x00, 0x01]).unwrap();
        assert!(decode_charging_status(&report.finalize()).unwrap());
    }

    #[test]
    fn test_decode_idle_time_big_endian() {
        let mut report = response(class::POWER, power::GET_IDLE_TIME, 2);
        put_u16_be(&mut report, 0, 600).unwrap();
        assert_eq!(decode_idle_time(&report.finalize()).unwrap(), 600);
    }

    #[test]
    fn test_decode_notebook_zone_answers() {
        let mut report = response(class::NOTEBOOK, notebook::GET_POWER_MODE, 4);
        put_bytes(&mut report, 0, &[0x00, 0x01, 0x04, 45]).unwrap();
        assert_eq!(decode_power_mode(&report.finalize()).unwrap(), PowerMode::Custom);

        let mut report = response(class::NOTEBOOK, notebook::GET_FAN_SPEED, 3);
        put_bytes(&mut report, 0, &[0x00, 0x02, 53]).unwrap();
        assert_eq!(decode_fan_speed(&report.finalize()).unwrap(), 53);
    }

    #[test]
    fn test_decode_scroll_answers() {
        let mut report = response(class::INPUT, input::GET_SCROLL_MODE, 4);
        put_bytes(&mut report, 0, &[0, 0, 0, 1]).unwrap();
        assert_eq!(decode_scroll_mode(&report.finalize()).unwrap(), 1);

        let mut report = response(class::INPUT, input::GET_SCROLL_SMART_REEL, 1);
        put_u8(&mut report, 0, 0).unwrap();
        assert!(!decode_scroll_smart_reel(&report.finalize()).unwrap());
    }
}
