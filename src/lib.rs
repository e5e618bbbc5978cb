//! Builder library for Razer USB HID feature reports.
//!
//! Razer peripherals are driven by 91-byte vendor feature reports. This
//! crate constructs those frames — command addressing, argument packing,
//! checksum — and decodes the device's responses. It does no I/O: callers
//! hand the wire bytes to whatever HID transport they use and feed the
//! reply back through [`RazerReport::from_wire`].
//!
//! Three builder families cover the protocol generations in the field:
//!
//! * [`standard`] — the original framing: device identity, classic per-LED
//!   commands and the legacy matrix effects.
//! * [`extended`] — the newer keyboard matrix protocol; every effect is
//!   zone-addressed through a `[storage, led_id]` argument prefix.
//! * [`mouse`] — the extended argument layout under the mouse command
//!   class, with the default transaction id.
//!
//! [`misc`] holds everything outside lighting (DPI, polling, power,
//! dongle pairing, Blade notebook controls), [`custom_frame`] splits
//! full-frame rows into multi-packet uploads, and [`response`] decodes
//! answers.
//!
//! ```
//! use razer_report::{extended, types::{LedId, Rgb, VariableStorage}};
//!
//! let report = extended::matrix_effect_static(
//!     VariableStorage::VarStore,
//!     LedId::Backlight,
//!     &Rgb::new(0, 255, 128),
//! )?;
//! let wire: [u8; 91] = report.to_wire();
//! # Ok::<(), razer_report::ReportError>(())
//! ```

pub mod custom_frame;
pub mod error;
pub mod extended;
pub mod ids;
pub mod misc;
pub mod mouse;
pub mod packer;
pub mod report;
pub mod response;
pub mod standard;
pub mod types;

pub use error::{ParseError, ReportError};
pub use report::{
    ProtocolType, RazerReport, ARGUMENTS_LEN, REPORT_LEN, TRANSACTION_EXTENDED,
    TRANSACTION_STANDARD,
};
pub use response::Status;
pub use types::{LedId, Rgb, VariableStorage};
