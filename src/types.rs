//! Typed builder parameters and their wire encodings.

/// RGB color triple, raw channel values as the firmware consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
}

/// Which persisted profile slot a setting applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum VariableStorage {
    /// Apply without persisting.
    #[default]
    NoStore = 0x00,
    /// Persist to the device's stored profile.
    VarStore = 0x01,
}

impl VariableStorage {
    pub fn wire(self) -> u8 {
        self as u8
    }
}

/// Lighting zone addressed by per-LED and extended matrix commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum LedId {
    #[default]
    Zero = 0x00,
    ScrollWheel = 0x01,
    Battery = 0x03,
    Logo = 0x04,
    Backlight = 0x05,
    Macro = 0x07,
    Game = 0x08,
    RedProfile = 0x0C,
    GreenProfile = 0x0D,
    BlueProfile = 0x0E,
    RightSide = 0x10,
    LeftSide = 0x11,
    Charging = 0x20,
    FastCharging = 0x21,
    FullyCharged = 0x22,
}

impl LedId {
    pub fn wire(self) -> u8 {
        self as u8
    }

    pub fn from_wire(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Self::Zero),
            0x01 => Some(Self::ScrollWheel),
            0x03 => Some(Self::Battery),
            0x04 => Some(Self::Logo),
            0x05 => Some(Self::Backlight),
            0x07 => Some(Self::Macro),
            0x08 => Some(Self::Game),
            0x0C => Some(Self::RedProfile),
            0x0D => Some(Self::GreenProfile),
            0x0E => Some(Self::BlueProfile),
            0x10 => Some(Self::RightSide),
            0x11 => Some(Self::LeftSide),
            0x20 => Some(Self::Charging),
            0x21 => Some(Self::FastCharging),
            0x22 => Some(Self::FullyCharged),
            _ => None,
        }
    }
}

/// On/off state of a single LED zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LedState {
    Off = 0x00,
    On = 0x01,
}

impl LedState {
    pub fn wire(self) -> u8 {
        self as u8
    }

    pub fn from_wire(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Self::Off),
            0x01 => Some(Self::On),
            _ => None,
        }
    }
}

/// Per-LED effect for the classic LED command family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LedEffect {
    Static = 0x00,
    Blinking = 0x01,
    Breathing = 0x02,
    Spectrum = 0x04,
}

impl LedEffect {
    pub fn wire(self) -> u8 {
        self as u8
    }

    pub fn from_wire(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Self::Static),
            0x01 => Some(Self::Blinking),
            0x02 => Some(Self::Breathing),
            0x04 => Some(Self::Spectrum),
            _ => None,
        }
    }
}

/// Travel direction of the wave effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WaveDirection {
    LeftToRight = 0x01,
    RightToLeft = 0x02,
}

impl WaveDirection {
    pub fn wire(self) -> u8 {
        self as u8
    }
}

/// Spin direction of the wheel effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WheelDirection {
    Clockwise = 0x01,
    CounterClockwise = 0x02,
}

impl WheelDirection {
    pub fn wire(self) -> u8 {
        self as u8
    }
}

/// Device operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DeviceMode {
    /// Firmware handles keys itself.
    Normal = 0x00,
    FactoryTest = 0x02,
    /// Host driver consumes raw events.
    Driver = 0x03,
}

impl DeviceMode {
    pub fn wire(self) -> u8 {
        self as u8
    }

    pub fn from_wire(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Self::Normal),
            0x02 => Some(Self::FactoryTest),
            0x03 => Some(Self::Driver),
            _ => None,
        }
    }
}

/// Polling rates the first-generation encoding can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum PollingRate {
    Hz125 = 125,
    Hz500 = 500,
    Hz1000 = 1000,
}

impl PollingRate {
    pub fn to_hz(self) -> u16 {
        self as u16
    }

    pub fn from_hz(hz: u16) -> Option<Self> {
        match hz {
            125 => Some(Self::Hz125),
            500 => Some(Self::Hz500),
            1000 => Some(Self::Hz1000),
            _ => None,
        }
    }
}

/// Keyswitch optimization profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OptimizationMode {
    Typing = 0x00,
    Gaming = 0x01,
}

impl OptimizationMode {
    pub fn wire(self) -> u8 {
        self as u8
    }

    pub fn from_wire(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Self::Typing),
            0x01 => Some(Self::Gaming),
            _ => None,
        }
    }
}

/// Notebook performance mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PowerMode {
    Balanced = 0x00,
    Gaming = 0x01,
    Creator = 0x02,
    Custom = 0x04,
}

impl PowerMode {
    pub fn wire(self) -> u8 {
        self as u8
    }

    pub fn from_wire(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Self::Balanced),
            0x01 => Some(Self::Gaming),
            0x02 => Some(Self::Creator),
            0x04 => Some(Self::Custom),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_id_wire_roundtrip() {
        for led in [
            LedId::Zero,
            LedId::ScrollWheel,
            LedId::Battery,
            LedId::Logo,
            LedId::Backlight,
            LedId::Charging,
        ] {
            assert_eq!(LedId::from_wire(led.wire()), Some(led));
        }
        assert_eq!(LedId::from_wire(0x7F), None);
    }

    #[test]
    fn test_polling_rate_hz_mapping() {
        assert_eq!(PollingRate::from_hz(1000), Some(PollingRate::Hz1000));
        assert_eq!(PollingRate::Hz125.to_hz(), 125);
        assert_eq!(PollingRate::from_hz(250), None);
    }

    #[test]
    fn test_device_mode_values() {
        assert_eq!(DeviceMode::Driver.wire(), 0x03);
        assert_eq!(DeviceMode::from_wire(0x01), None);
    }
}
