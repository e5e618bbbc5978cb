//! Command class and command id tables.
//!
//! A command is addressed by a `(command_class, command_id)` pair: the class
//! selects a functional family, the id the operation within it. Get ids are
//! the set id with bit 7 raised. Every builder hard-codes its pair; callers
//! never choose one.

/// Command classes — the functional family half of the namespace.
pub mod class {
    /// Device identity, mode, polling rate, dongle pairing.
    pub const DEVICE: u8 = 0x00;
    /// Key handling and scroll wheel behavior.
    pub const INPUT: u8 = 0x02;
    /// Classic per-LED control.
    pub const LED: u8 = 0x03;
    /// Sensor resolution.
    pub const DPI: u8 = 0x04;
    /// Battery, charging, idle and dock.
    pub const POWER: u8 = 0x07;
    /// Mouse extended matrix effects.
    pub const MOUSE_MATRIX: u8 = 0x0D;
    /// Blade notebook features (lid brightness, power mode, fan).
    pub const NOTEBOOK: u8 = 0x0E;
    /// LED matrix effects, standard and extended framing.
    pub const MATRIX: u8 = 0x0F;

    pub fn name(class: u8) -> &'static str {
        match class {
            DEVICE => "DEVICE",
            INPUT => "INPUT",
            LED => "LED",
            DPI => "DPI",
            POWER => "POWER",
            MOUSE_MATRIX => "MOUSE_MATRIX",
            NOTEBOOK => "NOTEBOOK",
            MATRIX => "MATRIX",
            _ => "UNKNOWN",
        }
    }
}

/// Class 0x00 — device identity and link management.
pub mod device {
    pub const SET_DEVICE_MODE: u8 = 0x04;
    pub const SET_POLLING_RATE: u8 = 0x05;
    /// Second-generation polling rate encoding (HyperPolling firmware).
    pub const SET_POLLING_RATE2: u8 = 0x40;
    pub const SET_DONGLE_LED_MODE: u8 = 0x46;
    pub const DONGLE_PAIR_STEP1: u8 = 0x47;
    pub const DONGLE_PAIR_STEP2: u8 = 0x48;
    pub const DONGLE_UNPAIR: u8 = 0x49;
    pub const GET_FIRMWARE_VERSION: u8 = 0x81;
    pub const GET_SERIAL: u8 = 0x82;
    pub const GET_DEVICE_MODE: u8 = 0x84;
    pub const GET_POLLING_RATE: u8 = 0x85;
    pub const GET_POLLING_RATE2: u8 = 0xC0;

    pub fn name(id: u8) -> &'static str {
        match id {
            SET_DEVICE_MODE => "SET_DEVICE_MODE",
            SET_POLLING_RATE => "SET_POLLING_RATE",
            SET_POLLING_RATE2 => "SET_POLLING_RATE2",
            SET_DONGLE_LED_MODE => "SET_DONGLE_LED_MODE",
            DONGLE_PAIR_STEP1 => "DONGLE_PAIR_STEP1",
            DONGLE_PAIR_STEP2 => "DONGLE_PAIR_STEP2",
            DONGLE_UNPAIR => "DONGLE_UNPAIR",
            GET_FIRMWARE_VERSION => "GET_FIRMWARE_VERSION",
            GET_SERIAL => "GET_SERIAL",
            GET_DEVICE_MODE => "GET_DEVICE_MODE",
            GET_POLLING_RATE => "GET_POLLING_RATE",
            GET_POLLING_RATE2 => "GET_POLLING_RATE2",
            _ => "UNKNOWN",
        }
    }
}

/// Class 0x02 — key handling and scroll wheel.
pub mod input {
    pub const SET_KEYSWITCH_OPTIMIZATION1: u8 = 0x02;
    pub const SET_FN_KEY_TOGGLE: u8 = 0x06;
    pub const REACTIVE_TRIGGER: u8 = 0x0A;
    pub const SET_SCROLL_MODE: u8 = 0x14;
    /// Later firmware revision of the keyswitch optimization write.
    pub const SET_KEYSWITCH_OPTIMIZATION2: u8 = 0x15;
    pub const SET_SCROLL_ACCELERATION: u8 = 0x16;
    pub const SET_SCROLL_SMART_REEL: u8 = 0x17;
    pub const GET_KEYSWITCH_OPTIMIZATION: u8 = 0x82;
    pub const GET_SCROLL_MODE: u8 = 0x94;
    pub const GET_SCROLL_ACCELERATION: u8 = 0x96;
    pub const GET_SCROLL_SMART_REEL: u8 = 0x97;

    pub fn name(id: u8) -> &'static str {
        match id {
            SET_KEYSWITCH_OPTIMIZATION1 => "SET_KEYSWITCH_OPTIMIZATION1",
            SET_FN_KEY_TOGGLE => "SET_FN_KEY_TOGGLE",
            REACTIVE_TRIGGER => "REACTIVE_TRIGGER",
            SET_SCROLL_MODE => "SET_SCROLL_MODE",
            SET_KEYSWITCH_OPTIMIZATION2 => "SET_KEYSWITCH_OPTIMIZATION2",
            SET_SCROLL_ACCELERATION => "SET_SCROLL_ACCELERATION",
            SET_SCROLL_SMART_REEL => "SET_SCROLL_SMART_REEL",
            GET_KEYSWITCH_OPTIMIZATION => "GET_KEYSWITCH_OPTIMIZATION",
            GET_SCROLL_MODE => "GET_SCROLL_MODE",
            GET_SCROLL_ACCELERATION => "GET_SCROLL_ACCELERATION",
            GET_SCROLL_SMART_REEL => "GET_SCROLL_SMART_REEL",
            _ => "UNKNOWN",
        }
    }
}

/// Class 0x03 — classic per-LED control.
pub mod led {
    pub const SET_STATE: u8 = 0x00;
    pub const SET_RGB: u8 = 0x01;
    pub const SET_EFFECT: u8 = 0x02;
    pub const SET_BRIGHTNESS: u8 = 0x03;
    pub const SET_BLINKING: u8 = 0x04;
    /// Single-row frame upload for strip devices without a full matrix.
    pub const SET_ONE_ROW_FRAME: u8 = 0x0C;
    pub const GET_STATE: u8 = 0x80;
    pub const GET_RGB: u8 = 0x81;
    pub const GET_EFFECT: u8 = 0x82;
    pub const GET_BRIGHTNESS: u8 = 0x83;

    pub fn name(id: u8) -> &'static str {
        match id {
            SET_STATE => "SET_STATE",
            SET_RGB => "SET_RGB",
            SET_EFFECT => "SET_EFFECT",
            SET_BRIGHTNESS => "SET_BRIGHTNESS",
            SET_BLINKING => "SET_BLINKING",
            SET_ONE_ROW_FRAME => "SET_ONE_ROW_FRAME",
            GET_STATE => "GET_STATE",
            GET_RGB => "GET_RGB",
            GET_EFFECT => "GET_EFFECT",
            GET_BRIGHTNESS => "GET_BRIGHTNESS",
            _ => "UNKNOWN",
        }
    }
}

/// Class 0x04 — sensor resolution.
pub mod dpi {
    pub const SET_XY_BYTE: u8 = 0x01;
    pub const SET_XY: u8 = 0x05;
    pub const SET_STAGES: u8 = 0x06;
    pub const GET_XY_BYTE: u8 = 0x81;
    pub const GET_XY: u8 = 0x85;
    pub const GET_STAGES: u8 = 0x86;

    pub fn name(id: u8) -> &'static str {
        match id {
            SET_XY_BYTE => "SET_XY_BYTE",
            SET_XY => "SET_XY",
            SET_STAGES => "SET_STAGES",
            GET_XY_BYTE => "GET_XY_BYTE",
            GET_XY => "GET_XY",
            GET_STAGES => "GET_STAGES",
            _ => "UNKNOWN",
        }
    }
}

/// Class 0x07 — battery, charging and dock.
pub mod power {
    pub const SET_LOW_BATTERY_THRESHOLD: u8 = 0x01;
    pub const SET_DOCK_BRIGHTNESS: u8 = 0x02;
    pub const SET_IDLE_TIME: u8 = 0x03;
    pub const SET_DOCK_CHARGE_TYPE: u8 = 0x10;
    /// Battery health optimizer charge ceiling.
    pub const SET_BHO: u8 = 0x12;
    pub const GET_BATTERY_LEVEL: u8 = 0x80;
    pub const GET_LOW_BATTERY_THRESHOLD: u8 = 0x81;
    pub const GET_DOCK_BRIGHTNESS: u8 = 0x82;
    pub const GET_IDLE_TIME: u8 = 0x83;
    pub const GET_CHARGING_STATUS: u8 = 0x84;
    pub const GET_BHO: u8 = 0x92;

    pub fn name(id: u8) -> &'static str {
        match id {
            SET_LOW_BATTERY_THRESHOLD => "SET_LOW_BATTERY_THRESHOLD",
            SET_DOCK_BRIGHTNESS => "SET_DOCK_BRIGHTNESS",
            SET_IDLE_TIME => "SET_IDLE_TIME",
            SET_DOCK_CHARGE_TYPE => "SET_DOCK_CHARGE_TYPE",
            SET_BHO => "SET_BHO",
            GET_BATTERY_LEVEL => "GET_BATTERY_LEVEL",
            GET_LOW_BATTERY_THRESHOLD => "GET_LOW_BATTERY_THRESHOLD",
            GET_DOCK_BRIGHTNESS => "GET_DOCK_BRIGHTNESS",
            GET_IDLE_TIME => "GET_IDLE_TIME",
            GET_CHARGING_STATUS => "GET_CHARGING_STATUS",
            GET_BHO => "GET_BHO",
            _ => "UNKNOWN",
        }
    }
}

/// Class 0x0E — Blade notebook features.
pub mod notebook {
    pub const SET_FAN_SPEED: u8 = 0x01;
    pub const SET_POWER_MODE: u8 = 0x02;
    pub const SET_BRIGHTNESS: u8 = 0x04;
    pub const SET_BOOST: u8 = 0x07;
    pub const GET_FAN_SPEED: u8 = 0x81;
    pub const GET_POWER_MODE: u8 = 0x82;
    pub const GET_BRIGHTNESS: u8 = 0x84;
    pub const GET_BOOST: u8 = 0x87;

    pub fn name(id: u8) -> &'static str {
        match id {
            SET_FAN_SPEED => "SET_FAN_SPEED",
            SET_POWER_MODE => "SET_POWER_MODE",
            SET_BRIGHTNESS => "SET_BRIGHTNESS",
            SET_BOOST => "SET_BOOST",
            GET_FAN_SPEED => "GET_FAN_SPEED",
            GET_POWER_MODE => "GET_POWER_MODE",
            GET_BRIGHTNESS => "GET_BRIGHTNESS",
            GET_BOOST => "GET_BOOST",
            _ => "UNKNOWN",
        }
    }
}

/// Classes 0x0F and 0x0D — matrix effect ids.
///
/// Ids 0x00..=0x06 keep the firmware's original effect selector values;
/// variants that shared a sub-type byte in older firmware (breathing and
/// starlight single/dual/random) carry their own ids. The standard and
/// extended keyboard families share this table under class 0x0F and are told
/// apart by framing; the mouse family uses the subset it implements under
/// class 0x0D.
pub mod matrix {
    pub const EFFECT_NONE: u8 = 0x00;
    pub const EFFECT_WAVE: u8 = 0x01;
    pub const EFFECT_REACTIVE: u8 = 0x02;
    pub const EFFECT_BREATHING_SINGLE: u8 = 0x03;
    pub const EFFECT_SPECTRUM: u8 = 0x04;
    /// Apply the staged custom frame.
    pub const EFFECT_CUSTOM: u8 = 0x05;
    pub const EFFECT_STATIC: u8 = 0x06;
    pub const EFFECT_BREATHING_DUAL: u8 = 0x07;
    pub const EFFECT_BREATHING_RANDOM: u8 = 0x08;
    pub const EFFECT_WHEEL: u8 = 0x0A;
    /// Upload one custom-frame row (or a column sub-range of one).
    pub const SET_CUSTOM_FRAME: u8 = 0x0B;
    /// Size-parameterized row upload for wide matrices.
    pub const SET_CUSTOM_FRAME2: u8 = 0x0C;
    pub const SET_BRIGHTNESS: u8 = 0x0E;
    pub const GET_BRIGHTNESS: u8 = 0x8E;
    pub const EFFECT_STARLIGHT_SINGLE: u8 = 0x19;
    pub const EFFECT_STARLIGHT_DUAL: u8 = 0x1A;
    pub const EFFECT_STARLIGHT_RANDOM: u8 = 0x1B;

    pub fn name(id: u8) -> &'static str {
        match id {
            EFFECT_NONE => "EFFECT_NONE",
            EFFECT_WAVE => "EFFECT_WAVE",
            EFFECT_REACTIVE => "EFFECT_REACTIVE",
            EFFECT_BREATHING_SINGLE => "EFFECT_BREATHING_SINGLE",
            EFFECT_SPECTRUM => "EFFECT_SPECTRUM",
            EFFECT_CUSTOM => "EFFECT_CUSTOM",
            EFFECT_STATIC => "EFFECT_STATIC",
            EFFECT_BREATHING_DUAL => "EFFECT_BREATHING_DUAL",
            EFFECT_BREATHING_RANDOM => "EFFECT_BREATHING_RANDOM",
            EFFECT_WHEEL => "EFFECT_WHEEL",
            SET_CUSTOM_FRAME => "SET_CUSTOM_FRAME",
            SET_CUSTOM_FRAME2 => "SET_CUSTOM_FRAME2",
            SET_BRIGHTNESS => "SET_BRIGHTNESS",
            GET_BRIGHTNESS => "GET_BRIGHTNESS",
            EFFECT_STARLIGHT_SINGLE => "EFFECT_STARLIGHT_SINGLE",
            EFFECT_STARLIGHT_DUAL => "EFFECT_STARLIGHT_DUAL",
            EFFECT_STARLIGHT_RANDOM => "EFFECT_STARLIGHT_RANDOM",
            _ => "UNKNOWN",
        }
    }
}
