//! Mouse key speed parameters
//!
//! Cursor movement eases from `move_delta` to `move_delta * max_speed`
//! over `time_to_max` repeats. The wheel follows the same curve with its own
//! parameters.

use crate::constants::*;

/// Ceiling of a HID mouse report axis
pub const HID_AXIS_MAX: u8 = 127;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseKeyConfig {
    /// Delay before the first repeat, in ms
    pub delay: u16,
    /// Time between repeats, in ms
    pub interval: u8,
    pub max_speed: u8,
    /// Repeats until `max_speed` is reached
    pub time_to_max: u8,
    pub wheel_max_speed: u8,
    pub wheel_time_to_max: u8,
    pub move_max: u8,
    pub wheel_max: u8,
    pub move_delta: u8,
    pub wheel_delta: u8,
}

impl MouseKeyConfig {
    /// Cursor movement of the `repeat`-th report
    pub const fn move_unit(&self, repeat: u8) -> u8 {
        accelerate(repeat, self.move_delta, self.max_speed, self.time_to_max, self.move_max)
    }

    /// Wheel movement of the `repeat`-th report
    pub const fn wheel_unit(&self, repeat: u8) -> u8 {
        accelerate(
            repeat,
            self.wheel_delta,
            self.wheel_max_speed,
            self.wheel_time_to_max,
            self.wheel_max,
        )
    }
}

const fn accelerate(repeat: u8, delta: u8, max_speed: u8, time_to_max: u8, max: u8) -> u8 {
    // Products of two bytes squared stay below u32::MAX
    let delta = delta as u32;
    let max_unit = delta * max_speed as u32;
    let unit = if repeat == 0 {
        delta
    } else if repeat >= time_to_max {
        max_unit
    } else {
        // Ease out: progress = (2 * r * t - r^2) / t^2
        let r = repeat as u32;
        let t = time_to_max as u32;
        let unit_range = max_unit.saturating_sub(delta);
        delta + unit_range * (2 * r * t - r * r) / (t * t)
    };

    if unit > max as u32 {
        max
    } else if unit == 0 {
        1
    } else {
        unit as u8
    }
}

pub const MOUSE_KEY_CONFIG: MouseKeyConfig = MouseKeyConfig {
    delay: MOUSEKEY_DELAY,
    interval: MOUSEKEY_INTERVAL,
    max_speed: MOUSEKEY_MAX_SPEED,
    time_to_max: MOUSEKEY_TIME_TO_MAX,
    wheel_max_speed: MOUSEKEY_WHEEL_MAX_SPEED,
    wheel_time_to_max: MOUSEKEY_WHEEL_TIME_TO_MAX,
    move_max: MOUSEKEY_MOVE_MAX,
    wheel_max: MOUSEKEY_WHEEL_MAX,
    move_delta: MOUSEKEY_MOVE_DELTA,
    wheel_delta: MOUSEKEY_WHEEL_DELTA,
};

const _: () = assert!(MOUSE_KEY_CONFIG.move_max <= HID_AXIS_MAX);
const _: () = assert!(MOUSE_KEY_CONFIG.wheel_max <= HID_AXIS_MAX);
