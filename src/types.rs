//! Core types for event capture.

use crate::io::Indicator;

/// A semantic input event.
///
/// Carries no payload beyond its identity; the timestamp is attached when
/// the event is turned into a [`LogRecord`](crate::record::LogRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventTag {
    /// Button A pressed alone.
    ButtonAPressed,

    /// Button B pressed alone.
    ButtonBPressed,

    /// Both buttons held simultaneously.
    BuzzerActivated,

    /// Joystick left its dead-zone.
    JoystickMoved,
}

impl EventTag {
    /// Returns the canonical wire name used in log records.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EventTag::ButtonAPressed => "BUTTON_A_PRESSED",
            EventTag::ButtonBPressed => "BUTTON_B_PRESSED",
            EventTag::BuzzerActivated => "BUZZER_ACTIVATED",
            EventTag::JoystickMoved => "JOYSTICK_MOVED",
        }
    }

    /// Looks a tag up by its canonical wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "BUTTON_A_PRESSED" => Some(EventTag::ButtonAPressed),
            "BUTTON_B_PRESSED" => Some(EventTag::ButtonBPressed),
            "BUZZER_ACTIVATED" => Some(EventTag::BuzzerActivated),
            "JOYSTICK_MOVED" => Some(EventTag::JoystickMoved),
            _ => None,
        }
    }

    /// Returns the indicator asserted while this event is handled.
    pub const fn indicator(&self) -> Indicator {
        match self {
            EventTag::ButtonAPressed => Indicator::ButtonA,
            EventTag::ButtonBPressed => Indicator::ButtonB,
            EventTag::BuzzerActivated => Indicator::Buzzer,
            EventTag::JoystickMoved => Indicator::Joystick,
        }
    }
}

impl core::fmt::Display for EventTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single two-axis joystick reading.
///
/// Axis values are raw 12-bit ADC samples in `0..=4095`. Samples are
/// produced fresh each poll and not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogSample {
    /// Horizontal axis, `0..=4095`.
    pub x: u16,

    /// Vertical axis, `0..=4095`.
    pub y: u16,
}

impl AnalogSample {
    /// Creates a sample from raw axis readings.
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}
