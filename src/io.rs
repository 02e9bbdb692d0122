//! Hardware abstraction traits for inputs, indicators and the display.
//!
//! Implement these for your board (GPIO, ADC, I2C display, etc.) to let the
//! dispatcher drive them. Implementations handle hardware errors internally;
//! none of these methods can fail.

use crate::types::AnalogSample;

/// Trait for abstracting a monitored digital input.
///
/// Returns the *instantaneous* level with active-high semantics: `true`
/// means pressed/asserted, after any pull-up inversion the board requires.
/// Debouncing is layered on top by [`DebounceFilter`](crate::DebounceFilter).
pub trait DigitalInput {
    /// Returns the current raw level, `true` when active.
    fn is_active(&mut self) -> bool;
}

/// Trait for abstracting the two-axis joystick ADC.
pub trait Joystick {
    /// Samples both axes.
    fn sample(&mut self) -> AnalogSample;
}

/// The output signals asserted while an event is handled.
///
/// On the reference board these are the red, green and blue LEDs plus the
/// buzzer, but any binary annunciator works.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    /// Button A press indicator.
    ButtonA,

    /// Button B press indicator.
    ButtonB,

    /// Joystick motion indicator.
    Joystick,

    /// Simultaneous-press buzzer output.
    Buzzer,
}

/// Trait for abstracting the indicator outputs.
pub trait IndicatorPanel {
    /// Drives one indicator high or low.
    fn set(&mut self, indicator: Indicator, active: bool);
}

/// Trait for abstracting the status display.
///
/// The core only needs this one capability; rendering (fonts, framebuffer,
/// bus) is entirely the implementation's concern.
pub trait StatusDisplay {
    /// Renders a short status message.
    ///
    /// `storage_ok` reflects the log sink's readiness and is typically
    /// rendered as an `SD: OK` / `SD: ERROR` line.
    fn render_status(&mut self, title: &str, detail: &str, storage_ok: bool);
}
