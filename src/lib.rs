#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DebounceFilter`**: Converts a noisy raw level into clean rising-edge
//!   reports, at most one per debounce window
//! - **`MotionDetector`**: Stateless dead-zone classifier over a joystick
//!   [`AnalogSample`]
//! - **`EventTag`** / **`LogRecord`**: A detected event and its timestamped
//!   text record (`"<TAG>,<ms>\n"`)
//! - **`LogSink`**: Append-only persistence over a [`LogStorage`] backend,
//!   with header-once semantics and one-way failure degradation
//! - **`InputDispatcher`**: The per-tick polling loop tying the above to the
//!   display and indicator seams
//! - **`Clock`** / **`Delay`** / **`DigitalInput`** / **`Joystick`** /
//!   **`IndicatorPanel`** / **`StatusDisplay`**: Traits to implement for
//!   your hardware
//!
//! Timestamps are `u32` milliseconds since boot throughout; all interval
//! arithmetic wraps.

pub mod debounce;
pub mod dispatcher;
pub mod io;
pub mod motion;
pub mod record;
pub mod sink;
pub mod time;
pub mod types;

pub use debounce::DebounceFilter;
pub use dispatcher::{InputDispatcher, MAX_EVENTS_PER_TICK};
pub use io::{DigitalInput, Indicator, IndicatorPanel, Joystick, StatusDisplay};
pub use motion::MotionDetector;
pub use record::{LogRecord, ParseError, LOG_HEADER, MAX_RECORD_LEN};
pub use sink::{LogSink, LogStorage, OpenError, SinkState, WriteError};
pub use time::{Clock, Delay};
pub use types::{AnalogSample, EventTag};

/// Minimum interval between reported edges on one digital input.
pub const DEBOUNCE_MS: u32 = 50;

/// Indicator/buzzer hold duration; also the joystick re-trigger window.
pub const LED_DURATION_MS: u32 = 300;

/// Recommended idle delay between dispatcher ticks.
pub const LOOP_DELAY_MS: u32 = 50;

/// Lower bound of the joystick dead-zone.
pub const JOY_MIN_THRESHOLD: u16 = 1000;

/// Upper bound of the joystick dead-zone.
pub const JOY_MAX_THRESHOLD: u16 = 3000;

/// Full-scale 12-bit ADC sample.
pub const ADC_MAX_VALUE: u16 = 4095;

/// Default log file path on the backing store.
pub const LOG_FILENAME: &str = "datalog.txt";
