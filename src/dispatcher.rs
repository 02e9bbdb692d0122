//! Per-tick input polling and event handling.
//!
//! Provides [`InputDispatcher`], the orchestration loop that ties the
//! debounce filters, motion detector, log sink, display and indicators
//! together. The dispatcher is intentionally sequential: each event's
//! indicator hold blocks the thread, so events are handled atomically
//! relative to each other and the hold duration throttles the tick rate.

use heapless::Vec;

use crate::debounce::DebounceFilter;
use crate::io::{DigitalInput, Indicator, IndicatorPanel, Joystick, StatusDisplay};
use crate::motion::MotionDetector;
use crate::record::LogRecord;
use crate::sink::{LogSink, LogStorage};
use crate::time::{Clock, Delay};
use crate::types::EventTag;
use crate::LED_DURATION_MS;

/// Upper bound on events one tick can emit (button A, button B, joystick).
pub const MAX_EVENTS_PER_TICK: usize = 3;

/// Polls the inputs and drives the logging pipeline, one tick at a time.
///
/// Owns every peripheral seam except the clock, which is borrowed like any
/// shared timebase. The sink is optional: a failed storage bring-up leaves
/// the dispatcher fully functional with logging skipped and the status
/// display reporting the error.
///
/// # Type Parameters
/// * `'t` - Lifetime of the clock reference
/// * `C` - Clock implementation
/// * `W` - Blocking delay implementation
/// * `A`, `B` - Button A / button B input implementations
/// * `J` - Joystick implementation
/// * `P` - Indicator panel implementation
/// * `D` - Status display implementation
/// * `S` - Log storage backend
pub struct InputDispatcher<'t, C, W, A, B, J, P, D, S>
where
    C: Clock,
    W: Delay,
    A: DigitalInput,
    B: DigitalInput,
    J: Joystick,
    P: IndicatorPanel,
    D: StatusDisplay,
    S: LogStorage,
{
    clock: &'t C,
    delay: W,
    button_a: A,
    button_b: B,
    filter_a: DebounceFilter,
    filter_b: DebounceFilter,
    joystick: J,
    motion: MotionDetector,
    last_joystick_ms: u32,
    indicators: P,
    display: D,
    sink: Option<LogSink<S>>,
}

impl<'t, C, W, A, B, J, P, D, S> InputDispatcher<'t, C, W, A, B, J, P, D, S>
where
    C: Clock,
    W: Delay,
    A: DigitalInput,
    B: DigitalInput,
    J: Joystick,
    P: IndicatorPanel,
    D: StatusDisplay,
    S: LogStorage,
{
    /// Creates a dispatcher with default debounce window and dead-zone.
    ///
    /// Pass `None` for `sink` when storage bring-up failed; the dispatcher
    /// keeps detecting and indicating events without persistence.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        clock: &'t C,
        delay: W,
        button_a: A,
        button_b: B,
        joystick: J,
        indicators: P,
        display: D,
        sink: Option<LogSink<S>>,
    ) -> Self {
        Self {
            clock,
            delay,
            button_a,
            button_b,
            filter_a: DebounceFilter::default(),
            filter_b: DebounceFilter::default(),
            joystick,
            motion: MotionDetector::default(),
            last_joystick_ms: 0,
            indicators,
            display,
            sink,
        }
    }

    /// Renders the boot status screen from the sink's readiness.
    pub fn show_startup_status(&mut self) {
        if self.storage_ok() {
            self.display.render_status("System Ready", "Waiting input", true);
        } else {
            self.display.render_status("SD CARD ERROR", "Check card!", false);
        }
    }

    /// Returns `true` while appended records are actually persisted.
    pub fn storage_ok(&self) -> bool {
        self.sink.as_ref().is_some_and(|sink| sink.is_ready())
    }

    /// Runs one tick: button A, then button B, then the joystick.
    ///
    /// Each emitted event is logged, rendered and indicated before the next
    /// input is evaluated, so the returned list is also the handling order.
    /// Indicator holds block, which means a tick with events consumes at
    /// least `LED_DURATION_MS` per event.
    pub fn poll(&mut self) -> Vec<EventTag, MAX_EVENTS_PER_TICK> {
        let mut events = Vec::new();
        let mut buzzer_fired = false;

        let now = self.clock.now_ms();
        let a_level = self.button_a.is_active();
        if self.filter_a.poll(a_level, now) {
            // Inherited behavior: the cross-check reads B's instantaneous
            // level, not its debounced state.
            if self.button_b.is_active() {
                buzzer_fired = true;
                self.handle_event(EventTag::BuzzerActivated, &mut events);
            } else {
                self.handle_event(EventTag::ButtonAPressed, &mut events);
            }
        }

        // Fresh read: A's indicator hold may have consumed time.
        let now = self.clock.now_ms();
        let b_level = self.button_b.is_active();
        if self.filter_b.poll(b_level, now) {
            if self.button_a.is_active() {
                // B's edge still consumed its debounce window, but a
                // simultaneous press produces exactly one buzzer record.
                if !buzzer_fired {
                    self.handle_event(EventTag::BuzzerActivated, &mut events);
                }
            } else {
                self.handle_event(EventTag::ButtonBPressed, &mut events);
            }
        }

        let now = self.clock.now_ms();
        if now.wrapping_sub(self.last_joystick_ms) > LED_DURATION_MS {
            let sample = self.joystick.sample();
            if self.motion.classify(sample) {
                self.last_joystick_ms = now;
                self.handle_event(EventTag::JoystickMoved, &mut events);
            }
        }

        events
    }

    /// Logs, renders and indicates one event, in that order.
    fn handle_event(&mut self, tag: EventTag, events: &mut Vec<EventTag, MAX_EVENTS_PER_TICK>) {
        let _ = events.push(tag);

        let record = LogRecord::new(tag, self.clock.now_ms());
        if let Some(sink) = self.sink.as_mut() {
            // The sink already degraded itself; readiness is surfaced on
            // the display below.
            let _ = sink.append(&record.encode());
        }

        let storage_ok = self.storage_ok();
        self.display
            .render_status("EVENT DETECTED", tag.as_str(), storage_ok);

        self.hold_indicator(tag.indicator());
    }

    /// Asserts an indicator for the fixed hold duration, then deasserts.
    ///
    /// The deassert runs on every exit path via the drop guard.
    fn hold_indicator(&mut self, indicator: Indicator) {
        let Self {
            indicators, delay, ..
        } = self;

        let _guard = IndicatorGuard::assert(indicators, indicator);
        delay.delay_ms(LED_DURATION_MS);
    }
}

/// Scoped indicator assertion; deasserts on drop.
struct IndicatorGuard<'a, P: IndicatorPanel> {
    panel: &'a mut P,
    indicator: Indicator,
}

impl<'a, P: IndicatorPanel> IndicatorGuard<'a, P> {
    fn assert(panel: &'a mut P, indicator: Indicator) -> Self {
        panel.set(indicator, true);
        Self { panel, indicator }
    }
}

impl<P: IndicatorPanel> Drop for IndicatorGuard<'_, P> {
    fn drop(&mut self) {
        self.panel.set(self.indicator, false);
    }
}
