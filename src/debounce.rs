//! Debounced rising-edge detection for digital inputs.

use crate::DEBOUNCE_MS;

/// Converts a noisy raw level into clean rising-edge reports.
///
/// This is edge detection with a minimum re-trigger interval, not a
/// majority-vote debounce: a false→true transition is reported only when at
/// least the window has elapsed since the previously *reported* edge. The
/// raw level is latched on every poll regardless, and falling edges never
/// report.
///
/// Each monitored input owns its own filter so the re-trigger windows stay
/// independent.
#[derive(Debug, Clone, Copy)]
pub struct DebounceFilter {
    last_level: bool,
    last_report_ms: u32,
    window_ms: u32,
}

impl DebounceFilter {
    /// Creates a filter with the given re-trigger window.
    ///
    /// The window is anchored at 0 ms, so an edge arriving earlier than
    /// `window_ms` after boot is absorbed.
    pub const fn new(window_ms: u32) -> Self {
        Self {
            last_level: false,
            last_report_ms: 0,
            window_ms,
        }
    }

    /// Feeds one raw sample through the filter.
    ///
    /// Returns `true` exactly on a confirmed rising edge. `now_ms` must come
    /// from the same wrapping millisecond timebase on every call.
    pub fn poll(&mut self, level: bool, now_ms: u32) -> bool {
        let rising = level && !self.last_level;
        self.last_level = level;

        if rising && now_ms.wrapping_sub(self.last_report_ms) >= self.window_ms {
            self.last_report_ms = now_ms;
            return true;
        }

        false
    }

    /// Returns the raw level latched by the most recent poll.
    pub const fn last_level(&self) -> bool {
        self.last_level
    }
}

impl Default for DebounceFilter {
    fn default() -> Self {
        Self::new(DEBOUNCE_MS)
    }
}
