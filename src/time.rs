//! Time abstraction traits for platform-agnostic timing.

/// Trait for abstracting a millisecond timebase.
///
/// Timestamps are milliseconds since boot in a `u32`, so they wrap after
/// roughly 49.7 days. All interval arithmetic in this crate uses wrapping
/// subtraction and stays correct across a single wrap.
pub trait Clock {
    /// Returns milliseconds elapsed since boot.
    fn now_ms(&self) -> u32;
}

/// Trait for abstracting a blocking millisecond delay.
///
/// The dispatcher uses this to hold indicators for their fixed duration.
/// Blocking here is what serializes event handling: nothing else is polled
/// while a delay runs.
pub trait Delay {
    /// Blocks for at least `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}
