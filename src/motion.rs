//! Dead-zone motion classification for the joystick.

use crate::types::AnalogSample;
use crate::{JOY_MAX_THRESHOLD, JOY_MIN_THRESHOLD};

/// Classifies joystick samples as centered or moved.
///
/// Motion is detected whenever either axis leaves the `[low, high]`
/// dead-zone out of the full 12-bit range. The classifier is stateless and
/// pure; rate-limiting event storms is the caller's responsibility, so
/// sampling cost and event frequency stay bounded independently of
/// classification.
#[derive(Debug, Clone, Copy)]
pub struct MotionDetector {
    low: u16,
    high: u16,
}

impl MotionDetector {
    /// Creates a classifier with the given dead-zone band.
    pub const fn new(low: u16, high: u16) -> Self {
        Self { low, high }
    }

    /// Returns `true` if the sample lies outside the dead-zone.
    #[inline]
    pub const fn classify(&self, sample: AnalogSample) -> bool {
        sample.x < self.low
            || sample.x > self.high
            || sample.y < self.low
            || sample.y > self.high
    }
}

impl Default for MotionDetector {
    fn default() -> Self {
        Self::new(JOY_MIN_THRESHOLD, JOY_MAX_THRESHOLD)
    }
}
