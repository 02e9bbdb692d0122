//! Shared test infrastructure for input-datalogger integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use std::rc::Rc;

use input_datalogger::{
    AnalogSample, Clock, Delay, DigitalInput, Indicator, IndicatorPanel, Joystick, LogStorage,
    StatusDisplay,
};

// ============================================================================
// Mock Clock and Delay
// ============================================================================

/// Mock millisecond clock with controllable time advancement
pub struct MockClock {
    now: Cell<u32>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(now_ms: u32) -> Self {
        Self {
            now: Cell::new(now_ms),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

/// Delay provider that advances the mock clock instead of sleeping
pub struct ClockDelay<'a> {
    clock: &'a MockClock,
}

impl<'a> ClockDelay<'a> {
    pub fn new(clock: &'a MockClock) -> Self {
        Self { clock }
    }
}

impl Delay for ClockDelay<'_> {
    fn delay_ms(&mut self, ms: u32) {
        self.clock.advance(ms);
    }
}

// ============================================================================
// Mock Inputs
// ============================================================================

/// Digital input whose level the test scripts through a shared handle
#[derive(Clone)]
pub struct SharedButton(Rc<Cell<bool>>);

impl SharedButton {
    pub fn released() -> Self {
        Self(Rc::new(Cell::new(false)))
    }

    pub fn set_pressed(&self, pressed: bool) {
        self.0.set(pressed);
    }
}

impl DigitalInput for SharedButton {
    fn is_active(&mut self) -> bool {
        self.0.get()
    }
}

/// Joystick whose sample the test scripts through a shared handle
#[derive(Clone)]
pub struct SharedStick(Rc<Cell<AnalogSample>>);

impl SharedStick {
    pub fn centered() -> Self {
        Self(Rc::new(Cell::new(AnalogSample::new(2048, 2048))))
    }

    pub fn set(&self, x: u16, y: u16) {
        self.0.set(AnalogSample::new(x, y));
    }
}

impl Joystick for SharedStick {
    fn sample(&mut self) -> AnalogSample {
        self.0.get()
    }
}

// ============================================================================
// Recording Outputs
// ============================================================================

/// Indicator panel that records every set() call
#[derive(Clone)]
pub struct RecordingPanel {
    history: Rc<RefCell<Vec<(Indicator, bool)>>>,
}

impl RecordingPanel {
    pub fn new() -> Self {
        Self {
            history: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn history(&self) -> Vec<(Indicator, bool)> {
        self.history.borrow().clone()
    }
}

impl IndicatorPanel for RecordingPanel {
    fn set(&mut self, indicator: Indicator, active: bool) {
        self.history.borrow_mut().push((indicator, active));
    }
}

/// One rendered status screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub title: String,
    pub detail: String,
    pub storage_ok: bool,
}

/// Display that records every rendered status screen
#[derive(Clone)]
pub struct RecordingDisplay {
    history: Rc<RefCell<Vec<StatusLine>>>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            history: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn history(&self) -> Vec<StatusLine> {
        self.history.borrow().clone()
    }

    pub fn last(&self) -> Option<StatusLine> {
        self.history.borrow().last().cloned()
    }
}

impl StatusDisplay for RecordingDisplay {
    fn render_status(&mut self, title: &str, detail: &str, storage_ok: bool) {
        self.history.borrow_mut().push(StatusLine {
            title: title.to_string(),
            detail: detail.to_string(),
            storage_ok,
        });
    }
}

// ============================================================================
// Fault-injectable RAM storage
// ============================================================================

/// Error type for the RAM storage backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageFault;

/// RAM-backed storage with scripted fault injection.
///
/// The content buffer and the fault switches are shared handles, so tests
/// keep access after the storage moves into a `LogSink`. Each fault switch
/// is one-shot: it trips on the next matching operation and resets.
pub struct RamStorage {
    data: Rc<RefCell<Vec<u8>>>,
    mounted: bool,
    fail_mount: bool,
    fail_open: bool,
    fail_next_write: Rc<Cell<bool>>,
    short_next_write: Rc<Cell<bool>>,
    fail_next_flush: Rc<Cell<bool>>,
    flushes: Rc<Cell<usize>>,
}

impl RamStorage {
    pub fn new() -> Self {
        Self {
            data: Rc::new(RefCell::new(Vec::new())),
            mounted: false,
            fail_mount: false,
            fail_open: false,
            fail_next_write: Rc::new(Cell::new(false)),
            short_next_write: Rc::new(Cell::new(false)),
            fail_next_flush: Rc::new(Cell::new(false)),
            flushes: Rc::new(Cell::new(0)),
        }
    }

    /// Storage pre-seeded with a prior session's log content
    pub fn with_contents(initial: &str) -> Self {
        let storage = Self::new();
        storage.data.borrow_mut().extend_from_slice(initial.as_bytes());
        storage
    }

    pub fn failing_mount() -> Self {
        let mut storage = Self::new();
        storage.fail_mount = true;
        storage
    }

    pub fn failing_open() -> Self {
        let mut storage = Self::new();
        storage.fail_open = true;
        storage
    }

    /// Shared handle to the stored bytes
    pub fn contents(&self) -> Rc<RefCell<Vec<u8>>> {
        Rc::clone(&self.data)
    }

    /// One-shot switch: next write returns an I/O error
    pub fn fail_next_write(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.fail_next_write)
    }

    /// One-shot switch: next write persists nothing and under-reports
    pub fn short_next_write(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.short_next_write)
    }

    /// One-shot switch: next flush returns an I/O error
    pub fn fail_next_flush(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.fail_next_flush)
    }

    /// Shared counter of successful flushes
    pub fn flushes(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.flushes)
    }
}

impl LogStorage for RamStorage {
    type Handle = ();
    type Error = StorageFault;

    fn mount(&mut self) -> Result<(), StorageFault> {
        if self.fail_mount {
            return Err(StorageFault);
        }
        self.mounted = true;
        Ok(())
    }

    fn open_append(&mut self, _path: &str) -> Result<(), StorageFault> {
        if self.fail_open || !self.mounted {
            return Err(StorageFault);
        }
        Ok(())
    }

    fn size(&mut self, _file: &()) -> Result<u64, StorageFault> {
        Ok(self.data.borrow().len() as u64)
    }

    fn write(&mut self, _file: &mut (), bytes: &[u8]) -> Result<usize, StorageFault> {
        if self.fail_next_write.take() {
            return Err(StorageFault);
        }
        if self.short_next_write.take() {
            // Card pulled mid-write: nothing durable, fewer bytes reported.
            return Ok(bytes.len().saturating_sub(1));
        }
        self.data.borrow_mut().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self, _file: &mut ()) -> Result<(), StorageFault> {
        if self.fail_next_flush.take() {
            return Err(StorageFault);
        }
        self.flushes.set(self.flushes.get() + 1);
        Ok(())
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// The stored log as UTF-8 text
pub fn log_text(data: &Rc<RefCell<Vec<u8>>>) -> String {
    String::from_utf8(data.borrow().clone()).expect("log is valid UTF-8")
}

/// The stored log split into lines (without trailing newlines)
pub fn log_lines(data: &Rc<RefCell<Vec<u8>>>) -> Vec<String> {
    log_text(data).lines().map(str::to_string).collect()
}

/// Number of record lines naming the given tag
pub fn count_records(data: &Rc<RefCell<Vec<u8>>>, tag_name: &str) -> usize {
    log_lines(data)
        .iter()
        .filter(|line| line.starts_with(tag_name))
        .count()
}
