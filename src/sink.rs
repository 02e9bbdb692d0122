//! Append-only log persistence with one-way failure degradation.
//!
//! Provides [`LogSink`], which owns a [`LogStorage`] backend and enforces
//! the append-only contract: the header is written once to a fresh log,
//! prior content is never truncated, and any write failure permanently
//! disables the sink for the rest of the session. Also defines the
//! [`LogStorage`] trait for storage backends.

use crate::record::LOG_HEADER;

/// Trait for abstracting the persistence backend.
///
/// Implement this for your storage hardware (SD card over SPI, platform
/// filesystem, battery-backed RAM). The sink treats the backend as a
/// trusted sink: it only requires that `write` reports how many bytes were
/// accepted and that `flush` makes them durable.
pub trait LogStorage {
    /// Handle to an open append-mode file.
    type Handle;

    /// Backend error type, surfaced through [`OpenError`] and
    /// [`WriteError`] but never interpreted by the sink.
    type Error: core::fmt::Debug;

    /// Mounts the backing store.
    fn mount(&mut self) -> Result<(), Self::Error>;

    /// Opens `path` for appending, creating it if absent.
    fn open_append(&mut self, path: &str) -> Result<Self::Handle, Self::Error>;

    /// Returns the current size of the open file in bytes.
    fn size(&mut self, file: &Self::Handle) -> Result<u64, Self::Error>;

    /// Appends bytes, returning how many were written.
    fn write(&mut self, file: &mut Self::Handle, bytes: &[u8]) -> Result<usize, Self::Error>;

    /// Durably flushes previous writes.
    fn flush(&mut self, file: &mut Self::Handle) -> Result<(), Self::Error>;
}

/// The operational state of a log sink.
///
/// A sink is only constructed in `Ready`; `Disabled` is terminal and can
/// only be left by dropping the sink and running a fresh
/// [`LogSink::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkState {
    /// Mount, open and header write all succeeded; appends are persisted.
    Ready,

    /// A write failed; all further appends are silently skipped.
    Disabled,
}

/// Errors that can occur while opening a log sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenError<E> {
    /// Mounting the backing store failed.
    Mount(E),

    /// Opening the log file for append failed.
    Open(E),

    /// Reading the file size failed.
    Size(E),

    /// Writing the header to a fresh log failed.
    Header(WriteError<E>),
}

impl<E: core::fmt::Debug> core::fmt::Display for OpenError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OpenError::Mount(e) => write!(f, "failed to mount backing store: {:?}", e),
            OpenError::Open(e) => write!(f, "failed to open log file: {:?}", e),
            OpenError::Size(e) => write!(f, "failed to read log file size: {:?}", e),
            OpenError::Header(e) => write!(f, "failed to write log header: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for OpenError<E> {}

/// Errors that can occur while appending a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteError<E> {
    /// The backend reported an I/O failure on write or flush.
    Io(E),

    /// The backend accepted fewer bytes than the line holds.
    ShortWrite {
        /// Bytes the backend reported written.
        written: usize,
        /// Bytes the line holds.
        expected: usize,
    },
}

impl<E: core::fmt::Debug> core::fmt::Display for WriteError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WriteError::Io(e) => write!(f, "log write failed: {:?}", e),
            WriteError::ShortWrite { written, expected } => {
                write!(f, "short log write: {} of {} bytes", written, expected)
            }
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for WriteError<E> {}

/// Append-only persistence for event records.
///
/// Owns the storage backend and the open file handle. Constructed through
/// [`open`](Self::open), which mounts the store, opens the log in append
/// mode and writes the header exactly once (only when the file is empty,
/// so records from prior sessions are preserved untouched).
///
/// Failure model: every error is absorbed at this boundary. A failed
/// append flips the sink to [`SinkState::Disabled`] permanently and later
/// appends become silent no-ops, so callers never branch on error kind,
/// only on [`is_ready`](Self::is_ready).
pub struct LogSink<S: LogStorage> {
    storage: S,
    file: S::Handle,
    state: SinkState,
    size_at_open: u64,
}

impl<S: LogStorage> LogSink<S> {
    /// Mounts the store and opens `path` for appending.
    ///
    /// If the file is empty the header line is written and durably flushed
    /// before this returns. On any failure the storage is lost with the
    /// error and the caller should treat logging as unavailable for the
    /// session; there is no retry.
    pub fn open(mut storage: S, path: &str) -> Result<Self, OpenError<S::Error>> {
        storage.mount().map_err(OpenError::Mount)?;

        let mut file = storage.open_append(path).map_err(OpenError::Open)?;
        let size_at_open = storage.size(&file).map_err(OpenError::Size)?;

        if size_at_open == 0 {
            write_all(&mut storage, &mut file, LOG_HEADER).map_err(OpenError::Header)?;
        }

        Ok(Self {
            storage,
            file,
            state: SinkState::Ready,
            size_at_open,
        })
    }

    /// Appends one record line.
    ///
    /// When the sink is disabled this is a silent skip and returns `Ok`:
    /// dropping the record is intentional degradation, not an error the
    /// caller should handle. When ready, the line is written, verified
    /// against its byte count and flushed; any failure disables the sink
    /// permanently and returns the error.
    pub fn append(&mut self, line: &str) -> Result<(), WriteError<S::Error>> {
        if self.state == SinkState::Disabled {
            #[cfg(feature = "defmt")]
            defmt::warn!("log sink disabled, record dropped");
            return Ok(());
        }

        match write_all(&mut self.storage, &mut self.file, line) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.state = SinkState::Disabled;
                #[cfg(feature = "defmt")]
                defmt::warn!("log write failed, sink disabled");
                Err(e)
            }
        }
    }

    /// Returns the current sink state.
    pub fn state(&self) -> SinkState {
        self.state
    }

    /// Returns `true` while appends are persisted.
    pub fn is_ready(&self) -> bool {
        self.state == SinkState::Ready
    }

    /// Returns the log file size observed at open time.
    ///
    /// Zero means this session created the log and wrote the header.
    pub fn size_at_open(&self) -> u64 {
        self.size_at_open
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// Writes a full line and flushes it, verifying the byte count.
fn write_all<S: LogStorage>(
    storage: &mut S,
    file: &mut S::Handle,
    line: &str,
) -> Result<(), WriteError<S::Error>> {
    let bytes = line.as_bytes();
    let written = storage.write(file, bytes).map_err(WriteError::Io)?;

    if written != bytes.len() {
        return Err(WriteError::ShortWrite {
            written,
            expected: bytes.len(),
        });
    }

    storage.flush(file).map_err(WriteError::Io)
}
