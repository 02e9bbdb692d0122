//! Log record encoding and parsing.

use core::fmt::Write;

use heapless::String;

use crate::types::EventTag;

/// Header line written once to the start of a fresh log.
///
/// Emitted by [`LogSink::open`](crate::LogSink::open), never by record
/// encoding.
pub const LOG_HEADER: &str = "Event,Timestamp_ms\n";

/// Capacity of an encoded record line.
///
/// Covers the longest tag name plus a `u32::MAX` timestamp, separator and
/// newline.
pub const MAX_RECORD_LEN: usize = 32;

/// A single timestamped event, serialized as one text line.
///
/// Records are append-only: once written they are never rewritten or
/// deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LogRecord {
    /// The detected event.
    pub event: EventTag,

    /// Milliseconds since boot at detection time.
    pub timestamp_ms: u32,
}

/// Record parsing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// No comma separator, so no timestamp field.
    MissingTimestamp,

    /// The event field is not a known tag name.
    UnknownEvent,

    /// The timestamp field is not a valid `u32`.
    InvalidTimestamp,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::MissingTimestamp => {
                write!(f, "record line has no timestamp field")
            }
            ParseError::UnknownEvent => {
                write!(f, "record line names an unknown event")
            }
            ParseError::InvalidTimestamp => {
                write!(f, "record timestamp is not a valid u32")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

impl LogRecord {
    /// Creates a record from an event and its detection timestamp.
    pub const fn new(event: EventTag, timestamp_ms: u32) -> Self {
        Self {
            event,
            timestamp_ms,
        }
    }

    /// Encodes the record as its durable text line, `"<TAG>,<ms>\n"`.
    ///
    /// Total function: [`MAX_RECORD_LEN`] covers every tag/timestamp
    /// combination, so the write cannot be truncated.
    pub fn encode(&self) -> String<MAX_RECORD_LEN> {
        let mut line = String::new();
        let _ = write!(line, "{},{}\n", self.event.as_str(), self.timestamp_ms);
        line
    }

    /// Parses one record line, with or without its trailing newline.
    ///
    /// The header line is not a record and parses as
    /// [`ParseError::UnknownEvent`].
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        let (name, timestamp) = line
            .split_once(',')
            .ok_or(ParseError::MissingTimestamp)?;
        let event = EventTag::from_name(name).ok_or(ParseError::UnknownEvent)?;
        let timestamp_ms = timestamp
            .parse()
            .map_err(|_| ParseError::InvalidTimestamp)?;

        Ok(Self {
            event,
            timestamp_ms,
        })
    }
}

impl core::fmt::Display for LogRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{},{}", self.event.as_str(), self.timestamp_ms)
    }
}
