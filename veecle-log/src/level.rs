//! Severity levels used both as message level and as logger threshold.
//!
//! Levels are totally ordered from [`Level::Silent`] to [`Level::Verbose`].
//! A message is emitted when its level is at most the logger threshold, so a
//! [`Level::Silent`] threshold suppresses everything and [`Level::Verbose`] lets
//! everything through.
//!
//! # Examples
//!
//! ```rust
//! use veecle_log::Level;
//!
//! assert!(Level::Error < Level::Notice);
//! assert_eq!(Level::from(-5), Level::Silent);
//! assert_eq!(Level::from(99), Level::Verbose);
//! assert_eq!("warning".parse::<Level>(), Ok(Level::Warning));
//! ```

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// The severity of a message, or the threshold of a logger.
#[repr(u8)]
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// No output at all.
    ///
    /// Only meaningful as a threshold, messages at this level are never emitted.
    #[default]
    Silent = 0,
    /// Fatal errors.
    Fatal = 1,
    /// All errors.
    Error = 2,
    /// Errors and warnings.
    Warning = 3,
    /// Errors, warnings and notices.
    Notice = 4,
    /// Errors, warnings, notices and traces.
    Trace = 5,
    /// Everything.
    Verbose = 6,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Level; 7] = [
        Level::Silent,
        Level::Fatal,
        Level::Error,
        Level::Warning,
        Level::Notice,
        Level::Trace,
        Level::Verbose,
    ];

    /// Converts a raw level, clamping it into `Silent..=Verbose`.
    pub const fn clamped(raw: i32) -> Self {
        match raw {
            i32::MIN..=0 => Level::Silent,
            1 => Level::Fatal,
            2 => Level::Error,
            3 => Level::Warning,
            4 => Level::Notice,
            5 => Level::Trace,
            _ => Level::Verbose,
        }
    }

    /// Returns the raw numeric value of this level.
    pub const fn to_raw(self) -> u8 {
        self as u8
    }

    /// Returns the single-letter tag written in front of messages at this level.
    ///
    /// [`Level::Silent`] has no tag.
    pub const fn tag(self) -> Option<u8> {
        match self {
            Level::Silent => None,
            Level::Fatal => Some(b'F'),
            Level::Error => Some(b'E'),
            Level::Warning => Some(b'W'),
            Level::Notice => Some(b'N'),
            Level::Trace => Some(b'T'),
            Level::Verbose => Some(b'V'),
        }
    }

    /// Returns the lowercase name of this level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Silent => "silent",
            Level::Fatal => "fatal",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Notice => "notice",
            Level::Trace => "trace",
            Level::Verbose => "verbose",
        }
    }
}

impl From<i32> for Level {
    fn from(raw: i32) -> Self {
        Level::clamped(raw)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.to_raw()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned when parsing a [`Level`] fails.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
#[error("unknown log level, expected one of silent, fatal, error, warning, notice, trace, verbose or a number")]
pub struct ParseLevelError(());

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level name (case-insensitive) or a decimal number.
    ///
    /// Numbers outside `0..=6` are clamped the same way [`Level::clamped`] does.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(level) = Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
        {
            return Ok(level);
        }

        // Saturate overlong numbers instead of failing, they clamp to the edges anyway.
        match s.parse::<i64>() {
            Ok(raw) => Ok(Level::clamped(raw.clamp(i32::MIN.into(), i32::MAX.into()) as i32)),
            Err(_) => Err(ParseLevelError(())),
        }
    }
}
