//! The leveled logger.
//!
//! A [`Logger`] holds the threshold, the level tag flag, the output sink and the optional
//! prefix and suffix hooks. Each emission first checks the threshold, so filtered calls
//! cost a comparison and nothing else. Emitted calls write, in order, the prefix hook
//! output, the level tag (`F: `, `E: `, `W: `, `N: `, `T: ` or `V: `), the rendered
//! template and the suffix hook output. Everything is streamed to the sink as it is
//! produced.
//!
//! A logger without a sink drops every message.
//!
//! # Examples
//!
//! ```rust
//! use veecle_log::{Level, Logger, args, hooks};
//!
//! let mut output = heapless::Vec::<u8, 64>::new();
//! let mut log = Logger::new();
//! log.begin(Level::Warning, &mut output, true);
//! log.set_suffix(Some(hooks::newline));
//!
//! log.error("disk %d is %s", &args![2, "gone"]);
//! log.notice("not shown", &[]);
//! # drop(log);
//! # #[cfg(not(feature = "disable"))]
//! assert_eq!(output.as_slice(), b"E: disk 2 is gone\n");
//! ```

use core::fmt;

use crate::argument::Argument;
use crate::config::Config;
use crate::format::{self, FormatError, Strictness};
use crate::level::Level;
use crate::sink::Sink;
use crate::text::TextSource;

/// A function called with the sink before or after each emitted message.
///
/// Hooks must not log through the logger that calls them.
pub type Hook = fn(&mut dyn Sink);

/// A leveled logger writing to a borrowed sink.
///
/// `S` is the sink type. It defaults to `dyn Sink` so sinks of different types can be
/// swapped at runtime; a concrete type avoids the dynamic dispatch.
///
/// The logger is not internally synchronized; share it through a lock or use the
/// process-wide instance in [`global`](crate::global) when several contexts log.
pub struct Logger<'s, S: ?Sized = dyn Sink> {
    level: Level,
    show_level: bool,
    strictness: Strictness,
    sink: Option<&'s mut S>,
    prefix: Option<Hook>,
    suffix: Option<Hook>,
}

impl<'s, S> Logger<'s, S>
where
    S: Sink + ?Sized,
{
    /// Creates a logger without a sink, using [`Config::DEFAULT`].
    pub const fn new() -> Self {
        Self {
            level: Config::DEFAULT.level,
            show_level: Config::DEFAULT.show_level,
            strictness: Config::DEFAULT.strictness,
            sink: None,
            prefix: None,
            suffix: None,
        }
    }

    /// Sets the threshold, the sink and whether level tags are shown.
    ///
    /// Raw integer levels are clamped into `Silent..=Verbose`.
    pub fn begin(
        &mut self,
        level: impl Into<Level>,
        sink: &'s mut S,
        show_level: bool,
    ) {
        self.set_level(level);
        self.set_show_level(show_level);
        self.set_output(sink);
    }

    /// Applies all settings from `config`.
    pub fn configure(&mut self, config: &Config) {
        let Config {
            level,
            show_level,
            strictness,
        } = *config;
        self.level = level;
        self.show_level = show_level;
        self.strictness = strictness;
    }

    /// Returns the current settings.
    pub fn config(&self) -> Config {
        Config {
            level: self.level(),
            show_level: self.show_level(),
            strictness: self.strictness,
        }
    }

    /// Sets the threshold, clamping raw integer levels into `Silent..=Verbose`.
    pub fn set_level(&mut self, level: impl Into<Level>) {
        self.level = level.into();
    }

    /// Returns the threshold.
    ///
    /// Always [`Level::Silent`] when the `disable` feature is set.
    pub fn level(&self) -> Level {
        if cfg!(feature = "disable") {
            return Level::Silent;
        }
        self.level
    }

    /// Sets whether each message starts with its level tag.
    pub fn set_show_level(&mut self, show_level: bool) {
        self.show_level = show_level;
    }

    /// Returns whether each message starts with its level tag.
    ///
    /// Always `false` when the `disable` feature is set.
    pub fn show_level(&self) -> bool {
        !cfg!(feature = "disable") && self.show_level
    }

    /// Sets how unknown specifiers are treated.
    pub fn set_strictness(&mut self, strictness: Strictness) {
        self.strictness = strictness;
    }

    /// Returns how unknown specifiers are treated.
    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Replaces the sink.
    pub fn set_output(&mut self, sink: &'s mut S) {
        self.sink = Some(sink);
    }

    /// Removes and returns the sink, leaving the logger silent until a new one is set.
    pub fn take_output(&mut self) -> Option<&'s mut S> {
        self.sink.take()
    }

    /// Sets or clears the hook called before each emitted message.
    pub fn set_prefix(&mut self, hook: Option<Hook>) {
        self.prefix = hook;
    }

    /// Sets or clears the hook called after each emitted message.
    pub fn set_suffix(&mut self, hook: Option<Hook>) {
        self.suffix = hook;
    }

    /// Returns whether a message at `level` would pass the threshold.
    pub fn is_enabled(&self, level: Level) -> bool {
        level != Level::Silent && level <= self.level()
    }

    /// Emits a message at `level`.
    ///
    /// Returns the first substitution failure; the rest of the message is still written.
    /// Filtered messages and loggers without a sink return `Ok(())` without doing anything.
    pub fn log(
        &mut self,
        level: Level,
        template: impl TextSource,
        args: &[Argument<'_>],
    ) -> Result<(), FormatError> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        let Some(mut sink) = self.sink.as_deref_mut() else {
            return Ok(());
        };

        if let Some(prefix) = self.prefix {
            prefix(&mut sink);
        }

        if self.show_level
            && let Some(tag) = level.tag()
        {
            sink.write_byte(tag);
            sink.write_str(": ");
        }

        let result = format::render(&mut sink, template, args, self.strictness);

        if let Some(suffix) = self.suffix {
            suffix(&mut sink);
        }

        result
    }

    /// Emits a fatal error message.
    pub fn fatal(&mut self, template: impl TextSource, args: &[Argument<'_>]) {
        let _ = self.log(Level::Fatal, template, args);
    }

    /// Emits an error message.
    pub fn error(&mut self, template: impl TextSource, args: &[Argument<'_>]) {
        let _ = self.log(Level::Error, template, args);
    }

    /// Emits a warning message.
    pub fn warning(&mut self, template: impl TextSource, args: &[Argument<'_>]) {
        let _ = self.log(Level::Warning, template, args);
    }

    /// Emits a notice message.
    pub fn notice(&mut self, template: impl TextSource, args: &[Argument<'_>]) {
        let _ = self.log(Level::Notice, template, args);
    }

    /// Emits a trace message.
    pub fn trace(&mut self, template: impl TextSource, args: &[Argument<'_>]) {
        let _ = self.log(Level::Trace, template, args);
    }

    /// Emits a verbose message.
    pub fn verbose(&mut self, template: impl TextSource, args: &[Argument<'_>]) {
        let _ = self.log(Level::Verbose, template, args);
    }
}

impl<S> Default for Logger<'_, S>
where
    S: Sink + ?Sized,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> fmt::Debug for Logger<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("show_level", &self.show_level)
            .field("strictness", &self.strictness)
            .field("has_sink", &self.sink.is_some())
            .field("prefix", &self.prefix.is_some())
            .field("suffix", &self.suffix.is_some())
            .finish()
    }
}
