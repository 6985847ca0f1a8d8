//! The process-wide default logger.
//!
//! The instance starts out silent and without a sink; configure it once with [`begin`] and
//! adjust it at any time through [`with`]. The leveled macros ([`fatal!`](crate::fatal),
//! [`error!`](crate::error), ...) log through it.
//!
//! Access is serialized with a [`critical_section`], so emission runs with the critical
//! section held. On bare-metal targets this usually means interrupts stay disabled while a
//! message is written; keep sinks fast or log from a single context through an explicit
//! [`Logger`] instead.
//!
//! The threshold is mirrored outside the critical section, so filtered messages return
//! without taking it. With the `disable` feature every message returns right away.
//!
//! A hook that logs through the global logger is ignored rather than nesting output.
//!
//! # Examples
//!
//! ```rust
//! use veecle_log::sink::Stdout;
//! use veecle_log::{Level, hooks, notice};
//!
//! veecle_log::global::begin(Level::Notice, Box::leak(Box::new(Stdout::DEFAULT)), true);
//! veecle_log::global::with(|log| log.set_suffix(Some(hooks::newline)));
//!
//! notice!("ready after %d ms", 12);
//! ```

use core::cell::RefCell;
use core::sync::atomic::{AtomicU8, Ordering};

use critical_section::Mutex;

use crate::argument::Argument;
use crate::level::Level;
use crate::logger::Logger;
use crate::sink::Sink;
use crate::text::TextSource;

/// The type of the global logger; its sink is shared between execution contexts.
pub type GlobalLogger = Logger<'static, dyn Sink + Send>;

static LOGGER: Mutex<RefCell<GlobalLogger>> = Mutex::new(RefCell::new(Logger::new()));

/// Copy of the logger's threshold, updated whenever the logger was handed out.
static THRESHOLD: AtomicU8 = AtomicU8::new(Level::Silent.to_raw());

/// Runs `f` with exclusive access to the global logger.
///
/// Returns `None` without calling `f` if the logger is already in use further up the call
/// stack, e.g. when called from a hook.
pub fn with<R>(f: impl FnOnce(&mut GlobalLogger) -> R) -> Option<R> {
    critical_section::with(|cs| {
        let mut logger = LOGGER.borrow(cs).try_borrow_mut().ok()?;
        let result = f(&mut logger);
        THRESHOLD.store(logger.level().to_raw(), Ordering::Relaxed);
        Some(result)
    })
}

/// Returns whether a message at `level` would pass the global threshold.
///
/// Does not enter the critical section.
pub fn is_enabled(level: Level) -> bool {
    !cfg!(feature = "disable")
        && level != Level::Silent
        && level.to_raw() <= THRESHOLD.load(Ordering::Relaxed)
}

/// Sets the threshold, the sink and whether level tags are shown on the global logger.
///
/// Raw integer levels are clamped into `Silent..=Verbose`.
pub fn begin(level: impl Into<Level>, sink: &'static mut (dyn Sink + Send), show_level: bool) {
    let _ = with(|logger| logger.begin(level, sink, show_level));
}

/// Emits a message at `level` through the global logger.
///
/// Prefer the leveled macros.
#[doc(hidden)]
pub fn log(level: Level, template: impl TextSource, args: &[Argument<'_>]) {
    // Always false with the `disable` feature, the critical section is never entered.
    if !is_enabled(level) {
        return;
    }
    let _ = with(|logger| logger.log(level, template, args));
}
