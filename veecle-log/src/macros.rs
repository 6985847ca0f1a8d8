//! Macros for building argument lists and logging through the global logger.
//!
//! # Argument Lists
//!
//! - `args!`: Converts each expression into an [`Argument`](crate::Argument)
//! - `flash!`: Places a string literal behind a [`FlashStr`](crate::text::FlashStr)
//!
//! # Logging Macros
//!
//! These need the `global` feature and log through [`global`](crate::global).
//!
//! - `log!`: Generic logging macro that accepts a level
//! - `fatal!`, `error!`, `warning!`, `notice!`, `trace!`, `verbose!`: One per level

/// Builds an array of [`Argument`](crate::Argument)s, converting each expression with
/// `Argument::from`.
///
/// # Examples
///
/// ```rust
/// use veecle_log::{Argument, args};
///
/// let name = "pump";
/// let list = args![name, 3u8, -0.5];
/// assert!(matches!(list, [Argument::Str("pump"), Argument::UInt(3), Argument::Float(_)]));
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        [$($crate::Argument::from($arg)),*]
    };
}

/// Creates a [`FlashStr`](crate::text::FlashStr) for a string literal.
///
/// The literal must not contain NUL bytes, this is checked at compile time.
///
/// # Examples
///
/// ```rust
/// use veecle_log::{flash, text::TextSource};
///
/// let banner = flash!("booting");
/// assert!(banner.text_bytes().eq(*b"booting"));
/// ```
#[macro_export]
macro_rules! flash {
    ($text:literal) => {
        $crate::text::FlashStr::from_c_str(const {
            match ::core::ffi::CStr::from_bytes_with_nul(::core::concat!($text, "\0").as_bytes()) {
                Ok(text) => text,
                Err(_) => ::core::panic!("flash text must not contain NUL bytes"),
            }
        })
    };
}

/// Logs a message at the given level through the global logger.
///
/// Takes the level, the template and any number of arguments, which are converted with
/// [`args!`].
///
/// # Examples
///
/// ```rust
/// use veecle_log::{Level, log};
///
/// log!(Level::Warning, "sensor %d reads %F", 3, 21.5);
/// ```
#[cfg(feature = "global")]
#[macro_export]
macro_rules! log {
    ($level:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::log($level, $template, &$crate::args!($($arg),*))
    };
}

/// Logs a fatal error message through the global logger.
///
/// ```rust
/// use veecle_log::fatal;
///
/// fatal!("watchdog expired");
/// ```
#[cfg(feature = "global")]
#[macro_export]
macro_rules! fatal {
    ($($args:tt)*) => {
        $crate::log!($crate::Level::Fatal, $($args)*)
    };
}

/// Logs an error message through the global logger.
///
/// ```rust
/// use veecle_log::error;
///
/// let code = 0x2a;
/// error!("write failed with %x", code);
/// ```
#[cfg(feature = "global")]
#[macro_export]
macro_rules! error {
    ($($args:tt)*) => {
        $crate::log!($crate::Level::Error, $($args)*)
    };
}

/// Logs a warning message through the global logger.
#[cfg(feature = "global")]
#[macro_export]
macro_rules! warning {
    ($($args:tt)*) => {
        $crate::log!($crate::Level::Warning, $($args)*)
    };
}

/// Logs a notice message through the global logger.
#[cfg(feature = "global")]
#[macro_export]
macro_rules! notice {
    ($($args:tt)*) => {
        $crate::log!($crate::Level::Notice, $($args)*)
    };
}

/// Logs a trace message through the global logger.
#[cfg(feature = "global")]
#[macro_export]
macro_rules! trace {
    ($($args:tt)*) => {
        $crate::log!($crate::Level::Trace, $($args)*)
    };
}

/// Logs a verbose message through the global logger.
///
/// ```rust
/// use veecle_log::{flash, verbose};
///
/// verbose!(flash!("%s took %l us"), "tick", 1_250u64);
/// ```
#[cfg(feature = "global")]
#[macro_export]
macro_rules! verbose {
    ($($args:tt)*) => {
        $crate::log!($crate::Level::Verbose, $($args)*)
    };
}
