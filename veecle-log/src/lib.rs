//! # `veecle-log`
//!
//! A small leveled logger for embedded and hosted targets.
//!
//! Messages are filtered by level, optionally tagged with a one-letter level marker, and
//! rendered from `printf`-like templates straight into a byte [`Sink`](sink::Sink). Nothing
//! is buffered or allocated on the way.
//!
//! ## Features
//!
//! - **Leveled filtering**: six message levels plus [`Level::Silent`]; filtered calls cost
//!   a comparison
//! - **Typed arguments**: every template substitution is checked against the
//!   [`Argument`] it consumes
//! - **Read-only templates**: templates and text arguments may live in memory that is
//!   only reachable through an accessor, see [`text::FlashStr`]
//! - **Hooks**: functions called before and after every message, e.g. for timestamps or
//!   line terminators
//!
//! ## Feature Flags
//!
//! - `global` (default) - The process-wide logger and the logging macros
//! - `disable` - Compile every emission to a no-op, should only be set in binary crates
//! - `std` - Standard library support and the [`sink::Stdout`] sink (implies `alloc`)
//! - `alloc` - `Vec<u8>` and `String` support
//! - `embedded-io` - `sink::IoSink` for any `embedded_io::Write` implementation
//! - `rtt` - `sink::RttSink` for RTT up-channels
//!
//! ## Basic Usage
//!
//! Configure a logger with a threshold, a sink and the level tag flag, then log:
//!
//! ```rust
//! use veecle_log::{Level, Logger, args, hooks};
//!
//! let mut output = heapless::Vec::<u8, 128>::new();
//! let mut log = Logger::new();
//! log.begin(Level::Notice, &mut output, true);
//! log.set_suffix(Some(hooks::newline));
//!
//! log.notice("link up at %I", &args![[192, 168, 1, 20]]);
//! log.warning("retry %d of %d", &args![2, 5]);
//! log.trace("dropped", &[]);
//! # drop(log);
//! # #[cfg(not(feature = "disable"))]
//! assert_eq!(output.as_slice(), b"N: link up at 192.168.1.20\nW: retry 2 of 5\n");
//! ```
//!
//! With the `global` feature the same is available process-wide:
//!
//! ```rust
//! use veecle_log::sink::Stdout;
//! use veecle_log::{Level, notice};
//!
//! veecle_log::global::begin(Level::Verbose, Box::leak(Box::new(Stdout::DEFAULT)), false);
//! notice!("%d sensors online\n", 4);
//! ```
//!
//! ## Conditional Compilation
//!
//! When the `disable` feature is enabled, every logger reports [`Level::Silent`] and all
//! emission compiles to no-ops, so production builds carry no logging overhead beyond the
//! call sites' argument construction.

#![no_std]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

mod argument;
mod config;
pub mod format;
#[cfg(feature = "global")]
pub mod global;
pub mod hooks;
mod level;
mod logger;
mod macros;
pub mod sink;
pub mod text;

pub use argument::{Argument, ArgumentKind};
pub use config::Config;
pub use format::{FormatError, Strictness};
pub use level::{Level, ParseLevelError};
pub use logger::{Hook, Logger};
