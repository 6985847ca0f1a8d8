//! Ready-made [`Hook`](crate::Hook)s.
//!
//! Messages carry no line terminator of their own; install [`newline`] or [`crlf`] as the
//! suffix hook to end every message, or append [`CR`] to templates by hand.

use crate::sink::Sink;

/// The line terminator written by [`newline`].
pub const CR: &str = "\n";

/// Ends the message with [`CR`].
pub fn newline(sink: &mut dyn Sink) {
    sink.write_str(CR);
}

/// Ends the message with `\r\n`, for serial terminals that do not translate line feeds.
pub fn crlf(sink: &mut dyn Sink) {
    sink.write_str("\r\n");
}
