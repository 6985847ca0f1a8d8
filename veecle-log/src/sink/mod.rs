//! Output sinks receiving formatted log output.
//!
//! A [`Sink`] only has to accept bytes; numbers, floats and `core::fmt` output are
//! rendered into small stack buffers by the provided methods. Sinks never report write
//! failures: a logger has nowhere to send them, so dropping output is the sink's call.
//!
//! # Built-in Sinks
//!
//! - [`heapless::Vec<u8, N>`]: bounded in-memory capture, bytes beyond capacity are dropped
//! - [`alloc::vec::Vec<u8>`] (`alloc` feature): unbounded in-memory capture
//! - [`IoSink`] (`embedded-io` feature): any [`embedded_io::Write`] implementation
//! - [`RttSink`] (`rtt` feature): an RTT up-channel
//! - [`Stdout`] (`std` feature): the process' standard output
//! - [`TestSink`] (`std` feature): shared capture for tests

#[cfg(feature = "embedded-io")]
mod io;
#[cfg(feature = "rtt")]
mod rtt;
#[cfg(feature = "std")]
mod stdout;
#[cfg(feature = "std")]
mod test_sink;

use core::fmt;

#[cfg(feature = "embedded-io")]
pub use io::IoSink;
#[cfg(feature = "rtt")]
pub use rtt::RttSink;
#[cfg(feature = "std")]
pub use stdout::Stdout;
#[cfg(feature = "std")]
#[doc(hidden)]
pub use test_sink::TestSink;

/// The base used when writing integers.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Radix {
    /// Base 2.
    Binary = 2,
    /// Base 8.
    Octal = 8,
    /// Base 10.
    Decimal = 10,
    /// Base 16, lowercase digits.
    Hexadecimal = 16,
}

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Largest magnitude (exclusive) whose integer part still fits a `u64`.
const FLOAT_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// A destination for log output.
///
/// Only [`Sink::write_bytes`] is required, every other method has a default in terms of it.
/// Implementations may override the provided methods when the underlying device has a
/// cheaper way to output them.
///
/// # Examples
///
/// ```rust
/// use veecle_log::sink::{Radix, Sink};
///
/// let mut output = heapless::Vec::<u8, 32>::new();
/// output.write_str("0x");
/// output.write_unsigned(0xbeef, Radix::Hexadecimal);
/// output.write_byte(b' ');
/// output.write_float(-1.5, 2);
/// assert_eq!(output.as_slice(), b"0xbeef -1.50");
/// ```
pub trait Sink {
    /// Writes a run of bytes.
    fn write_bytes(&mut self, bytes: &[u8]);

    /// Writes a single byte.
    fn write_byte(&mut self, byte: u8) {
        self.write_bytes(&[byte]);
    }

    /// Writes text.
    fn write_str(&mut self, text: &str) {
        self.write_bytes(text.as_bytes());
    }

    /// Writes `value` in the given base without any prefix.
    fn write_unsigned(&mut self, value: u64, radix: Radix) {
        let mut buffer = [0u8; 64];
        let mut start = buffer.len();
        let base = u64::from(radix as u8);
        let mut value = value;

        loop {
            start -= 1;
            buffer[start] = DIGITS[(value % base) as usize];
            value /= base;
            if value == 0 {
                break;
            }
        }

        self.write_bytes(&buffer[start..]);
    }

    /// Writes `value` in the given base without any prefix.
    ///
    /// Negative values get a leading `-` in base 10; in every other base their 64-bit
    /// two's-complement pattern is written.
    fn write_signed(&mut self, value: i64, radix: Radix) {
        if radix == Radix::Decimal && value < 0 {
            self.write_byte(b'-');
            self.write_unsigned(value.unsigned_abs(), radix);
        } else {
            self.write_unsigned(value as u64, radix);
        }
    }

    /// Writes `value` in decimal notation with `digits` fractional digits, rounding half up.
    ///
    /// Not-a-number is written as `nan`, infinities as `inf` and values whose integer part
    /// does not fit into a `u64` as `ovf`.
    fn write_float(&mut self, value: f64, digits: u8) {
        if value.is_nan() {
            return self.write_str("nan");
        }
        if value.is_infinite() {
            return self.write_str("inf");
        }
        if value >= FLOAT_LIMIT || value <= -FLOAT_LIMIT {
            return self.write_str("ovf");
        }

        let mut value = value;
        if value < 0.0 {
            self.write_byte(b'-');
            value = -value;
        }

        let mut rounding = 0.5;
        for _ in 0..digits {
            rounding /= 10.0;
        }
        value += rounding;

        // Saturates for the few values that rounding pushed past the limit.
        let integer = value as u64;
        let mut remainder = value - integer as f64;
        self.write_unsigned(integer, Radix::Decimal);

        if digits > 0 {
            self.write_byte(b'.');
        }
        for _ in 0..digits {
            remainder *= 10.0;
            let digit = (remainder as u8).min(9);
            self.write_byte(b'0' + digit);
            remainder -= f64::from(digit);
        }
    }

    /// Writes pre-formatted arguments, enabling `write!(sink, ...)`.
    ///
    /// Any formatting error raised by a `Display` implementation ends the output early.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        let _ = fmt::Write::write_fmt(&mut FmtAdapter(self), args);
    }
}

/// Bridges a [`Sink`] into [`fmt::Write`].
struct FmtAdapter<'a, S: ?Sized>(&'a mut S);

impl<S> fmt::Write for FmtAdapter<'_, S>
where
    S: Sink + ?Sized,
{
    fn write_str(&mut self, text: &str) -> fmt::Result {
        self.0.write_str(text);
        Ok(())
    }
}

impl<S> Sink for &mut S
where
    S: Sink + ?Sized,
{
    fn write_bytes(&mut self, bytes: &[u8]) {
        (**self).write_bytes(bytes);
    }

    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte);
    }

    fn write_str(&mut self, text: &str) {
        (**self).write_str(text);
    }

    fn write_unsigned(&mut self, value: u64, radix: Radix) {
        (**self).write_unsigned(value, radix);
    }

    fn write_signed(&mut self, value: i64, radix: Radix) {
        (**self).write_signed(value, radix);
    }

    fn write_float(&mut self, value: f64, digits: u8) {
        (**self).write_float(value, digits);
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        (**self).write_fmt(args);
    }
}

impl<const N: usize> Sink for heapless::Vec<u8, N> {
    fn write_bytes(&mut self, bytes: &[u8]) {
        let room = self.capacity() - self.len();
        // Cannot fail, the slice is cut down to the remaining capacity.
        let _ = self.extend_from_slice(&bytes[..bytes.len().min(room)]);
    }

    fn write_byte(&mut self, byte: u8) {
        let _ = self.push(byte);
    }
}

#[cfg(feature = "alloc")]
impl Sink for alloc::vec::Vec<u8> {
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }

    fn write_byte(&mut self, byte: u8) {
        self.push(byte);
    }
}
