//! Byte sources for templates and text arguments.
//!
//! Templates are scanned one byte at a time, so anything that can hand out its bytes in
//! order can be a template. Besides ordinary in-memory text this covers read-only text
//! that can only be reached through an accessor function, like string literals placed in
//! program memory on Harvard architectures.
//!
//! # Examples
//!
//! ```rust
//! use veecle_log::flash;
//! use veecle_log::text::TextSource;
//!
//! let text = flash!("stored elsewhere");
//! assert!(text.text_bytes().eq("stored elsewhere".bytes()));
//! ```

use core::ffi::CStr;
use core::fmt;

/// A source of text that can be read byte by byte.
pub trait TextSource {
    /// Returns the bytes of this text in order.
    fn text_bytes(&self) -> impl Iterator<Item = u8> + '_;
}

impl TextSource for str {
    fn text_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.as_bytes().iter().copied()
    }
}

impl TextSource for [u8] {
    fn text_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.iter().copied()
    }
}

impl TextSource for CStr {
    fn text_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.to_bytes().iter().copied()
    }
}

impl<T> TextSource for &T
where
    T: TextSource + ?Sized,
{
    fn text_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        (**self).text_bytes()
    }
}

#[cfg(feature = "alloc")]
impl TextSource for alloc::string::String {
    fn text_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.as_bytes().iter().copied()
    }
}

impl<const N: usize> TextSource for heapless::String<N> {
    fn text_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.as_bytes().iter().copied()
    }
}

/// Reads one byte of read-only text.
///
/// # Safety
///
/// Callers must pass a pointer that lies within the text a [`FlashStr`] was created for.
pub type ReadByte = unsafe fn(*const u8) -> u8;

/// NUL-terminated read-only text that is read through an accessor function.
///
/// On targets with a single address space the accessor is a plain memory read and
/// [`FlashStr::from_c_str`] (or the [`flash!`](crate::flash) macro) is all that is needed.
/// Targets that keep literals in a separate address space supply their own accessor via
/// [`FlashStr::from_raw`].
#[derive(Clone, Copy)]
pub struct FlashStr {
    start: *const u8,
    read: ReadByte,
}

impl FlashStr {
    /// Wraps a NUL-terminated string that lives in ordinary memory.
    pub const fn from_c_str(text: &'static CStr) -> Self {
        Self {
            start: text.as_ptr().cast(),
            read: core::ptr::read::<u8>,
        }
    }

    /// Wraps NUL-terminated text that is only reachable through `read`.
    ///
    /// # Safety
    ///
    /// `start` must point to a sequence of bytes terminated by a `0` byte that stays valid for
    /// reads through `read` for the rest of the program, and `read` must be sound to call with
    /// every address from `start` up to and including the terminator.
    pub const unsafe fn from_raw(start: *const u8, read: ReadByte) -> Self {
        Self { start, read }
    }
}

impl TextSource for FlashStr {
    fn text_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        FlashBytes {
            cursor: self.start,
            read: self.read,
        }
    }
}

impl fmt::Debug for FlashStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FlashStr(\"")?;
        for escaped in self.text_bytes().flat_map(core::ascii::escape_default) {
            fmt::Write::write_char(f, char::from(escaped))?;
        }
        f.write_str("\")")
    }
}

/// Iterator over the bytes of a [`FlashStr`], stops at the terminator.
struct FlashBytes {
    cursor: *const u8,
    read: ReadByte,
}

impl Iterator for FlashBytes {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        // SAFETY: the cursor starts at the beginning of the text and only advances past bytes
        // that were not the terminator, so it stays within the range promised at construction.
        let byte = unsafe { (self.read)(self.cursor) };

        if byte == 0 {
            return None;
        }

        // SAFETY: `byte` was not the terminator, so the next address is still part of the text.
        self.cursor = unsafe { self.cursor.add(1) };

        Some(byte)
    }
}
