//! Tagged values substituted into message templates.
//!
//! Every specifier in a template consumes one [`Argument`]. Arguments carry the kind of
//! value they hold, so a specifier that is handed the wrong kind is detected instead of
//! misreading the value.
//!
//! Integer arguments keep the width they were created with. This matters for the
//! hexadecimal and binary specifiers, which print negative numbers as their
//! two's-complement bit pattern at that width.
//!
//! # Examples
//!
//! ```rust
//! use core::net::Ipv4Addr;
//! use veecle_log::{Argument, args};
//!
//! let single = Argument::from(42);
//! let list = args![-1, 7u8, 2.5, 'x', true, "text", Ipv4Addr::LOCALHOST];
//! assert_eq!(list.len(), 7);
//! assert!(matches!(single, Argument::Int(42)));
//! ```

use core::fmt;
use core::net::Ipv4Addr;

use crate::text::FlashStr;

/// A single value to be substituted into a template.
#[derive(Clone, Copy, Debug)]
pub enum Argument<'a> {
    /// A signed integer of at most 32 bits.
    Int(i32),
    /// A signed 64-bit integer.
    Long(i64),
    /// An unsigned integer of at most 32 bits.
    UInt(u32),
    /// An unsigned 64-bit integer.
    ULong(u64),
    /// A floating-point number.
    Float(f64),
    /// A character.
    Char(char),
    /// A boolean.
    Bool(bool),
    /// In-memory text.
    Str(&'a str),
    /// Read-only text reached through an accessor.
    Flash(FlashStr),
    /// An IPv4 address.
    Ipv4(Ipv4Addr),
}

impl Argument<'_> {
    /// Returns what kind of value this argument holds.
    pub const fn kind(&self) -> ArgumentKind {
        match self {
            Argument::Int(_) | Argument::Long(_) | Argument::UInt(_) | Argument::ULong(_) => {
                ArgumentKind::Integer
            }
            Argument::Float(_) => ArgumentKind::Float,
            Argument::Char(_) => ArgumentKind::Char,
            Argument::Bool(_) => ArgumentKind::Bool,
            Argument::Str(_) | Argument::Flash(_) => ArgumentKind::Text,
            Argument::Ipv4(_) => ArgumentKind::Address,
        }
    }
}

/// The kind of value held by an [`Argument`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ArgumentKind {
    /// Any signed or unsigned integer.
    Integer,
    /// A floating-point number.
    Float,
    /// A character.
    Char,
    /// A boolean.
    Bool,
    /// In-memory or read-only text.
    Text,
    /// An IPv4 address.
    Address,
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArgumentKind::Integer => "an integer",
            ArgumentKind::Float => "a float",
            ArgumentKind::Char => "a character",
            ArgumentKind::Bool => "a boolean",
            ArgumentKind::Text => "text",
            ArgumentKind::Address => "an address",
        })
    }
}

macro_rules! impl_from {
    ($variant:ident($target:ty): $($source:ty),*) => {
        $(
            impl From<$source> for Argument<'_> {
                fn from(value: $source) -> Self {
                    Argument::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

impl_from!(Int(i32): i8, i16, i32);
impl_from!(Long(i64): i64);
impl_from!(UInt(u32): u8, u16, u32);
impl_from!(ULong(u64): u64);
impl_from!(Float(f64): f32, f64);
impl_from!(Char(char): char);
impl_from!(Bool(bool): bool);
impl_from!(Flash(FlashStr): FlashStr);
impl_from!(Ipv4(Ipv4Addr): Ipv4Addr);

impl From<isize> for Argument<'_> {
    fn from(value: isize) -> Self {
        // `isize` is at most 64 bits wide on every supported target.
        Argument::Long(value as i64)
    }
}

impl From<usize> for Argument<'_> {
    fn from(value: usize) -> Self {
        Argument::ULong(value as u64)
    }
}

impl From<[u8; 4]> for Argument<'_> {
    fn from(octets: [u8; 4]) -> Self {
        Argument::Ipv4(Ipv4Addr::from(octets))
    }
}

impl<'a> From<&'a str> for Argument<'a> {
    fn from(value: &'a str) -> Self {
        Argument::Str(value)
    }
}

impl<'a> From<&'a &str> for Argument<'a> {
    fn from(value: &'a &str) -> Self {
        Argument::Str(value)
    }
}

#[cfg(feature = "alloc")]
impl<'a> From<&'a alloc::string::String> for Argument<'a> {
    fn from(value: &'a alloc::string::String) -> Self {
        Argument::Str(value)
    }
}

impl<'a, const N: usize> From<&'a heapless::String<N>> for Argument<'a> {
    fn from(value: &'a heapless::String<N>) -> Self {
        Argument::Str(value)
    }
}
