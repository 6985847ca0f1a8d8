//! The template interpreter.
//!
//! [`render`] scans a template byte by byte and streams the result into a [`Sink`]. A `%`
//! followed by a specifier byte consumes the next [`Argument`] and writes it:
//!
//! | Specifier | Argument | Output |
//! |---|---|---|
//! | `%s`, `%S`, `%P` | text | the text |
//! | `%I` | IPv4 address | `a.b.c.d` |
//! | `%d`, `%i`, `%l` | integer | base 10 |
//! | `%u` | integer | base 10, signed values reinterpreted as unsigned |
//! | `%D`, `%F` | float | base 10 with two fractional digits |
//! | `%x` / `%X` | integer | base 16 without / with `0x` prefix |
//! | `%b` / `%B` | integer | base 2 without / with `0b` prefix |
//! | `%c` | character or integer up to 255 | the character, integers as Latin-1 |
//! | `%t` / `%T` | boolean or integer | `T`/`F` / `true`/`false` |
//! | `%%` | none | `%` |
//!
//! A `%` followed by any other character is dropped together with that character and
//! consumes no argument, unless [`Strictness::Strict`] is selected.
//!
//! When a substitution fails (wrong argument kind, no argument left, or an unknown
//! specifier in strict mode) the marker `%!` followed by the specifier is written in
//! its place and rendering continues; the first failure is returned.
//!
//! # Examples
//!
//! ```rust
//! use veecle_log::format::{Strictness, render};
//! use veecle_log::args;
//!
//! let mut output = heapless::Vec::<u8, 64>::new();
//! render(&mut output, "%s is %X, 100%%", &args!["mask", 255], Strictness::Lenient).unwrap();
//! assert_eq!(output.as_slice(), b"mask is 0xff, 100%");
//! ```

use serde::{Deserialize, Serialize};

use crate::argument::{Argument, ArgumentKind};
use crate::sink::{Radix, Sink};
use crate::text::TextSource;

/// Number of fractional digits written for `%D` and `%F`.
pub const FLOAT_DIGITS: u8 = 2;

/// How the interpreter treats a `%` that is not followed by a known specifier.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Drop the `%` and the following byte without output or error.
    #[default]
    Lenient,
    /// Write a marker and report [`FormatError::UnknownSpecifier`] or
    /// [`FormatError::TrailingPercent`].
    Strict,
}

/// A substitution that could not be rendered.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum FormatError {
    /// The argument does not have a kind the specifier can format.
    #[error("`%{specifier}` cannot format {found}")]
    Mismatch {
        /// The specifier byte.
        specifier: char,
        /// The kind of the argument that was supplied.
        found: ArgumentKind,
    },
    /// All arguments were consumed before this specifier.
    #[error("`%{specifier}` has no argument left to format")]
    MissingArgument {
        /// The specifier byte.
        specifier: char,
    },
    /// The byte after a `%` is not a specifier (strict mode only).
    #[error("`%{specifier}` is not a known specifier")]
    UnknownSpecifier {
        /// The byte following the `%`.
        specifier: char,
    },
    /// The template ends with a single `%` (strict mode only).
    #[error("the template ends with a lone `%`")]
    TrailingPercent,
}

/// Renders `template` into `sink`, substituting `args` in order.
///
/// Surplus arguments are ignored. See the [module documentation](self) for the specifiers
/// and the failure behavior.
pub fn render(
    sink: &mut dyn Sink,
    template: impl TextSource,
    args: &[Argument<'_>],
    strictness: Strictness,
) -> Result<(), FormatError> {
    let mut args = args.iter();
    let mut bytes = template.text_bytes().peekable();
    let mut first_error = None;

    while let Some(byte) = bytes.next() {
        if byte != b'%' {
            sink.write_byte(byte);
            continue;
        }

        let Some(byte) = bytes.next() else {
            if strictness == Strictness::Strict {
                sink.write_str(MARKER);
                first_error.get_or_insert(FormatError::TrailingPercent);
            }
            break;
        };

        // A non-ASCII specifier spans its continuation bytes too.
        let mut encoded = [byte, 0, 0, 0];
        let mut len = 1;
        if !byte.is_ascii() {
            while len < encoded.len() {
                let Some(next) = bytes.next_if(|&next| matches!(next, 0x80..=0xbf)) else {
                    break;
                };
                encoded[len] = next;
                len += 1;
            }
        }
        let encoded = &encoded[..len];
        let specifier = core::str::from_utf8(encoded)
            .ok()
            .and_then(|text| text.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);

        let result = match Specifier::from_byte(byte) {
            Some(Specifier::Percent) => {
                sink.write_byte(b'%');
                Ok(())
            }
            Some(kind) => match args.next() {
                Some(argument) => kind
                    .write(sink, argument)
                    .map_err(|found| FormatError::Mismatch { specifier, found }),
                None => Err(FormatError::MissingArgument { specifier }),
            },
            None => match strictness {
                Strictness::Lenient => Ok(()),
                Strictness::Strict => Err(FormatError::UnknownSpecifier { specifier }),
            },
        };

        if let Err(error) = result {
            sink.write_str(MARKER);
            sink.write_bytes(encoded);
            first_error.get_or_insert(error);
        }
    }

    match first_error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// Written in place of a substitution that failed.
const MARKER: &str = "%!";

/// What a specifier byte asks for.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Specifier {
    Percent,
    Text,
    Address,
    Decimal,
    Unsigned,
    Float,
    Hex,
    HexPrefixed,
    Binary,
    BinaryPrefixed,
    Char,
    BoolLetter,
    BoolWord,
}

impl Specifier {
    const fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            b'%' => Specifier::Percent,
            b's' | b'S' | b'P' => Specifier::Text,
            b'I' => Specifier::Address,
            b'd' | b'i' | b'l' => Specifier::Decimal,
            b'u' => Specifier::Unsigned,
            b'D' | b'F' => Specifier::Float,
            b'x' => Specifier::Hex,
            b'X' => Specifier::HexPrefixed,
            b'b' => Specifier::Binary,
            b'B' => Specifier::BinaryPrefixed,
            b'c' => Specifier::Char,
            b't' => Specifier::BoolLetter,
            b'T' => Specifier::BoolWord,
            _ => return None,
        })
    }

    /// Writes `argument`, or returns its kind if this specifier cannot format it.
    fn write(self, sink: &mut dyn Sink, argument: &Argument<'_>) -> Result<(), ArgumentKind> {
        let mismatch = Err(argument.kind());

        match (self, *argument) {
            (Specifier::Text, Argument::Str(text)) => sink.write_str(text),
            (Specifier::Text, Argument::Flash(text)) => {
                for byte in text.text_bytes() {
                    sink.write_byte(byte);
                }
            }
            (Specifier::Address, Argument::Ipv4(address)) => {
                let [a, b, c, d] = address.octets();
                sink.write_unsigned(a.into(), Radix::Decimal);
                for octet in [b, c, d] {
                    sink.write_byte(b'.');
                    sink.write_unsigned(octet.into(), Radix::Decimal);
                }
            }
            (Specifier::Decimal, Argument::Int(value)) => {
                sink.write_signed(value.into(), Radix::Decimal);
            }
            (Specifier::Decimal, Argument::Long(value)) => {
                sink.write_signed(value, Radix::Decimal);
            }
            (Specifier::Decimal, Argument::UInt(value)) => {
                sink.write_unsigned(value.into(), Radix::Decimal);
            }
            (Specifier::Decimal, Argument::ULong(value)) => {
                sink.write_unsigned(value, Radix::Decimal);
            }
            (Specifier::Float, Argument::Float(value)) => sink.write_float(value, FLOAT_DIGITS),
            (Specifier::Char, argument) => {
                let value = match argument {
                    Argument::Char(value) => value,
                    argument => bit_pattern(&argument)
                        .and_then(|bits| u8::try_from(bits).ok())
                        .map(char::from)
                        .ok_or(argument.kind())?,
                };
                let mut buffer = [0; 4];
                sink.write_str(value.encode_utf8(&mut buffer));
            }
            (Specifier::BoolLetter | Specifier::BoolWord, argument) => {
                let value = match argument {
                    Argument::Bool(value) => value,
                    argument => bit_pattern(&argument).ok_or(argument.kind())? != 0,
                };
                sink.write_str(match (self, value) {
                    (Specifier::BoolLetter, true) => "T",
                    (Specifier::BoolLetter, false) => "F",
                    (_, true) => "true",
                    (_, false) => "false",
                });
            }
            (
                Specifier::Unsigned
                | Specifier::Hex
                | Specifier::HexPrefixed
                | Specifier::Binary
                | Specifier::BinaryPrefixed,
                argument,
            ) => {
                let Some(bits) = bit_pattern(&argument) else {
                    return mismatch;
                };
                let radix = match self {
                    Specifier::Unsigned => Radix::Decimal,
                    Specifier::Hex | Specifier::HexPrefixed => Radix::Hexadecimal,
                    _ => Radix::Binary,
                };
                match self {
                    Specifier::HexPrefixed => sink.write_str("0x"),
                    Specifier::BinaryPrefixed => sink.write_str("0b"),
                    _ => {}
                }
                sink.write_unsigned(bits, radix);
            }
            _ => return mismatch,
        }

        Ok(())
    }
}

/// Returns the two's-complement pattern of an integer argument at its own width.
fn bit_pattern(argument: &Argument<'_>) -> Option<u64> {
    match *argument {
        Argument::Int(value) => Some((value as u32).into()),
        Argument::Long(value) => Some(value as u64),
        Argument::UInt(value) => Some(value.into()),
        Argument::ULong(value) => Some(value),
        _ => None,
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use core::net::Ipv4Addr;
    use pretty_assertions::assert_eq;
    use std::string::String;
    use std::vec::Vec;
    use test_case::test_case;

    use super::{FormatError, Strictness, render};
    use crate::argument::{Argument, ArgumentKind};
    use crate::text::TextSource;
    use crate::{args, flash};

    fn lenient(template: impl TextSource, args: &[Argument<'_>]) -> String {
        rendered(template, args, Strictness::Lenient).0
    }

    fn rendered(
        template: impl TextSource,
        args: &[Argument<'_>],
        strictness: Strictness,
    ) -> (String, Result<(), FormatError>) {
        let mut output = Vec::<u8>::new();
        let result = render(&mut output, template, args, strictness);
        (String::from_utf8(output).unwrap(), result)
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(lenient("no specifiers here", &[]), "no specifiers here");
        assert_eq!(lenient("", &args![1]), "");
    }

    #[test]
    fn literal_percent_consumes_nothing() {
        assert_eq!(lenient("100%%", &[]), "100%");
        assert_eq!(lenient("%%%d%%", &args![5]), "%5%");
    }

    #[test]
    fn unknown_specifier_keeps_alignment() {
        assert_eq!(lenient("a%zb", &args![42]), "ab");
        assert_eq!(lenient("a%zb%d", &args![42]), "ab42");
        assert_eq!(lenient("%q%w%d %d", &args![1, 2]), "1 2");
    }

    #[test]
    fn trailing_percent_is_dropped() {
        assert_eq!(rendered("50%", &[], Strictness::Lenient), ("50".into(), Ok(())));
    }

    #[test_case("%d", Argument::Int(-5), "-5")]
    #[test_case("%i", Argument::from(12345), "12345")]
    #[test_case("%l", Argument::from(-9_000_000_000i64), "-9000000000")]
    #[test_case("%d", Argument::from(u32::MAX), "4294967295")]
    #[test_case("%u", Argument::from(u64::MAX), "18446744073709551615")]
    #[test_case("%u", Argument::from(-1), "4294967295")]
    #[test_case("%x", Argument::from(255), "ff")]
    #[test_case("%X", Argument::from(255), "0xff")]
    #[test_case("%x", Argument::from(-1), "ffffffff")]
    #[test_case("%x", Argument::from(-1i64), "ffffffffffffffff")]
    #[test_case("%X", Argument::from(0u8), "0x0")]
    #[test_case("%b", Argument::from(5), "101")]
    #[test_case("%B", Argument::from(5), "0b101")]
    #[test_case("%b", Argument::from(-2i8), "11111111111111111111111111111110")]
    fn integers(template: &str, argument: Argument<'_>, expected: &str) {
        assert_eq!(lenient(template, &[argument]), expected);
    }

    #[test_case("%t", Argument::from(1), "T")]
    #[test_case("%t", Argument::from(0), "F")]
    #[test_case("%t", Argument::from(7u8), "T")]
    #[test_case("%T", Argument::from(1), "true")]
    #[test_case("%T", Argument::from(0), "false")]
    #[test_case("%T", Argument::from(true), "true")]
    #[test_case("%t", Argument::from(false), "F")]
    fn booleans(template: &str, argument: Argument<'_>, expected: &str) {
        assert_eq!(lenient(template, &[argument]), expected);
    }

    #[test]
    fn floats() {
        assert_eq!(lenient("%D", &args![1.5]), "1.50");
        assert_eq!(lenient("%F", &args![-0.125f32]), "-0.13");
        assert_eq!(lenient("%F", &args![f64::NAN]), "nan");
    }

    #[test]
    fn text() {
        let owned = String::from("owned");
        assert_eq!(
            lenient("[%s|%S|%P]", &args!["ram", &owned, flash!("flash")]),
            "[ram|owned|flash]"
        );
        assert_eq!(lenient("%s", &args![flash!("either")]), "either");
    }

    #[test]
    fn characters() {
        assert_eq!(lenient("%c%c", &args!['a', 'é']), "aé");
    }

    #[test_case(Argument::from(b'A'), "A")]
    #[test_case(Argument::from(0x41), "A")]
    #[test_case(Argument::from(0xe9u16), "é")]
    #[test_case(Argument::from(255u64), "ÿ")]
    fn small_integers_as_characters(argument: Argument<'_>, expected: &str) {
        assert_eq!(rendered("%c", &[argument], Strictness::Lenient), (expected.into(), Ok(())));
    }

    #[test_case(Argument::from(256))]
    #[test_case(Argument::from(-1))]
    fn wide_integers_are_not_characters(argument: Argument<'_>) {
        assert_eq!(
            rendered("%c", &[argument], Strictness::Lenient),
            (
                "%!c".into(),
                Err(FormatError::Mismatch {
                    specifier: 'c',
                    found: ArgumentKind::Integer,
                })
            )
        );
    }

    #[test]
    fn addresses() {
        assert_eq!(
            lenient("%I", &args![Ipv4Addr::new(192, 168, 1, 1)]),
            "192.168.1.1"
        );
        assert_eq!(lenient("%I", &args![[0, 0, 0, 0]]), "0.0.0.0");
    }

    #[test]
    fn flash_templates() {
        assert_eq!(lenient(flash!("v%d.%d"), &args![1, 2]), "v1.2");
    }

    #[test]
    fn mismatch_is_marked_and_consumes_the_argument() {
        assert_eq!(
            rendered("%d|%s", &args!["text", "next"], Strictness::Lenient),
            (
                "%!d|next".into(),
                Err(FormatError::Mismatch {
                    specifier: 'd',
                    found: ArgumentKind::Text,
                })
            )
        );
    }

    #[test]
    fn missing_argument_is_marked() {
        assert_eq!(
            rendered("%d and %x", &args![1], Strictness::Lenient),
            (
                "1 and %!x".into(),
                Err(FormatError::MissingArgument { specifier: 'x' })
            )
        );
    }

    #[test]
    fn first_error_is_reported() {
        let (output, result) = rendered("%c %F %I", &args![-1, 2, 3], Strictness::Lenient);
        assert_eq!(output, "%!c %!F %!I");
        assert_eq!(
            result,
            Err(FormatError::Mismatch {
                specifier: 'c',
                found: ArgumentKind::Integer,
            })
        );
    }

    #[test]
    fn surplus_arguments_are_ignored() {
        assert_eq!(rendered("%d", &args![1, 2], Strictness::Lenient), ("1".into(), Ok(())));
    }

    #[test]
    fn strict_mode_reports_unknown_specifiers() {
        assert_eq!(
            rendered("a%zb%d", &args![42], Strictness::Strict),
            (
                "a%!zb42".into(),
                Err(FormatError::UnknownSpecifier { specifier: 'z' })
            )
        );
        assert_eq!(
            rendered("50%", &[], Strictness::Strict),
            ("50%!".into(), Err(FormatError::TrailingPercent))
        );
    }

    #[test]
    fn non_ascii_unknown_specifier_is_dropped_whole() {
        assert_eq!(rendered("50%ü ok", &[], Strictness::Lenient), ("50 ok".into(), Ok(())));
        assert_eq!(lenient("%€%d", &args![7]), "7");
        assert_eq!(
            rendered("50%ü ok", &[], Strictness::Strict),
            (
                "50%!ü ok".into(),
                Err(FormatError::UnknownSpecifier { specifier: 'ü' })
            )
        );
    }

    #[test]
    fn invalid_utf8_specifier_is_reported_as_replacement() {
        let template: &[u8] = b"a%\xffb";
        let mut output = Vec::<u8>::new();
        assert_eq!(
            render(&mut output, template, &[], Strictness::Strict),
            Err(FormatError::UnknownSpecifier {
                specifier: char::REPLACEMENT_CHARACTER
            })
        );
        assert_eq!(output, b"a%!\xffb");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            std::format!(
                "{}",
                FormatError::Mismatch {
                    specifier: 'T',
                    found: ArgumentKind::Float
                }
            ),
            "`%T` cannot format a float"
        );
    }
}
