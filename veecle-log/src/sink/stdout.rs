use std::io::Write;

use super::Sink;

/// Writes to [`std::io::stdout`].
///
/// Every write goes straight to the locked handle, there is no buffering on top of what
/// `std` does.
#[derive(Debug, Default)]
pub struct Stdout(());

impl Stdout {
    /// A `const` version of `Stdout::default()` to allow use in statics.
    pub const DEFAULT: Self = Stdout(());
}

impl Sink for Stdout {
    fn write_bytes(&mut self, bytes: &[u8]) {
        // this is a logger, ignore any errors writing
        let _ = std::io::stdout().lock().write_all(bytes);
    }
}
