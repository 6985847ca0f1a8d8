use super::Sink;

/// Adapts an [`embedded_io::Write`] implementation, e.g. a UART driver, into a [`Sink`].
///
/// Write errors are discarded. Output is not flushed after each message; call
/// [`IoSink::flush`] (or flush the writer from a suffix hook) if the writer buffers.
#[derive(Debug)]
pub struct IoSink<W> {
    writer: W,
}

impl<W> IoSink<W>
where
    W: embedded_io::Write,
{
    /// Wraps `writer`.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flushes the wrapped writer, ignoring errors.
    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    /// Returns a mutable reference to the wrapped writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Unwraps the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Sink for IoSink<W>
where
    W: embedded_io::Write,
{
    fn write_bytes(&mut self, bytes: &[u8]) {
        // this is a logger, ignore any errors writing
        let _ = self.writer.write_all(bytes);
    }
}
