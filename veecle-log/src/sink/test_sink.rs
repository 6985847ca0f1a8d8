use std::sync::{Arc, Mutex};
use std::vec::Vec;

use super::Sink;

/// A sink for testing that stores all output in memory.
///
/// The storage is shared, so output written through a logger that holds the sink (for
/// example the global one) can still be inspected by the test.
#[derive(Debug, Clone)]
pub struct TestSink {
    /// Shared buffer holding everything written so far.
    pub output: Arc<Mutex<Vec<u8>>>,
}

impl TestSink {
    /// Creates a new test sink and returns both the sink and a handle to its storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use veecle_log::sink::{Sink, TestSink};
    ///
    /// let (mut sink, output) = TestSink::new();
    /// sink.write_str("hi");
    /// assert_eq!(output.lock().unwrap().as_slice(), b"hi");
    /// ```
    pub fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
        let output = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                output: output.clone(),
            },
            output,
        )
    }

    /// Removes and returns everything written so far as text.
    ///
    /// Invalid UTF-8 is replaced, tests compare text anyway.
    pub fn take(&self) -> std::string::String {
        let bytes: Vec<u8> = self.output.lock().unwrap().drain(..).collect();
        std::string::String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Sink for TestSink {
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.output.lock().unwrap().extend_from_slice(bytes);
    }
}
