use core::fmt;

use rtt_target::UpChannel;

use super::Sink;

/// Writes to an RTT up-channel, for debug probes on bare-metal targets.
///
/// The channel is typically obtained from `rtt_target::rtt_init!`. Output that does not fit
/// into the channel buffer is handled according to the channel's mode.
pub struct RttSink {
    channel: UpChannel,
}

impl RttSink {
    /// Wraps an up-channel.
    pub fn new(channel: UpChannel) -> Self {
        Self { channel }
    }
}

impl Sink for RttSink {
    fn write_bytes(&mut self, bytes: &[u8]) {
        let _ = self.channel.write(bytes);
    }
}

impl fmt::Debug for RttSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RttSink").finish_non_exhaustive()
    }
}
