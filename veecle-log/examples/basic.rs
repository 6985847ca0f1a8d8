#![expect(missing_docs, reason = "example")]

use std::net::Ipv4Addr;
use std::time::Instant;

use veecle_log::sink::{Sink, Stdout};
use veecle_log::{Level, error, flash, hooks, notice, trace, verbose, warning};

static START: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

fn timestamp(sink: &mut dyn Sink) {
    let elapsed = START.get_or_init(Instant::now).elapsed();
    write!(sink, "[{:>6}] ", elapsed.as_millis());
}

fn main() {
    START.get_or_init(Instant::now);

    veecle_log::global::begin(Level::Trace, Box::leak(Box::new(Stdout::DEFAULT)), true);
    veecle_log::global::with(|log| {
        log.set_prefix(Some(timestamp));
        log.set_suffix(Some(hooks::newline));
    });

    notice!("listening on %I:%d", Ipv4Addr::new(10, 0, 0, 2), 8080u16);
    warning!(flash!("supply at %F V, below %D V"), 4.71, 4.8);
    error!("status register %X = %B", 0x3cu8, 0x3cu8);
    trace!("calibrated: %T, retries: %u, unit: %c", true, 2u32, 'µ');
    verbose!("not shown at this level");

    veecle_log::global::with(|log| log.set_level(Level::Silent));
    error!("suppressed");
}
