//! Certificate serial numbers
//!
//! Serial generation is injected so callers control the source; nothing in
//! the certificate logic reads the system clock directly.

use time::OffsetDateTime;

/// Source of certificate serial numbers
pub trait SerialSource {
    fn next_serial(&mut self) -> u64;
}

/// Wall-clock serial source (nanoseconds since the Unix epoch)
#[derive(Debug, Default)]
pub struct ClockSerialSource;

impl SerialSource for ClockSerialSource {
    fn next_serial(&mut self) -> u64 {
        OffsetDateTime::now_utc().unix_timestamp_nanos() as u64
    }
}

/// Deterministic serial source for tests: counts up from a fixed start
#[derive(Debug)]
pub struct FixedSerialSource {
    next: u64,
}

impl FixedSerialSource {
    pub fn new(start: u64) -> Self {
        Self { next: start }
    }
}

impl SerialSource for FixedSerialSource {
    fn next_serial(&mut self) -> u64 {
        let serial = self.next;
        self.next += 1;
        serial
    }
}
