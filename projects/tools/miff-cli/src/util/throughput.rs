use bytesize::ByteSize;
use core::fmt;
use std::time::Duration;

/// Bytes per second, displayed with a `/s` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Throughput(pub ByteSize);

impl Throughput {
    pub fn from_bytes_per_sec(bytes_per_sec: u64) -> Self {
        Self(ByteSize(bytes_per_sec))
    }

    /// Average rate for `bytes` processed over `elapsed`. Zero for a zero duration.
    pub fn from_elapsed(bytes: u64, elapsed: Duration) -> Self {
        let secs = elapsed.as_secs_f64();
        if secs > 0.0 {
            Self::from_bytes_per_sec((bytes as f64 / secs) as u64)
        } else {
            Self::from_bytes_per_sec(0)
        }
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/s", self.0)
    }
}
