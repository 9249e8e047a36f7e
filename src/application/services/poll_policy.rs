use std::time::Duration;

/// Caller-owned polling schedule: how long to sleep between status checks
/// and how many checks to allow before giving up with a timeout error.
/// The client never polls without a ceiling.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl PollPolicy {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }
}

impl Default for PollPolicy {
    /// 10 s between checks, 30 checks: a five-minute ceiling overall.
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
            max_attempts: 30,
        }
    }
}
