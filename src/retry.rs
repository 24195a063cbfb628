use std::time::Duration;

/// Bounded exponential backoff for the two network calls in the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Base delay for backoff.
    pub base_delay: Duration,
    /// Upper bound on backoff delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    /// Backoff delay after a failed `attempt` (1-based): base * 2^(n-1), capped.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exp = 1u32 << attempt.saturating_sub(1).min(8);
        self.base_delay.saturating_mul(exp).min(self.max_delay)
    }
}

/// Run `op` until it succeeds, the error is not transient, or attempts run out.
pub fn with_backoff<T, E, F>(
    policy: &RetryPolicy,
    transient: fn(&E) -> bool,
    mut op: F,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
{
    let mut attempt = 1u32;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt >= policy.max_attempts || !transient(&err) {
                    return Err(err);
                }
                std::thread::sleep(policy.delay_after(attempt));
                attempt += 1;
            }
        }
    }
}

/// Connection and timeout failures are worth another attempt; anything else
/// (including HTTP status failures) is surfaced immediately.
pub fn transient_http(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}
