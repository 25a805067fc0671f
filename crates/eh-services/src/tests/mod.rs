mod retry;

use eh_config::RetryConfig;

pub(crate) fn fast_retry(max_attempts: u32) -> RetryConfig {
    RetryConfig {
        max_attempts,
        initial_delay_ms: 10,
        max_delay_secs: 1,
        backoff_multiplier: 2.0,
        jitter: false,
    }
}
