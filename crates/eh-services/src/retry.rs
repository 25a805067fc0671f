use crate::ServiceError;

use eh_config::RetryConfig;

use std::time::Duration;

use tokio::time::sleep;

/// Run `operation` until it succeeds, fails permanently or runs out of
/// attempts, backing off exponentially between tries.
pub async fn with_retry<F, Fut, T, E>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display + IsRetryable,
{
    let mut attempts = 0;
    let mut delay = config.initial_delay();
    let max_attempts = config.max_attempts.max(1);

    loop {
        attempts += 1;

        match operation().await {
            Ok(result) => {
                if attempts > 1 {
                    log::info!("{operation_name} succeeded after {attempts} attempts");
                }
                return Ok(result);
            }
            Err(e) => {
                if !e.is_retryable() || attempts >= max_attempts {
                    log::warn!("{operation_name} failed after {attempts} attempts: {e}");
                    return Err(e);
                }

                let actual_delay = if config.jitter {
                    let jitter_factor = 0.5 + rand::random::<f64>(); // 0.5 to 1.5
                    Duration::from_secs_f64(delay.as_secs_f64() * jitter_factor)
                } else {
                    delay
                };

                log::debug!(
                    "{operation_name} attempt {attempts} failed: {e}. Retrying in {actual_delay:?}"
                );

                sleep(actual_delay).await;

                delay = Duration::from_secs_f64(
                    (delay.as_secs_f64() * config.backoff_multiplier)
                        .min(config.max_delay().as_secs_f64()),
                );
            }
        }
    }
}

pub trait IsRetryable {
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for ServiceError {
    fn is_retryable(&self) -> bool {
        ServiceError::is_retryable(self)
    }
}
