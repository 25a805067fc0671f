use crate::tests::fast_retry;
use crate::{IsRetryable, with_retry};

use std::sync::atomic::{AtomicU32, Ordering};

#[derive(Debug)]
struct TestError {
    retryable: bool,
}

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "test error (retryable: {})", self.retryable)
    }
}

impl IsRetryable for TestError {
    fn is_retryable(&self) -> bool {
        self.retryable
    }
}

#[tokio::test(start_paused = true)]
async fn given_transient_failures_when_retried_then_eventually_succeeds() {
    let attempts = AtomicU32::new(0);

    let result = with_retry(&fast_retry(3), "flaky op", || async {
        if attempts.fetch_add(1, Ordering::SeqCst) < 2 {
            Err(TestError { retryable: true })
        } else {
            Ok("done")
        }
    })
    .await;

    assert_eq!(result.unwrap(), "done");
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn given_permanent_failure_when_retried_then_stops_after_first_attempt() {
    let attempts = AtomicU32::new(0);

    let result: Result<(), TestError> = with_retry(&fast_retry(5), "bad op", || async {
        attempts.fetch_add(1, Ordering::SeqCst);
        Err(TestError { retryable: false })
    })
    .await;

    assert!(result.is_err());
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn given_persistent_transient_failure_when_retried_then_gives_up_at_max_attempts() {
    let attempts = AtomicU32::new(0);

    let result: Result<(), TestError> = with_retry(&fast_retry(4), "down op", || async {
        attempts.fetch_add(1, Ordering::SeqCst);
        Err(TestError { retryable: true })
    })
    .await;

    assert!(result.is_err());
    assert_eq!(attempts.load(Ordering::SeqCst), 4);
}

#[tokio::test(start_paused = true)]
async fn given_zero_max_attempts_when_retried_then_runs_once() {
    let attempts = AtomicU32::new(0);

    let result: Result<(), TestError> = with_retry(&fast_retry(0), "once", || async {
        attempts.fetch_add(1, Ordering::SeqCst);
        Err(TestError { retryable: true })
    })
    .await;

    assert!(result.is_err());
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}
