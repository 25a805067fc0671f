use crate::{AbortSignal, abort_pair};

use std::time::Duration;

#[tokio::test]
async fn given_handle_when_aborted_then_signal_resolves() {
    let (handle, signal) = abort_pair();
    assert!(!signal.is_aborted());

    handle.abort();

    assert!(signal.is_aborted());
    tokio::time::timeout(Duration::from_secs(1), signal.aborted())
        .await
        .unwrap();
}

#[tokio::test]
async fn given_cloned_signal_when_aborted_later_then_waiter_wakes() {
    let (handle, signal) = abort_pair();
    let waiter = tokio::spawn({
        let signal = signal.clone();
        async move { signal.aborted().await }
    });

    handle.abort();

    tokio::time::timeout(Duration::from_secs(1), waiter)
        .await
        .unwrap()
        .unwrap();
}

#[tokio::test(start_paused = true)]
async fn given_never_signal_when_awaited_then_stays_pending() {
    let signal = AbortSignal::never();

    let result = tokio::time::timeout(Duration::from_secs(5), signal.aborted()).await;

    assert!(result.is_err());
    assert!(!signal.is_aborted());
}
