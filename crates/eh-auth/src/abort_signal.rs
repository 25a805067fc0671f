use tokio::sync::watch;

/// Caller-held side of an abort pair
pub struct AbortHandle {
    sender: watch::Sender<bool>,
}

/// Observed by an in-flight operation; resolves once the handle aborts
#[derive(Clone)]
pub struct AbortSignal {
    receiver: watch::Receiver<bool>,
}

pub fn abort_pair() -> (AbortHandle, AbortSignal) {
    let (sender, receiver) = watch::channel(false);
    (AbortHandle { sender }, AbortSignal { receiver })
}

impl AbortHandle {
    pub fn abort(&self) {
        self.sender.send_replace(true);
    }
}

impl AbortSignal {
    /// A signal that never fires
    pub fn never() -> Self {
        let (_, signal) = abort_pair();
        signal
    }

    pub fn is_aborted(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Completes when aborted. Pending forever if the handle was dropped
    /// without aborting.
    pub async fn aborted(&self) {
        let mut receiver = self.receiver.clone();
        loop {
            if *receiver.borrow_and_update() {
                return;
            }
            if receiver.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}
