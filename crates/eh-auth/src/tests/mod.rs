mod abort_signal;
mod authorization_policy;

use crate::{
    AuthorizationPolicy, Navigator, PasswordResetService, ResetFailure, SessionController,
};

use eh_config::AuthConfig;
use eh_core::{Notice, Notifier, RedirectTarget};
use eh_storage::{MemoryStorage, SessionStore};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::broadcast;

pub(crate) const ADMIN_CODE: &str = "19/ENG02/XXX";

pub(crate) enum StubBehavior {
    Succeed,
    Fail(ResetFailure),
    Hang,
}

pub(crate) struct StubResetService {
    behavior: StubBehavior,
    calls: AtomicUsize,
}

impl StubResetService {
    pub(crate) fn new(behavior: StubBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordResetService for StubResetService {
    async fn request_reset(&self, _email: &str) -> Result<(), ResetFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            StubBehavior::Succeed => Ok(()),
            StubBehavior::Fail(failure) => Err(failure.clone()),
            StubBehavior::Hang => std::future::pending().await,
        }
    }
}

#[derive(Default)]
pub(crate) struct RecordingNavigator {
    redirects: Mutex<Vec<RedirectTarget>>,
}

impl RecordingNavigator {
    pub(crate) fn redirects(&self) -> Vec<RedirectTarget> {
        self.redirects.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, target: RedirectTarget) {
        self.redirects.lock().push(target);
    }
}

pub(crate) struct Harness {
    pub(crate) controller: SessionController,
    pub(crate) store: Arc<SessionStore>,
    pub(crate) policy: Arc<AuthorizationPolicy>,
    pub(crate) notices: broadcast::Receiver<Notice>,
}

impl Harness {
    pub(crate) fn drain_notices(&mut self) -> Vec<Notice> {
        let mut notices = Vec::new();
        while let Ok(notice) = self.notices.try_recv() {
            notices.push(notice);
        }
        notices
    }
}

pub(crate) fn harness() -> Harness {
    harness_with(AuthConfig::default(), StubResetService::new(StubBehavior::Succeed))
}

pub(crate) fn harness_with(config: AuthConfig, reset: Arc<dyn PasswordResetService>) -> Harness {
    let store = Arc::new(SessionStore::open(Arc::new(MemoryStorage::new())));
    let policy = Arc::new(AuthorizationPolicy::from_config(&config));
    let notifier = Notifier::default();
    let notices = notifier.subscribe();
    let controller =
        SessionController::new(store.clone(), policy.clone(), reset, notifier, &config);

    Harness {
        controller,
        store,
        policy,
        notices,
    }
}
