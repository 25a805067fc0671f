
use eh_auth::Navigator;
use eh_core::RedirectTarget;

use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct RecordingNavigator {
    pub(crate) redirects: Mutex<Vec<RedirectTarget>>,
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, target: RedirectTarget) {
        self.redirects.lock().unwrap().push(target);
    }
}
