use crate::Notice;

use tokio::sync::broadcast;

const DEFAULT_CAPACITY: usize = 64;

/// Non-blocking notice channel.
///
/// Publishing never waits on subscribers and succeeds with nobody listening;
/// slow subscribers lose the oldest notices first.
#[derive(Clone)]
pub struct Notifier {
    sender: broadcast::Sender<Notice>,
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.sender.subscribe()
    }

    /// Publish a notice, returning how many subscribers received it
    pub fn notify(&self, notice: Notice) -> usize {
        log::debug!("Notice ({:?}): {}", notice.level, notice.message);
        self.sender.send(notice).unwrap_or(0)
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
