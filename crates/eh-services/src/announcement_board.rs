//! Admin announcements and resource approvals.

use crate::{HttpClient, Result as ServiceErrorResult, ServiceError, with_retry};

use eh_auth::AuthorizationPolicy;
use eh_config::RetryConfig;
use eh_core::{Announcement, Notice, Notifier, RouteClass, Session};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::info;
use parking_lot::RwLock;
use reqwest::Method;

pub const ANNOUNCEMENT_POSTED_MESSAGE: &str = "Announcement broadcasted!";
pub const PUBLISH_FAILED_MESSAGE: &str = "Could not broadcast the announcement. Please try again.";
pub const FORBIDDEN_MESSAGE: &str = eh_auth::ADMIN_DENIED_MESSAGE;
pub const MISSING_FIELDS_MESSAGE: &str = "Announcement title and content are required.";

const ANNOUNCEMENTS_PATH: &str = "/api/v1/announcements";

/// Delivers a new announcement to its audience
#[async_trait]
pub trait AnnouncementPublisher: Send + Sync {
    async fn publish(&self, announcement: &Announcement) -> ServiceErrorResult<()>;
}

pub struct HttpAnnouncementPublisher {
    client: HttpClient,
    retry: RetryConfig,
}

impl HttpAnnouncementPublisher {
    pub fn new(base_url: &str, timeout: Duration, retry: RetryConfig) -> ServiceErrorResult<Self> {
        Ok(Self {
            client: HttpClient::new(base_url, timeout)?,
            retry,
        })
    }
}

#[async_trait]
impl AnnouncementPublisher for HttpAnnouncementPublisher {
    async fn publish(&self, announcement: &Announcement) -> ServiceErrorResult<()> {
        with_retry(&self.retry, "announcement publish", || async move {
            let req = self
                .client
                .request(Method::POST, ANNOUNCEMENTS_PATH)
                .json(announcement);
            self.client.execute(req).await.map(|_| ())
        })
        .await
    }
}

/// Keeps announcements on this device only
pub struct LocalAnnouncementPublisher;

#[async_trait]
impl AnnouncementPublisher for LocalAnnouncementPublisher {
    async fn publish(&self, announcement: &Announcement) -> ServiceErrorResult<()> {
        info!("Announcement {} kept locally", announcement.id);
        Ok(())
    }
}

pub struct AnnouncementBoard {
    policy: Arc<AuthorizationPolicy>,
    publisher: Arc<dyn AnnouncementPublisher>,
    notifier: Notifier,
    announcements: RwLock<Vec<Announcement>>,
}

impl AnnouncementBoard {
    pub fn new(
        policy: Arc<AuthorizationPolicy>,
        publisher: Arc<dyn AnnouncementPublisher>,
        notifier: Notifier,
    ) -> Self {
        Self {
            policy,
            publisher,
            notifier,
            announcements: RwLock::new(Vec::new()),
        }
    }

    fn require_admin(&self, session: &Session, action: &'static str) -> ServiceErrorResult<()> {
        if self
            .policy
            .can_access(session, RouteClass::AdminOnly)
            .is_allowed()
        {
            Ok(())
        } else {
            log::warn!("{action} refused for role {}", session.role());
            Err(ServiceError::forbidden(action))
        }
    }

    /// Newest first
    pub fn announcements(&self) -> Vec<Announcement> {
        self.announcements.read().clone()
    }

    /// Publish an announcement and put it at the top of the board.
    ///
    /// Failures leave the board unchanged and are also published as a
    /// notice, retryable when the publisher may recover.
    pub async fn post(
        &self,
        session: &Session,
        title: &str,
        content: &str,
    ) -> ServiceErrorResult<Announcement> {
        match self.try_post(session, title, content).await {
            Ok(announcement) => {
                self.notifier.notify(Notice::success(ANNOUNCEMENT_POSTED_MESSAGE));
                Ok(announcement)
            }
            Err(e) => {
                self.notifier.notify(failure_notice(&e));
                Err(e)
            }
        }
    }

    async fn try_post(
        &self,
        session: &Session,
        title: &str,
        content: &str,
    ) -> ServiceErrorResult<Announcement> {
        self.require_admin(session, "posting announcements")?;

        let title = title.trim();
        let content = content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(ServiceError::validation(
                "announcement title and content are required",
            ));
        }

        let announcement = Announcement::from_admin(title, content);
        self.publisher.publish(&announcement).await?;

        self.announcements.write().insert(0, announcement.clone());
        info!("Announcement {} posted", announcement.id);
        Ok(announcement)
    }

    pub fn approve_resource(&self, session: &Session, resource_id: &str) -> ServiceErrorResult<()> {
        if let Err(e) = self.require_admin(session, "approving resources") {
            self.notifier.notify(failure_notice(&e));
            return Err(e);
        }

        info!("Resource {resource_id} approved");
        self.notifier
            .notify(Notice::success(format!("Resource {resource_id} approved.")));
        Ok(())
    }
}

fn failure_notice(error: &ServiceError) -> Notice {
    match error {
        ServiceError::Forbidden { .. } => Notice::error(FORBIDDEN_MESSAGE),
        ServiceError::Validation { .. } => Notice::error(MISSING_FIELDS_MESSAGE),
        e if e.is_retryable() => Notice::retryable_error(PUBLISH_FAILED_MESSAGE),
        _ => Notice::error(PUBLISH_FAILED_MESSAGE),
    }
}
