use crate::error::Result as AppErrorResult;

use eh_auth::{
    AuthorizationPolicy, Navigator, PasswordResetService, RouteGuard, Router, SessionController,
};
use eh_config::Config;
use eh_core::{Notice, Notifier, Session};
use eh_services::{
    AnnouncementBoard, AnnouncementPublisher, DocumentExporter, FileDocumentExporter,
    GeminiReportGenerator, HttpAnnouncementPublisher, HttpPasswordResetService,
    LocalAnnouncementPublisher, ReportGenerator, UnconfiguredPasswordResetService,
};
use eh_storage::{FileStorage, KeyValueStore, MemoryStorage, PreferenceStore, SessionStore};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

const REPORT_FAILED_MESSAGE: &str = "Failed to generate lab report. Please check your connection.";
const EXPORT_FAILED_MESSAGE: &str = "Could not save the report. Please try again.";

/// Every long-lived component of the portal, wired once at startup and
/// passed by reference to whatever needs it.
pub struct AppContext {
    config: Config,
    notifier: Notifier,
    session_store: Arc<SessionStore>,
    preferences: PreferenceStore,
    policy: Arc<AuthorizationPolicy>,
    controller: SessionController,
    router: Router,
    announcements: AnnouncementBoard,
    report_generator: Arc<dyn ReportGenerator>,
    exporter: Arc<dyn DocumentExporter>,
}

impl AppContext {
    /// Wire the portal over file-backed storage under the config directory
    pub fn bootstrap(config: Config, navigator: Arc<dyn Navigator>) -> AppErrorResult<Self> {
        let storage = Arc::new(FileStorage::open(config.storage_path()?)?);
        let export_dir = config.export_dir()?;
        Self::with_storage(config, storage, export_dir, navigator)
    }

    /// Same graph over volatile storage; exports go to the system temp dir
    pub fn in_memory(config: Config, navigator: Arc<dyn Navigator>) -> AppErrorResult<Self> {
        let export_dir = std::env::temp_dir()
            .join("engihub")
            .join(&config.services.export_dir);
        Self::with_storage(config, Arc::new(MemoryStorage::new()), export_dir, navigator)
    }

    pub fn with_storage(
        config: Config,
        storage: Arc<dyn KeyValueStore>,
        export_dir: PathBuf,
        navigator: Arc<dyn Navigator>,
    ) -> AppErrorResult<Self> {
        let notifier = Notifier::default();
        let timeout = Duration::from_secs(config.services.request_timeout_secs);

        let session_store = Arc::new(SessionStore::open(storage.clone()));
        let preferences = PreferenceStore::open(storage, config.ui.system_theme);
        let policy = Arc::new(AuthorizationPolicy::from_config(&config.auth));

        let reset_service: Arc<dyn PasswordResetService> = match config.services.reset_base_url {
            Some(ref url) => Arc::new(HttpPasswordResetService::new(
                url,
                timeout,
                config.retry.clone(),
            )?),
            None => {
                warn!("No password reset endpoint configured; resets will fail");
                Arc::new(UnconfiguredPasswordResetService)
            }
        };

        let publisher: Arc<dyn AnnouncementPublisher> = match config.services.announcements_base_url
        {
            Some(ref url) => Arc::new(HttpAnnouncementPublisher::new(
                url,
                timeout,
                config.retry.clone(),
            )?),
            None => Arc::new(LocalAnnouncementPublisher),
        };

        let report_generator: Arc<dyn ReportGenerator> = Arc::new(
            GeminiReportGenerator::from_config(&config.services, &config.retry)?,
        );
        let exporter: Arc<dyn DocumentExporter> = Arc::new(FileDocumentExporter::new(export_dir));

        let controller = SessionController::new(
            session_store.clone(),
            policy.clone(),
            reset_service,
            notifier.clone(),
            &config.auth,
        );
        let router = Router::new(
            session_store.clone(),
            RouteGuard::new(policy.clone()),
            navigator,
        );
        let announcements = AnnouncementBoard::new(policy.clone(), publisher, notifier.clone());

        info!(
            "Portal ready ({})",
            if session_store.session().is_authenticated() {
                "restored session"
            } else {
                "guest"
            }
        );

        Ok(Self {
            config,
            notifier,
            session_store,
            preferences,
            policy,
            controller,
            router,
            announcements,
            report_generator,
            exporter,
        })
    }

    /// Swap the AI backend, e.g. for an offline stub
    pub fn with_report_generator(mut self, generator: Arc<dyn ReportGenerator>) -> Self {
        self.report_generator = generator;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn session(&self) -> Session {
        self.session_store.session()
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    pub fn policy(&self) -> &AuthorizationPolicy {
        &self.policy
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn announcements(&self) -> &AnnouncementBoard {
        &self.announcements
    }

    /// Draft a lab report. Failures become a retryable notice and `None`.
    pub async fn report_lab(
        &self,
        title: &str,
        objectives: &str,
        raw_data: &str,
    ) -> Option<String> {
        match self
            .report_generator
            .generate(title, objectives, raw_data)
            .await
        {
            Ok(report) => Some(report),
            Err(e) => {
                warn!("Lab report generation failed: {e}");
                self.notifier.notify(Notice::retryable_error(REPORT_FAILED_MESSAGE));
                None
            }
        }
    }

    /// Save a report. Failures become a retryable notice and `None`.
    pub fn export_report(&self, title: &str, content: &str) -> Option<PathBuf> {
        match self.exporter.export(title, content) {
            Ok(path) => {
                self.notifier
                    .notify(Notice::success(format!("Report saved to {}", path.display())));
                Some(path)
            }
            Err(e) => {
                warn!("Report export failed: {e}");
                self.notifier.notify(Notice::retryable_error(EXPORT_FAILED_MESSAGE));
                None
            }
        }
    }
}
