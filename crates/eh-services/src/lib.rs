pub mod announcement_board;
pub mod document_exporter;
pub mod error;
pub mod http_client;
pub mod password_reset;
pub mod report_generator;
pub mod retry;

pub use announcement_board::{
    ANNOUNCEMENT_POSTED_MESSAGE, AnnouncementBoard, AnnouncementPublisher, FORBIDDEN_MESSAGE,
    HttpAnnouncementPublisher, LocalAnnouncementPublisher, MISSING_FIELDS_MESSAGE,
    PUBLISH_FAILED_MESSAGE,
};
pub use document_exporter::{DocumentExporter, FileDocumentExporter, slugify};
pub use error::{Result, ServiceError};
pub use http_client::HttpClient;
pub use password_reset::{HttpPasswordResetService, UnconfiguredPasswordResetService};
pub use report_generator::{GeminiReportGenerator, ReportGenerator, lab_report_prompt};
pub use retry::{IsRetryable, with_retry};

#[cfg(test)]
mod tests;
