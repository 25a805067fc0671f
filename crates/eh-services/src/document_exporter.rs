use crate::{Result as ServiceErrorResult, ServiceError};

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

const FALLBACK_SLUG: &str = "report";

/// Saves generated documents somewhere the user can retrieve them
pub trait DocumentExporter: Send + Sync {
    fn export(&self, title: &str, content: &str) -> ServiceErrorResult<PathBuf>;
}

/// Writes `<slug>.md` files into a directory
pub struct FileDocumentExporter {
    dir: PathBuf,
}

impl FileDocumentExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DocumentExporter for FileDocumentExporter {
    fn export(&self, title: &str, content: &str) -> ServiceErrorResult<PathBuf> {
        if content.trim().is_empty() {
            return Err(ServiceError::validation("cannot export an empty document"));
        }

        fs::create_dir_all(&self.dir).map_err(|e| ServiceError::io(self.dir.clone(), e))?;

        let path = self.dir.join(format!("{}.md", slugify(title)));
        fs::write(&path, content).map_err(|e| ServiceError::io(path.clone(), e))?;

        info!("Exported '{title}' to {path:?}");
        Ok(path)
    }
}

/// Lowercase ASCII alphanumerics joined by single dashes
pub fn slugify(title: &str) -> String {
    let slug = title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}
