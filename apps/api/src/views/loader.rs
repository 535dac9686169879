use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::views::View;

/// Source of view documents. Implement this to swap where views come from
/// without touching the registry or the navigation handler.
///
/// Carried in `ViewRegistry` as `Arc<dyn ViewLoader>`.
#[async_trait]
pub trait ViewLoader: Send + Sync {
    async fn load(&self, view: View) -> Result<String, AppError>;
}

/// Documents compiled into the binary. Default when `VIEWS_DIR` is unset.
pub struct EmbeddedViewLoader;

#[async_trait]
impl ViewLoader for EmbeddedViewLoader {
    async fn load(&self, view: View) -> Result<String, AppError> {
        let doc = match view {
            View::Home => include_str!("../../views/home.html"),
            View::Tips => include_str!("../../views/tips.html"),
            View::Templates => include_str!("../../views/templates.html"),
            View::About => include_str!("../../views/about.html"),
        };
        Ok(doc.to_string())
    }
}

/// Reads `<dir>/<slug>.html` from disk.
pub struct DirViewLoader {
    dir: PathBuf,
}

impl DirViewLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ViewLoader for DirViewLoader {
    async fn load(&self, view: View) -> Result<String, AppError> {
        let path = self.dir.join(format!("{}.html", view.slug()));
        debug!("Reading view {:?} from {}", view, path.display());
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| AppError::ViewLoad(format!("{}: {e}", path.display())))
    }
}
