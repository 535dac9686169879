use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use crate::errors::AppError;
use crate::views::{View, ViewLoader};

/// Lazily loads and caches one document per view.
///
/// A view is fetched from the loader on its first navigation only. Failed
/// loads are not cached, so the next navigation tries again.
pub struct ViewRegistry {
    loader: Arc<dyn ViewLoader>,
    cells: [OnceCell<Arc<str>>; 4],
}

impl ViewRegistry {
    pub fn new(loader: Arc<dyn ViewLoader>) -> Self {
        Self {
            loader,
            cells: [
                OnceCell::new(),
                OnceCell::new(),
                OnceCell::new(),
                OnceCell::new(),
            ],
        }
    }

    pub async fn load(&self, view: View) -> Result<Arc<str>, AppError> {
        let doc = self.cells[view.index()]
            .get_or_try_init(|| async {
                let doc = self.loader.load(view).await?;
                info!("Loaded view {} ({} bytes)", view.slug(), doc.len());
                Ok::<_, AppError>(Arc::<str>::from(doc))
            })
            .await?;
        Ok(doc.clone())
    }

    pub fn is_loaded(&self, view: View) -> bool {
        self.cells[view.index()].initialized()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    struct CountingLoader {
        calls: AtomicUsize,
        fail_first: bool,
    }

    #[async_trait]
    impl ViewLoader for CountingLoader {
        async fn load(&self, view: View) -> Result<String, AppError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_first && call == 0 {
                return Err(AppError::ViewLoad("chunk unavailable".to_string()));
            }
            Ok(format!("<html>{}</html>", view.slug()))
        }
    }

    fn registry(fail_first: bool) -> (Arc<CountingLoader>, ViewRegistry) {
        let loader = Arc::new(CountingLoader {
            calls: AtomicUsize::new(0),
            fail_first,
        });
        (loader.clone(), ViewRegistry::new(loader))
    }

    #[tokio::test]
    async fn test_views_load_on_first_use_only() {
        let (loader, registry) = registry(false);
        assert!(!registry.is_loaded(View::Tips));
        assert_eq!(loader.calls.load(Ordering::SeqCst), 0);

        let first = registry.load(View::Tips).await.unwrap();
        let second = registry.load(View::Tips).await.unwrap();

        assert_eq!(&*first, "<html>tips</html>");
        assert_eq!(first, second);
        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
        assert!(registry.is_loaded(View::Tips));
        assert!(!registry.is_loaded(View::About));
    }

    #[tokio::test]
    async fn test_failed_load_is_retried() {
        let (loader, registry) = registry(true);

        assert!(registry.load(View::Home).await.is_err());
        assert!(!registry.is_loaded(View::Home));

        let doc = registry.load(View::Home).await.unwrap();
        assert_eq!(&*doc, "<html>home</html>");
        assert_eq!(loader.calls.load(Ordering::SeqCst), 2);
    }
}
