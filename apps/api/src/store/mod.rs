//! Résumé store: the single in-memory résumé shared by every handler.
//!
//! The value lives inside a `tokio::sync::watch` channel: writers apply a
//! [`ResumePatch`] under the channel lock and readers either take a snapshot
//! or subscribe for change notifications. `AppState` carries one store; tests
//! build their own.

pub mod handlers;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::models::resume::{Resume, ResumeField, ResumePatch};

/// The résumé together with its change bookkeeping.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeSnapshot {
    pub resume: Resume,
    /// Bumped once per non-empty update. Starts at 0.
    pub revision: u64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct ResumeStore {
    tx: Arc<watch::Sender<ResumeSnapshot>>,
}

impl Default for ResumeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeStore {
    /// A store seeded with the sample résumé.
    pub fn new() -> Self {
        Self::with_resume(Resume::default())
    }

    pub fn with_resume(resume: Resume) -> Self {
        let (tx, _rx) = watch::channel(ResumeSnapshot {
            resume,
            revision: 0,
            updated_at: Utc::now(),
        });
        Self { tx: Arc::new(tx) }
    }

    pub fn get_resume(&self) -> Resume {
        self.tx.borrow().resume.clone()
    }

    pub fn snapshot(&self) -> ResumeSnapshot {
        self.tx.borrow().clone()
    }

    pub fn revision(&self) -> u64 {
        self.tx.borrow().revision
    }

    /// Shallow-merges `patch` into the current résumé and notifies
    /// subscribers. An empty patch leaves the revision alone and wakes nobody.
    pub fn set_resume(&self, patch: ResumePatch) -> Vec<ResumeField> {
        if patch.is_empty() {
            debug!("Ignoring empty resume patch");
            return Vec::new();
        }

        let mut replaced = Vec::new();
        let mut revision = 0;
        self.tx.send_if_modified(|snapshot| {
            replaced = patch.apply(&mut snapshot.resume);
            snapshot.revision += 1;
            snapshot.updated_at = Utc::now();
            revision = snapshot.revision;
            true
        });

        let fields: Vec<&str> = replaced.iter().map(|f| f.as_str()).collect();
        info!("Resume updated to revision {revision} (replaced: {})", fields.join(", "));
        replaced
    }

    pub fn subscribe(&self) -> ResumeSubscription {
        ResumeSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Resolves as soon as the store revision differs from `since`. A `since`
    /// ahead of the store (a revision from before a restart) resolves at once.
    pub async fn wait_for_revision(&self, since: u64) -> ResumeSnapshot {
        let mut subscription = self.subscribe();
        loop {
            let current = subscription.current();
            if current.revision != since {
                return current;
            }
            // The sender lives as long as `self`, so this only stops on shutdown.
            if subscription.changed().await.is_none() {
                return self.snapshot();
            }
        }
    }
}

/// Observer handle returned by [`ResumeStore::subscribe`]. Notifications
/// coalesce: a slow subscriber sees the latest value, not every intermediate.
pub struct ResumeSubscription {
    rx: watch::Receiver<ResumeSnapshot>,
}

impl ResumeSubscription {
    pub fn current(&self) -> ResumeSnapshot {
        self.rx.borrow().clone()
    }

    /// Waits for the next update. Returns `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<ResumeSnapshot> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
