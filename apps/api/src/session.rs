//! Editing sessions — the observable state-holder behind every handler.
//!
//! One `EditorSession` owns one resume aggregate for its whole lifetime.
//! All mutations are serialized through the session lock and bump a
//! monotonically increasing revision; every mutation publishes a full
//! snapshot through a watch channel, so views always re-derive from current
//! state and never observe intermediate patches. Last write wins.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{watch, Mutex, RwLock};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::GenerationField;
use crate::models::resume::ResumeData;

/// A point-in-time view of a session, published to watchers on every
/// mutation.
#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot {
    pub revision: u64,
    pub data: ResumeData,
}

/// The single in-flight generation call, if any. The token ties a network
/// call to the marker that was set when it started; a completion whose token
/// no longer matches is stale and gets discarded.
#[derive(Debug, Clone, Copy)]
struct InFlightGeneration {
    field: GenerationField,
    token: u64,
}

/// Outcome of completing a generation call against the current marker.
#[derive(Debug)]
pub enum Completion {
    /// The call was still current and its text was merged into the model.
    Applied(StateSnapshot),
    /// The call was still current but failed; the marker is cleared and the
    /// model untouched.
    Failed(String),
    /// The call was superseded (or its target entry removed) while in
    /// flight; its outcome is dropped entirely.
    Discarded,
}

struct Inner {
    data: ResumeData,
    revision: u64,
    generation: Option<InFlightGeneration>,
    generation_seq: u64,
    exporting: bool,
}

impl Inner {
    fn publish(&mut self, tx: &watch::Sender<StateSnapshot>) -> StateSnapshot {
        self.revision += 1;
        let snapshot = StateSnapshot {
            revision: self.revision,
            data: self.data.clone(),
        };
        tx.send_replace(snapshot.clone());
        snapshot
    }
}

pub struct EditorSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    inner: Mutex<Inner>,
    snapshots: watch::Sender<StateSnapshot>,
}

impl EditorSession {
    fn new(id: Uuid) -> Self {
        let data = ResumeData::starter();
        let (snapshots, _) = watch::channel(StateSnapshot {
            revision: 0,
            data: data.clone(),
        });
        EditorSession {
            id,
            created_at: Utc::now(),
            inner: Mutex::new(Inner {
                data,
                revision: 0,
                generation: None,
                generation_seq: 0,
                exporting: false,
            }),
            snapshots,
        }
    }

    pub async fn snapshot(&self) -> StateSnapshot {
        let inner = self.inner.lock().await;
        StateSnapshot {
            revision: inner.revision,
            data: inner.data.clone(),
        }
    }

    /// A receiver positioned at the latest snapshot; `wait_for` on it is the
    /// notification mechanism behind the long-poll watch endpoint.
    pub fn subscribe(&self) -> watch::Receiver<StateSnapshot> {
        self.snapshots.subscribe()
    }

    /// Applies one mutation to the aggregate. On success the revision is
    /// bumped and the new snapshot published to all watchers.
    pub async fn update<F>(&self, mutate: F) -> Result<StateSnapshot, AppError>
    where
        F: FnOnce(&mut ResumeData) -> Result<(), AppError>,
    {
        let mut inner = self.inner.lock().await;
        mutate(&mut inner.data)?;
        Ok(inner.publish(&self.snapshots))
    }

    // ── AI-assist in-flight tracking ────────────────────────────────────────

    /// Marks `field` as the single in-flight field and returns the call
    /// token plus the prompt built from current field values.
    ///
    /// A second request for the field already in flight is a conflict (the
    /// control is busy). A request for a different field supersedes the
    /// marker — the earlier call keeps running but its completion will find
    /// a mismatched token and be discarded.
    pub async fn begin_generation<F>(
        &self,
        field: GenerationField,
        make_prompt: F,
    ) -> Result<(u64, String), AppError>
    where
        F: FnOnce(&ResumeData) -> Result<String, AppError>,
    {
        let mut inner = self.inner.lock().await;
        if let Some(current) = &inner.generation {
            if current.field == field {
                return Err(AppError::Conflict(format!(
                    "generation already in progress for field '{field}'"
                )));
            }
        }
        let prompt = make_prompt(&inner.data)?;
        inner.generation_seq += 1;
        let token = inner.generation_seq;
        inner.generation = Some(InFlightGeneration { field, token });
        Ok((token, prompt))
    }

    /// Resolves a generation call. Stale tokens are discarded without
    /// touching the model or the marker; current tokens clear the marker and
    /// merge on success.
    pub async fn complete_generation(
        &self,
        token: u64,
        outcome: Result<String, String>,
    ) -> Completion {
        let mut inner = self.inner.lock().await;
        let field = match &inner.generation {
            Some(current) if current.token == token => current.field,
            _ => return Completion::Discarded,
        };
        inner.generation = None;

        match outcome {
            Ok(text) => {
                match field {
                    GenerationField::Summary => inner.data.set_summary(text),
                    GenerationField::Experience(id) => {
                        if !inner.data.set_experience_description(id, text) {
                            // The entry was removed while the call was in
                            // flight; nothing to merge into.
                            return Completion::Discarded;
                        }
                    }
                }
                Completion::Applied(inner.publish(&self.snapshots))
            }
            Err(message) => Completion::Failed(message),
        }
    }

    pub async fn generation_status(&self) -> Option<GenerationField> {
        self.inner.lock().await.generation.map(|g| g.field)
    }

    // ── Export in-flight tracking ───────────────────────────────────────────

    /// Sets the export flag and returns the snapshot to render. Conflicts
    /// while an export is already running.
    pub async fn begin_export(&self) -> Result<StateSnapshot, AppError> {
        let mut inner = self.inner.lock().await;
        if inner.exporting {
            return Err(AppError::Conflict(
                "an export is already in progress for this session".to_string(),
            ));
        }
        inner.exporting = true;
        Ok(StateSnapshot {
            revision: inner.revision,
            data: inner.data.clone(),
        })
    }

    /// Clears the export flag; called on success and failure alike.
    pub async fn finish_export(&self) {
        self.inner.lock().await.exporting = false;
    }
}

/// Registry of live editing sessions. Sessions are created on demand and
/// live until explicitly discarded; nothing here persists across restarts.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Arc<EditorSession>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Arc<EditorSession> {
        let id = Uuid::new_v4();
        let session = Arc::new(EditorSession::new(id));
        self.sessions.write().await.insert(id, session.clone());
        session
    }

    pub async fn get(&self, id: Uuid) -> Result<Arc<EditorSession>, AppError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("session {id} not found")))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("session {id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_bumps_revision_and_notifies_watchers() {
        let store = SessionStore::new();
        let session = store.create().await;
        let mut rx = session.subscribe();

        let snapshot = session
            .update(|data| {
                data.set_summary("updated".into());
                Ok(())
            })
            .await
            .unwrap();

        assert_eq!(snapshot.revision, 1);
        assert_eq!(snapshot.data.summary, "updated");

        let seen = rx.wait_for(|s| s.revision >= 1).await.unwrap();
        assert_eq!(seen.data.summary, "updated");
    }

    #[tokio::test]
    async fn test_watchers_only_see_full_snapshots() {
        let store = SessionStore::new();
        let session = store.create().await;

        for i in 0..3 {
            session
                .update(|data| {
                    data.set_summary(format!("v{i}"));
                    Ok(())
                })
                .await
                .unwrap();
        }

        // A late subscriber observes only the latest state, never an
        // intermediate one.
        let mut rx = session.subscribe();
        let latest = rx.wait_for(|s| s.revision >= 3).await.unwrap().clone();
        assert_eq!(latest.data.summary, "v2");
    }

    #[tokio::test]
    async fn test_export_flag_rejects_reentrant_trigger_until_finished() {
        let store = SessionStore::new();
        let session = store.create().await;

        session.begin_export().await.unwrap();
        assert!(matches!(
            session.begin_export().await,
            Err(AppError::Conflict(_))
        ));

        session.finish_export().await;
        assert!(session.begin_export().await.is_ok());
    }

    #[tokio::test]
    async fn test_store_get_after_remove_is_not_found() {
        let store = SessionStore::new();
        let session = store.create().await;
        let id = session.id;

        assert!(store.get(id).await.is_ok());
        store.remove(id).await.unwrap();
        assert!(matches!(store.get(id).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.remove(id).await, Err(AppError::NotFound(_))));
    }
}
