//! In-process TTL store for completed analyses.
//!
//! A keyed map with automatic expiry: reads lazily evict expired entries,
//! and an explicit background sweep task (owned by the host application)
//! deletes what reads never touch. Entries belong to the store once
//! created; the pipeline holds no reference after returning one.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use leadcheck_core::{AnalysisResult, LeadData};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// One stored verification outcome, addressable by opaque id until expiry.
#[derive(Debug, Clone)]
pub struct StoredAnalysis {
    pub id: Uuid,
    pub lead: LeadData,
    pub analysis: AnalysisResult,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Process-wide expiring analysis store.
#[derive(Debug, Clone)]
pub struct AnalysisStore {
    ttl: Duration,
    entries: Arc<Mutex<HashMap<Uuid, StoredAnalysis>>>,
}

impl AnalysisStore {
    /// Create a store whose entries live for `ttl_secs` after creation.
    #[must_use]
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            ttl: Duration::seconds(i64::try_from(ttl_secs).unwrap_or(i64::MAX)),
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Store a finished analysis under a fresh opaque id.
    ///
    /// Returns the id and the expiry instant.
    pub fn create(&self, lead: LeadData, analysis: AnalysisResult) -> (Uuid, DateTime<Utc>) {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let expires_at = now + self.ttl;
        let stored = StoredAnalysis {
            id,
            lead,
            analysis,
            created_at: now,
            expires_at,
        };
        self.lock().insert(id, stored);
        (id, expires_at)
    }

    /// Fetch an analysis by id.
    ///
    /// An expired entry is evicted on access and reported as absent, even if
    /// the sweeper has not reached it yet.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<StoredAnalysis> {
        let mut entries = self.lock();
        match entries.get(&id) {
            Some(item) if item.expires_at <= Utc::now() => {
                entries.remove(&id);
                None
            }
            Some(item) => Some(item.clone()),
            None => None,
        }
    }

    /// Remove an analysis by id. Idempotent and unconditional.
    pub fn delete(&self, id: Uuid) {
        self.lock().remove(&id);
    }

    /// Number of live (possibly-expired-but-unswept) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Delete every expired entry now. Returns how many were removed.
    pub fn sweep(&self) -> usize {
        let now = Utc::now();
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, item| item.expires_at > now);
        before - entries.len()
    }

    /// Spawn the periodic sweep task.
    ///
    /// The handle is owned by the caller; abort it on shutdown. Dropping the
    /// store elsewhere does not stop the task — the sweeper keeps its own
    /// clone of the shared map.
    #[must_use]
    pub fn spawn_sweeper(&self, interval: std::time::Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick fires immediately; skip it so a sweep only runs
            // after a full interval.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let removed = store.sweep();
                if removed > 0 {
                    tracing::debug!(removed, "swept expired analyses");
                }
            }
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, StoredAnalysis>> {
        // Lock poisoning is unrecoverable for a plain map; propagating the
        // inner data is still sound.
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
