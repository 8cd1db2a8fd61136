//! Dedup and cooldown ledger shared by every trigger source.
//!
//! The ledger remembers which alerts already fired so that re-evaluating
//! the same context does not produce repeats. Two mechanisms:
//!
//! - **Fired keys**: calendar-scoped or entity-scoped opaque keys
//!   (`"stadium:Arrowhead Stadium:2026-06-18"`). Once recorded, the key
//!   suppresses that exact alert until its scope naturally rolls over.
//! - **Cooldowns**: last-fired timestamps for scopes whose recurrence is
//!   not calendar aligned (weather re-alerts after hours, not days).
//!
//! Fired keys are namespaced by the text before the first `:`; each
//! namespace keeps only its most recent entries so unbounded-key sources
//! (match results) cannot grow storage forever.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::storage::Storage;

/// Storage key holding the serialized ledger.
const STORAGE_KEY: &str = "ledger";

/// Retained fired keys per namespace, most recent kept.
const FIRED_KEYS_PER_NAMESPACE: usize = 100;

#[derive(Default, Serialize, Deserialize)]
struct LedgerState {
    /// Fired keys, oldest first.
    fired: Vec<String>,
    /// Cooldown scope to last-fired epoch milliseconds.
    cooldowns: HashMap<String, i64>,
}

/// Persisted "already alerted" record.
pub struct Ledger {
    storage: Storage,
    state: LedgerState,
}

fn namespace(key: &str) -> &str {
    key.split(':').next().unwrap_or(key)
}

impl Ledger {
    /// Creates the ledger, loading persisted state. Corruption recovers to
    /// an empty ledger.
    pub async fn new(storage: Storage) -> Self {
        let state = storage.get(STORAGE_KEY).await.unwrap_or_default();
        Ledger { storage, state }
    }

    /// Whether `key` was already recorded as fired.
    pub fn has_fired(&self, key: &str) -> bool {
        self.state.fired.iter().any(|k| k == key)
    }

    /// Records `key` as fired. Idempotent: recording a key twice has the
    /// same observable effect as once.
    pub async fn mark_fired(&mut self, key: &str) {
        if self.has_fired(key) {
            return;
        }

        self.state.fired.push(key.to_string());
        self.prune_namespace(namespace(key).to_string());
        self.persist().await;
    }

    /// Whether `scope` fired within the last `duration` before `now`.
    pub fn is_in_cooldown(&self, scope: &str, duration: Duration, now: DateTime<Utc>) -> bool {
        match self.state.cooldowns.get(scope) {
            Some(last_fired) => now.timestamp_millis() - last_fired < duration.num_milliseconds(),
            None => false,
        }
    }

    /// Restarts the cooldown window of `scope` at `now`.
    pub async fn touch_cooldown(&mut self, scope: &str, now: DateTime<Utc>) {
        self.state
            .cooldowns
            .insert(scope.to_string(), now.timestamp_millis());
        self.persist().await;
    }

    /// Drops the oldest fired keys of a namespace beyond the retention cap.
    fn prune_namespace(&mut self, ns: String) {
        let count = self
            .state
            .fired
            .iter()
            .filter(|k| namespace(k) == ns)
            .count();

        if count <= FIRED_KEYS_PER_NAMESPACE {
            return;
        }

        let mut to_drop = count - FIRED_KEYS_PER_NAMESPACE;
        self.state.fired.retain(|k| {
            if to_drop > 0 && namespace(k) == ns {
                to_drop -= 1;
                debug!("pruning fired key {}", k);
                false
            } else {
                true
            }
        });
    }

    async fn persist(&self) {
        self.storage.set(STORAGE_KEY, &self.state).await;
    }
}
