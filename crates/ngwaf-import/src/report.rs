//! Run summaries

use std::collections::BTreeMap;

use ngwaf_import_types::ResourceKind;
use serde::Serialize;

/// Two distinct import keys that sanitized to the same local address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    pub address: String,
    /// Import key that claimed the address first
    pub existing_id: String,
    pub colliding_id: String,
}

/// Result of emitting one enumerator's batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub kind: ResourceKind,
    pub listed: usize,
    pub emitted: usize,
    pub already_imported: usize,
    pub filtered: usize,
    pub collisions: Vec<Collision>,
}

impl BatchOutcome {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            listed: 0,
            emitted: 0,
            already_imported: 0,
            filtered: 0,
            collisions: Vec::new(),
        }
    }
}

/// Per-kind totals across all scopes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindSummary {
    pub listed: usize,
    pub emitted: usize,
    pub already_imported: usize,
    pub filtered: usize,
    pub listing_failures: usize,
}

/// Summary of a whole generator run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub kinds: BTreeMap<ResourceKind, KindSummary>,
    pub sites: Vec<String>,
    pub collisions: Vec<Collision>,
}

impl RunReport {
    pub fn record_batch(&mut self, outcome: BatchOutcome) {
        let summary = self.kinds.entry(outcome.kind).or_default();
        summary.listed += outcome.listed;
        summary.emitted += outcome.emitted;
        summary.already_imported += outcome.already_imported;
        summary.filtered += outcome.filtered;
        self.collisions.extend(outcome.collisions);
    }

    pub fn record_listing_failure(&mut self, kind: ResourceKind) {
        self.kinds.entry(kind).or_default().listing_failures += 1;
    }

    pub fn summary(&self, kind: ResourceKind) -> KindSummary {
        self.kinds.get(&kind).copied().unwrap_or_default()
    }

    pub fn total_emitted(&self) -> usize {
        self.kinds.values().map(|s| s.emitted).sum()
    }

    pub fn total_already_imported(&self) -> usize {
        self.kinds.values().map(|s| s.already_imported).sum()
    }

    pub fn total_listing_failures(&self) -> usize {
        self.kinds.values().map(|s| s.listing_failures).sum()
    }
}
