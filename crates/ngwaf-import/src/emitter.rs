//! Import plan emission
//!
//! Filters enumerated resources against the dedup set and the kind's
//! discriminant rules, names them, and appends one block per survivor.

use std::collections::HashMap;

use ngwaf_import_types::{ImportPlanEntry, ImportResult, RemoteResource, ResourceKind, ScopePolicy};
use tracing::{debug, info, warn};

use crate::report::{BatchOutcome, Collision};
use crate::sanitize::sanitize;
use crate::sink::PlanSink;
use crate::state::StateIds;

/// Build the import block for a single resource
///
/// Site-qualified kinds import as `site:id` and prefix the local name with the
/// sanitized site name; corp-level kinds use the bare id for both.
pub fn plan_entry(resource: &RemoteResource) -> ImportPlanEntry {
    let terraform_type = resource.kind.terraform_type();
    match (resource.kind.scope_policy(), resource.scope.site_name()) {
        (ScopePolicy::SiteQualified, Some(site)) => ImportPlanEntry::new(
            terraform_type,
            &format!("{}{}", sanitize(site), sanitize(&resource.id)),
            format!("{}:{}", site, resource.id),
        ),
        _ => ImportPlanEntry::new(terraform_type, &sanitize(&resource.id), resource.id.clone()),
    }
}

/// Appends import blocks for resources not yet under management
pub struct Emitter<'a, S: PlanSink> {
    already_imported: &'a StateIds,
    sink: &'a mut S,
    /// Local address -> import key, for every entry written this run
    written: HashMap<String, String>,
}

impl<'a, S: PlanSink> Emitter<'a, S> {
    pub fn new(already_imported: &'a StateIds, sink: &'a mut S) -> Self {
        Self {
            already_imported,
            sink,
            written: HashMap::new(),
        }
    }

    /// Emit one enumerator's full result set as a single appended batch
    ///
    /// Resources are processed in enumeration order. A sink failure is
    /// returned immediately; nothing from the batch is retried.
    pub fn emit(
        &mut self,
        kind: ResourceKind,
        resources: &[RemoteResource],
    ) -> ImportResult<BatchOutcome> {
        let mut outcome = BatchOutcome::new(kind);
        outcome.listed = resources.len();
        let mut batch = Vec::new();

        for resource in resources {
            if self.already_imported.contains(&resource.id) {
                debug!("Skipping {} {}: already imported", resource.kind, resource.id);
                outcome.already_imported += 1;
                continue;
            }

            if !resource.is_importable() {
                debug!(
                    "Skipping {} {}: {:?} not imported",
                    resource.kind, resource.id, resource.discriminant
                );
                outcome.filtered += 1;
                continue;
            }

            let entry = plan_entry(resource);
            if let Some(existing) = self.written.get(&entry.to) {
                if existing != &entry.id {
                    warn!(
                        "Local address {} is shared by {} and {}",
                        entry.to, existing, entry.id
                    );
                    outcome.collisions.push(Collision {
                        address: entry.to.clone(),
                        existing_id: existing.clone(),
                        colliding_id: entry.id.clone(),
                    });
                }
            } else {
                self.written.insert(entry.to.clone(), entry.id.clone());
            }

            debug!("Importing: {}", entry);
            batch.push(entry);
        }

        if !batch.is_empty() {
            self.sink.append(&batch)?;
        }
        outcome.emitted = batch.len();

        if outcome.listed > 0 {
            info!(
                "{}: {} listed, {} emitted, {} already imported, {} filtered",
                kind, outcome.listed, outcome.emitted, outcome.already_imported, outcome.filtered
            );
        }
        Ok(outcome)
    }
}
