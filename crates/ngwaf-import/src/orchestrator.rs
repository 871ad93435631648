//! Run orchestration
//!
//! Drives every resource kind through enumerate-then-emit in a fixed order:
//! corp rules, corp lists, corp signal tags, sites, then for each site its
//! rules, legacy templated rules, signal tags, lists, integrations and alerts.

use ngwaf_import_types::{
    Discriminant, ImportError, ImportResult, RemoteResource, ResourceInventory, ResourceKind, Scope,
    AGENT_ALERT_ACTION,
};
use tracing::{info, warn};

use crate::emitter::Emitter;
use crate::report::RunReport;
use crate::sink::PlanSink;
use crate::state::StateIds;

/// Corp (and optional single site) a run covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunScope {
    pub corp: String,
    /// Restrict the run to this site
    pub site: Option<String>,
}

impl RunScope {
    pub fn corp(corp: impl Into<String>) -> Self {
        Self {
            corp: corp.into(),
            site: None,
        }
    }

    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    /// Reject blank corp or site names, which would address `/corps//...`
    pub fn validate(&self) -> ImportResult<()> {
        if self.corp.trim().is_empty() {
            return Err(ImportError::InvalidConfiguration(
                "corp name is empty".to_string(),
            ));
        }
        if matches!(&self.site, Some(site) if site.trim().is_empty()) {
            return Err(ImportError::InvalidConfiguration(
                "site name is empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Split one site's alert listing into site alerts and agent alerts
///
/// Alerts whose action is `siteMetricInfo` become agent alerts; everything
/// else stays a site alert and is left to that kind's discriminant filter.
pub fn partition_alerts(
    alerts: Vec<RemoteResource>,
) -> (Vec<RemoteResource>, Vec<RemoteResource>) {
    let mut site_alerts = Vec::new();
    let mut agent_alerts = Vec::new();
    for mut alert in alerts {
        match &alert.discriminant {
            Discriminant::AlertAction(action) if action == AGENT_ALERT_ACTION => {
                alert.kind = ResourceKind::SiteAgentAlert;
                agent_alerts.push(alert);
            }
            _ => {
                alert.kind = ResourceKind::SiteAlert;
                site_alerts.push(alert);
            }
        }
    }
    (site_alerts, agent_alerts)
}

/// Sequential enumerate-and-emit driver
///
/// Every listing call is awaited before the next one starts; a run never has
/// more than one request in flight.
pub struct Orchestrator<'a, I: ResourceInventory + ?Sized> {
    inventory: &'a I,
    scope: RunScope,
}

impl<'a, I: ResourceInventory + ?Sized> Orchestrator<'a, I> {
    pub fn new(inventory: &'a I, scope: RunScope) -> Self {
        Self { inventory, scope }
    }

    /// Run every kind and append new import blocks to `sink`
    ///
    /// Listing failures are logged and count as zero resources. A sink
    /// failure or an invalid scope aborts the run and is returned as is.
    pub async fn run<S: PlanSink>(
        &self,
        already_imported: &StateIds,
        sink: &mut S,
    ) -> ImportResult<RunReport> {
        self.scope.validate()?;

        info!(
            "Generating import plan for corp {} from {} into {}",
            self.scope.corp,
            self.inventory.name(),
            sink.describe()
        );

        let mut report = RunReport::default();
        let mut emitter = Emitter::new(already_imported, sink);
        let corp_scope = Scope::corp(&self.scope.corp);

        for kind in ResourceKind::CORP {
            let resources = self.enumerate(kind, &corp_scope, &mut report).await?;
            report.record_batch(emitter.emit(kind, &resources)?);
        }

        let mut sites = self
            .enumerate(ResourceKind::Site, &corp_scope, &mut report)
            .await?;
        if let Some(only) = &self.scope.site {
            sites.retain(|site| &site.id == only);
        }
        report.record_batch(emitter.emit(ResourceKind::Site, &sites)?);

        let site_names: Vec<String> = match &self.scope.site {
            Some(only) => vec![only.clone()],
            None => sites.into_iter().map(|site| site.id).collect(),
        };

        for site in &site_names {
            info!("Processing site {}", site);
            let site_scope = Scope::site(&self.scope.corp, site);

            for kind in ResourceKind::PER_SITE {
                let resources = self.enumerate(kind, &site_scope, &mut report).await?;
                report.record_batch(emitter.emit(kind, &resources)?);
            }

            let alerts = self
                .enumerate(ResourceKind::SiteAlert, &site_scope, &mut report)
                .await?;
            let (site_alerts, agent_alerts) = partition_alerts(alerts);
            report.record_batch(emitter.emit(ResourceKind::SiteAlert, &site_alerts)?);
            report.record_batch(emitter.emit(ResourceKind::SiteAgentAlert, &agent_alerts)?);
        }

        report.sites = site_names;
        info!(
            "Import plan complete: {} new entries, {} already imported, {} listing failures",
            report.total_emitted(),
            report.total_already_imported(),
            report.total_listing_failures()
        );
        Ok(report)
    }

    /// List one kind, downgrading a non-fatal failure to an empty collection
    async fn enumerate(
        &self,
        kind: ResourceKind,
        scope: &Scope,
        report: &mut RunReport,
    ) -> ImportResult<Vec<RemoteResource>> {
        match self.inventory.list(kind, scope).await {
            Ok(resources) => Ok(resources),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                warn!("{}; continuing with no {} resources", e, kind);
                report.record_listing_failure(kind);
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(id: &str, action: &str) -> RemoteResource {
        RemoteResource::new(
            id,
            ResourceKind::SiteAlert,
            Scope::site("acme", "www"),
            Discriminant::AlertAction(action.to_string()),
        )
    }

    #[test]
    fn test_partition_alerts() {
        let (site_alerts, agent_alerts) = partition_alerts(vec![
            alert("a1", "info"),
            alert("a2", "siteMetricInfo"),
            alert("a3", "flagged"),
            alert("a4", "siteMetricInfo"),
        ]);

        let ids = |v: &[RemoteResource]| v.iter().map(|r| r.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&site_alerts), vec!["a1", "a3"]);
        assert_eq!(ids(&agent_alerts), vec!["a2", "a4"]);
        assert!(site_alerts.iter().all(|a| a.kind == ResourceKind::SiteAlert));
        assert!(agent_alerts
            .iter()
            .all(|a| a.kind == ResourceKind::SiteAgentAlert && a.is_importable()));
        assert!(!site_alerts[1].is_importable());
    }

    #[test]
    fn test_run_scope_rejects_blank_names() {
        assert!(RunScope::corp("acme").with_site("www").validate().is_ok());
        assert!(matches!(
            RunScope::corp("").validate(),
            Err(ImportError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            RunScope::corp("acme").with_site(" ").validate(),
            Err(ImportError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_run_scope_builder() {
        let scope = RunScope::corp("acme").with_site("www");
        assert_eq!(scope.corp, "acme");
        assert_eq!(scope.site.as_deref(), Some("www"));
    }
}
