//! `ResourceInventory` implementation for the dashboard API

use async_trait::async_trait;
use ngwaf_import_types::{
    Discriminant, ImportError, ImportResult, RemoteResource, ResourceInventory, ResourceKind,
    Scope,
};

use crate::client::SigSciClient;
use crate::errors::SigSciError;
use crate::models::{
    AlertBody, IntegrationBody, ListBody, RuleBody, SignalTagBody, SiteBody, TemplatedRuleBody,
};

/// Listing endpoint for `kind` under `scope`, relative to the API base URL
pub fn listing_path(kind: ResourceKind, scope: &Scope) -> ImportResult<String> {
    let corp = scope.corp_name();
    let site_path = |suffix: &str| match scope.site_name() {
        Some(site) => Ok(format!("/corps/{}/sites/{}/{}", corp, site, suffix)),
        None => Err(ImportError::ListingFailure {
            kind,
            scope: scope.to_string(),
            reason: "a site scope is required".to_string(),
        }),
    };

    match kind {
        ResourceKind::CorpRule => Ok(format!("/corps/{}/rules", corp)),
        ResourceKind::CorpList => Ok(format!("/corps/{}/lists", corp)),
        ResourceKind::CorpSignalTag => Ok(format!("/corps/{}/tags", corp)),
        ResourceKind::Site => Ok(format!("/corps/{}/sites", corp)),
        ResourceKind::SiteRule => site_path("rules"),
        ResourceKind::SiteLegacyTemplatedRule => site_path("configuredtemplates"),
        ResourceKind::SiteSignalTag => site_path("tags"),
        ResourceKind::SiteList => site_path("lists"),
        ResourceKind::SiteIntegration => site_path("integrations"),
        ResourceKind::SiteAlert | ResourceKind::SiteAgentAlert => site_path("alerts"),
    }
}

#[async_trait]
impl ResourceInventory for SigSciClient {
    fn name(&self) -> &str {
        "NGWAF dashboard API"
    }

    async fn list(&self, kind: ResourceKind, scope: &Scope) -> ImportResult<Vec<RemoteResource>> {
        let path = listing_path(kind, scope)?;
        let failure = |e: SigSciError| ImportError::ListingFailure {
            kind,
            scope: scope.to_string(),
            reason: e.to_string(),
        };

        let items: Vec<(String, Discriminant)> = match kind {
            ResourceKind::CorpRule | ResourceKind::SiteRule => self
                .get_data::<RuleBody>(&path)
                .await
                .map_err(failure)?
                .into_iter()
                .map(|r| (r.id, Discriminant::RuleType(r.rule_type)))
                .collect(),
            ResourceKind::CorpList | ResourceKind::SiteList => self
                .get_data::<ListBody>(&path)
                .await
                .map_err(failure)?
                .into_iter()
                .map(|l| (l.id, Discriminant::None))
                .collect(),
            ResourceKind::CorpSignalTag | ResourceKind::SiteSignalTag => self
                .get_data::<SignalTagBody>(&path)
                .await
                .map_err(failure)?
                .into_iter()
                .map(|t| (t.tag_name, Discriminant::None))
                .collect(),
            ResourceKind::Site => self
                .get_data::<SiteBody>(&path)
                .await
                .map_err(failure)?
                .into_iter()
                .map(|s| (s.name, Discriminant::None))
                .collect(),
            ResourceKind::SiteLegacyTemplatedRule => self
                .get_data::<TemplatedRuleBody>(&path)
                .await
                .map_err(failure)?
                .into_iter()
                .map(|t| (t.name, Discriminant::Detections(t.detections.len())))
                .collect(),
            ResourceKind::SiteIntegration => self
                .get_data::<IntegrationBody>(&path)
                .await
                .map_err(failure)?
                .into_iter()
                .map(|i| (i.id, Discriminant::None))
                .collect(),
            ResourceKind::SiteAlert | ResourceKind::SiteAgentAlert => self
                .get_data::<AlertBody>(&path)
                .await
                .map_err(failure)?
                .into_iter()
                .map(|a| (a.id, Discriminant::AlertAction(a.action)))
                .collect(),
        };

        Ok(items
            .into_iter()
            .map(|(id, discriminant)| RemoteResource::new(id, kind, scope.clone(), discriminant))
            .collect())
    }
}
