//! Resource kind descriptor table
//!
//! Every per-kind policy difference (Terraform type, scope, discriminant
//! filter) lives here as data so the enumerate-and-emit pipeline stays generic.

use serde::{Deserialize, Serialize};

use crate::resource::Discriminant;

/// Rule types imported as `sigsci_site_rule`
const SITE_RULE_TYPES: &[&str] = &["request", "rateLimit", "templatedSignal"];

/// Alert action routed to `sigsci_site_alert`
pub const SITE_ALERT_ACTION: &str = "info";

/// Alert action routed to `sigsci_site_agent_alert`
pub const AGENT_ALERT_ACTION: &str = "siteMetricInfo";

/// Kinds of control-plane objects the generator knows how to import
///
/// Declaration order is the order the orchestrator processes them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    CorpRule,
    CorpList,
    CorpSignalTag,
    Site,
    SiteRule,
    SiteLegacyTemplatedRule,
    SiteSignalTag,
    SiteList,
    SiteIntegration,
    SiteAlert,
    SiteAgentAlert,
}

/// How a kind is addressed relative to its scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopePolicy {
    /// Import key is the bare remote id, local name is `sanitize(id)`
    Corp,
    /// Import key is `site:id`, local name is `sanitize(site) + sanitize(id)`
    SiteQualified,
}

impl ResourceKind {
    /// Corp-scoped kinds, in processing order (sites are handled separately)
    pub const CORP: [ResourceKind; 3] = [
        ResourceKind::CorpRule,
        ResourceKind::CorpList,
        ResourceKind::CorpSignalTag,
    ];

    /// Site-scoped kinds listed individually, in processing order
    ///
    /// Alerts are absent: one alert listing feeds both alert kinds.
    pub const PER_SITE: [ResourceKind; 5] = [
        ResourceKind::SiteRule,
        ResourceKind::SiteLegacyTemplatedRule,
        ResourceKind::SiteSignalTag,
        ResourceKind::SiteList,
        ResourceKind::SiteIntegration,
    ];

    pub const ALL: [ResourceKind; 11] = [
        ResourceKind::CorpRule,
        ResourceKind::CorpList,
        ResourceKind::CorpSignalTag,
        ResourceKind::Site,
        ResourceKind::SiteRule,
        ResourceKind::SiteLegacyTemplatedRule,
        ResourceKind::SiteSignalTag,
        ResourceKind::SiteList,
        ResourceKind::SiteIntegration,
        ResourceKind::SiteAlert,
        ResourceKind::SiteAgentAlert,
    ];

    /// Get the string identifier for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::CorpRule => "corp_rule",
            ResourceKind::CorpList => "corp_list",
            ResourceKind::CorpSignalTag => "corp_signal_tag",
            ResourceKind::Site => "site",
            ResourceKind::SiteRule => "site_rule",
            ResourceKind::SiteLegacyTemplatedRule => "site_templated_rule",
            ResourceKind::SiteSignalTag => "site_signal_tag",
            ResourceKind::SiteList => "site_list",
            ResourceKind::SiteIntegration => "site_integration",
            ResourceKind::SiteAlert => "site_alert",
            ResourceKind::SiteAgentAlert => "site_agent_alert",
        }
    }

    /// Terraform resource type token used on the left of an import address
    pub fn terraform_type(&self) -> &'static str {
        match self {
            ResourceKind::CorpRule => "sigsci_corp_rule",
            ResourceKind::CorpList => "sigsci_corp_list",
            ResourceKind::CorpSignalTag => "sigsci_corp_signal_tag",
            ResourceKind::Site => "sigsci_site",
            ResourceKind::SiteRule => "sigsci_site_rule",
            ResourceKind::SiteLegacyTemplatedRule => "sigsci_site_templated_rule",
            ResourceKind::SiteSignalTag => "sigsci_site_signal_tag",
            ResourceKind::SiteList => "sigsci_site_list",
            ResourceKind::SiteIntegration => "sigsci_site_integration",
            ResourceKind::SiteAlert => "sigsci_site_alert",
            ResourceKind::SiteAgentAlert => "sigsci_site_agent_alert",
        }
    }

    pub fn scope_policy(&self) -> ScopePolicy {
        match self {
            ResourceKind::CorpRule
            | ResourceKind::CorpList
            | ResourceKind::CorpSignalTag
            | ResourceKind::Site => ScopePolicy::Corp,
            _ => ScopePolicy::SiteQualified,
        }
    }

    /// Whether a resource of this kind with the given discriminant is importable
    pub fn accepts(&self, discriminant: &Discriminant) -> bool {
        match (self, discriminant) {
            (ResourceKind::CorpRule, Discriminant::RuleType(t)) => t == "request",
            (ResourceKind::CorpRule, _) => false,
            (ResourceKind::SiteRule, Discriminant::RuleType(t)) => {
                SITE_RULE_TYPES.contains(&t.as_str())
            }
            (ResourceKind::SiteRule, _) => false,
            (ResourceKind::SiteLegacyTemplatedRule, Discriminant::Detections(n)) => *n > 0,
            (ResourceKind::SiteLegacyTemplatedRule, _) => false,
            (ResourceKind::SiteAlert, Discriminant::AlertAction(a)) => a == SITE_ALERT_ACTION,
            (ResourceKind::SiteAlert, _) => false,
            (ResourceKind::SiteAgentAlert, Discriminant::AlertAction(a)) => {
                a == AGENT_ALERT_ACTION
            }
            (ResourceKind::SiteAgentAlert, _) => false,
            _ => true,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
