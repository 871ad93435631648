//! Remote resource types
//!
//! Normalized view of one control-plane object as produced by an enumeration
//! pass. Nothing here is persisted.

use serde::{Deserialize, Serialize};

use crate::kind::ResourceKind;

/// Scope a resource was listed under
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "lowercase")]
pub enum Scope {
    Corp { corp: String },
    Site { corp: String, site: String },
}

impl Scope {
    pub fn corp(corp: impl Into<String>) -> Self {
        Scope::Corp { corp: corp.into() }
    }

    pub fn site(corp: impl Into<String>, site: impl Into<String>) -> Self {
        Scope::Site {
            corp: corp.into(),
            site: site.into(),
        }
    }

    pub fn corp_name(&self) -> &str {
        match self {
            Scope::Corp { corp } | Scope::Site { corp, .. } => corp,
        }
    }

    /// Site name, if this is a site scope
    pub fn site_name(&self) -> Option<&str> {
        match self {
            Scope::Corp { .. } => None,
            Scope::Site { site, .. } => Some(site),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Corp { corp } => write!(f, "{}", corp),
            Scope::Site { corp, site } => write!(f, "{}/{}", corp, site),
        }
    }
}

/// Kind-specific subtype tag that gates whether a resource is imported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Discriminant {
    /// Kind carries no discriminant
    None,
    /// Rule `type` (request, rateLimit, templatedSignal, signal, ...)
    RuleType(String),
    /// Alert `action` (info, flagged, siteMetricInfo, ...)
    AlertAction(String),
    /// Number of detections configured on a legacy templated rule
    Detections(usize),
}

/// One enumerated control-plane object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteResource {
    /// Opaque remote identifier (rule id, list id, tag name, site name, ...)
    pub id: String,
    pub kind: ResourceKind,
    pub scope: Scope,
    pub discriminant: Discriminant,
}

impl RemoteResource {
    pub fn new(
        id: impl Into<String>,
        kind: ResourceKind,
        scope: Scope,
        discriminant: Discriminant,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            scope,
            discriminant,
        }
    }

    /// Whether the descriptor table accepts this resource's discriminant
    pub fn is_importable(&self) -> bool {
        self.kind.accepts(&self.discriminant)
    }
}
