//! Resource inventory trait
//!
//! Defines the read-only listing interface a control-plane adapter must provide.

use async_trait::async_trait;

use crate::{error::ImportResult, kind::ResourceKind, resource::RemoteResource, resource::Scope};

/// Read-only view of the control plane's inventory
///
/// Implementations make at most one listing call per invocation: no retries,
/// no pagination beyond what the remote API returns natively, and never any
/// mutation of remote state.
#[async_trait]
pub trait ResourceInventory: Send + Sync {
    /// Human-readable name for this inventory
    fn name(&self) -> &str;

    /// List every object of `kind` under `scope`
    ///
    /// Corp-scoped kinds (including `Site`) take a corp scope; site-scoped
    /// kinds take a site scope. Each returned resource carries `kind`, `scope`
    /// and the kind-specific discriminant.
    async fn list(&self, kind: ResourceKind, scope: &Scope) -> ImportResult<Vec<RemoteResource>>;
}
