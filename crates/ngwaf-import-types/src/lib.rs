//! Core types and traits for the NGWAF Terraform import system
//!
//! This crate provides the foundational abstractions for adopting pre-existing
//! NGWAF (Signal Sciences) objects into Terraform state via `import` blocks.
//!
//! # Architecture
//!
//! - **Traits**: `ResourceInventory` defines the read-only listing interface
//!   every control-plane adapter must implement
//! - **Types**: `ResourceKind` (the per-kind descriptor table), `RemoteResource`,
//!   `ImportPlanEntry` and `ImportPlanDocument`
//! - **Errors**: Unified error taxonomy shared by the generator and adapters
//!
//! # Usage
//!
//! Adapter implementations (e.g., `ngwaf-import-sigsci`) depend on this crate
//! and implement the `ResourceInventory` trait.

pub mod error;
pub mod inventory;
pub mod kind;
pub mod plan;
pub mod resource;

pub use error::{ImportError, ImportResult};
pub use inventory::ResourceInventory;
pub use kind::{ResourceKind, ScopePolicy, AGENT_ALERT_ACTION, SITE_ALERT_ACTION};
pub use plan::{ImportPlanDocument, ImportPlanEntry};
pub use resource::{Discriminant, RemoteResource, Scope};
