//! Import plan generator for NGWAF Terraform adoption
//!
//! Turns a control-plane inventory into Terraform `import` blocks:
//!
//! - [`sanitize`] maps remote ids onto valid HCL identifiers
//! - [`StateIds`] reads the ids already present in a Terraform state snapshot
//! - [`Emitter`] filters, names and appends one entry per new resource
//! - [`Orchestrator`] drives every resource kind in a fixed order

pub mod emitter;
pub mod orchestrator;
pub mod report;
pub mod sanitize;
pub mod scaffold;
pub mod sink;
pub mod state;

pub use emitter::{plan_entry, Emitter};
pub use orchestrator::{partition_alerts, Orchestrator, RunScope};
pub use report::{BatchOutcome, Collision, KindSummary, RunReport};
pub use sanitize::sanitize;
pub use scaffold::write_scaffold;
pub use sink::{FilePlanSink, MemoryPlanSink, PlanSink};
pub use state::StateIds;
