//! warpgrid-predicates — why a workload didn't fit, and whether preemption can help.
//!
//! Filters that test a workload against a target report zero or more
//! [`FailureReason`]s. The preemption engine asks [`first_unresolvable`]
//! whether any of them can never be cleared by evicting lower-priority
//! workloads, and skips the target without simulating evictions if so.
//!
//! # Components
//!
//! - **`catalog`** — Named predicate failures with stable names
//! - **`resource`** — Resource shortfall details
//! - **`reason`** — The `FailureReason` sum type and free-form reasons
//! - **`unresolvable`** — Which failures preemption can't fix
//! - **`fit`** — Filter verdicts and the filter trait
//! - **`preemption`** — Candidate target filtering before eviction simulation
//! - **`config_source`** — Node config source descriptors and their labels
//!
//! Everything here is pure data. Nothing blocks or performs I/O, and all
//! public types are `Send + Sync`.

pub mod catalog;
pub mod config_source;
pub mod error;
pub mod fit;
pub mod preemption;
pub mod reason;
pub mod resource;
pub mod unresolvable;

pub use catalog::PredicateFailure;
pub use config_source::{ConfigMapNodeConfigSource, NodeConfigSource, config_labels};
pub use error::{PredicateError, PredicateResult};
pub use fit::{FitOutcome, FitPredicate, run_predicates};
pub use preemption::{FailedTargets, targets_where_preemption_might_help};
pub use reason::{FailureReason, FreeFormFailure};
pub use resource::InsufficientResourceError;
pub use unresolvable::first_unresolvable;
