//! Failures that preemption can never fix.
//!
//! Evicting workloads from a target changes its free resources and which
//! pods run there. It does not change the target's labels, taints,
//! hostname, conditions, or volume topology. A target rejected for one of
//! those reasons is skipped before any eviction simulation runs.
//!
//! Any new catalog entry whose filter cannot be made to pass by removing
//! pods must be added to [`PredicateFailure::is_unresolvable`].

use tracing::trace;

use crate::catalog::PredicateFailure;
use crate::reason::FailureReason;

impl PredicateFailure {
    /// Whether removing other workloads from a target can never clear this failure.
    pub const fn is_unresolvable(self) -> bool {
        matches!(
            self,
            Self::NodeSelectorMismatch
                | Self::PodAffinityRulesMismatch
                | Self::HostNameMismatch
                | Self::UntoleratedTaints
                | Self::MissingNodeLabels
                // Node conditions stay put while victims are removed.
                | Self::NodeNotReady
                | Self::NetworkUnavailable
                | Self::DiskPressure
                | Self::PidPressure
                | Self::MemoryPressure
                | Self::NodeUnschedulable
                | Self::UnknownNodeCondition
                | Self::VolumeZoneConflict
                | Self::VolumeNodeAffinityConflict
                | Self::VolumeBindingNoMatch
        )
    }
}

impl FailureReason {
    /// Whether this is a catalog failure that preemption can't resolve.
    ///
    /// Resource shortfalls and free-form reasons are always resolvable,
    /// whatever their text says.
    pub fn is_unresolvable(&self) -> bool {
        self.predicate().is_some_and(PredicateFailure::is_unresolvable)
    }
}

/// Return the first reason, in input order, that preemption can't resolve.
pub fn first_unresolvable(reasons: &[FailureReason]) -> Option<&FailureReason> {
    let found = reasons.iter().find(|r| r.is_unresolvable());
    if let Some(reason) = found {
        trace!(reason = %reason, checked = reasons.len(), "found unresolvable failure");
    }
    found
}
