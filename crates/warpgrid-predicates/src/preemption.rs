//! Candidate filtering ahead of preemption.
//!
//! Before simulating evictions, the preemption engine drops every target
//! that failed for a reason evicting pods can't change. Picking victims on
//! the remaining targets happens elsewhere.

use std::collections::BTreeMap;

use tracing::debug;

use crate::reason::FailureReason;
use crate::unresolvable::first_unresolvable;

/// Target id → reasons it rejected the workload, in filter order.
pub type FailedTargets = BTreeMap<String, Vec<FailureReason>>;

/// Targets on which evicting lower-priority workloads might let the workload fit.
///
/// Returned ids are sorted.
pub fn targets_where_preemption_might_help(failed: &FailedTargets) -> Vec<&str> {
    let mut candidates = Vec::new();
    for (target, reasons) in failed {
        match first_unresolvable(reasons) {
            Some(reason) => {
                debug!(
                    target = %target,
                    reason = %reason.reason(),
                    "skipping target, preemption cannot resolve failure"
                );
            }
            None => candidates.push(target.as_str()),
        }
    }
    candidates
}
