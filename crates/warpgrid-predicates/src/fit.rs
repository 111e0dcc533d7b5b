//! Fit verdicts returned by filters.
//!
//! A filter answers "does workload W fit on target T" with a [`FitOutcome`]
//! or, when it couldn't evaluate at all, a [`PredicateError`]. The two are
//! never mixed: an unfit verdict is data, an error aborts the evaluation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PredicateError, PredicateResult};
use crate::reason::FailureReason;

/// Verdict of one or more filters for a single target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitOutcome {
    pub fits: bool,
    /// Reasons in the order filters reported them. Empty when `fits`.
    pub reasons: Vec<FailureReason>,
}

impl FitOutcome {
    pub fn fit() -> Self {
        Self {
            fits: true,
            reasons: Vec::new(),
        }
    }

    /// An unfit verdict.
    pub fn unfit(reasons: Vec<FailureReason>) -> Self {
        Self {
            fits: false,
            reasons,
        }
    }

    /// Record another failure. Marks the outcome unfit.
    pub fn push(&mut self, reason: impl Into<FailureReason>) {
        self.fits = false;
        self.reasons.push(reason.into());
    }

    /// Fold another filter's verdict into this one, keeping reason order.
    ///
    /// Any reason in `other` marks the result unfit, even if `other`
    /// claims to fit.
    pub fn merge(&mut self, other: FitOutcome) {
        if !other.fits || !other.reasons.is_empty() {
            self.fits = false;
        }
        self.reasons.extend(other.reasons);
    }
}

/// A filter testing one fitness dimension of a workload against a target.
pub trait FitPredicate<W, T>: Send + Sync {
    /// Name used in logs and evaluation errors.
    fn name(&self) -> &str;

    fn evaluate(&self, workload: &W, target: &T) -> PredicateResult<FitOutcome>;
}

/// Run every filter in order and collect their failure reasons.
///
/// All filters run even after one reports unfit, so the outcome explains
/// every reason the target was rejected. The first hard error stops the
/// run and is returned.
pub fn run_predicates<W, T>(
    predicates: &[&dyn FitPredicate<W, T>],
    workload: &W,
    target: &T,
) -> PredicateResult<FitOutcome> {
    let mut outcome = FitOutcome::fit();
    for predicate in predicates {
        let result = predicate.evaluate(workload, target).map_err(|e| match e {
            PredicateError::Evaluation { .. } => e,
            other => PredicateError::Evaluation {
                predicate: predicate.name().to_string(),
                source: Box::new(other),
            },
        })?;
        if !result.fits {
            debug!(
                predicate = predicate.name(),
                reasons = result.reasons.len(),
                "filter rejected target"
            );
        }
        outcome.merge(result);
    }
    Ok(outcome)
}
