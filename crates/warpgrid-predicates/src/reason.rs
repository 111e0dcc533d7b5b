//! Failure reasons produced when a workload doesn't fit a target.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::PredicateFailure;
use crate::resource::InsufficientResourceError;

/// An ad-hoc failure reason carrying only a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeFormFailure {
    message: String,
}

impl FreeFormFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.message
    }
}

/// One reason a target rejected a workload.
///
/// A single fit evaluation yields these in the order its filters ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// A named catalog failure.
    Predicate(PredicateFailure),
    /// Not enough of some resource.
    InsufficientResource(InsufficientResourceError),
    /// Free-form text, for one-off and test reasons.
    Custom(FreeFormFailure),
}

impl FailureReason {
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(FreeFormFailure::new(message))
    }

    /// Reason text shown to users.
    pub fn reason(&self) -> String {
        match self {
            Self::Predicate(p) => p.reason().to_string(),
            Self::InsufficientResource(e) => e.reason(),
            Self::Custom(f) => f.reason().to_string(),
        }
    }

    /// The catalog entry, if this is a named predicate failure.
    pub fn predicate(&self) -> Option<PredicateFailure> {
        match self {
            Self::Predicate(p) => Some(*p),
            _ => None,
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate(p) => f.write_str(p.reason()),
            Self::InsufficientResource(e) => write!(f, "{e}"),
            Self::Custom(c) => f.write_str(c.reason()),
        }
    }
}

impl From<PredicateFailure> for FailureReason {
    fn from(p: PredicateFailure) -> Self {
        Self::Predicate(p)
    }
}

impl From<InsufficientResourceError> for FailureReason {
    fn from(e: InsufficientResourceError) -> Self {
        Self::InsufficientResource(e)
    }
}

impl From<FreeFormFailure> for FailureReason {
    fn from(f: FreeFormFailure) -> Self {
        Self::Custom(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_form_reason_is_message() {
        assert_eq!(FreeFormFailure::new("custom").reason(), "custom");
        assert_eq!(FailureReason::custom("custom").reason(), "custom");
    }

    #[test]
    fn reason_dispatches_per_variant() {
        let reasons: Vec<FailureReason> = vec![
            PredicateFailure::NodeNotReady.into(),
            InsufficientResourceError::new("cpu", 4, 2, 4).into(),
            FreeFormFailure::new("quota exhausted").into(),
        ];
        let texts: Vec<String> = reasons.iter().map(FailureReason::reason).collect();
        assert_eq!(
            texts,
            vec!["node(s) were not ready", "Insufficient cpu", "quota exhausted"]
        );
    }

    #[test]
    fn display_uses_describe_for_resources() {
        let reason = FailureReason::from(InsufficientResourceError::new("memory", 10, 6, 8));
        assert_eq!(
            reason.to_string(),
            "Node didn't have enough resource: memory, requested: 10, used: 6, capacity: 8"
        );
        assert_eq!(
            FailureReason::from(PredicateFailure::DiskPressure).to_string(),
            "node(s) had disk pressure"
        );
    }

    #[test]
    fn predicate_accessor() {
        assert_eq!(
            FailureReason::from(PredicateFailure::HostNameMismatch).predicate(),
            Some(PredicateFailure::HostNameMismatch)
        );
        assert_eq!(FailureReason::custom("HostName").predicate(), None);
    }

    #[test]
    fn serializes_externally_tagged() {
        let reason = FailureReason::from(PredicateFailure::NodeSelectorMismatch);
        let json = serde_json::to_value(&reason).unwrap();
        assert_eq!(json, serde_json::json!({ "predicate": "MatchNodeSelector" }));

        let reason = FailureReason::from(
            InsufficientResourceError::new("nvidia.com/gpu", 2, 1, 2).with_device_type("a100"),
        );
        let json = serde_json::to_value(&reason).unwrap();
        assert_eq!(json["insufficient_resource"]["device_type"], "a100");
        assert_eq!(json["insufficient_resource"]["requested"], 2);
    }
}
