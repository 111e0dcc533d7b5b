//! Catalog of named predicate failures.
//!
//! Each filter that can reject a target reports one of these kinds. The
//! `name` of every entry is stable across releases: callers key metrics,
//! events, and alerts on it, so entries are never renamed.
//!
//! Entries are plain enum tags. Two evaluations that fail the same filter
//! report the same tag, and the unresolvability check in
//! [`crate::unresolvable`] matches on the tag, never on the text.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};

/// A named predicate failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PredicateFailure {
    DiskConflict,
    VolumeZoneConflict,
    NodeSelectorMismatch,
    InterPodAffinityMismatch,
    PodAffinityRulesMismatch,
    PodAntiAffinityRulesMismatch,
    ExistingPodsAntiAffinityRulesMismatch,
    UntoleratedTaints,
    HostNameMismatch,
    HostPortsUnavailable,
    MissingNodeLabels,
    ServiceAffinityMismatch,
    MaxVolumeCountExceeded,
    MemoryPressure,
    DiskPressure,
    PidPressure,
    NodeNotReady,
    NetworkUnavailable,
    NodeUnschedulable,
    UnknownNodeCondition,
    VolumeNodeAffinityConflict,
    VolumeBindingNoMatch,
    TopologySpreadMismatch,
    /// Reported by fake filters in tests.
    Fake,
}

impl PredicateFailure {
    /// Every catalog entry, in declaration order.
    pub const ALL: [PredicateFailure; 24] = [
        Self::DiskConflict,
        Self::VolumeZoneConflict,
        Self::NodeSelectorMismatch,
        Self::InterPodAffinityMismatch,
        Self::PodAffinityRulesMismatch,
        Self::PodAntiAffinityRulesMismatch,
        Self::ExistingPodsAntiAffinityRulesMismatch,
        Self::UntoleratedTaints,
        Self::HostNameMismatch,
        Self::HostPortsUnavailable,
        Self::MissingNodeLabels,
        Self::ServiceAffinityMismatch,
        Self::MaxVolumeCountExceeded,
        Self::MemoryPressure,
        Self::DiskPressure,
        Self::PidPressure,
        Self::NodeNotReady,
        Self::NetworkUnavailable,
        Self::NodeUnschedulable,
        Self::UnknownNodeCondition,
        Self::VolumeNodeAffinityConflict,
        Self::VolumeBindingNoMatch,
        Self::TopologySpreadMismatch,
        Self::Fake,
    ];

    /// Stable predicate name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::DiskConflict => "NoDiskConflict",
            Self::VolumeZoneConflict => "NoVolumeZoneConflict",
            Self::NodeSelectorMismatch => "MatchNodeSelector",
            Self::InterPodAffinityMismatch => "MatchInterPodAffinity",
            Self::PodAffinityRulesMismatch => "PodAffinityRulesNotMatch",
            Self::PodAntiAffinityRulesMismatch => "PodAntiAffinityRulesNotMatch",
            Self::ExistingPodsAntiAffinityRulesMismatch => "ExistingPodsAntiAffinityRulesNotMatch",
            Self::UntoleratedTaints => "PodToleratesNodeTaints",
            Self::HostNameMismatch => "HostName",
            Self::HostPortsUnavailable => "PodFitsHostPorts",
            Self::MissingNodeLabels => "CheckNodeLabelPresence",
            Self::ServiceAffinityMismatch => "CheckServiceAffinity",
            Self::MaxVolumeCountExceeded => "MaxVolumeCount",
            Self::MemoryPressure => "NodeUnderMemoryPressure",
            Self::DiskPressure => "NodeUnderDiskPressure",
            Self::PidPressure => "NodeUnderPIDPressure",
            Self::NodeNotReady => "NodeNotReady",
            Self::NetworkUnavailable => "NodeNetworkUnavailable",
            Self::NodeUnschedulable => "NodeUnschedulable",
            Self::UnknownNodeCondition => "NodeUnknownCondition",
            Self::VolumeNodeAffinityConflict => "VolumeNodeAffinityConflict",
            Self::VolumeBindingNoMatch => "VolumeBindingNoMatch",
            Self::TopologySpreadMismatch => "EvenPodsSpreadNotMatch",
            Self::Fake => "FakePredicateError",
        }
    }

    /// User-facing description, used as the failure reason text.
    pub const fn description(self) -> &'static str {
        match self {
            Self::DiskConflict => "node(s) had no available disk",
            Self::VolumeZoneConflict => "node(s) had no available volume zone",
            Self::NodeSelectorMismatch => "node(s) didn't match node selector",
            Self::InterPodAffinityMismatch => "node(s) didn't match pod affinity/anti-affinity",
            Self::PodAffinityRulesMismatch => "node(s) didn't match pod affinity rules",
            Self::PodAntiAffinityRulesMismatch => "node(s) didn't match pod anti-affinity rules",
            Self::ExistingPodsAntiAffinityRulesMismatch => {
                "node(s) didn't satisfy existing pods anti-affinity rules"
            }
            Self::UntoleratedTaints => "node(s) had taints that the pod didn't tolerate",
            Self::HostNameMismatch => "node(s) didn't match the requested hostname",
            Self::HostPortsUnavailable => {
                "node(s) didn't have free ports for the requested pod ports"
            }
            Self::MissingNodeLabels => "node(s) didn't have the requested labels",
            Self::ServiceAffinityMismatch => "node(s) didn't match service affinity",
            Self::MaxVolumeCountExceeded => "node(s) exceed max volume count",
            Self::MemoryPressure => "node(s) had memory pressure",
            Self::DiskPressure => "node(s) had disk pressure",
            Self::PidPressure => "node(s) had pid pressure",
            Self::NodeNotReady => "node(s) were not ready",
            Self::NetworkUnavailable => "node(s) had unavailable network",
            Self::NodeUnschedulable => "node(s) were unschedulable",
            Self::UnknownNodeCondition => "node(s) had unknown conditions",
            Self::VolumeNodeAffinityConflict => "node(s) had volume node affinity conflict",
            Self::VolumeBindingNoMatch => {
                "node(s) didn't find available persistent volumes to bind"
            }
            Self::TopologySpreadMismatch => "node(s) didn't match pod topology spread constraints",
            Self::Fake => "Nodes failed the fake predicate",
        }
    }

    /// Failure reason text. Same as [`description`](Self::description).
    pub const fn reason(self) -> &'static str {
        self.description()
    }

    /// Look up a catalog entry by its stable name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|entry| entry.name() == name)
    }
}

impl fmt::Display for PredicateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicate {} failed", self.name())
    }
}

// Serialized as the stable name so payloads survive variant renames.
impl Serialize for PredicateFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for PredicateFailure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown predicate failure: {name}")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = PredicateFailure::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names.len(), PredicateFailure::ALL.len());
    }

    #[test]
    fn from_name_round_trips_every_entry() {
        for entry in PredicateFailure::ALL {
            assert_eq!(PredicateFailure::from_name(entry.name()), Some(entry));
        }
    }

    #[test]
    fn from_name_unknown_returns_none() {
        assert_eq!(PredicateFailure::from_name("NoSuchPredicate"), None);
        assert_eq!(PredicateFailure::from_name("matchnodeselector"), None);
    }

    #[test]
    fn reason_is_description() {
        assert_eq!(
            PredicateFailure::NodeSelectorMismatch.reason(),
            "node(s) didn't match node selector"
        );
        assert_eq!(
            PredicateFailure::UntoleratedTaints.reason(),
            "node(s) had taints that the pod didn't tolerate"
        );
        assert_eq!(PredicateFailure::Fake.reason(), "Nodes failed the fake predicate");
    }

    #[test]
    fn every_entry_has_its_documented_text() {
        let expected = [
            ("NoDiskConflict", "node(s) had no available disk"),
            ("NoVolumeZoneConflict", "node(s) had no available volume zone"),
            ("MatchNodeSelector", "node(s) didn't match node selector"),
            ("MatchInterPodAffinity", "node(s) didn't match pod affinity/anti-affinity"),
            ("PodAffinityRulesNotMatch", "node(s) didn't match pod affinity rules"),
            ("PodAntiAffinityRulesNotMatch", "node(s) didn't match pod anti-affinity rules"),
            (
                "ExistingPodsAntiAffinityRulesNotMatch",
                "node(s) didn't satisfy existing pods anti-affinity rules",
            ),
            ("PodToleratesNodeTaints", "node(s) had taints that the pod didn't tolerate"),
            ("HostName", "node(s) didn't match the requested hostname"),
            (
                "PodFitsHostPorts",
                "node(s) didn't have free ports for the requested pod ports",
            ),
            ("CheckNodeLabelPresence", "node(s) didn't have the requested labels"),
            ("CheckServiceAffinity", "node(s) didn't match service affinity"),
            ("MaxVolumeCount", "node(s) exceed max volume count"),
            ("NodeUnderMemoryPressure", "node(s) had memory pressure"),
            ("NodeUnderDiskPressure", "node(s) had disk pressure"),
            ("NodeUnderPIDPressure", "node(s) had pid pressure"),
            ("NodeNotReady", "node(s) were not ready"),
            ("NodeNetworkUnavailable", "node(s) had unavailable network"),
            ("NodeUnschedulable", "node(s) were unschedulable"),
            ("NodeUnknownCondition", "node(s) had unknown conditions"),
            ("VolumeNodeAffinityConflict", "node(s) had volume node affinity conflict"),
            (
                "VolumeBindingNoMatch",
                "node(s) didn't find available persistent volumes to bind",
            ),
            (
                "EvenPodsSpreadNotMatch",
                "node(s) didn't match pod topology spread constraints",
            ),
            ("FakePredicateError", "Nodes failed the fake predicate"),
        ];

        assert_eq!(PredicateFailure::ALL.len(), expected.len());
        for (entry, (name, description)) in PredicateFailure::ALL.into_iter().zip(expected) {
            assert_eq!(entry.name(), name);
            assert_eq!(entry.description(), description, "description of {name}");
            assert_eq!(entry.reason(), description, "reason of {name}");
        }
    }

    #[test]
    fn stable_names_preserved() {
        assert_eq!(PredicateFailure::DiskConflict.name(), "NoDiskConflict");
        assert_eq!(PredicateFailure::PidPressure.name(), "NodeUnderPIDPressure");
        assert_eq!(PredicateFailure::TopologySpreadMismatch.name(), "EvenPodsSpreadNotMatch");
        assert_eq!(PredicateFailure::HostNameMismatch.name(), "HostName");
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(
            PredicateFailure::HostPortsUnavailable.to_string(),
            "Predicate PodFitsHostPorts failed"
        );
    }

    #[test]
    fn serializes_as_stable_name() {
        let json = serde_json::to_string(&PredicateFailure::MemoryPressure).unwrap();
        assert_eq!(json, "\"NodeUnderMemoryPressure\"");

        let back: PredicateFailure = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PredicateFailure::MemoryPressure);

        assert!(serde_json::from_str::<PredicateFailure>("\"Bogus\"").is_err());
    }
}
