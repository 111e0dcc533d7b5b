//! Node config source descriptors.
//!
//! A node reports where its configuration came from. The descriptor is a
//! one-of: exactly one source variant should be set. A descriptor with no
//! variant set is malformed and rejected with
//! [`PredicateError::UnrecognizedConfigSource`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PredicateError, PredicateResult};

pub const CONFIG_SOURCE_LABEL: &str = "node_config_source";
pub const CONFIG_UID_LABEL: &str = "node_config_uid";
pub const CONFIG_RESOURCE_VERSION_LABEL: &str = "node_config_resource_version";
pub const KUBELET_CONFIG_KEY_LABEL: &str = "node_config_kubelet_key";

/// Label value for nodes running on their local config.
pub const CONFIG_SOURCE_LOCAL: &str = "local";

/// Where a node's configuration comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfigSource {
    pub config_map: Option<ConfigMapNodeConfigSource>,
}

/// A config map holding the node's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigMapNodeConfigSource {
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub resource_version: String,
    pub kubelet_config_key: String,
}

impl NodeConfigSource {
    pub fn from_toml_str(content: &str) -> PredicateResult<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Labels identifying a node's config source.
///
/// `None` means the node runs on local config. All four labels are always
/// present so label sets stay uniform across nodes.
pub fn config_labels(
    source: Option<&NodeConfigSource>,
) -> PredicateResult<BTreeMap<&'static str, String>> {
    let Some(source) = source else {
        return Ok(BTreeMap::from([
            (CONFIG_SOURCE_LABEL, CONFIG_SOURCE_LOCAL.to_string()),
            (CONFIG_UID_LABEL, String::new()),
            (CONFIG_RESOURCE_VERSION_LABEL, String::new()),
            (KUBELET_CONFIG_KEY_LABEL, String::new()),
        ]));
    };

    let Some(cm) = &source.config_map else {
        return Err(PredicateError::UnrecognizedConfigSource);
    };

    Ok(BTreeMap::from([
        (
            CONFIG_SOURCE_LABEL,
            format!("/api/v1/namespaces/{}/configmaps/{}", cm.namespace, cm.name),
        ),
        (CONFIG_UID_LABEL, cm.uid.clone()),
        (CONFIG_RESOURCE_VERSION_LABEL, cm.resource_version.clone()),
        (KUBELET_CONFIG_KEY_LABEL, cm.kubelet_config_key.clone()),
    ]))
}
