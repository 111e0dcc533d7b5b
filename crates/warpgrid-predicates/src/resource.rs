//! Resource insufficiency reported by capacity filters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A target lacked enough of one resource to host the workload.
///
/// Filters build one of these per evaluation, optionally tag it with a
/// device type, and then hand it off. After that it is read-only.
///
/// Quantities are not validated against each other. Filters only build
/// this when `requested > capacity - used`, so [`insufficient_amount`]
/// can be zero or negative if a caller breaks that rule.
///
/// [`insufficient_amount`]: Self::insufficient_amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsufficientResourceError {
    resource_name: String,
    requested: i64,
    used: i64,
    capacity: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    device_type: String,
}

impl InsufficientResourceError {
    pub fn new(resource_name: impl Into<String>, requested: i64, used: i64, capacity: i64) -> Self {
        Self {
            resource_name: resource_name.into(),
            requested,
            used,
            capacity,
            device_type: String::new(),
        }
    }

    /// Tag the shortfall with a device type (e.g. an accelerator model).
    ///
    /// An empty `device_type` leaves any earlier value in place.
    #[must_use]
    pub fn with_device_type(mut self, device_type: &str) -> Self {
        if !device_type.is_empty() {
            self.device_type = device_type.to_string();
        }
        self
    }

    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    pub fn requested(&self) -> i64 {
        self.requested
    }

    pub fn used(&self) -> i64 {
        self.used
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Device type, if one was set.
    pub fn device_type(&self) -> Option<&str> {
        if self.device_type.is_empty() {
            None
        } else {
            Some(&self.device_type)
        }
    }

    /// Short reason text, e.g. `Insufficient memory`.
    pub fn reason(&self) -> String {
        format!("Insufficient {}", self.resource_name)
    }

    /// Full diagnostic line for logs.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// How much more was requested than is free. Not clamped; wraps on overflow.
    pub fn insufficient_amount(&self) -> i64 {
        self.requested.wrapping_sub(self.free_amount())
    }

    /// Unoccupied amount of the resource. Wraps on overflow.
    pub fn free_amount(&self) -> i64 {
        self.capacity.wrapping_sub(self.used)
    }
}

impl fmt::Display for InsufficientResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node didn't have enough resource: {}, requested: {}, used: {}, capacity: {}",
            self.resource_name, self.requested, self.used, self.capacity
        )
    }
}

impl std::error::Error for InsufficientResourceError {}
