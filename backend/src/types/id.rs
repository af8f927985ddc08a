//! Typed ID wrapper for leave records.
//!
//! New ids are UUID v4 strings. Any non-empty string is accepted when reading
//! so records written by other clients of the same storage key (for example
//! `leave-1`) still load.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a leave record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LeaveId(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyLeaveId;

impl fmt::Display for EmptyLeaveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "leave id must not be empty")
    }
}

impl std::error::Error for EmptyLeaveId {}

impl LeaveId {
    /// Creates a new random ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates an ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id as a UUID, when it is one.
    pub fn as_uuid(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.0).ok()
    }
}

impl Default for LeaveId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LeaveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LeaveId {
    type Err = EmptyLeaveId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EmptyLeaveId);
        }
        Ok(Self(s.to_string()))
    }
}

impl From<Uuid> for LeaveId {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl From<LeaveId> for String {
    fn from(id: LeaveId) -> Self {
        id.0
    }
}

impl Serialize for LeaveId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LeaveId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
