//! User entity and request payloads

use serde::{Deserialize, Serialize};

/// A user record with cumulative worked hours
///
/// `id` is assigned by the store on creation and immutable thereafter.
/// `hours_worked` starts at 0 and only ever grows via the hours-update
/// operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub hours_worked: u64,
}

/// Request body for creating a user
///
/// Only `name` is accepted; client-supplied ids or hours are ignored.
/// `name` is optional at the wire level so a missing field reaches the
/// validation branch (400) instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUser {
    pub name: Option<String>,
}

/// Request body for a full update
///
/// An absent or blank `name` means "leave the stored name unchanged".
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
}

/// Request body for the partial hours update
///
/// Signed so that non-positive amounts deserialize and can be rejected
/// with a 400 rather than a deserialization failure. Defaults to 0 when
/// the field is absent, which the handler rejects.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddHours {
    #[serde(default)]
    pub hours_to_add: i64,
}

impl CreateUser {
    /// The trimmed name, or `None` if missing or blank
    pub fn trimmed_name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }
}

impl UpdateUser {
    /// The trimmed name, or `None` if missing or blank
    pub fn trimmed_name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }
}

fn non_blank(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|n| !n.is_empty())
}
