/// API route handlers
///
/// One module per resource:
///
/// - `health`: health check
/// - `auth`: registration and login
/// - `boards`: board CRUD and membership
/// - `columns`: column create/rename/delete
/// - `tasks`: task lifecycle and moves
/// - `notifications`: notification listing and read-state changes

pub mod auth;
pub mod boards;
pub mod columns;
pub mod health;
pub mod notifications;
pub mod tasks;

use serde::{Deserialize, Deserializer, Serialize};

/// Body returned by delete-style endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        SuccessResponse { success: true }
    }
}

/// Deserializes a field that distinguishes "absent" from "explicitly null"
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`: a
/// missing key stays `None`, `null` becomes `Some(None)`, and a value
/// becomes `Some(Some(value))`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "double_option")]
        value: Option<Option<i64>>,
    }

    #[test]
    fn test_double_option_distinguishes_absent_from_null() {
        let absent: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.value, None);

        let null: Probe = serde_json::from_str(r#"{"value":null}"#).unwrap();
        assert_eq!(null.value, Some(None));

        let set: Probe = serde_json::from_str(r#"{"value":7}"#).unwrap();
        assert_eq!(set.value, Some(Some(7)));
    }
}
