//! Record type definitions.

use serde::{Deserialize, Serialize};

/// Timestamp format used by [`AccessEvent::timestamp`], matching the default
/// Apache access-log clock format (e.g. `15/Jun/2024:12:30:45 +0000`).
///
/// Downstream parsers depend on this exact textual shape, so it must not
/// change.
pub const ACCESS_LOG_TIME_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// A synthetic user profile.
///
/// Profiles are immutable once created and are identified by `entity_id`,
/// which is never reused within a run. Every [`AccessEvent`] refers back to
/// one of these by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier and the correlation key for access events.
    pub entity_id: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
    pub secret: String,
    pub plan_tier: String,
    pub payment_token: String,
}

/// HTTP request method recorded on an [`AccessEvent`].
///
/// Serialized as the upper-case symbol (`"GET"`) in both JSON and the Avro
/// enum encoding. Event synthesis currently always emits `Get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Head,
}

/// One synthetic request attributed to a [`Profile`].
///
/// `entity_id` always references a profile known to the entity pool at the
/// moment the event was generated. `timestamp` values are non-decreasing in
/// emission order (see [`ACCESS_LOG_TIME_FORMAT`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessEvent {
    pub entity_id: String,
    pub source_addr: String,
    pub timestamp: String,
    pub method: HttpMethod,
    pub target: String,
    pub status_code: String,
    pub user_agent: String,
}
