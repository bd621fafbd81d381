//! Request context carrying the authenticated owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use folderview_core::types::OwnerId;

/// Context for the current authenticated request.
///
/// Built by the API extractor and passed into service methods so that
/// every query is scoped to exactly one owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated owner.
    pub owner_id: OwnerId,
    /// The username (convenience field from JWT claims).
    pub username: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(owner_id: OwnerId, username: String) -> Self {
        Self {
            owner_id,
            username,
            request_time: Utc::now(),
        }
    }
}
