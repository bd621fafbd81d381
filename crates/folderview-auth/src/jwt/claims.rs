//! JWT claims carried by access tokens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use folderview_core::types::OwnerId;

/// JWT claims payload embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the owner ID.
    pub sub: Uuid,
    /// Username for convenience.
    pub username: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// JWT ID.
    pub jti: Uuid,
}

impl Claims {
    /// Returns the owner the token was issued to.
    pub fn owner_id(&self) -> OwnerId {
        OwnerId::from_uuid(self.sub)
    }
}
