//! Request DTOs.

use serde::{Deserialize, Serialize};

/// `?path=` query parameter of the folder view endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathQuery {
    /// Directory to inspect. Missing means the root.
    #[serde(default)]
    pub path: Option<String>,
}

impl PathQuery {
    /// The requested directory, with a missing value read as the root.
    pub fn directory(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }
}
