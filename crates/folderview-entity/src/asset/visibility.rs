//! Asset visibility enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where an asset is shown to its owner.
///
/// Only `Timeline` assets take part in the folder view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "asset_visibility", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AssetVisibility {
    /// Regular timeline asset.
    Timeline,
    /// Archived by the owner.
    Archive,
    /// Hidden companion asset (e.g. the video half of a live photo).
    Hidden,
    /// Moved into the locked folder.
    Locked,
}

impl AssetVisibility {
    /// Return the visibility as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timeline => "timeline",
            Self::Archive => "archive",
            Self::Hidden => "hidden",
            Self::Locked => "locked",
        }
    }
}

impl fmt::Display for AssetVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetVisibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "timeline" => Ok(Self::Timeline),
            "archive" => Ok(Self::Archive),
            "hidden" => Ok(Self::Hidden),
            "locked" => Ok(Self::Locked),
            _ => Err(format!("Unknown asset visibility: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "Timeline".parse::<AssetVisibility>(),
            Ok(AssetVisibility::Timeline)
        );
        assert!("trash".parse::<AssetVisibility>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&AssetVisibility::Archive).expect("serialize");
        assert_eq!(json, "\"archive\"");
    }
}
