//! Opaque catalog identifiers.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Identifier of a playlist. Always non-empty and drawn from `[A-Za-z0-9_-]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct PlaylistId(String);

impl PlaylistId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() || !id.bytes().all(is_id_byte) {
            return Err(Error::InvalidUrl(format!("not a playlist id: {id:?}")));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlaylistId {
    type Error = Error;

    fn try_from(id: String) -> Result<Self> {
        Self::new(id)
    }
}

impl From<PlaylistId> for String {
    fn from(id: PlaylistId) -> Self {
        id.0
    }
}

impl std::fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a single video in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub(crate) const fn is_id_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_id_validation() {
        assert_eq!(
            PlaylistId::new("PLrAXtmErZgOeiKm4sgNOknGvNjby9efdf")
                .unwrap()
                .as_str(),
            "PLrAXtmErZgOeiKm4sgNOknGvNjby9efdf"
        );
        assert!(PlaylistId::new("").is_err());
        assert!(PlaylistId::new("PL abc").is_err());
        assert!(PlaylistId::new("PL&index=2").is_err());
    }

    #[test]
    fn test_playlist_id_serde() {
        let id: PlaylistId = serde_json::from_str("\"PL_x-1\"").unwrap();
        assert_eq!(id.to_string(), "PL_x-1");
        assert!(serde_json::from_str::<PlaylistId>("\"PL?x\"").is_err());
    }
}
