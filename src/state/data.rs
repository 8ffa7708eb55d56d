/// Shared data structures for the gallery state
///
/// These types flow between the catalog, the state stores and the UI layer.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Opaque identifier of one gallery item
///
/// The identifier is the image reference itself (a path or URL string), so it
/// doubles as the item's key: two items with the same reference are the same item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(String);

impl PhotoId {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The raw image reference
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short display name (last path segment), used by placeholders
    pub fn file_name(&self) -> &str {
        Path::new(&self.0)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PhotoId {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}
