//! The on-disk document format: one versioned JSON document per language.

use serde::{Deserialize, Serialize};

use lingo_types::ResourceTree;

/// Current document format version. Bumped when the on-disk layout changes
/// incompatibly; readers reject anything else.
pub const FORMAT_VERSION: u32 = 1;

/// One language's persisted resources.
///
/// ```json
/// { "format": 1, "language": "en", "resources": { ... } }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDocument {
    pub format: u32,
    pub language: String,
    pub resources: ResourceTree,
}

impl LanguageDocument {
    /// Wrap a tree in a current-format document.
    pub fn new(language: impl Into<String>, resources: ResourceTree) -> Self {
        Self {
            format: FORMAT_VERSION,
            language: language.into(),
            resources,
        }
    }

    /// Parse a document from JSON text.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Pretty-printed JSON with a trailing newline, ready to write out.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self).map(|mut text| {
            text.push('\n');
            text
        })
    }
}
