use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque reference token identifying exactly one entity in a project graph.
///
/// Tokens are globally unique across every entity kind: two entities must
/// never share a token, regardless of kind. Relationships between entities
/// are expressed purely as `ObjectRef` values, never as native pointers.
///
/// Tokens allocated by pbx are 24 uppercase hex digits, but documents parsed
/// from disk may carry arbitrary strings, so no format is enforced here.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectRef(String);

impl ObjectRef {
    /// Create a reference token from a string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short representation (first 8 characters) for logs and diagnostics.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef({})", self.0)
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ObjectRef {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for ObjectRef {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<ObjectRef> for String {
    fn from(reference: ObjectRef) -> Self {
        reference.0
    }
}
