use std::fmt;

use serde::Serialize;

/// Opaque handle (URL or path) a renderer uses to fetch an image
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResourceHandle(String);

impl ResourceHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceHandle {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ResourceHandle {
    fn from(s: String) -> Self {
        Self(s)
    }
}
