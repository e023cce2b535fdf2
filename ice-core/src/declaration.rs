//! Handler declarations read from element attributes.

use std::fmt;

/// A dot-separated handler path, split into segments.
///
/// Empty segments are dropped while parsing, so `"app..run"` and `"app.run"`
/// name the same handler and `""` yields an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct HandlerPath {
    segments: Vec<String>,
}

impl HandlerPath {
    /// Split a path string on `.`.
    pub fn parse(raw: &str) -> Self {
        Self {
            segments: raw
                .split('.')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Build a path from segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether the path names nothing.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for HandlerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// What an element declares for one event type.
///
/// Derived on demand for each dispatch and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerDeclaration {
    /// Handler to resolve.
    pub path: HandlerPath,
    /// Opaque arguments shared by every event on the element.
    pub args: Option<String>,
}
