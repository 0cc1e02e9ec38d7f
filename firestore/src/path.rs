//! Resource paths: the ordered sequence of string segments that identify a
//! document (even length) or a collection (odd length).

use std::fmt;

/// An immutable, ordered sequence of path segments. The root path (empty) has
/// length zero; appending a segment always yields a new `Path`, never mutates
/// one in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    pub fn root() -> Path {
        Path { segments: Vec::new() }
    }

    /// Splits `"a/b/c"` on `/`, discarding empty segments from a leading or
    /// trailing slash.
    pub fn parse(resource_name: &str) -> Path {
        Path {
            segments: resource_name.split('/').filter(|s| !s.is_empty()).map(str::to_owned).collect(),
        }
    }

    pub fn child(&self, segment: impl Into<String>) -> Path {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Path { segments }
    }

    pub fn parent(&self) -> Option<Path> {
        if self.segments.is_empty() {
            return None;
        }
        let mut segments = self.segments.clone();
        segments.pop();
        Some(Path { segments })
    }

    /// The final segment: a document id if this path is a document, a
    /// collection id if this path is a collection.
    pub fn id(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_document(&self) -> bool {
        !self.segments.is_empty() && self.segments.len() % 2 == 0
    }

    pub fn is_collection(&self) -> bool {
        self.segments.len() % 2 == 1
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Path {
    /// Segment-by-segment byte-wise comparison; a shorter path that is a
    /// prefix of a longer one sorts first, matching `__name__` ordering.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.segments.cmp(&other.segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_leading_and_trailing_slashes() {
        let p = Path::parse("/projects/p/databases/(default)/documents/col/doc/");
        assert_eq!(p.segments(), &["projects", "p", "databases", "(default)", "documents", "col", "doc"]);
    }

    #[test]
    fn child_and_parent_roundtrip() {
        let root = Path::root();
        let doc = root.child("col").child("doc");
        assert!(doc.is_document());
        assert_eq!(doc.id(), Some("doc"));
        assert_eq!(doc.parent().unwrap(), root.child("col"));
    }

    #[test]
    fn prefix_sorts_before_longer_path() {
        let a = Path::root().child("col").child("a");
        let ab = a.child("sub").child("b");
        assert!(a < ab);
    }
}
