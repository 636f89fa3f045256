use std::fmt;

use serde::{Deserialize, Serialize};

/// A reference to an object in a container's graph.
///
/// Objects point at each other by integer identifier rather than by direct
/// linkage. `path_id` addresses an object within one container; `file_id`
/// is a secondary scope identifier distinguishing which sub-archive the
/// reference targets when a container is composed of several (0 means the
/// local archive). A reference may be dangling: resolution returning nothing
/// is a normal outcome, not an error.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectRef {
    /// Object identifier within the target archive.
    pub path_id: i64,
    /// Archive scope identifier. 0 refers to the containing archive itself.
    #[serde(default)]
    pub file_id: i32,
}

impl ObjectRef {
    /// A reference into the local archive.
    pub const fn local(path_id: i64) -> Self {
        Self { path_id, file_id: 0 }
    }

    /// A reference scoped to another sub-archive.
    pub const fn scoped(path_id: i64, file_id: i32) -> Self {
        Self { path_id, file_id }
    }

    /// The null reference (path_id 0). Represents "no object".
    pub const fn null() -> Self {
        Self { path_id: 0, file_id: 0 }
    }

    /// Returns `true` if this is the null reference.
    pub fn is_null(&self) -> bool {
        self.path_id == 0
    }

    /// Returns `true` if this reference targets the local archive.
    pub fn is_local(&self) -> bool {
        self.file_id == 0
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef({}:{})", self.file_id, self.path_id)
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_local() {
            write!(f, "{}", self.path_id)
        } else {
            write!(f, "{}@{}", self.path_id, self.file_id)
        }
    }
}

impl From<i64> for ObjectRef {
    fn from(path_id: i64) -> Self {
        Self::local(path_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_has_zero_path_id() {
        let r = ObjectRef::null();
        assert!(r.is_null());
        assert!(r.is_local());
    }

    #[test]
    fn local_and_scoped_differ() {
        let a = ObjectRef::local(42);
        let b = ObjectRef::scoped(42, 1);
        assert_ne!(a, b);
        assert!(a.is_local());
        assert!(!b.is_local());
    }

    #[test]
    fn display_elides_local_scope() {
        assert_eq!(ObjectRef::local(7).to_string(), "7");
        assert_eq!(ObjectRef::scoped(7, 2).to_string(), "7@2");
    }

    #[test]
    fn deserializes_without_file_id() {
        let r: ObjectRef = serde_json::from_str(r#"{"path_id": -5}"#).unwrap();
        assert_eq!(r, ObjectRef::local(-5));
    }

    #[test]
    fn serde_roundtrip() {
        let r = ObjectRef::scoped(i64::MIN, 3);
        let json = serde_json::to_string(&r).unwrap();
        let back: ObjectRef = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
