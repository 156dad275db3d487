use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An immutable, reference-counted string.
///
/// Render commands are rebuilt every frame, and most of them carry a
/// label that never changes (section headings, skill names, link hrefs).
/// Wrapping `Arc<str>` makes cloning those labels a refcount bump rather
/// than a fresh heap allocation.
#[derive(Debug, Clone, Eq)]
pub struct SharedStr(Arc<str>);

impl SharedStr {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for SharedStr {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || *self.0 == *other.0
    }
}

impl PartialEq<str> for SharedStr {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for SharedStr {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl std::ops::Deref for SharedStr {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SharedStr {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SharedStr {
    #[inline]
    fn from(s: &str) -> Self {
        SharedStr(Arc::from(s))
    }
}

impl From<String> for SharedStr {
    #[inline]
    fn from(s: String) -> Self {
        SharedStr(Arc::from(s.as_str()))
    }
}

impl From<&String> for SharedStr {
    #[inline]
    fn from(s: &String) -> Self {
        SharedStr(Arc::from(s.as_str()))
    }
}

impl std::fmt::Display for SharedStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// Serde is hand-rolled so the workspace does not need serde's `rc` feature.

impl Serialize for SharedStr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SharedStr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(SharedStr(Arc::from(s.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_is_cheap_and_equal() {
        let a = SharedStr::from("projects");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b, "projects");
    }

    #[test]
    fn compares_against_str() {
        let s = SharedStr::from("mailto:someone@example.com");
        assert!(s == "mailto:someone@example.com");
        assert!(s != "mailto:other@example.com");
    }

    #[test]
    fn from_owned_and_borrowed() {
        let owned = SharedStr::from(format!("delay {}", 0.15));
        assert_eq!(owned, "delay 0.15");
        let borrowed = SharedStr::from(&String::from("skills"));
        assert_eq!(borrowed, "skills");
    }

    #[test]
    fn serde_uses_plain_string_representation() {
        let s = SharedStr::from("journey");
        let json = serde_json::to_string(&s).unwrap_or_default();
        assert_eq!(json, "\"journey\"");
        let back: SharedStr = serde_json::from_str(&json).unwrap_or_else(|_| SharedStr::from(""));
        assert_eq!(back, "journey");
    }

    #[test]
    fn display_and_deref() {
        let s = SharedStr::from("contact");
        assert_eq!(format!("{s}"), "contact");
        assert!(!s.is_empty());
        let _: &str = &s;
    }
}
