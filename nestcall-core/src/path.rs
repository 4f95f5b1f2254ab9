//! Namespace paths and the request types built from them.
//!
//! - [`NamespacePath`] - A validated, dot-delimited registration path
//! - [`Scope`] - What a run is asked to execute
//! - [`Excludes`] - Scope paths a record refuses to run under

use crate::error::RegistrationError;
use std::{collections::BTreeSet, fmt};

/// Separator between namespace segments.
pub const SEPARATOR: char = '.';

/// A dot-delimited namespace path split into non-empty segments.
///
/// ```
/// use nestcall_core::NamespacePath;
///
/// let path = NamespacePath::parse("foo.bar").unwrap();
/// assert_eq!(path.segments().collect::<Vec<_>>(), ["foo", "bar"]);
/// assert!(NamespacePath::parse("foo..bar").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespacePath {
    raw: String,
    segments: Vec<String>,
}

impl NamespacePath {
    /// Split `path` on `.`, rejecting empty segments.
    pub fn parse(path: &str) -> Result<Self, RegistrationError> {
        let segments: Vec<String> = path.split(SEPARATOR).map(str::to_owned).collect();
        if segments.iter().any(String::is_empty) {
            return Err(RegistrationError::EmptySegment {
                path: path.to_owned(),
            });
        }
        Ok(Self {
            raw: path.to_owned(),
            segments,
        })
    }

    /// Fail if any segment equals the reserved `entry_key`.
    pub fn check_reserved(&self, entry_key: &str) -> Result<(), RegistrationError> {
        if self.segments.iter().any(|s| s == entry_key) {
            return Err(RegistrationError::ReservedKey {
                path: self.raw.clone(),
                key: entry_key.to_owned(),
            });
        }
        Ok(())
    }

    /// The path as originally written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Iterate over the segments, root first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for NamespacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// The scope a run executes.
///
/// Build one from `()` or `None` for a global-only run, or from one or several
/// path strings. Duplicate paths collapse onto their first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Scope {
    /// Global actions only.
    #[default]
    Global,
    /// Global actions plus the listed namespaces (each with its descendants).
    Paths(Vec<String>),
}

impl Scope {
    /// Build a scope from a list of paths. An empty list yields [`Scope::Global`].
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for path in paths {
            let path = path.into();
            if !unique.contains(&path) {
                unique.push(path);
            }
        }
        if unique.is_empty() {
            Scope::Global
        } else {
            Scope::Paths(unique)
        }
    }

    /// The requested paths, in request order. Empty for a global-only run.
    pub fn paths(&self) -> &[String] {
        match self {
            Scope::Global => &[],
            Scope::Paths(paths) => paths,
        }
    }

    /// Whether this scope requests no namespaces.
    pub fn is_global(&self) -> bool {
        self.paths().is_empty()
    }
}

impl From<()> for Scope {
    fn from((): ()) -> Self {
        Scope::Global
    }
}

impl From<&str> for Scope {
    fn from(path: &str) -> Self {
        Scope::from_paths([path])
    }
}

impl From<String> for Scope {
    fn from(path: String) -> Self {
        Scope::from_paths([path])
    }
}

impl From<&String> for Scope {
    fn from(path: &String) -> Self {
        Scope::from_paths([path.as_str()])
    }
}

impl<S: Into<String>> From<Option<S>> for Scope {
    fn from(path: Option<S>) -> Self {
        Scope::from_paths(path)
    }
}

impl<S: Into<String>> From<Vec<S>> for Scope {
    fn from(paths: Vec<S>) -> Self {
        Scope::from_paths(paths)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Scope {
    fn from(paths: [S; N]) -> Self {
        Scope::from_paths(paths)
    }
}

impl<S: AsRef<str>> From<&[S]> for Scope {
    fn from(paths: &[S]) -> Self {
        Scope::from_paths(paths.iter().map(|p| p.as_ref().to_owned()))
    }
}

/// Scope paths under which a record must not run.
///
/// Accepts a bare string or any list of strings; duplicates collapse.
///
/// Matching is exact string equality against the requested scope paths:
/// excluding `"foo"` does not suppress a run of `"foo.bar"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Excludes(BTreeSet<String>);

impl Excludes {
    /// No exclusions.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether any of `requested` is excluded.
    pub fn matches_any<'a, I>(&self, requested: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        !self.0.is_empty() && requested.into_iter().any(|path| self.0.contains(path))
    }

    /// Whether `path` is excluded.
    pub fn contains(&self, path: &str) -> bool {
        self.0.contains(path)
    }

    /// Iterate over the excluded paths in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of excluded paths.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Excludes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for Excludes {
    fn from(path: &str) -> Self {
        [path].into_iter().collect()
    }
}

impl From<String> for Excludes {
    fn from(path: String) -> Self {
        [path].into_iter().collect()
    }
}

impl<S: Into<String>> From<Vec<S>> for Excludes {
    fn from(paths: Vec<S>) -> Self {
        paths.into_iter().collect()
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Excludes {
    fn from(paths: [S; N]) -> Self {
        paths.into_iter().collect()
    }
}

impl<S: AsRef<str>> From<&[S]> for Excludes {
    fn from(paths: &[S]) -> Self {
        paths.iter().map(|p| p.as_ref().to_owned()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_path() {
        let path = NamespacePath::parse("foo.bar.baz").unwrap();
        assert_eq!(path.depth(), 3);
        assert_eq!(path.as_str(), "foo.bar.baz");
        assert_eq!(path.segments().last(), Some("baz"));
    }

    #[test]
    fn test_parse_rejects_empty_segments() {
        for bad in ["", ".", "foo.", ".foo", "foo..bar"] {
            assert_eq!(
                NamespacePath::parse(bad),
                Err(RegistrationError::EmptySegment {
                    path: bad.to_string()
                }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_reserved_segment_anywhere() {
        let path = NamespacePath::parse("foo.__entry.bar").unwrap();
        assert!(matches!(
            path.check_reserved("__entry"),
            Err(RegistrationError::ReservedKey { .. })
        ));
        assert!(path.check_reserved("__other").is_ok());
    }

    #[test]
    fn test_scope_conversions() {
        assert!(Scope::from(()).is_global());
        assert!(Scope::from(None::<&str>).is_global());
        assert!(Scope::from(Vec::<String>::new()).is_global());
        assert_eq!(Scope::from("foo").paths(), ["foo"]);
        assert_eq!(Scope::from(["foo", "bar"]).paths(), ["foo", "bar"]);
        assert_eq!(Scope::from(&["a", "b"][..]).paths(), ["a", "b"]);
    }

    #[test]
    fn test_scope_collapses_duplicates_in_order() {
        let scope = Scope::from(vec!["bar", "foo", "bar"]);
        assert_eq!(scope.paths(), ["bar", "foo"]);
    }

    #[test]
    fn test_excludes_from_string_or_list() {
        let single = Excludes::from("foo");
        let list = Excludes::from(vec!["foo", "foo"]);
        assert_eq!(single, list);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_excludes_exact_match_only() {
        let excludes = Excludes::from(["foo.bar"]);
        assert!(excludes.matches_any(["baz", "foo.bar"]));
        assert!(!excludes.matches_any(["foo"]));
        assert!(!excludes.matches_any(["foo.bar.baz"]));
        assert!(!Excludes::none().matches_any(["foo"]));
    }
}
