// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use crate::PathError;

/// The name-element separator.
pub const SEPARATOR: char = '/';

const ROOT: &str = "/";
const CURRENT_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// A slash-separated hierarchical path owned by a file system of type `F`.
///
/// `SlashPath` implements the string algebra of a POSIX-style path without ever touching
/// storage: parsing into name elements, parent/root/subpath extraction, prefix and suffix
/// tests, `.`/`..` collapsing, resolution, relativization and ordering. File-system providers
/// build their own path type on top of it and plug the resulting strings into their I/O layer.
///
/// # Ownership
///
/// Every path holds an [`Arc`] to the file system that created it. The type parameter is the
/// concrete path kind, so paths of different providers cannot be mixed at compile time, while
/// two file-system *instances* of the same provider are told apart at run time by pointer
/// identity. Operations that combine two paths reject paths from a different instance.
///
/// # Representation
///
/// The raw string is always free of repeated separators and of a trailing separator (except
/// for the root, `/`), and never contains NUL. A path is absolute if and only if it starts
/// with a separator. The root has zero name elements; the empty path has exactly one, empty,
/// name element.
///
/// The start offsets of the name elements and the fully normalized form are computed lazily,
/// at most once per instance, and shared by all threads afterwards.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use slashpath::SlashPath;
///
/// struct MemoryFs;
///
/// let fs = Arc::new(MemoryFs);
/// let path = SlashPath::new(Arc::clone(&fs), "//var/./log/../lib/")?;
///
/// assert_eq!(path.as_str(), "/var/./log/../lib");
/// assert_eq!(path.name_count(), 4);
/// assert_eq!(path.normalize().as_str(), "/var/lib");
///
/// let base = SlashPath::new(fs, "/var")?;
/// assert_eq!(base.relativize(&path.normalize())?.as_str(), "lib");
/// # Ok::<_, slashpath::PathError>(())
/// ```
pub struct SlashPath<F: ?Sized> {
    fs: Arc<F>,
    raw: String,
    offsets: OnceLock<Box<[usize]>>,
    normalized: OnceLock<String>,
}

impl<F: ?Sized> SlashPath<F> {
    /// Creates a path owned by `fs` from a raw string.
    ///
    /// Runs of separators are collapsed into one and a trailing separator is dropped, unless
    /// the whole path is the root.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidPath`] if `raw` contains a NUL character. No other input is
    /// rejected.
    pub fn new(fs: Arc<F>, raw: impl Into<String>) -> Result<Self, PathError> {
        let raw = remove_redundant_separators(raw.into())?;
        Ok(Self::from_normalized(fs, raw))
    }

    /// Creates a path owned by `fs` from a string that is already free of repeated and
    /// trailing separators and of NUL characters.
    ///
    /// The string is stored as-is. Passing a string that violates these conditions does not
    /// cause undefined behavior but makes the name-element queries return unspecified results.
    pub fn from_normalized(fs: Arc<F>, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        debug_assert!(!raw.contains('\0'), "normalized path must not contain NUL");

        Self {
            fs,
            raw,
            offsets: OnceLock::new(),
            normalized: OnceLock::new(),
        }
    }

    /// Returns the file system that owns this path.
    pub fn file_system(&self) -> &Arc<F> {
        &self.fs
    }

    /// Returns the raw path string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns `true` if the path starts with a separator.
    pub fn is_absolute(&self) -> bool {
        self.raw.starts_with(SEPARATOR)
    }

    /// Returns `true` for the empty path.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns `true` if this path is the root, `/`.
    pub fn is_root(&self) -> bool {
        self.raw == ROOT
    }

    /// Returns the root component as a string, `Some("/")` for absolute paths.
    pub fn root_str(&self) -> Option<&'static str> {
        self.is_absolute().then_some(ROOT)
    }

    /// Returns the root of an absolute path, `None` for a relative one.
    #[must_use]
    pub fn root(&self) -> Option<Self> {
        self.root_str().map(|root| self.sibling(root.to_owned()))
    }

    /// Returns the number of name elements.
    ///
    /// The root has none, the empty path has one.
    pub fn name_count(&self) -> usize {
        self.offsets().len()
    }

    /// Returns the name element at `index` as a string slice.
    pub fn name_str(&self, index: usize) -> Option<&str> {
        (index < self.name_count()).then(|| self.element(index))
    }

    /// Returns the name element at `index` as a relative path.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Index`] if `index` is not below [`name_count`](Self::name_count).
    pub fn name(&self, index: usize) -> Result<Self, PathError> {
        self.name_str(index)
            .map(|name| self.sibling(name.to_owned()))
            .ok_or_else(|| PathError::Index {
                begin: index,
                end: index.saturating_add(1),
                count: self.name_count(),
            })
    }

    /// Iterates over the name elements as string slices.
    pub fn names(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        (0..self.name_count()).map(|index| self.element(index))
    }

    /// Iterates over the name elements as relative paths.
    pub fn iter(&self) -> impl Iterator<Item = Self> + '_ {
        self.names().map(|name| self.sibling(name.to_owned()))
    }

    /// Returns the last name element, `None` for the root.
    #[must_use]
    pub fn file_name(&self) -> Option<Self> {
        let count = self.name_count();
        if count == 0 {
            return None;
        }

        if count == 1 && !self.is_absolute() {
            return Some(self.clone());
        }

        Some(self.sibling(self.element(count - 1).to_owned()))
    }

    /// Returns the parent path.
    ///
    /// A path with no name elements has no parent. A path with a single name element has the
    /// root as its parent when absolute and no parent when relative.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        match self.name_count() {
            0 => None,
            1 => self.root(),
            count => {
                let end = self.offsets()[count - 1] - 1;
                Some(self.sibling(self.raw[..end].to_owned()))
            }
        }
    }

    /// Returns the relative path made of the name elements `begin..end`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Index`] unless `begin < end <= name_count()`.
    pub fn subpath(&self, begin: usize, end: usize) -> Result<Self, PathError> {
        let count = self.name_count();
        if begin >= count || end <= begin || end > count {
            return Err(PathError::Index { begin, end, count });
        }

        let start = self.offsets()[begin];
        let stop = self.element_end(end - 1);
        Ok(self.sibling(self.raw[start..stop].to_owned()))
    }

    /// Returns `true` if this path starts with `other`, element-wise.
    ///
    /// `/foo` starts with `/` and with `/foo` but not with `/fo`, and only the empty path
    /// starts with the empty path. Paths owned by a different file-system instance never match.
    pub fn starts_with(&self, other: &Self) -> bool {
        self.same_file_system(other) && raw_starts_with(&self.raw, &other.raw)
    }

    /// Like [`starts_with`](Self::starts_with), for a path string on the same file system.
    ///
    /// Returns `false` if `other` is not a valid path.
    pub fn starts_with_str(&self, other: &str) -> bool {
        remove_redundant_separators(other.to_owned()).is_ok_and(|other| raw_starts_with(&self.raw, &other))
    }

    /// Returns `true` if this path ends with `other`, element-wise.
    ///
    /// An absolute `other` only matches an identical path, and only the empty path ends with
    /// the empty path. Paths owned by a different file-system instance never match.
    pub fn ends_with(&self, other: &Self) -> bool {
        self.same_file_system(other) && raw_ends_with(&self.raw, &other.raw)
    }

    /// Like [`ends_with`](Self::ends_with), for a path string on the same file system.
    ///
    /// Returns `false` if `other` is not a valid path.
    pub fn ends_with_str(&self, other: &str) -> bool {
        remove_redundant_separators(other.to_owned()).is_ok_and(|other| raw_ends_with(&self.raw, &other))
    }

    /// Returns the path string with `.` elements removed and `..` elements collapsed.
    ///
    /// A `..` removes the preceding regular element. Leading `..` elements of an absolute path
    /// are dropped since they cannot climb above the root, while those of a relative path are
    /// kept: `foo/../..` normalizes to `..`.
    ///
    /// The result is computed once per instance.
    pub fn normalized_str(&self) -> &str {
        self.normalized.get_or_init(|| self.collapse_dot_elements())
    }

    /// Returns this path with `.` and `..` elements collapsed.
    ///
    /// See [`normalized_str`](Self::normalized_str) for the rules.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let normalized = self.normalized_str();
        if normalized == self.raw {
            return self.clone();
        }

        self.sibling(normalized.to_owned())
    }

    /// Resolves `other` against this path.
    ///
    /// An absolute `other` is returned unchanged, as is any `other` when this path is empty.
    /// An empty `other` yields this path. Otherwise the two are joined with one separator.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::FileSystemMismatch`] if `other` is owned by a different
    /// file-system instance.
    pub fn resolve(&self, other: &Self) -> Result<Self, PathError> {
        self.check_file_system(other)?;

        if other.is_absolute() || self.raw.is_empty() {
            return Ok(other.clone());
        }

        if other.raw.is_empty() {
            return Ok(self.clone());
        }

        Ok(self.sibling(join(&self.raw, &other.raw)))
    }

    /// Parses `other` on this path's file system and resolves it against this path.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidPath`] if `other` contains a NUL character.
    pub fn resolve_str(&self, other: &str) -> Result<Self, PathError> {
        let other = Self::new(Arc::clone(&self.fs), other)?;
        self.resolve(&other)
    }

    /// Resolves `other` against this path's parent, or returns `other` if there is no parent.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::FileSystemMismatch`] if `other` is owned by a different
    /// file-system instance.
    pub fn resolve_sibling(&self, other: &Self) -> Result<Self, PathError> {
        self.check_file_system(other)?;

        match self.parent() {
            Some(parent) => parent.resolve(other),
            None => Ok(other.clone()),
        }
    }

    /// Constructs a relative path that leads from this path to `other`.
    ///
    /// The common leading name elements are skipped, one `..` is emitted for every remaining
    /// element of this path, and the rest of `other` is appended. Relativizing to an ancestor
    /// yields only `..` elements, without a trailing separator. Equal paths yield the empty
    /// path.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::RelativizeMismatch`] if exactly one of the two paths is absolute,
    /// and [`PathError::FileSystemMismatch`] if `other` is owned by a different file-system
    /// instance.
    pub fn relativize(&self, other: &Self) -> Result<Self, PathError> {
        self.check_file_system(other)?;

        if self.is_absolute() != other.is_absolute() {
            return Err(PathError::RelativizeMismatch {
                this: self.raw.clone(),
                other: other.raw.clone(),
            });
        }

        if self.raw == other.raw {
            return Ok(self.sibling(String::new()));
        }

        if self.raw.is_empty() {
            return Ok(other.clone());
        }

        let this_count = self.name_count();
        let other_count = if other.raw.is_empty() { 0 } else { other.name_count() };
        let common = self
            .names()
            .zip(other.names().take(other_count))
            .take_while(|(this, other)| this == other)
            .count();

        let mut relative = String::new();
        for _ in common..this_count {
            if !relative.is_empty() {
                relative.push(SEPARATOR);
            }
            relative.push_str(PARENT_DIR);
        }

        if common < other_count {
            if !relative.is_empty() {
                relative.push(SEPARATOR);
            }
            relative.push_str(&other.raw[other.offsets()[common]..]);
        }

        Ok(self.sibling(relative))
    }

    /// Compares the raw path strings lexicographically.
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }

    fn sibling(&self, raw: String) -> Self {
        Self::from_normalized(Arc::clone(&self.fs), raw)
    }

    fn same_file_system(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.fs, &other.fs)
    }

    fn check_file_system(&self, other: &Self) -> Result<(), PathError> {
        if self.same_file_system(other) {
            Ok(())
        } else {
            Err(PathError::FileSystemMismatch)
        }
    }

    fn offsets(&self) -> &[usize] {
        self.offsets.get_or_init(|| name_offsets(&self.raw))
    }

    fn element(&self, index: usize) -> &str {
        &self.raw[self.offsets()[index]..self.element_end(index)]
    }

    fn element_end(&self, index: usize) -> usize {
        self.offsets().get(index + 1).map_or(self.raw.len(), |next| next - 1)
    }

    fn collapse_dot_elements(&self) -> String {
        let absolute = self.is_absolute();
        let mut kept: Vec<&str> = Vec::with_capacity(self.name_count());
        // Number of elements at the tail of `kept` that a `..` may still remove.
        let mut removable = 0_usize;

        for name in self.names() {
            match name {
                CURRENT_DIR => {}
                PARENT_DIR => {
                    if removable > 0 {
                        let _ = kept.pop();
                        removable -= 1;
                    } else if !absolute {
                        kept.push(PARENT_DIR);
                    }
                }
                _ => {
                    kept.push(name);
                    removable += 1;
                }
            }
        }

        let joined = kept.join(ROOT);
        if absolute { format!("{ROOT}{joined}") } else { joined }
    }
}

impl<F: ?Sized> Clone for SlashPath<F> {
    fn clone(&self) -> Self {
        Self {
            fs: Arc::clone(&self.fs),
            raw: self.raw.clone(),
            offsets: self.offsets.clone(),
            normalized: self.normalized.clone(),
        }
    }
}

impl<F: ?Sized> PartialEq for SlashPath<F> {
    fn eq(&self, other: &Self) -> bool {
        self.same_file_system(other) && self.raw == other.raw
    }
}

impl<F: ?Sized> Eq for SlashPath<F> {}

impl<F: ?Sized> Hash for SlashPath<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<F: ?Sized> PartialOrd for SlashPath<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders by raw string first; paths with equal strings on different file-system instances
/// are ordered by instance address so the ordering stays consistent with equality.
impl<F: ?Sized> Ord for SlashPath<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other).then_with(|| {
            let this = Arc::as_ptr(&self.fs).cast::<()>().addr();
            let other = Arc::as_ptr(&other.fs).cast::<()>().addr();
            this.cmp(&other)
        })
    }
}

impl<F: ?Sized> fmt::Debug for SlashPath<F> {
    #[cfg_attr(test, mutants::skip)] // Diagnostic output only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SlashPath").field(&self.raw).finish()
    }
}

impl<F: ?Sized> fmt::Display for SlashPath<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<F: ?Sized> AsRef<str> for SlashPath<F> {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

fn remove_redundant_separators(raw: String) -> Result<String, PathError> {
    if raw.contains('\0') {
        return Err(PathError::InvalidPath { path: raw });
    }

    let has_trailing = raw.len() > 1 && raw.ends_with(SEPARATOR);
    if !has_trailing && !raw.contains("//") {
        return Ok(raw);
    }

    let mut collapsed = String::with_capacity(raw.len());
    let mut previous_was_separator = false;
    for c in raw.chars() {
        let is_separator = c == SEPARATOR;
        if !(is_separator && previous_was_separator) {
            collapsed.push(c);
        }
        previous_was_separator = is_separator;
    }

    if collapsed.len() > 1 && collapsed.ends_with(SEPARATOR) {
        let _ = collapsed.pop();
    }

    Ok(collapsed)
}

fn name_offsets(raw: &str) -> Box<[usize]> {
    if raw.is_empty() {
        return Box::new([0]);
    }

    let start = usize::from(raw.starts_with(SEPARATOR));
    if start == raw.len() {
        return Box::default();
    }

    std::iter::once(start)
        .chain(raw.match_indices(SEPARATOR).map(|(index, _)| index + 1).filter(|&offset| offset > start))
        .collect()
}

fn raw_starts_with(this: &str, prefix: &str) -> bool {
    if prefix.is_empty() {
        return this.is_empty();
    }

    if prefix == ROOT {
        return this.starts_with(SEPARATOR);
    }

    this.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(SEPARATOR))
}

fn raw_ends_with(this: &str, suffix: &str) -> bool {
    if suffix.is_empty() {
        return this.is_empty();
    }

    if suffix.starts_with(SEPARATOR) {
        return this == suffix;
    }

    this.strip_suffix(suffix)
        .is_some_and(|rest| rest.is_empty() || rest.ends_with(SEPARATOR))
}

fn join(base: &str, child: &str) -> String {
    let mut joined = String::with_capacity(base.len() + 1 + child.len());
    joined.push_str(base);
    if !base.ends_with(SEPARATOR) {
        joined.push(SEPARATOR);
    }
    joined.push_str(child);
    joined
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::LazyLock;

    use rstest::rstest;

    use super::*;

    #[derive(Debug)]
    struct TestFs;

    static FS: LazyLock<Arc<TestFs>> = LazyLock::new(|| Arc::new(TestFs));

    fn path(raw: &str) -> SlashPath<TestFs> {
        SlashPath::new(Arc::clone(&FS), raw).unwrap()
    }

    #[test]
    fn assert_types() {
        static_assertions::assert_impl_all!(SlashPath<TestFs>: Send, Sync, Clone);
        static_assertions::assert_impl_all!(SlashPath<dyn std::any::Any + Send + Sync>: Send, Sync, Clone);
    }

    #[rstest]
    #[case("//foo/bar/", "/foo/bar")]
    #[case("/", "/")]
    #[case("//", "/")]
    #[case("///", "/")]
    #[case("", "")]
    #[case("foo//bar", "foo/bar")]
    #[case("foo/", "foo")]
    #[case("a///b//c///", "a/b/c")]
    #[case("/already/clean", "/already/clean")]
    fn construction_removes_redundant_separators(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(path(input).as_str(), expected);
    }

    #[test]
    fn construction_rejects_nul() {
        let error = SlashPath::new(Arc::clone(&FS), "/foo\0bar").unwrap_err();
        assert_eq!(
            error,
            PathError::InvalidPath {
                path: "/foo\0bar".to_owned()
            }
        );
    }

    #[test]
    fn construction_accepts_unusual_characters() {
        let p = path("/ünïcödé/with space/*?[]{}");
        assert_eq!(p.name_count(), 3);
        assert_eq!(p.name_str(2), Some("*?[]{}"));
    }

    #[rstest]
    #[case("/foo/bar")]
    #[case("foo")]
    #[case("")]
    #[case("/")]
    #[case("a/b/../c/.")]
    fn from_normalized_round_trips(#[case] raw: &str) {
        let p = SlashPath::from_normalized(Arc::clone(&FS), raw);
        assert_eq!(p.as_str(), raw);
        assert_eq!(p, path(raw));
    }

    #[rstest]
    #[case("/", 0)]
    #[case("", 1)]
    #[case("foo", 1)]
    #[case("/foo", 1)]
    #[case("/foo/bar/baz", 3)]
    #[case("foo/bar", 2)]
    fn name_count(#[case] raw: &str, #[case] expected: usize) {
        assert_eq!(path(raw).name_count(), expected);
    }

    #[test]
    fn names_and_elements() {
        let p = path("/usr/local/bin");
        assert_eq!(p.names().collect::<Vec<_>>(), ["usr", "local", "bin"]);
        assert_eq!(p.name(1).unwrap().as_str(), "local");
        assert_eq!(p.name_str(3), None);

        let elements: Vec<_> = p.iter().map(|e| e.to_string()).collect();
        assert_eq!(elements, ["usr", "local", "bin"]);
        assert!(p.iter().all(|e| !e.is_absolute()));
    }

    #[rstest]
    #[case(3, 4)]
    #[case(usize::MAX, usize::MAX)]
    fn name_out_of_range(#[case] index: usize, #[case] end: usize) {
        assert_eq!(
            path("/usr/local/bin").name(index).unwrap_err(),
            PathError::Index {
                begin: index,
                end,
                count: 3
            }
        );
    }

    #[test]
    fn empty_path_has_one_empty_name() {
        let p = path("");
        assert_eq!(p.names().collect::<Vec<_>>(), [""]);
        assert_eq!(p.file_name().unwrap().as_str(), "");
        assert!(p.parent().is_none());
        assert!(p.root().is_none());
    }

    #[rstest]
    #[case("/", true, Some("/"))]
    #[case("/a", true, Some("/"))]
    #[case("a", false, None)]
    #[case("", false, None)]
    fn absoluteness_and_root(#[case] raw: &str, #[case] absolute: bool, #[case] root: Option<&str>) {
        let p = path(raw);
        assert_eq!(p.is_absolute(), absolute);
        assert_eq!(p.root_str(), root);
        assert_eq!(p.root().map(|r| r.to_string()).as_deref(), root);
    }

    #[rstest]
    #[case("/", None)]
    #[case("/foo", Some("/"))]
    #[case("foo", None)]
    #[case("/foo/bar", Some("/foo"))]
    #[case("foo/bar/baz", Some("foo/bar"))]
    fn parent(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(path(raw).parent().map(|p| p.to_string()).as_deref(), expected);
    }

    #[rstest]
    #[case("/", None)]
    #[case("/foo", Some("foo"))]
    #[case("foo", Some("foo"))]
    #[case("/foo/bar.txt", Some("bar.txt"))]
    fn file_name(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(path(raw).file_name().map(|p| p.to_string()).as_deref(), expected);
    }

    #[rstest]
    #[case("/a/b/c/d", 0, 4, "a/b/c/d")]
    #[case("/a/b/c/d", 1, 3, "b/c")]
    #[case("/a/b/c/d", 3, 4, "d")]
    #[case("a/b", 0, 1, "a")]
    fn subpath(#[case] raw: &str, #[case] begin: usize, #[case] end: usize, #[case] expected: &str) {
        let sub = path(raw).subpath(begin, end).unwrap();
        assert_eq!(sub.as_str(), expected);
        assert!(!sub.is_absolute());
    }

    #[rstest]
    #[case("/a/b", 2, 3)]
    #[case("/a/b", 1, 1)]
    #[case("/a/b", 1, 0)]
    #[case("/a/b", 0, 3)]
    #[case("/", 0, 1)]
    fn subpath_out_of_range(#[case] raw: &str, #[case] begin: usize, #[case] end: usize) {
        let error = path(raw).subpath(begin, end).unwrap_err();
        assert!(matches!(error, PathError::Index { .. }), "{error:?}");
    }

    #[rstest]
    #[case("/foo", "/", true)]
    #[case("/foo", "", false)]
    #[case("", "", true)]
    #[case("foo", "/", false)]
    #[case("/foo/bar", "/foo", true)]
    #[case("/foobar", "/foo", false)]
    #[case("/foo", "/foo", true)]
    #[case("foo/bar", "foo", true)]
    #[case("/foo", "foo", false)]
    #[case("foo", "/foo", false)]
    fn starts_with(#[case] this: &str, #[case] other: &str, #[case] expected: bool) {
        assert_eq!(path(this).starts_with(&path(other)), expected);
        assert_eq!(path(this).starts_with_str(other), expected);
    }

    #[rstest]
    #[case("/foo/bar", "bar", true)]
    #[case("/foo/bar", "foo/bar", true)]
    #[case("/foo/bar", "/foo/bar", true)]
    #[case("/foo/bar", "/bar", false)]
    #[case("/foo/bar", "oo/bar", false)]
    #[case("/foo/bar", "", false)]
    #[case("", "", true)]
    #[case("/", "/", true)]
    #[case("foo", "foo", true)]
    fn ends_with(#[case] this: &str, #[case] other: &str, #[case] expected: bool) {
        assert_eq!(path(this).ends_with(&path(other)), expected);
        assert_eq!(path(this).ends_with_str(other), expected);
    }

    #[test]
    fn string_comparisons_reject_invalid_paths() {
        assert!(!path("/foo").starts_with_str("/fo\0o"));
        assert!(!path("/foo").ends_with_str("fo\0o"));
    }

    #[test]
    fn string_comparisons_normalize_their_argument() {
        assert!(path("/foo/bar").starts_with_str("//foo/"));
        assert!(path("/foo/bar").ends_with_str("bar/"));
    }

    #[rstest]
    #[case("/foo/./bar/../baz", "/foo/baz")]
    #[case("foo/../..", "..")]
    #[case("/..", "/")]
    #[case("/../../a", "/a")]
    #[case("../a/../b", "../b")]
    #[case("./a", "a")]
    #[case(".", "")]
    #[case("", "")]
    #[case("/", "/")]
    #[case("a/b/../../..", "..")]
    #[case("a/./b/./c", "a/b/c")]
    #[case("../..", "../..")]
    #[case("/a/b/c/../../d", "/a/d")]
    fn normalize(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(path(raw).normalize().as_str(), expected);
    }

    #[test]
    fn normalize_is_memoized_and_idempotent() {
        let p = path("a/../b/./c/..");
        let first = p.normalized_str();
        let second = p.normalized_str();
        assert!(std::ptr::eq(first, second));
        assert_eq!(p.normalize().normalize(), p.normalize());
    }

    #[test]
    fn normalize_returns_equal_path_when_already_normal() {
        let p = path("/a/b");
        assert_eq!(p.normalize(), p);
    }

    #[rstest]
    #[case("/a", "b", "/a/b")]
    #[case("/", "b", "/b")]
    #[case("a", "/b", "/b")]
    #[case("", "b", "b")]
    #[case("a", "", "a")]
    #[case("a/b", "c/d", "a/b/c/d")]
    fn resolve(#[case] this: &str, #[case] other: &str, #[case] expected: &str) {
        assert_eq!(path(this).resolve(&path(other)).unwrap().as_str(), expected);
        assert_eq!(path(this).resolve_str(other).unwrap().as_str(), expected);
    }

    #[rstest]
    #[case("/a/b", "c", "/a/c")]
    #[case("b", "c", "c")]
    #[case("/", "c", "c")]
    #[case("/a", "c", "/c")]
    fn resolve_sibling(#[case] this: &str, #[case] other: &str, #[case] expected: &str) {
        assert_eq!(path(this).resolve_sibling(&path(other)).unwrap().as_str(), expected);
    }

    #[rstest]
    #[case("foo/bar", "foo/baz", "../baz")]
    #[case("/a/b", "/a/b/c/d", "c/d")]
    #[case("/a/b", "/a", "..")]
    #[case("/a/b/c", "/a", "../..")]
    #[case("/a/b", "/a/b", "")]
    #[case("/", "/a/b", "a/b")]
    #[case("/a", "/", "..")]
    #[case("/a/b", "/c/d", "../../c/d")]
    #[case("a", "", "..")]
    #[case("", "a/b", "a/b")]
    #[case("/ab", "/a", "../a")]
    fn relativize(#[case] this: &str, #[case] other: &str, #[case] expected: &str) {
        assert_eq!(path(this).relativize(&path(other)).unwrap().as_str(), expected);
    }

    #[test]
    fn relativize_rejects_mixed_absoluteness() {
        let error = path("/a").relativize(&path("a")).unwrap_err();
        assert_eq!(
            error,
            PathError::RelativizeMismatch {
                this: "/a".to_owned(),
                other: "a".to_owned()
            }
        );
    }

    #[rstest]
    #[case("/a/b", "/a/c/d")]
    #[case("/a/b/c", "/a")]
    #[case("/", "/x/y")]
    #[case("a/b", "a/b/c")]
    #[case("a/b", "c")]
    #[case("a", "")]
    #[case("/a/b", "/a/b")]
    fn resolve_relativize_inverse(#[case] p: &str, #[case] q: &str) {
        let p = path(p);
        let q = path(q);
        let round_trip = p.resolve(&p.relativize(&q).unwrap()).unwrap();
        assert_eq!(round_trip.normalize(), q.normalize());
    }

    #[test]
    fn different_file_systems() {
        let other_fs = Arc::new(TestFs);
        let a = path("/a");
        let b = SlashPath::new(other_fs, "/a").unwrap();

        assert_ne!(a, b);
        assert!(!a.starts_with(&b));
        assert!(!a.ends_with(&b));
        assert_eq!(a.resolve(&b).unwrap_err(), PathError::FileSystemMismatch);
        assert_eq!(a.resolve_sibling(&b).unwrap_err(), PathError::FileSystemMismatch);
        assert_eq!(a.relativize(&b).unwrap_err(), PathError::FileSystemMismatch);
        assert_eq!(a.compare_to(&b), Ordering::Equal);
        assert_ne!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut paths = vec![path("/b"), path("a"), path("/a/b"), path("/a"), path("")];
        paths.sort();
        let sorted: Vec<_> = paths.iter().map(SlashPath::as_str).collect();
        assert_eq!(sorted, ["", "/a", "/a/b", "/b", "a"]);
    }

    #[test]
    fn equality_and_hash() {
        let set: HashSet<_> = ["/a", "//a/", "/a/", "a"].into_iter().map(path).collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&path("/a")));
        assert!(set.contains(&path("a")));
    }

    #[test]
    fn display_and_debug() {
        let p = path("/x/y");
        assert_eq!(p.to_string(), "/x/y");
        assert_eq!(format!("{p:?}"), "SlashPath(\"/x/y\")");
        assert_eq!(AsRef::<str>::as_ref(&p), "/x/y");
    }

    #[test]
    fn lazy_caches_are_shared_across_threads() {
        let p = Arc::new(path("/a/b/../c/./d"));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let p = Arc::clone(&p);
                std::thread::spawn(move || (p.name_count(), p.normalized_str().to_owned()))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), (6, "/a/c/d".to_owned()));
        }
    }
}
