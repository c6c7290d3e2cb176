// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// An error produced by the path algebra of [`SlashPath`][crate::SlashPath].
///
/// Every variant is raised synchronously at the point of detection and is a pure function
/// of the inputs, so retrying the same operation always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PathError {
    /// The raw path string contains a NUL character.
    #[error("invalid path {path:?}: NUL character not allowed")]
    InvalidPath {
        /// The offending input.
        path: String,
    },

    /// A name-element index or range lies outside `[0, name_count)`.
    #[error("name element range {begin}..{end} is out of bounds for a path with {count} name elements")]
    Index {
        /// The first requested element.
        begin: usize,
        /// One past the last requested element.
        end: usize,
        /// The number of name elements in the path.
        count: usize,
    },

    /// Two paths owned by different file-system instances were combined.
    #[error("path belongs to a different file system")]
    FileSystemMismatch,

    /// `relativize` was called with one absolute and one relative path.
    #[error("cannot relativize {this:?} against {other:?}: absolute/relative mismatch")]
    RelativizeMismatch {
        /// The path `relativize` was called on.
        this: String,
        /// The argument path.
        other: String,
    },
}

/// An error produced when compiling a `syntax:pattern` string.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PatternError {
    /// The pattern string has no `syntax:` prefix.
    #[error("pattern {pattern:?} has no syntax prefix, expected \"glob:\" or \"regex:\"")]
    MissingSyntax {
        /// The offending input.
        pattern: String,
    },

    /// The syntax prefix is neither `glob` nor `regex`.
    #[error("syntax {syntax:?} is not supported")]
    UnsupportedSyntax {
        /// The unrecognized syntax name.
        syntax: String,
    },

    /// The glob pattern is malformed.
    ///
    /// `index` is the character offset of the fault within `pattern`.
    #[error("{description} near index {index}\n{pattern}")]
    GlobSyntax {
        /// A short description of the problem.
        description: &'static str,
        /// The glob pattern, without its syntax prefix.
        pattern: String,
        /// Character offset of the fault.
        index: usize,
    },

    /// The regular expression (given directly or produced from a glob) failed to compile.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

impl PatternError {
    pub(crate) fn glob(description: &'static str, pattern: &str, index: usize) -> Self {
        Self::GlobSyntax {
            description,
            pattern: pattern.to_owned(),
            index,
        }
    }

    /// Returns the character offset of a glob syntax error, if this is one.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::GlobSyntax { index, .. } => Some(*index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assert_types() {
        static_assertions::assert_impl_all!(PathError: Send, Sync, Clone);
        static_assertions::assert_impl_all!(PatternError: Send, Sync);
    }

    #[test]
    fn invalid_path_message() {
        let error = PathError::InvalidPath { path: "a\0b".to_owned() };
        assert_eq!(error.to_string(), "invalid path \"a\\0b\": NUL character not allowed");
    }

    #[test]
    fn glob_syntax_message() {
        let error = PatternError::glob("Missing '}'", "{a,b", 3);
        assert_eq!(error.to_string(), "Missing '}' near index 3\n{a,b");
        assert_eq!(error.index(), Some(3));
    }

    #[test]
    fn index_only_for_glob_errors() {
        let error = PatternError::UnsupportedSyntax { syntax: "foo".to_owned() };
        assert_eq!(error.index(), None);
    }
}
