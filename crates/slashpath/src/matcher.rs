// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use regex::Regex;

use crate::glob::{Syntax, glob_to_regex, split_syntax};
use crate::{PatternError, SlashPath};

/// Matches paths against a `glob:` or `regex:` pattern.
///
/// The whole path string must match: a `regex:` pattern is anchored at both ends, and a
/// `glob:` pattern is translated by [`glob_to_regex`], which anchors it already.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use slashpath::{PathMatcher, SlashPath};
///
/// let fs = Arc::new(());
/// let matcher = PathMatcher::new("glob:/src/**/*.{rs,toml}")?;
///
/// assert!(matcher.matches(&SlashPath::new(Arc::clone(&fs), "/src/crates/lib.rs")?));
/// assert!(!matcher.matches(&SlashPath::new(fs, "/src/lib.rs.bak")?));
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct PathMatcher {
    regex: Regex,
}

impl PathMatcher {
    /// Compiles a matcher from a `syntax:pattern` string.
    ///
    /// # Errors
    ///
    /// Fails with the same errors as [`compile_pattern`][crate::compile_pattern].
    pub fn new(syntax_and_pattern: &str) -> Result<Self, PatternError> {
        let (syntax, pattern) = split_syntax(syntax_and_pattern)?;
        let source = match syntax {
            Syntax::Glob => glob_to_regex(pattern)?,
            Syntax::Regex => format!("^(?:{pattern})$"),
        };

        let regex = Regex::new(&source)?;
        tracing::debug!(pattern = syntax_and_pattern, regex = regex.as_str(), "created path matcher");
        Ok(Self { regex })
    }

    /// Returns `true` if the whole path string matches.
    pub fn matches<F: ?Sized>(&self, path: &SlashPath<F>) -> bool {
        self.matches_str(path.as_str())
    }

    /// Returns `true` if the whole string matches.
    pub fn matches_str(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Returns the compiled regular expression.
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }
}
