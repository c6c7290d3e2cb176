// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![doc(html_logo_url = "https://media.githubusercontent.com/media/microsoft/oxidizer/refs/heads/main/crates/slashpath/logo.png")]
#![doc(html_favicon_url = "https://media.githubusercontent.com/media/microsoft/oxidizer/refs/heads/main/crates/slashpath/favicon.ico")]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Slash-separated path algebra and path matching for file-system providers.
//!
//! This crate does not implement a file system. It supplies the string-level building blocks
//! that custom file-system providers share: a hierarchical path type and a compiler for
//! `glob:` and `regex:` path patterns. Nothing here performs I/O; the strings it produces are
//! handed to the provider's own storage layer.
//!
//! # Paths
//!
//! [`SlashPath`] is an immutable, POSIX-style path owned by a file-system value. It normalizes
//! redundant separators on construction and offers the usual algebra: name elements, parent,
//! root, [`subpath`](SlashPath::subpath), element-wise [`starts_with`](SlashPath::starts_with)
//! and [`ends_with`](SlashPath::ends_with), [`normalize`](SlashPath::normalize),
//! [`resolve`](SlashPath::resolve), [`relativize`](SlashPath::relativize) and ordering.
//!
//! ```
//! use std::sync::Arc;
//! use slashpath::SlashPath;
//!
//! struct ArchiveFs;
//!
//! let fs = Arc::new(ArchiveFs);
//! let dir = SlashPath::new(Arc::clone(&fs), "/docs")?;
//! let file = dir.resolve_str("guide/../intro.md")?.normalize();
//!
//! assert_eq!(file.as_str(), "/docs/intro.md");
//! assert!(file.starts_with(&dir));
//! assert_eq!(file.parent(), Some(dir));
//! # Ok::<_, slashpath::PathError>(())
//! ```
//!
//! # Patterns
//!
//! [`compile_pattern`] turns a `syntax:pattern` string into a [`regex::Regex`], translating
//! globs with [`glob_to_regex`]. [`PathMatcher`] wraps the result and matches whole paths.
//!
//! ```
//! use slashpath::PathMatcher;
//!
//! let matcher = PathMatcher::new("glob:**/*.{png,jpg}")?;
//!
//! assert!(matcher.matches_str("assets/img/logo.png"));
//! assert!(!matcher.matches_str("logo.png"));
//! # Ok::<_, slashpath::PatternError>(())
//! ```

mod error;
mod glob;
mod matcher;
mod path;

pub use error::{PathError, PatternError};
pub use glob::{compile_pattern, glob_to_regex};
pub use matcher::PathMatcher;
pub use path::{SEPARATOR, SlashPath};
