// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::{AttributeError, AttributeViewMetadata};

/// The attribute views supported by a file system, keyed by view name.
///
/// # Examples
///
/// ```
/// use attrview::{AttributeViewCollection, BASIC, POSIX};
///
/// let views = AttributeViewCollection::with_views([BASIC.clone(), POSIX.clone()])?;
///
/// assert!(views.contains_view("posix"));
/// assert_eq!(views.view_names().collect::<Vec<_>>(), ["basic", "posix"]);
/// assert!(views.view("acl").is_err());
/// # Ok::<_, attrview::AttributeError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeViewCollection {
    views: BTreeMap<String, AttributeViewMetadata>,
}

impl AttributeViewCollection {
    /// Creates a collection from view metadata.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::DuplicateView`] if two of the views share a name.
    pub fn with_views(views: impl IntoIterator<Item = AttributeViewMetadata>) -> Result<Self, AttributeError> {
        let mut map = BTreeMap::new();
        for metadata in views {
            match map.entry(metadata.view_name().to_owned()) {
                Entry::Vacant(entry) => {
                    entry.insert(metadata);
                }
                Entry::Occupied(entry) => {
                    return Err(AttributeError::DuplicateView { view: entry.key().clone() });
                }
            }
        }

        tracing::debug!(views = ?map.keys().collect::<Vec<_>>(), "built attribute view collection");
        Ok(Self { views: map })
    }

    /// Returns `true` if the collection has a view with the given name.
    #[must_use]
    pub fn contains_view(&self, name: &str) -> bool {
        self.views.contains_key(name)
    }

    /// Returns the view names, in sorted order.
    pub fn view_names(&self) -> impl Iterator<Item = &str> {
        self.views.keys().map(String::as_str)
    }

    /// Returns the metadata of the named view.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::UnsupportedView`] if the collection has no such view.
    pub fn view(&self, name: &str) -> Result<&AttributeViewMetadata, AttributeError> {
        self.views.get(name).ok_or_else(|| AttributeError::unsupported_view(name))
    }

    /// Returns the number of views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Returns `true` if the collection has no views.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Iterates over the view metadata, in view name order.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeViewMetadata> {
        self.views.values()
    }
}

impl<'a> IntoIterator for &'a AttributeViewCollection {
    type Item = &'a AttributeViewMetadata;
    type IntoIter = std::collections::btree_map::Values<'a, String, AttributeViewMetadata>;

    fn into_iter(self) -> Self::IntoIter {
        self.views.values()
    }
}
