// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::BTreeSet;

use crate::{AttributeError, AttributeMap, AttributeValue, AttributeViewCollection, Operation, split_qualified_name};

/// An attribute to set atomically when a file is created.
#[derive(Debug, Clone)]
pub struct FileAttribute {
    name: String,
    value: AttributeValue,
}

impl FileAttribute {
    /// Creates an attribute with a possibly qualified name such as `"posix:permissions"`.
    pub fn new(name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the attribute name as given.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attribute value.
    #[must_use]
    pub fn value(&self) -> &AttributeValue {
        &self.value
    }
}

/// Validates the attributes passed to a file creation call and merges them into one map.
///
/// Each attribute must belong to a supported view, be writable on it, not be denied, and have
/// a value of the declared type. The result is keyed by `"view:attribute"`; when several
/// attributes share a key the last one wins.
///
/// # Examples
///
/// ```
/// use attrview::{
///     AttributeViewCollection, CreationAttributeCollector, FileAttribute, GroupPrincipal, BASIC, POSIX,
/// };
///
/// let views = AttributeViewCollection::with_views([BASIC.clone(), POSIX.clone()])?;
/// let collector = CreationAttributeCollector::new(&views).deny(["lastAccessTime"]);
///
/// let map = collector.collect(&[FileAttribute::new("posix:group", GroupPrincipal::new("staff"))])?;
/// assert!(map.contains_key("posix:group"));
///
/// assert!(collector.collect(&[FileAttribute::new("dos:hidden", true)]).is_err());
/// assert!(collector.collect(&[FileAttribute::new("posix:size", 0_u64)]).is_err());
/// # Ok::<_, attrview::AttributeError>(())
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct CreationAttributeCollector<'a> {
    views: &'a AttributeViewCollection,
    denied: BTreeSet<String>,
}

impl<'a> CreationAttributeCollector<'a> {
    /// Creates a collector for the given supported views, with nothing denied.
    pub fn new(views: &'a AttributeViewCollection) -> Self {
        Self {
            views,
            denied: BTreeSet::new(),
        }
    }

    /// Adds attribute names that cannot be set at creation time in any view.
    ///
    /// Names are plain attribute names such as `"lastAccessTime"`, without a view prefix.
    pub fn deny<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.denied.extend(names.into_iter().map(Into::into));
        self
    }

    /// Validates `attributes` and merges them into a map.
    ///
    /// # Errors
    ///
    /// * [`AttributeError::UnsupportedView`] if an attribute names a view that is not supported.
    /// * [`AttributeError::UnsupportedCreationAttribute`] if an attribute is not writable on
    ///   its view or is denied.
    /// * [`AttributeError::UnsupportedCreationAttributeValue`] if a value does not have the
    ///   attribute's declared type.
    pub fn collect(&self, attributes: &[FileAttribute]) -> Result<AttributeMap, AttributeError> {
        let mut map = AttributeMap::new();
        for attribute in attributes {
            let (view, name) = split_qualified_name(attribute.name());
            let metadata = self.views.view(view)?;

            if !metadata.supports_attribute_for(name, Operation::Write) || self.denied.contains(name) {
                tracing::debug!(attribute = attribute.name(), "rejected creation attribute");
                return Err(AttributeError::UnsupportedCreationAttribute {
                    attribute: attribute.name().to_owned(),
                });
            }

            if !metadata.attribute_type(name)?.accepts(attribute.value()) {
                tracing::debug!(
                    attribute = attribute.name(),
                    value_type = attribute.value().type_name(),
                    "rejected creation attribute value"
                );
                return Err(AttributeError::UnsupportedCreationAttributeValue {
                    attribute: attribute.name().to_owned(),
                    value: attribute.value().clone(),
                });
            }

            map.insert(format!("{view}:{name}"), attribute.value().clone());
        }
        Ok(map)
    }
}
