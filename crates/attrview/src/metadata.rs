// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::{BTreeMap, BTreeSet};

use crate::{AttributeError, AttributeType};

/// An operation an attribute can be declared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// The attribute can be read.
    Read,
    /// The attribute can be written.
    Write,
}

impl Operation {
    /// Both operations.
    pub const ALL: [Self; 2] = [Self::Read, Self::Write];
}

/// Describes the typed attributes exposed by one file attribute view.
///
/// Each attribute has a declared [`AttributeType`] and may be readable, writable or both.
/// Instances are immutable; create them with [`for_view`](Self::for_view).
///
/// # Examples
///
/// ```
/// use attrview::{AttributeType, AttributeViewMetadata, Operation, BASIC};
///
/// let metadata = AttributeViewMetadata::for_view("user")
///     .with_attributes(&BASIC)
///     .with_attribute("comment", AttributeType::simple::<String>())
///     .with_attribute_for("checksum", AttributeType::simple::<u64>(), &[Operation::Read])
///     .build();
///
/// assert_eq!(metadata.view_name(), "user");
/// assert!(metadata.supports_attribute_for("size", Operation::Read));
/// assert!(!metadata.supports_attribute_for("checksum", Operation::Write));
/// assert!(metadata.attribute_type("missing").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeViewMetadata {
    view_name: String,
    types: BTreeMap<String, AttributeType>,
    readable: BTreeSet<String>,
    writable: BTreeSet<String>,
}

impl AttributeViewMetadata {
    /// Starts building metadata for the named view.
    pub fn for_view(view_name: impl Into<String>) -> AttributeViewMetadataBuilder {
        AttributeViewMetadataBuilder {
            view_name: view_name.into(),
            types: BTreeMap::new(),
            readable: BTreeSet::new(),
            writable: BTreeSet::new(),
        }
    }

    /// Returns the name of the view.
    #[must_use]
    pub fn view_name(&self) -> &str {
        &self.view_name
    }

    /// Returns the names of all declared attributes, in sorted order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Returns the names of the attributes declared for `operation`.
    #[must_use]
    pub fn attribute_names_for(&self, operation: Operation) -> &BTreeSet<String> {
        match operation {
            Operation::Read => &self.readable,
            Operation::Write => &self.writable,
        }
    }

    /// Returns the declared type of an attribute.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::UnsupportedAttribute`] if the view does not declare `name`.
    pub fn attribute_type(&self, name: &str) -> Result<AttributeType, AttributeError> {
        self.types
            .get(name)
            .copied()
            .ok_or_else(|| AttributeError::unsupported_attribute(name))
    }

    /// Returns `true` if the view declares `name`, for any operation.
    #[must_use]
    pub fn supports_attribute(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Returns `true` if the view declares `name` for `operation`.
    #[must_use]
    pub fn supports_attribute_for(&self, name: &str, operation: Operation) -> bool {
        self.attribute_names_for(operation).contains(name)
    }
}

/// Builder for [`AttributeViewMetadata`].
///
/// Registering a name again replaces its type and its operation membership.
#[derive(Debug, Clone)]
#[must_use]
pub struct AttributeViewMetadataBuilder {
    view_name: String,
    types: BTreeMap<String, AttributeType>,
    readable: BTreeSet<String>,
    writable: BTreeSet<String>,
}

impl AttributeViewMetadataBuilder {
    /// Declares a readable and writable attribute.
    pub fn with_attribute(self, name: impl Into<String>, ty: AttributeType) -> Self {
        self.with_attribute_for(name, ty, &Operation::ALL)
    }

    /// Declares an attribute for exactly the given operations.
    ///
    /// An empty `operations` slice declares the type only: the attribute is then neither
    /// readable nor writable.
    pub fn with_attribute_for(mut self, name: impl Into<String>, ty: AttributeType, operations: &[Operation]) -> Self {
        let name = name.into();
        self.types.insert(name.clone(), ty);
        self.readable.remove(&name);
        self.writable.remove(&name);
        for operation in operations {
            match operation {
                Operation::Read => self.readable.insert(name.clone()),
                Operation::Write => self.writable.insert(name.clone()),
            };
        }
        self
    }

    /// Imports every attribute of `other` along with its operation membership.
    pub fn with_attributes(mut self, other: &AttributeViewMetadata) -> Self {
        for (name, ty) in &other.types {
            let operations: Vec<_> = Operation::ALL
                .into_iter()
                .filter(|operation| other.supports_attribute_for(name, *operation))
                .collect();
            self = self.with_attribute_for(name.as_str(), *ty, &operations);
        }
        self
    }

    /// Produces the immutable metadata.
    #[must_use]
    pub fn build(self) -> AttributeViewMetadata {
        AttributeViewMetadata {
            view_name: self.view_name,
            types: self.types,
            readable: self.readable,
            writable: self.writable,
        }
    }
}
