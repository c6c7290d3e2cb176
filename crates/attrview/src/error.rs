// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::AttributeValue;

/// An error raised while validating, reading or writing file attributes.
///
/// All variants except [`Coercion`](Self::Coercion) and [`Io`](Self::Io) are validation
/// failures: they are pure functions of the request and the registered metadata.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AttributeError {
    /// No metadata is registered for the requested view.
    #[error("file attribute view {view:?} is not supported")]
    UnsupportedView {
        /// The requested view name.
        view: String,
    },

    /// Two metadata objects with the same view name were registered in one collection.
    #[error("file attribute view {view:?} is registered more than once")]
    DuplicateView {
        /// The duplicated view name.
        view: String,
    },

    /// A request names a view other than the one it is validated against.
    #[error("attribute view mismatch: expected {expected:?}, requested {requested:?}")]
    ViewNameMismatch {
        /// The view name of the metadata used for validation.
        expected: String,
        /// The view name found in the request.
        requested: String,
    },

    /// The attribute is not declared by the view, or not for the requested operation.
    #[error("attribute {attribute:?} is not supported")]
    UnsupportedAttribute {
        /// The attribute name as given by the caller.
        attribute: String,
    },

    /// The attribute cannot be set when a file is created.
    #[error("attribute {attribute:?} cannot be set at creation time")]
    UnsupportedCreationAttribute {
        /// The qualified attribute name as given by the caller.
        attribute: String,
    },

    /// A creation-time attribute value does not have the type its view declares.
    #[error("value {value:?} is not valid for attribute {attribute:?}")]
    UnsupportedCreationAttributeValue {
        /// The qualified attribute name as given by the caller.
        attribute: String,
        /// The rejected value.
        value: AttributeValue,
    },

    /// A value could not be converted to the type a setter expects.
    ///
    /// Setters do not validate values against the view metadata; callers are expected to have
    /// done so beforehand, and a value of the wrong type surfaces here.
    #[error("value for attribute {attribute:?} cannot be converted to {expected}")]
    Coercion {
        /// The attribute being set.
        attribute: String,
        /// The name of the expected type.
        expected: &'static str,
    },

    /// The underlying view failed to apply an attribute.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AttributeError {
    pub(crate) fn unsupported_attribute(attribute: impl Into<String>) -> Self {
        Self::UnsupportedAttribute {
            attribute: attribute.into(),
        }
    }

    pub(crate) fn unsupported_view(view: impl Into<String>) -> Self {
        Self::UnsupportedView { view: view.into() }
    }
}
