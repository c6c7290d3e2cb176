// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::BTreeSet;

use crate::{AttributeError, AttributeViewMetadata, BASIC_VIEW, Operation};

/// Splits a possibly qualified attribute name into its view and attribute parts.
///
/// The split happens at the first `:`. Unqualified names belong to the `basic` view.
///
/// # Examples
///
/// ```
/// use attrview::split_qualified_name;
///
/// assert_eq!(split_qualified_name("posix:permissions"), ("posix", "permissions"));
/// assert_eq!(split_qualified_name("size"), ("basic", "size"));
/// ```
#[must_use]
pub fn split_qualified_name(name: &str) -> (&str, &str) {
    name.split_once(':').unwrap_or((BASIC_VIEW, name))
}

/// Resolves an attribute request such as `"posix:owner,permissions"` or `"*"` against the
/// metadata of one view.
///
/// The request names a view, defaulting to `basic`, followed by a comma-separated list of
/// readable attribute names. A `*` anywhere in the list selects every readable attribute.
///
/// # Errors
///
/// * [`AttributeError::ViewNameMismatch`] if the request names a view other than
///   `metadata`'s.
/// * [`AttributeError::UnsupportedAttribute`] naming the first requested attribute that is
///   not readable on the view.
///
/// # Examples
///
/// ```
/// use attrview::{BASIC, attribute_names};
///
/// let names = attribute_names("size,isDirectory", &BASIC)?;
/// assert_eq!(names.into_iter().collect::<Vec<_>>(), ["isDirectory", "size"]);
///
/// assert!(attribute_names("posix:size", &BASIC).is_err());
/// # Ok::<_, attrview::AttributeError>(())
/// ```
pub fn attribute_names(request: &str, metadata: &AttributeViewMetadata) -> Result<BTreeSet<String>, AttributeError> {
    let (view, list) = split_qualified_name(request);
    if view != metadata.view_name() {
        return Err(AttributeError::ViewNameMismatch {
            expected: metadata.view_name().to_owned(),
            requested: view.to_owned(),
        });
    }

    let readable = metadata.attribute_names_for(Operation::Read);
    let tokens = list.split(',');
    if tokens.clone().any(|token| token == "*") {
        return Ok(readable.clone());
    }

    tokens
        .map(|token| {
            if readable.contains(token) {
                Ok(token.to_owned())
            } else {
                Err(AttributeError::unsupported_attribute(token))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{AttributeType, BASIC, POSIX};

    #[rstest]
    #[case("basic:size", ("basic", "size"))]
    #[case("size", ("basic", "size"))]
    #[case("a:b:c", ("a", "b:c"))]
    #[case(":size", ("", "size"))]
    #[case("", ("basic", ""))]
    fn split(#[case] name: &str, #[case] expected: (&str, &str)) {
        assert_eq!(split_qualified_name(name), expected);
    }

    #[test]
    fn wildcard_expands_to_readable_set() {
        let names = attribute_names("basic:*", &BASIC).unwrap();
        assert_eq!(&names, BASIC.attribute_names_for(Operation::Read));
    }

    #[test]
    fn wildcard_short_circuits_other_tokens() {
        let names = attribute_names("posix:bogus,*", &POSIX).unwrap();
        assert_eq!(&names, POSIX.attribute_names_for(Operation::Read));
    }

    #[test]
    fn explicit_names() {
        let names = attribute_names("posix:owner,permissions,owner", &POSIX).unwrap();
        assert_eq!(names.into_iter().collect::<Vec<_>>(), ["owner", "permissions"]);
    }

    #[test]
    fn view_mismatch() {
        let error = attribute_names("posix:size", &BASIC).unwrap_err();
        assert!(matches!(
            &error,
            AttributeError::ViewNameMismatch { expected, requested } if expected == "basic" && requested == "posix"
        ));
        let message = error.to_string();
        assert!(message.contains("basic") && message.contains("posix"), "{message}");
    }

    #[test]
    fn unqualified_request_against_other_view() {
        let error = attribute_names("owner", &POSIX).unwrap_err();
        assert!(matches!(error, AttributeError::ViewNameMismatch { .. }));
    }

    #[test]
    fn unsupported_attribute() {
        let error = attribute_names("owner", &BASIC).unwrap_err();
        assert!(matches!(error, AttributeError::UnsupportedAttribute { attribute } if attribute == "owner"));
    }

    #[test]
    fn first_unsupported_token_is_reported() {
        let error = attribute_names("size,nope,never", &BASIC).unwrap_err();
        assert!(matches!(error, AttributeError::UnsupportedAttribute { attribute } if attribute == "nope"));
    }

    #[test]
    fn write_only_attributes_are_not_requestable() {
        let metadata = AttributeViewMetadata::for_view("basic")
            .with_attribute_for("secret", AttributeType::simple::<String>(), &[Operation::Write])
            .build();
        assert!(attribute_names("secret", &metadata).is_err());
    }
}
