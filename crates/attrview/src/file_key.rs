// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::AttributeData;

/// An opaque identifier that uniquely identifies a file within its file system.
///
/// The encoding is chosen by the provider, for example a device and inode number pair, and
/// is only meaningful for equality comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileKey(Vec<u8>);

impl FileKey {
    /// Creates a key from its provider-specific encoding.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the provider-specific encoding.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AttributeData for FileKey {}
