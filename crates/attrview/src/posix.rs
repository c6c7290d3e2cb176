// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::BTreeSet;
use std::fmt;

use crate::AttributeData;

/// One of the nine POSIX file permission bits.
///
/// The variants are ordered as they appear in the `ls -l` rendering, so iterating a
/// `BTreeSet<PosixFilePermission>` yields owner, group and then others permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PosixFilePermission {
    /// Read permission for the owner.
    OwnerRead,
    /// Write permission for the owner.
    OwnerWrite,
    /// Execute or search permission for the owner.
    OwnerExecute,
    /// Read permission for the group.
    GroupRead,
    /// Write permission for the group.
    GroupWrite,
    /// Execute or search permission for the group.
    GroupExecute,
    /// Read permission for everyone else.
    OthersRead,
    /// Write permission for everyone else.
    OthersWrite,
    /// Execute or search permission for everyone else.
    OthersExecute,
}

impl PosixFilePermission {
    /// All permissions, in `ls -l` order.
    pub const ALL: [Self; 9] = [
        Self::OwnerRead,
        Self::OwnerWrite,
        Self::OwnerExecute,
        Self::GroupRead,
        Self::GroupWrite,
        Self::GroupExecute,
        Self::OthersRead,
        Self::OthersWrite,
        Self::OthersExecute,
    ];

    fn symbol(self) -> char {
        match self {
            Self::OwnerRead | Self::GroupRead | Self::OthersRead => 'r',
            Self::OwnerWrite | Self::GroupWrite | Self::OthersWrite => 'w',
            Self::OwnerExecute | Self::GroupExecute | Self::OthersExecute => 'x',
        }
    }
}

impl fmt::Display for PosixFilePermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OwnerRead => "OWNER_READ",
            Self::OwnerWrite => "OWNER_WRITE",
            Self::OwnerExecute => "OWNER_EXECUTE",
            Self::GroupRead => "GROUP_READ",
            Self::GroupWrite => "GROUP_WRITE",
            Self::GroupExecute => "GROUP_EXECUTE",
            Self::OthersRead => "OTHERS_READ",
            Self::OthersWrite => "OTHERS_WRITE",
            Self::OthersExecute => "OTHERS_EXECUTE",
        };
        f.write_str(name)
    }
}

impl AttributeData for PosixFilePermission {}

/// Renders a permission set in the nine-character `ls -l` form, such as `rwxr-x---`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use attrview::{PosixFilePermission, symbolic_permissions};
///
/// let perms = BTreeSet::from([
///     PosixFilePermission::OwnerRead,
///     PosixFilePermission::OwnerWrite,
///     PosixFilePermission::GroupRead,
/// ]);
/// assert_eq!(symbolic_permissions(&perms), "rw-r-----");
/// ```
#[must_use]
pub fn symbolic_permissions(permissions: &BTreeSet<PosixFilePermission>) -> String {
    PosixFilePermission::ALL
        .iter()
        .map(|permission| if permissions.contains(permission) { permission.symbol() } else { '-' })
        .collect()
}
