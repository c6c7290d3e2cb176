// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::BTreeSet;

use crate::{AttributeData, UserPrincipal};

/// Whether an ACL entry grants, denies, audits or alarms on access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AclEntryType {
    /// Grants access.
    Allow,
    /// Denies access.
    Deny,
    /// Logs access.
    Audit,
    /// Raises an alarm on access.
    Alarm,
}

/// An access permission controlled by an ACL entry, following the NFSv4 model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(missing_docs, reason = "variant names are the NFSv4 access mask names")]
pub enum AclEntryPermission {
    ReadData,
    WriteData,
    AppendData,
    ReadNamedAttrs,
    WriteNamedAttrs,
    Execute,
    DeleteChild,
    ReadAttributes,
    WriteAttributes,
    Delete,
    ReadAcl,
    WriteAcl,
    WriteOwner,
    Synchronize,
}

/// Controls how an ACL entry is inherited by directory contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AclEntryFlag {
    /// Inherited by files created in the directory.
    FileInherit,
    /// Inherited by directories created in the directory.
    DirectoryInherit,
    /// Inherited one level only.
    NoPropagateInherit,
    /// Applies to inheriting entries only, not to the directory itself.
    InheritOnly,
}

/// One entry of an access control list, as stored in the `acl:acl` attribute.
///
/// # Examples
///
/// ```
/// use attrview::{AclEntry, AclEntryPermission, AclEntryType, UserPrincipal};
///
/// let entry = AclEntry::new(AclEntryType::Allow, UserPrincipal::new("alice"))
///     .with_permissions([AclEntryPermission::ReadData, AclEntryPermission::ReadAcl]);
///
/// assert!(entry.permissions().contains(&AclEntryPermission::ReadData));
/// assert!(entry.flags().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AclEntry {
    entry_type: AclEntryType,
    principal: UserPrincipal,
    permissions: BTreeSet<AclEntryPermission>,
    flags: BTreeSet<AclEntryFlag>,
}

impl AclEntry {
    /// Creates an entry with no permissions and no flags.
    #[must_use]
    pub fn new(entry_type: AclEntryType, principal: UserPrincipal) -> Self {
        Self {
            entry_type,
            principal,
            permissions: BTreeSet::new(),
            flags: BTreeSet::new(),
        }
    }

    /// Replaces the permissions of the entry.
    #[must_use]
    pub fn with_permissions(mut self, permissions: impl IntoIterator<Item = AclEntryPermission>) -> Self {
        self.permissions = permissions.into_iter().collect();
        self
    }

    /// Replaces the inheritance flags of the entry.
    #[must_use]
    pub fn with_flags(mut self, flags: impl IntoIterator<Item = AclEntryFlag>) -> Self {
        self.flags = flags.into_iter().collect();
        self
    }

    /// Returns the entry type.
    #[must_use]
    pub fn entry_type(&self) -> AclEntryType {
        self.entry_type
    }

    /// Returns the principal the entry applies to.
    #[must_use]
    pub fn principal(&self) -> &UserPrincipal {
        &self.principal
    }

    /// Returns the permissions the entry controls.
    #[must_use]
    pub fn permissions(&self) -> &BTreeSet<AclEntryPermission> {
        &self.permissions
    }

    /// Returns the inheritance flags.
    #[must_use]
    pub fn flags(&self) -> &BTreeSet<AclEntryFlag> {
        &self.flags
    }
}

impl AttributeData for AclEntry {}
