// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::BTreeSet;
use std::io;
use std::time::SystemTime;

use crate::{AclEntry, GroupPrincipal, PosixFilePermission, UserPrincipal};

/// Updates the basic attributes of a file.
pub trait BasicFileAttributeView {
    /// Updates any of the three file times. `None` leaves a time unchanged.
    ///
    /// # Errors
    ///
    /// Returns the I/O error reported by the file system.
    fn set_times(
        &self,
        last_modified_time: Option<SystemTime>,
        last_access_time: Option<SystemTime>,
        creation_time: Option<SystemTime>,
    ) -> io::Result<()>;
}

/// Updates the owner of a file.
pub trait FileOwnerAttributeView {
    /// Changes the owner.
    ///
    /// # Errors
    ///
    /// Returns the I/O error reported by the file system.
    fn set_owner(&self, owner: UserPrincipal) -> io::Result<()>;
}

/// Updates the DOS flags of a file.
///
/// Each setter returns the I/O error reported by the file system, if any.
pub trait DosFileAttributeView: BasicFileAttributeView {
    /// Sets the read-only flag.
    ///
    /// # Errors
    ///
    /// Returns the I/O error reported by the file system.
    fn set_read_only(&self, value: bool) -> io::Result<()>;

    /// Sets the hidden flag.
    ///
    /// # Errors
    ///
    /// Returns the I/O error reported by the file system.
    fn set_hidden(&self, value: bool) -> io::Result<()>;

    /// Sets the system flag.
    ///
    /// # Errors
    ///
    /// Returns the I/O error reported by the file system.
    fn set_system(&self, value: bool) -> io::Result<()>;

    /// Sets the archive flag.
    ///
    /// # Errors
    ///
    /// Returns the I/O error reported by the file system.
    fn set_archive(&self, value: bool) -> io::Result<()>;
}

/// Updates the POSIX permissions and group of a file.
pub trait PosixFileAttributeView: BasicFileAttributeView + FileOwnerAttributeView {
    /// Replaces the permission bits.
    ///
    /// # Errors
    ///
    /// Returns the I/O error reported by the file system.
    fn set_permissions(&self, permissions: BTreeSet<PosixFilePermission>) -> io::Result<()>;

    /// Changes the group owner.
    ///
    /// # Errors
    ///
    /// Returns the I/O error reported by the file system.
    fn set_group(&self, group: GroupPrincipal) -> io::Result<()>;
}

/// Updates the access control list of a file.
pub trait AclFileAttributeView: FileOwnerAttributeView {
    /// Replaces the access control list.
    ///
    /// # Errors
    ///
    /// Returns the I/O error reported by the file system.
    fn set_acl(&self, acl: Vec<AclEntry>) -> io::Result<()>;
}
