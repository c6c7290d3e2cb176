// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::BTreeSet;
use std::time::SystemTime;

use crate::{FileKey, GroupPrincipal, PosixFilePermission, UserPrincipal};

/// Attributes every file system can report, read in bulk from a file.
///
/// Implementations may compute values lazily; the map marshalling functions only call the
/// accessors of requested attributes.
pub trait BasicFileAttributes {
    /// The time of last modification.
    fn last_modified_time(&self) -> SystemTime;

    /// The time of last access.
    fn last_access_time(&self) -> SystemTime;

    /// The creation time. File systems that do not track it report another time stamp,
    /// usually the last modification time.
    fn creation_time(&self) -> SystemTime;

    /// The size in bytes.
    fn size(&self) -> u64;

    /// Whether the file is a regular file with opaque content.
    fn is_regular_file(&self) -> bool;

    /// Whether the file is a directory.
    fn is_directory(&self) -> bool;

    /// Whether the file is a symbolic link.
    fn is_symbolic_link(&self) -> bool;

    /// Whether the file is something other than a regular file, directory or symbolic link.
    fn is_other(&self) -> bool;

    /// An identifier unique to the file within its file system, if the file system has one.
    fn file_key(&self) -> Option<FileKey>;
}

/// Attributes of file systems with DOS-style flags.
pub trait DosFileAttributes: BasicFileAttributes {
    /// The read-only flag.
    fn is_read_only(&self) -> bool;

    /// The hidden flag.
    fn is_hidden(&self) -> bool;

    /// The system flag.
    fn is_system(&self) -> bool;

    /// The archive flag.
    fn is_archive(&self) -> bool;
}

/// Attributes of file systems implementing POSIX ownership and permissions.
pub trait PosixFileAttributes: BasicFileAttributes {
    /// The owner.
    fn owner(&self) -> UserPrincipal;

    /// The group owner.
    fn group(&self) -> GroupPrincipal;

    /// The permission bits.
    fn permissions(&self) -> BTreeSet<PosixFilePermission>;
}
