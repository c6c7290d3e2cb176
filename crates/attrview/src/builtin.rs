// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The standard attribute views.

use std::sync::LazyLock;
use std::time::SystemTime;

use crate::{
    AclEntry, AttributeType, AttributeViewMetadata, FileKey, GroupPrincipal, Operation, PosixFilePermission, UserPrincipal,
};

/// Name of the [`BASIC`] view, also the default view of unqualified attribute names.
pub const BASIC_VIEW: &str = "basic";
/// Name of the [`FILE_OWNER`] view.
pub const OWNER_VIEW: &str = "owner";
/// Name of the [`DOS`] view.
pub const DOS_VIEW: &str = "dos";
/// Name of the [`POSIX`] view.
pub const POSIX_VIEW: &str = "posix";
/// Name of the [`ACL`] view.
pub const ACL_VIEW: &str = "acl";

/// Times, size, file type flags and file key.
///
/// | attribute | type | operations |
/// |-----------|------|------------|
/// | `lastModifiedTime`, `lastAccessTime`, `creationTime` | [`SystemTime`] | read, write |
/// | `size` | `u64` | read |
/// | `isRegularFile`, `isDirectory`, `isSymbolicLink`, `isOther` | `bool` | read |
/// | `fileKey` | `Option<FileKey>` | read |
pub static BASIC: LazyLock<AttributeViewMetadata> = LazyLock::new(|| {
    let read_only = &[Operation::Read];
    AttributeViewMetadata::for_view(BASIC_VIEW)
        .with_attribute("lastModifiedTime", AttributeType::simple::<SystemTime>())
        .with_attribute("lastAccessTime", AttributeType::simple::<SystemTime>())
        .with_attribute("creationTime", AttributeType::simple::<SystemTime>())
        .with_attribute_for("size", AttributeType::simple::<u64>(), read_only)
        .with_attribute_for("isRegularFile", AttributeType::simple::<bool>(), read_only)
        .with_attribute_for("isDirectory", AttributeType::simple::<bool>(), read_only)
        .with_attribute_for("isSymbolicLink", AttributeType::simple::<bool>(), read_only)
        .with_attribute_for("isOther", AttributeType::simple::<bool>(), read_only)
        .with_attribute_for("fileKey", AttributeType::simple::<Option<FileKey>>(), read_only)
        .build()
});

/// The file owner, as a [`UserPrincipal`].
pub static FILE_OWNER: LazyLock<AttributeViewMetadata> = LazyLock::new(|| {
    AttributeViewMetadata::for_view(OWNER_VIEW)
        .with_attribute("owner", AttributeType::simple::<UserPrincipal>())
        .build()
});

/// [`BASIC`] plus the `readonly`, `hidden`, `system` and `archive` flags.
pub static DOS: LazyLock<AttributeViewMetadata> = LazyLock::new(|| {
    AttributeViewMetadata::for_view(DOS_VIEW)
        .with_attributes(&BASIC)
        .with_attribute("readonly", AttributeType::simple::<bool>())
        .with_attribute("hidden", AttributeType::simple::<bool>())
        .with_attribute("system", AttributeType::simple::<bool>())
        .with_attribute("archive", AttributeType::simple::<bool>())
        .build()
});

/// [`BASIC`] and [`FILE_OWNER`] plus a `permissions` set of [`PosixFilePermission`] and a
/// `group` [`GroupPrincipal`].
pub static POSIX: LazyLock<AttributeViewMetadata> = LazyLock::new(|| {
    AttributeViewMetadata::for_view(POSIX_VIEW)
        .with_attributes(&BASIC)
        .with_attributes(&FILE_OWNER)
        .with_attribute("permissions", AttributeType::set_of::<PosixFilePermission>())
        .with_attribute("group", AttributeType::simple::<GroupPrincipal>())
        .build()
});

/// [`FILE_OWNER`] plus an `acl` list of [`AclEntry`].
pub static ACL: LazyLock<AttributeViewMetadata> = LazyLock::new(|| {
    AttributeViewMetadata::for_view(ACL_VIEW)
        .with_attributes(&FILE_OWNER)
        .with_attribute("acl", AttributeType::list_of::<AclEntry>())
        .build()
});
