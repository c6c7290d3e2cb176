// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Copies attribute values between [`AttributeMap`]s and the attribute traits.
//!
//! Attribute names are parsed into per-view enums at the string boundary and dispatched with
//! exhaustive matches from there on.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

use crate::{
    AclEntry, AclFileAttributeView, AttributeData, AttributeError, AttributeMap, AttributeValue, BasicFileAttributeView,
    BasicFileAttributes, DosFileAttributeView, DosFileAttributes, FileOwnerAttributeView, GroupPrincipal,
    PosixFileAttributeView, PosixFileAttributes, PosixFilePermission, UserPrincipal,
};

/// An attribute of the `basic` view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(missing_docs, reason = "variants are named after the attributes they identify")]
pub enum BasicAttribute {
    LastModifiedTime,
    LastAccessTime,
    CreationTime,
    Size,
    IsRegularFile,
    IsDirectory,
    IsSymbolicLink,
    IsOther,
    FileKey,
}

impl BasicAttribute {
    /// Every basic attribute.
    pub const ALL: [Self; 9] = [
        Self::LastModifiedTime,
        Self::LastAccessTime,
        Self::CreationTime,
        Self::Size,
        Self::IsRegularFile,
        Self::IsDirectory,
        Self::IsSymbolicLink,
        Self::IsOther,
        Self::FileKey,
    ];

    /// Returns the attribute name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LastModifiedTime => "lastModifiedTime",
            Self::LastAccessTime => "lastAccessTime",
            Self::CreationTime => "creationTime",
            Self::Size => "size",
            Self::IsRegularFile => "isRegularFile",
            Self::IsDirectory => "isDirectory",
            Self::IsSymbolicLink => "isSymbolicLink",
            Self::IsOther => "isOther",
            Self::FileKey => "fileKey",
        }
    }
}

/// An attribute of the `owner` view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwnerAttribute {
    /// `owner`
    Owner,
}

impl OwnerAttribute {
    /// Every owner attribute.
    pub const ALL: [Self; 1] = [Self::Owner];

    /// Returns the attribute name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
        }
    }
}

/// An attribute of the `dos` view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DosAttribute {
    /// An attribute inherited from the `basic` view.
    Basic(BasicAttribute),
    /// `readonly`
    ReadOnly,
    /// `hidden`
    Hidden,
    /// `system`
    System,
    /// `archive`
    Archive,
}

impl DosAttribute {
    const OWN: [Self; 4] = [Self::ReadOnly, Self::Hidden, Self::System, Self::Archive];

    /// Iterates over every dos attribute.
    pub fn all() -> impl Iterator<Item = Self> {
        BasicAttribute::ALL.into_iter().map(Self::Basic).chain(Self::OWN)
    }

    /// Returns the attribute name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic(attribute) => attribute.as_str(),
            Self::ReadOnly => "readonly",
            Self::Hidden => "hidden",
            Self::System => "system",
            Self::Archive => "archive",
        }
    }
}

/// An attribute of the `posix` view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosixAttribute {
    /// An attribute inherited from the `basic` view.
    Basic(BasicAttribute),
    /// An attribute inherited from the `owner` view.
    Owner(OwnerAttribute),
    /// `permissions`
    Permissions,
    /// `group`
    Group,
}

impl PosixAttribute {
    /// Iterates over every posix attribute.
    pub fn all() -> impl Iterator<Item = Self> {
        BasicAttribute::ALL
            .into_iter()
            .map(Self::Basic)
            .chain(OwnerAttribute::ALL.into_iter().map(Self::Owner))
            .chain([Self::Permissions, Self::Group])
    }

    /// Returns the attribute name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic(attribute) => attribute.as_str(),
            Self::Owner(attribute) => attribute.as_str(),
            Self::Permissions => "permissions",
            Self::Group => "group",
        }
    }
}

/// An attribute of the `acl` view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AclAttribute {
    /// An attribute inherited from the `owner` view.
    Owner(OwnerAttribute),
    /// `acl`
    Acl,
}

impl AclAttribute {
    /// Iterates over every acl attribute.
    pub fn all() -> impl Iterator<Item = Self> {
        OwnerAttribute::ALL.into_iter().map(Self::Owner).chain([Self::Acl])
    }

    /// Returns the attribute name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner(attribute) => attribute.as_str(),
            Self::Acl => "acl",
        }
    }
}

macro_rules! attribute_name_impls {
    ($($t:ident => $all:expr),* $(,)?) => {
        $(
            impl FromStr for $t {
                type Err = AttributeError;

                fn from_str(name: &str) -> Result<Self, Self::Err> {
                    $all
                        .into_iter()
                        .find(|attribute| attribute.as_str() == name)
                        .ok_or_else(|| AttributeError::unsupported_attribute(name))
                }
            }

            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

attribute_name_impls!(
    BasicAttribute => BasicAttribute::ALL,
    OwnerAttribute => OwnerAttribute::ALL,
    DosAttribute => DosAttribute::all(),
    PosixAttribute => PosixAttribute::all(),
    AclAttribute => AclAttribute::all(),
);

fn read_basic<A: BasicFileAttributes + ?Sized>(attributes: &A, attribute: BasicAttribute) -> AttributeValue {
    match attribute {
        BasicAttribute::LastModifiedTime => attributes.last_modified_time().into(),
        BasicAttribute::LastAccessTime => attributes.last_access_time().into(),
        BasicAttribute::CreationTime => attributes.creation_time().into(),
        BasicAttribute::Size => attributes.size().into(),
        BasicAttribute::IsRegularFile => attributes.is_regular_file().into(),
        BasicAttribute::IsDirectory => attributes.is_directory().into(),
        BasicAttribute::IsSymbolicLink => attributes.is_symbolic_link().into(),
        BasicAttribute::IsOther => attributes.is_other().into(),
        BasicAttribute::FileKey => attributes.file_key().into(),
    }
}

fn read_dos<A: DosFileAttributes + ?Sized>(attributes: &A, attribute: DosAttribute) -> AttributeValue {
    match attribute {
        DosAttribute::Basic(attribute) => read_basic(attributes, attribute),
        DosAttribute::ReadOnly => attributes.is_read_only().into(),
        DosAttribute::Hidden => attributes.is_hidden().into(),
        DosAttribute::System => attributes.is_system().into(),
        DosAttribute::Archive => attributes.is_archive().into(),
    }
}

fn read_posix<A: PosixFileAttributes + ?Sized>(attributes: &A, attribute: PosixAttribute) -> AttributeValue {
    match attribute {
        PosixAttribute::Basic(attribute) => read_basic(attributes, attribute),
        PosixAttribute::Owner(OwnerAttribute::Owner) => attributes.owner().into(),
        PosixAttribute::Permissions => attributes.permissions().into(),
        PosixAttribute::Group => attributes.group().into(),
    }
}

fn collect<T: Copy>(
    all: impl Iterator<Item = T>,
    name: impl Fn(T) -> &'static str,
    requested: &BTreeSet<String>,
    read: impl Fn(T) -> AttributeValue,
) -> AttributeMap {
    all.filter(|attribute| requested.contains(name(*attribute)))
        .map(|attribute| (name(attribute).to_owned(), read(attribute)))
        .collect()
}

/// Reads the requested basic attributes into a map.
///
/// Only the accessors of requested attributes are called. Requested names that are not basic
/// attributes are ignored.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use std::time::SystemTime;
/// use attrview::{BASIC, BasicFileAttributes, FileKey, attribute_names, basic_attributes_to_map};
///
/// struct Entry;
///
/// impl BasicFileAttributes for Entry {
///     fn last_modified_time(&self) -> SystemTime { SystemTime::UNIX_EPOCH }
///     fn last_access_time(&self) -> SystemTime { SystemTime::UNIX_EPOCH }
///     fn creation_time(&self) -> SystemTime { SystemTime::UNIX_EPOCH }
///     fn size(&self) -> u64 { 512 }
///     fn is_regular_file(&self) -> bool { true }
///     fn is_directory(&self) -> bool { false }
///     fn is_symbolic_link(&self) -> bool { false }
///     fn is_other(&self) -> bool { false }
///     fn file_key(&self) -> Option<FileKey> { None }
/// }
///
/// let requested = attribute_names("size,isDirectory", &BASIC)?;
/// let map = basic_attributes_to_map(&Entry, &requested);
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map["size"].downcast_ref::<u64>(), Some(&512));
/// # Ok::<_, attrview::AttributeError>(())
/// ```
#[must_use]
pub fn basic_attributes_to_map<A: BasicFileAttributes + ?Sized>(attributes: &A, requested: &BTreeSet<String>) -> AttributeMap {
    collect(BasicAttribute::ALL.into_iter(), BasicAttribute::as_str, requested, |attribute| {
        read_basic(attributes, attribute)
    })
}

/// Reads the requested dos attributes, basic ones included, into a map.
///
/// Only the accessors of requested attributes are called.
#[must_use]
pub fn dos_attributes_to_map<A: DosFileAttributes + ?Sized>(attributes: &A, requested: &BTreeSet<String>) -> AttributeMap {
    collect(DosAttribute::all(), DosAttribute::as_str, requested, |attribute| {
        read_dos(attributes, attribute)
    })
}

/// Reads the requested posix attributes, basic ones and `owner` included, into a map.
///
/// Only the accessors of requested attributes are called.
#[must_use]
pub fn posix_attributes_to_map<A: PosixFileAttributes + ?Sized>(attributes: &A, requested: &BTreeSet<String>) -> AttributeMap {
    collect(PosixAttribute::all(), PosixAttribute::as_str, requested, |attribute| {
        read_posix(attributes, attribute)
    })
}

fn coerce<T: AttributeData + Clone>(attribute: &str, value: &AttributeValue) -> Result<T, AttributeError> {
    value.downcast_ref::<T>().cloned().ok_or_else(|| AttributeError::Coercion {
        attribute: attribute.to_owned(),
        expected: std::any::type_name::<T>(),
    })
}

fn coerce_permissions(attribute: &str, value: &AttributeValue) -> Result<BTreeSet<PosixFilePermission>, AttributeError> {
    if let Some(set) = value.downcast_ref::<HashSet<PosixFilePermission>>() {
        return Ok(set.iter().copied().collect());
    }
    coerce(attribute, value)
}

fn set_basic<V: BasicFileAttributeView + ?Sized>(
    view: &V,
    attribute: BasicAttribute,
    value: &AttributeValue,
) -> Result<(), AttributeError> {
    let name = attribute.as_str();
    match attribute {
        BasicAttribute::LastModifiedTime => view.set_times(Some(coerce::<SystemTime>(name, value)?), None, None)?,
        BasicAttribute::LastAccessTime => view.set_times(None, Some(coerce::<SystemTime>(name, value)?), None)?,
        BasicAttribute::CreationTime => view.set_times(None, None, Some(coerce::<SystemTime>(name, value)?))?,
        BasicAttribute::Size
        | BasicAttribute::IsRegularFile
        | BasicAttribute::IsDirectory
        | BasicAttribute::IsSymbolicLink
        | BasicAttribute::IsOther
        | BasicAttribute::FileKey => return Err(AttributeError::unsupported_attribute(name)),
    }
    Ok(())
}

fn set_owner<V: FileOwnerAttributeView + ?Sized>(
    view: &V,
    attribute: OwnerAttribute,
    value: &AttributeValue,
) -> Result<(), AttributeError> {
    match attribute {
        OwnerAttribute::Owner => view.set_owner(coerce::<UserPrincipal>(attribute.as_str(), value)?)?,
    }
    Ok(())
}

/// Sets one `basic` attribute by name.
///
/// The three file times map to [`BasicFileAttributeView::set_times`] with the other two
/// times left unchanged.
///
/// # Errors
///
/// * [`AttributeError::UnsupportedAttribute`] if `name` is not a writable basic attribute.
/// * [`AttributeError::Coercion`] if `value` is not a [`SystemTime`].
/// * [`AttributeError::Io`] if the view fails.
pub fn set_basic_attribute<V: BasicFileAttributeView + ?Sized>(
    view: &V,
    name: &str,
    value: &AttributeValue,
) -> Result<(), AttributeError> {
    set_basic(view, name.parse()?, value)
}

/// Sets the `owner` attribute.
///
/// # Errors
///
/// * [`AttributeError::UnsupportedAttribute`] if `name` is not `owner`.
/// * [`AttributeError::Coercion`] if `value` is not a [`UserPrincipal`].
/// * [`AttributeError::Io`] if the view fails.
pub fn set_owner_attribute<V: FileOwnerAttributeView + ?Sized>(
    view: &V,
    name: &str,
    value: &AttributeValue,
) -> Result<(), AttributeError> {
    set_owner(view, name.parse()?, value)
}

/// Sets one `dos` attribute by name, including the basic file times.
///
/// # Errors
///
/// * [`AttributeError::UnsupportedAttribute`] if `name` is not a writable dos attribute.
/// * [`AttributeError::Coercion`] if `value` does not have the attribute's type.
/// * [`AttributeError::Io`] if the view fails.
pub fn set_dos_attribute<V: DosFileAttributeView + ?Sized>(
    view: &V,
    name: &str,
    value: &AttributeValue,
) -> Result<(), AttributeError> {
    let attribute: DosAttribute = name.parse()?;
    match attribute {
        DosAttribute::Basic(attribute) => return set_basic(view, attribute, value),
        DosAttribute::ReadOnly => view.set_read_only(coerce(name, value)?)?,
        DosAttribute::Hidden => view.set_hidden(coerce(name, value)?)?,
        DosAttribute::System => view.set_system(coerce(name, value)?)?,
        DosAttribute::Archive => view.set_archive(coerce(name, value)?)?,
    }
    Ok(())
}

/// Sets one `posix` attribute by name, including the basic file times and the owner.
///
/// `permissions` accepts a `BTreeSet` or a `HashSet` of [`PosixFilePermission`].
///
/// # Errors
///
/// * [`AttributeError::UnsupportedAttribute`] if `name` is not a writable posix attribute.
/// * [`AttributeError::Coercion`] if `value` does not have the attribute's type.
/// * [`AttributeError::Io`] if the view fails.
pub fn set_posix_attribute<V: PosixFileAttributeView + ?Sized>(
    view: &V,
    name: &str,
    value: &AttributeValue,
) -> Result<(), AttributeError> {
    let attribute: PosixAttribute = name.parse()?;
    match attribute {
        PosixAttribute::Basic(attribute) => return set_basic(view, attribute, value),
        PosixAttribute::Owner(attribute) => return set_owner(view, attribute, value),
        PosixAttribute::Permissions => view.set_permissions(coerce_permissions(name, value)?)?,
        PosixAttribute::Group => view.set_group(coerce::<GroupPrincipal>(name, value)?)?,
    }
    Ok(())
}

/// Sets one `acl` attribute by name, including the owner.
///
/// # Errors
///
/// * [`AttributeError::UnsupportedAttribute`] if `name` is not an acl attribute.
/// * [`AttributeError::Coercion`] if `value` does not have the attribute's type.
/// * [`AttributeError::Io`] if the view fails.
pub fn set_acl_attribute<V: AclFileAttributeView + ?Sized>(
    view: &V,
    name: &str,
    value: &AttributeValue,
) -> Result<(), AttributeError> {
    let attribute: AclAttribute = name.parse()?;
    match attribute {
        AclAttribute::Owner(attribute) => return set_owner(view, attribute, value),
        AclAttribute::Acl => view.set_acl(coerce::<Vec<AclEntry>>(name, value)?)?,
    }
    Ok(())
}
