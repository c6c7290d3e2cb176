// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![doc(html_logo_url = "https://media.githubusercontent.com/media/microsoft/oxidizer/refs/heads/main/crates/attrview/logo.png")]
#![doc(html_favicon_url = "https://media.githubusercontent.com/media/microsoft/oxidizer/refs/heads/main/crates/attrview/favicon.ico")]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Typed file attribute views for file-system providers.
//!
//! File systems expose metadata through named *views* such as `basic`, `posix` or `acl`. Each
//! view declares a fixed set of typed attributes, some readable, some writable. This crate
//! describes those views and implements the provider-side plumbing around them, without doing
//! any I/O itself:
//!
//! - [`AttributeViewMetadata`] declares the attributes of a view, and
//!   [`AttributeViewCollection`] holds the views a file system supports. The standard views
//!   are available as [`BASIC`], [`FILE_OWNER`], [`DOS`], [`POSIX`] and [`ACL`].
//! - [`attribute_names`] resolves a request such as `"posix:owner,permissions"` against a view.
//! - The `*_attributes_to_map` functions copy requested values out of the read-side traits
//!   ([`BasicFileAttributes`] and friends), and the `set_*_attribute` functions route a named
//!   value to the write-side traits ([`BasicFileAttributeView`] and friends).
//! - [`CreationAttributeCollector`] validates the attributes passed when creating a file.
//!
//! Values travel as [`AttributeValue`], a cheaply clonable type-erased value checked against
//! the [`AttributeType`] a view declares.
//!
//! # Examples
//!
//! ```
//! use attrview::{
//!     AttributeError, AttributeViewCollection, CreationAttributeCollector, FileAttribute, UserPrincipal, BASIC, POSIX,
//!     attribute_names,
//! };
//!
//! let views = AttributeViewCollection::with_views([BASIC.clone(), POSIX.clone()])?;
//!
//! let requested = attribute_names("posix:*", views.view("posix")?)?;
//! assert!(requested.contains("permissions"));
//!
//! let collector = CreationAttributeCollector::new(&views);
//! let created = collector.collect(&[FileAttribute::new("posix:owner", UserPrincipal::new("x"))])?;
//! assert!(created.contains_key("posix:owner"));
//!
//! let error = collector.collect(&[FileAttribute::new("posix:acl", Vec::<u8>::new())]).unwrap_err();
//! assert!(matches!(error, AttributeError::UnsupportedCreationAttribute { .. }));
//! # Ok::<_, AttributeError>(())
//! ```
//!
//! # Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for the plain data types such as
//!   [`UserPrincipal`], [`PosixFilePermission`] and [`AclEntry`].

mod acl;
mod attributes;
mod builtin;
mod collection;
mod creation;
mod error;
mod file_key;
mod marshal;
mod metadata;
mod posix;
mod principal;
mod request;
mod value;
mod view;

pub use acl::{AclEntry, AclEntryFlag, AclEntryPermission, AclEntryType};
pub use attributes::{BasicFileAttributes, DosFileAttributes, PosixFileAttributes};
pub use builtin::{ACL, ACL_VIEW, BASIC, BASIC_VIEW, DOS, DOS_VIEW, FILE_OWNER, OWNER_VIEW, POSIX, POSIX_VIEW};
pub use collection::AttributeViewCollection;
pub use creation::{CreationAttributeCollector, FileAttribute};
pub use error::AttributeError;
pub use file_key::FileKey;
pub use marshal::{
    AclAttribute, BasicAttribute, DosAttribute, OwnerAttribute, PosixAttribute, basic_attributes_to_map,
    dos_attributes_to_map, posix_attributes_to_map, set_acl_attribute, set_basic_attribute, set_dos_attribute,
    set_owner_attribute, set_posix_attribute,
};
pub use metadata::{AttributeViewMetadata, AttributeViewMetadataBuilder, Operation};
pub use posix::{PosixFilePermission, symbolic_permissions};
pub use principal::{GroupPrincipal, UserPrincipal};
pub use request::{attribute_names, split_qualified_name};
pub use value::{AttributeData, AttributeMap, AttributeType, AttributeValue, Shape, TypeTag};
pub use view::{AclFileAttributeView, BasicFileAttributeView, DosFileAttributeView, FileOwnerAttributeView, PosixFileAttributeView};
