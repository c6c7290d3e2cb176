// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Integration tests wiring the attribute plumbing into a small in-memory provider.

use std::collections::BTreeSet;
use std::io;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use attrview::{
    AttributeError, AttributeMap, AttributeValue, AttributeViewCollection, BASIC, BasicFileAttributeView,
    BasicFileAttributes, CreationAttributeCollector, FILE_OWNER, FileAttribute, FileKey, FileOwnerAttributeView,
    GroupPrincipal, Operation, POSIX, PosixFileAttributeView, PosixFileAttributes, PosixFilePermission, UserPrincipal,
    attribute_names, basic_attributes_to_map, posix_attributes_to_map, set_basic_attribute, set_posix_attribute,
    split_qualified_name, symbolic_permissions,
};

#[derive(Debug, Clone)]
struct Inode {
    modified: SystemTime,
    accessed: SystemTime,
    created: SystemTime,
    size: u64,
    owner: UserPrincipal,
    group: GroupPrincipal,
    permissions: BTreeSet<PosixFilePermission>,
}

/// A single file of an in-memory file system.
#[derive(Debug)]
struct MemFile {
    id: u64,
    inode: Mutex<Inode>,
}

impl MemFile {
    fn new(id: u64) -> Self {
        let epoch = SystemTime::UNIX_EPOCH;
        Self {
            id,
            inode: Mutex::new(Inode {
                modified: epoch,
                accessed: epoch,
                created: epoch,
                size: 0,
                owner: UserPrincipal::new("root"),
                group: GroupPrincipal::new("root"),
                permissions: BTreeSet::from([PosixFilePermission::OwnerRead, PosixFilePermission::OwnerWrite]),
            }),
        }
    }

    fn snapshot(&self) -> Inode {
        self.inode.lock().unwrap().clone()
    }

    fn read_attributes(&self, request: &str) -> Result<AttributeMap, AttributeError> {
        let (view, _) = split_qualified_name(request);
        let snapshot = Snapshot {
            id: self.id,
            inode: self.snapshot(),
        };
        match view {
            "basic" => Ok(basic_attributes_to_map(&snapshot, &attribute_names(request, &BASIC)?)),
            "posix" => Ok(posix_attributes_to_map(&snapshot, &attribute_names(request, &POSIX)?)),
            other => Err(AttributeError::UnsupportedView { view: other.to_owned() }),
        }
    }

    fn set_attribute(&self, qualified_name: &str, value: &AttributeValue) -> Result<(), AttributeError> {
        match split_qualified_name(qualified_name) {
            ("basic", name) => set_basic_attribute(self, name, value),
            ("posix", name) => set_posix_attribute(self, name, value),
            (other, _) => Err(AttributeError::UnsupportedView { view: other.to_owned() }),
        }
    }
}

struct Snapshot {
    id: u64,
    inode: Inode,
}

impl BasicFileAttributes for Snapshot {
    fn last_modified_time(&self) -> SystemTime {
        self.inode.modified
    }

    fn last_access_time(&self) -> SystemTime {
        self.inode.accessed
    }

    fn creation_time(&self) -> SystemTime {
        self.inode.created
    }

    fn size(&self) -> u64 {
        self.inode.size
    }

    fn is_regular_file(&self) -> bool {
        true
    }

    fn is_directory(&self) -> bool {
        false
    }

    fn is_symbolic_link(&self) -> bool {
        false
    }

    fn is_other(&self) -> bool {
        false
    }

    fn file_key(&self) -> Option<FileKey> {
        Some(FileKey::new(self.id.to_le_bytes()))
    }
}

impl PosixFileAttributes for Snapshot {
    fn owner(&self) -> UserPrincipal {
        self.inode.owner.clone()
    }

    fn group(&self) -> GroupPrincipal {
        self.inode.group.clone()
    }

    fn permissions(&self) -> BTreeSet<PosixFilePermission> {
        self.inode.permissions.clone()
    }
}

impl BasicFileAttributeView for MemFile {
    fn set_times(
        &self,
        last_modified_time: Option<SystemTime>,
        last_access_time: Option<SystemTime>,
        creation_time: Option<SystemTime>,
    ) -> io::Result<()> {
        let mut inode = self.inode.lock().unwrap();
        if let Some(time) = last_modified_time {
            inode.modified = time;
        }
        if let Some(time) = last_access_time {
            inode.accessed = time;
        }
        if let Some(time) = creation_time {
            inode.created = time;
        }
        Ok(())
    }
}

impl FileOwnerAttributeView for MemFile {
    fn set_owner(&self, owner: UserPrincipal) -> io::Result<()> {
        if owner.name().is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty owner"));
        }
        self.inode.lock().unwrap().owner = owner;
        Ok(())
    }
}

impl PosixFileAttributeView for MemFile {
    fn set_permissions(&self, permissions: BTreeSet<PosixFilePermission>) -> io::Result<()> {
        self.inode.lock().unwrap().permissions = permissions;
        Ok(())
    }

    fn set_group(&self, group: GroupPrincipal) -> io::Result<()> {
        self.inode.lock().unwrap().group = group;
        Ok(())
    }
}

#[test]
fn read_all_posix_attributes() {
    let file = MemFile::new(7);
    let map = file.read_attributes("posix:*").unwrap();

    let keys: BTreeSet<_> = map.keys().cloned().collect();
    assert_eq!(&keys, POSIX.attribute_names_for(Operation::Read));
    assert_eq!(
        map["fileKey"].downcast_ref::<Option<FileKey>>(),
        Some(&Some(FileKey::new(7_u64.to_le_bytes())))
    );
    assert_eq!(
        map["permissions"]
            .downcast_ref::<BTreeSet<PosixFilePermission>>()
            .map(symbolic_permissions),
        Some("rw-------".to_owned())
    );
}

#[test]
fn read_selected_basic_attributes() {
    let file = MemFile::new(1);
    let map = file.read_attributes("size,isRegularFile").unwrap();

    assert_eq!(map.keys().map(String::as_str).collect::<Vec<_>>(), ["isRegularFile", "size"]);
    assert_eq!(map["isRegularFile"].downcast_ref::<bool>(), Some(&true));
}

#[test]
fn read_rejects_bad_requests() {
    let file = MemFile::new(1);

    assert!(matches!(
        file.read_attributes("owner").unwrap_err(),
        AttributeError::UnsupportedAttribute { attribute } if attribute == "owner"
    ));
    assert!(matches!(
        file.read_attributes("posix:acl").unwrap_err(),
        AttributeError::UnsupportedAttribute { attribute } if attribute == "acl"
    ));
    assert!(matches!(
        file.read_attributes("acl:*").unwrap_err(),
        AttributeError::UnsupportedView { view } if view == "acl"
    ));
}

#[test]
fn write_then_read() {
    let file = MemFile::new(3);
    let later = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);

    file.set_attribute("lastModifiedTime", &AttributeValue::new(later)).unwrap();
    file.set_attribute("posix:owner", &AttributeValue::new(UserPrincipal::new("alice")))
        .unwrap();
    file.set_attribute(
        "posix:permissions",
        &AttributeValue::new(BTreeSet::from(PosixFilePermission::ALL)),
    )
    .unwrap();

    let map = file.read_attributes("posix:lastModifiedTime,owner,permissions").unwrap();
    assert_eq!(map["lastModifiedTime"].downcast_ref::<SystemTime>(), Some(&later));
    assert_eq!(
        map["owner"].downcast_ref::<UserPrincipal>(),
        Some(&UserPrincipal::new("alice"))
    );
    assert_eq!(file.snapshot().accessed, SystemTime::UNIX_EPOCH);
    assert_eq!(symbolic_permissions(&file.snapshot().permissions), "rwxrwxrwx");
}

#[test]
fn write_failures() {
    let file = MemFile::new(3);

    assert!(matches!(
        file.set_attribute("size", &AttributeValue::new(10_u64)).unwrap_err(),
        AttributeError::UnsupportedAttribute { .. }
    ));
    assert!(matches!(
        file.set_attribute("posix:owner", &AttributeValue::new(String::from("alice")))
            .unwrap_err(),
        AttributeError::Coercion { .. }
    ));
    assert!(matches!(
        file.set_attribute("posix:owner", &AttributeValue::new(UserPrincipal::new("")))
            .unwrap_err(),
        AttributeError::Io(error) if error.kind() == io::ErrorKind::InvalidInput
    ));
    assert_eq!(file.snapshot().owner, UserPrincipal::new("root"));
}

#[test]
fn creation_attributes_for_posix_owner() {
    let views = AttributeViewCollection::with_views([BASIC.clone(), POSIX.clone()]).unwrap();
    let collector = CreationAttributeCollector::new(&views);

    let map = collector
        .collect(&[FileAttribute::new("posix:owner", UserPrincipal::new("x"))])
        .unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(
        map["posix:owner"].downcast_ref::<UserPrincipal>(),
        Some(&UserPrincipal::new("x"))
    );

    let error = collector
        .collect(&[FileAttribute::new("posix:acl", UserPrincipal::new("x"))])
        .unwrap_err();
    assert!(matches!(
        error,
        AttributeError::UnsupportedCreationAttribute { attribute } if attribute == "posix:acl"
    ));
}

#[test]
fn creation_attributes_applied_to_new_file() {
    let views = AttributeViewCollection::with_views([BASIC.clone(), FILE_OWNER.clone(), POSIX.clone()]).unwrap();
    let created = CreationAttributeCollector::new(&views)
        .deny(["lastAccessTime"])
        .collect(&[
            FileAttribute::new("posix:group", GroupPrincipal::new("staff")),
            FileAttribute::new("posix:permissions", BTreeSet::from([PosixFilePermission::OwnerRead])),
        ])
        .unwrap();

    let file = MemFile::new(9);
    for (name, value) in &created {
        file.set_attribute(name, value).unwrap();
    }

    let inode = file.snapshot();
    assert_eq!(inode.group, GroupPrincipal::new("staff"));
    assert_eq!(symbolic_permissions(&inode.permissions), "r--------");
}
