// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::any::{Any, TypeId};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// Attribute values keyed by attribute name.
pub type AttributeMap = BTreeMap<String, AttributeValue>;

/// Identifies a Rust type, for use in attribute type descriptors.
///
/// Equality and hashing consider the [`TypeId`] only; the name is kept for diagnostics.
#[derive(Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Returns the tag of `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Returns the type identifier.
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the type name, as reported by [`std::any::type_name`].
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeTag {
    #[cfg_attr(test, mutants::skip)] // Diagnostic output only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The declared type of an attribute.
///
/// Container descriptors carry their element types for documentation and introspection, but
/// [`accepts`](Self::accepts) only checks the container kind: any set value is accepted for a
/// [`SetOf`](Self::SetOf) attribute, whatever its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    /// A single value of the given type.
    Simple(TypeTag),
    /// A set of values of the given type.
    SetOf(TypeTag),
    /// A list of values of the given type.
    ListOf(TypeTag),
    /// A map from the first type to the second.
    MapOf(TypeTag, TypeTag),
}

impl AttributeType {
    /// A single value of type `T`.
    #[must_use]
    pub fn simple<T: ?Sized + 'static>() -> Self {
        Self::Simple(TypeTag::of::<T>())
    }

    /// A set of `T`.
    #[must_use]
    pub fn set_of<T: ?Sized + 'static>() -> Self {
        Self::SetOf(TypeTag::of::<T>())
    }

    /// A list of `T`.
    #[must_use]
    pub fn list_of<T: ?Sized + 'static>() -> Self {
        Self::ListOf(TypeTag::of::<T>())
    }

    /// A map from `K` to `V`.
    #[must_use]
    pub fn map_of<K: ?Sized + 'static, V: ?Sized + 'static>() -> Self {
        Self::MapOf(TypeTag::of::<K>(), TypeTag::of::<V>())
    }

    /// Returns `true` if `value` is an instance of this type.
    ///
    /// Simple types must match exactly. Container types match any value of the same container
    /// kind; element types are not inspected.
    #[must_use]
    pub fn accepts(&self, value: &AttributeValue) -> bool {
        match (self, value.shape()) {
            (Self::Simple(expected), Shape::Simple(actual)) => *expected == actual,
            (Self::SetOf(_), Shape::Set) | (Self::ListOf(_), Shape::List) | (Self::MapOf(..), Shape::Map) => true,
            _ => false,
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(tag) => write!(f, "{tag}"),
            Self::SetOf(tag) => write!(f, "Set<{tag}>"),
            Self::ListOf(tag) => write!(f, "List<{tag}>"),
            Self::MapOf(key, value) => write!(f, "Map<{key}, {value}>"),
        }
    }
}

/// The runtime shape of an attribute value: its exact type, or the kind of container it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A non-container value of the given type.
    Simple(TypeTag),
    /// A set, of any element type.
    Set,
    /// A list, of any element type.
    List,
    /// A map, of any key and value types.
    Map,
}

/// Types that can be stored in an [`AttributeValue`].
///
/// Implemented for the standard scalar types, [`SystemTime`], [`Duration`], [`String`],
/// [`Option`] of any attribute type, the standard set, list and map containers, and this
/// crate's data types. Provider-specific types opt in with an empty impl:
///
/// ```
/// use attrview::{AttributeData, AttributeType, AttributeValue};
///
/// #[derive(Debug)]
/// struct Checksum([u8; 32]);
///
/// impl AttributeData for Checksum {}
///
/// let value = AttributeValue::new(Checksum([0; 32]));
/// assert!(AttributeType::simple::<Checksum>().accepts(&value));
/// ```
pub trait AttributeData: Any + fmt::Debug + Send + Sync {
    /// Returns the shape used to type-check this value.
    ///
    /// Containers report their kind; everything else reports its own type.
    fn shape(&self) -> Shape {
        Shape::Simple(TypeTag::of::<Self>())
    }

    /// Returns the name of the concrete type.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

macro_rules! simple_attribute_data {
    ($($t:ty),* $(,)?) => {
        $(impl AttributeData for $t {})*
    };
}

simple_attribute_data!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, String, SystemTime, Duration,
);

impl<T: AttributeData> AttributeData for Option<T> {}

impl<T> AttributeData for Vec<T>
where
    T: fmt::Debug + Send + Sync + 'static,
{
    fn shape(&self) -> Shape {
        Shape::List
    }
}

impl<T, S> AttributeData for HashSet<T, S>
where
    T: fmt::Debug + Send + Sync + 'static,
    S: Send + Sync + 'static,
{
    fn shape(&self) -> Shape {
        Shape::Set
    }
}

impl<T> AttributeData for BTreeSet<T>
where
    T: fmt::Debug + Send + Sync + 'static,
{
    fn shape(&self) -> Shape {
        Shape::Set
    }
}

impl<K, V, S> AttributeData for HashMap<K, V, S>
where
    K: fmt::Debug + Send + Sync + 'static,
    V: fmt::Debug + Send + Sync + 'static,
    S: Send + Sync + 'static,
{
    fn shape(&self) -> Shape {
        Shape::Map
    }
}

impl<K, V> AttributeData for BTreeMap<K, V>
where
    K: fmt::Debug + Send + Sync + 'static,
    V: fmt::Debug + Send + Sync + 'static,
{
    fn shape(&self) -> Shape {
        Shape::Map
    }
}

/// A type-erased, cheaply clonable attribute value.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use attrview::{AttributeType, AttributeValue, PosixFilePermission};
///
/// let value = AttributeValue::new(BTreeSet::from([PosixFilePermission::OwnerRead]));
///
/// assert!(AttributeType::set_of::<PosixFilePermission>().accepts(&value));
/// assert_eq!(value.downcast_ref::<BTreeSet<PosixFilePermission>>().map(BTreeSet::len), Some(1));
/// assert!(value.downcast_ref::<String>().is_none());
/// ```
#[derive(Clone)]
pub struct AttributeValue(Arc<dyn AttributeData>);

impl AttributeValue {
    /// Wraps a value.
    pub fn new<T: AttributeData>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Returns the shape of the wrapped value.
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.0.shape()
    }

    /// Returns the name of the wrapped value's type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    /// Returns `true` if the wrapped value is a `T`.
    #[must_use]
    pub fn is<T: AttributeData>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Returns a reference to the wrapped value if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: AttributeData>(&self) -> Option<&T> {
        let any: &dyn Any = &*self.0;
        any.downcast_ref::<T>()
    }
}

impl<T: AttributeData> From<T> for AttributeValue {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
