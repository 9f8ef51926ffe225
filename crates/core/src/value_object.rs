//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use core::any::Any;
use core::hash::{Hash, Hasher};
use std::collections::hash_map::DefaultHasher;

use uuid::Uuid;

const HASH_SEED: u64 = 17;
const HASH_FACTOR: u64 = 23;

/// A single comparable member of a value object.
///
/// Value objects describe their state as an ordered list of components
/// (declaration order). Nested value objects contribute their own component
/// list through [`Component::nested`], so comparison recurses naturally.
#[derive(Debug, Clone)]
pub enum Component<'a> {
    /// A missing optional member. Hashes to `0`.
    Absent,
    Bool(bool),
    Int(i128),
    UInt(u128),
    /// Compared by bit pattern after folding `-0.0` into `0.0` and every NaN
    /// into the canonical NaN, which keeps equality an equivalence relation.
    Float(f64),
    Text(&'a str),
    Uuid(Uuid),
    Nested(Vec<Component<'a>>),
}

impl<'a> Component<'a> {
    /// Component list of a nested value object.
    pub fn nested<V: ValueObject>(value: &'a V) -> Self {
        Self::Nested(value.components())
    }

    /// Hash of this component alone.
    pub fn hash_code(&self) -> u64 {
        match self {
            Component::Absent => 0,
            Component::Nested(children) => accumulate_hash(children),
            Component::Bool(v) => hash_one(&(0u8, v)),
            Component::Int(v) => hash_one(&(1u8, v)),
            Component::UInt(v) => hash_one(&(2u8, v)),
            Component::Float(v) => hash_one(&(3u8, canonical_float_bits(*v))),
            Component::Text(v) => hash_one(&(4u8, v)),
            Component::Uuid(v) => hash_one(&(5u8, v)),
        }
    }
}

impl PartialEq for Component<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Component::Absent, Component::Absent) => true,
            (Component::Bool(a), Component::Bool(b)) => a == b,
            (Component::Int(a), Component::Int(b)) => a == b,
            (Component::UInt(a), Component::UInt(b)) => a == b,
            (Component::Float(a), Component::Float(b)) => {
                canonical_float_bits(*a) == canonical_float_bits(*b)
            }
            (Component::Text(a), Component::Text(b)) => a == b,
            (Component::Uuid(a), Component::Uuid(b)) => a == b,
            (Component::Nested(a), Component::Nested(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Component<'_> {}

fn canonical_float_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

fn hash_one<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Seeded multiply-then-add accumulation over components, in order.
pub fn accumulate_hash(components: &[Component<'_>]) -> u64 {
    components.iter().fold(HASH_SEED, |acc, component| {
        acc.wrapping_mul(HASH_FACTOR)
            .wrapping_add(component.hash_code())
    })
}

impl<'a> From<&'a str> for Component<'a> {
    fn from(value: &'a str) -> Self {
        Component::Text(value)
    }
}

impl<'a> From<&'a String> for Component<'a> {
    fn from(value: &'a String) -> Self {
        Component::Text(value.as_str())
    }
}

impl From<bool> for Component<'_> {
    fn from(value: bool) -> Self {
        Component::Bool(value)
    }
}

impl From<Uuid> for Component<'_> {
    fn from(value: Uuid) -> Self {
        Component::Uuid(value)
    }
}

impl From<f64> for Component<'_> {
    fn from(value: f64) -> Self {
        Component::Float(value)
    }
}

impl From<f32> for Component<'_> {
    fn from(value: f32) -> Self {
        Component::Float(f64::from(value))
    }
}

impl<'a, T: Into<Component<'a>>> From<Option<T>> for Component<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Component::Absent, Into::into)
    }
}

macro_rules! impl_component_from_int {
    ($variant:ident, $wide:ty, $($t:ty),+) => {
        $(
            impl From<$t> for Component<'_> {
                fn from(value: $t) -> Self {
                    Component::$variant(<$wide>::from(value))
                }
            }
        )+
    };
}

impl_component_from_int!(Int, i128, i8, i16, i32, i64);
impl_component_from_int!(UInt, u128, u8, u16, u32, u64);

impl From<usize> for Component<'_> {
    fn from(value: usize) -> Self {
        Component::UInt(value as u128)
    }
}

/// Trait for value objects.
///
/// Value objects are domain objects that are **immutable** and **compared by value**.
/// They represent concepts where identity doesn't matter - only the values matter.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// ## Declaring members
///
/// Implementors list their comparable members in declaration order through
/// [`ValueObject::components`]. A member that must not take part in equality
/// (a cached policy object, a formatter, ...) is simply left out of the list.
/// Equality and hashing are then provided once by [`ValueObjectExt`]; wire
/// them into `PartialEq`/`Eq`/`Hash` with [`impl_value_equality!`](crate::impl_value_equality).
///
/// Copying is the derived `Clone`: members are immutable, so a field-for-field
/// copy is a full copy.
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {
///     fn components(&self) -> Vec<Component<'_>> {
///         vec![self.amount.into(), (&self.currency).into()]
///     }
/// }
///
/// impl_value_equality!(Money);
///
/// let m1 = Money { amount: 100, currency: "USD".to_string() };
/// let m2 = Money { amount: 100, currency: "USD".to_string() };
/// assert_eq!(m1, m2);
/// ```
pub trait ValueObject: Clone + core::fmt::Debug {
    /// Ordered comparable members, excluding ignored ones.
    fn components(&self) -> Vec<Component<'_>>;
}

/// Structural equality and hashing derived from [`ValueObject::components`].
///
/// Blanket-implemented for every value object; it cannot be implemented (and
/// therefore not overridden) by individual types.
pub trait ValueObjectExt: ValueObject {
    fn structural_eq(&self, other: &Self) -> bool {
        self.components() == other.components()
    }

    fn structural_hash(&self) -> u64 {
        accumulate_hash(&self.components())
    }

    /// Compare against a value of unknown concrete type.
    ///
    /// Returns `false` whenever `other` is not a `Self`.
    fn equals_any(&self, other: &dyn Any) -> bool
    where
        Self: 'static,
    {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self.structural_eq(other))
    }
}

impl<T: ValueObject> ValueObjectExt for T {}

/// Implements `PartialEq`, `Eq` and `Hash` for a [`ValueObject`] in terms of
/// its structural equality and hash.
#[macro_export]
macro_rules! impl_value_equality {
    ($t:ty) => {
        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::value_object::ValueObjectExt::structural_eq(self, other)
            }
        }

        impl Eq for $t {}

        impl core::hash::Hash for $t {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                state.write_u64($crate::value_object::ValueObjectExt::structural_hash(self));
            }
        }
    };
}
