//! Entity trait: identity + continuity across state changes.

use core::hash::{Hash, Hasher};
use std::collections::hash_map::DefaultHasher;

/// Entity interface.
///
/// Two entities are the same entity iff their identities are equal, no matter
/// what the rest of their state looks like. The identity is handed over at
/// construction and never reassigned.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn identity(&self) -> &Self::Id;

    /// Advisory validity of the entity's current state.
    ///
    /// Nothing in this crate evaluates it; callers decide what to do with an
    /// invalid entity.
    fn is_valid(&self) -> bool;
}

/// Identity-based equality, hashing and description for entities.
///
/// Blanket-implemented for every [`Entity`], so concrete entities only supply
/// `identity` and `is_valid`.
pub trait EntityExt: Entity {
    /// Same instance, or same identity.
    fn same_entity(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        core::ptr::eq(self, other) || self.identity() == other.identity()
    }

    /// Hash of the concrete type name combined with the identity.
    fn identity_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        core::any::type_name::<Self>().hash(&mut hasher);
        self.identity().hash(&mut hasher);
        hasher.finish()
    }

    /// `"<TypeName> [Identity = <identity>]"`.
    fn describe(&self) -> String {
        format!(
            "{} [Identity = {}]",
            short_type_name::<Self>(),
            self.identity()
        )
    }
}

impl<T: Entity + ?Sized> EntityExt for T {}

/// Last path segment of a type name, without generic arguments.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = core::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Implements `PartialEq`, `Eq`, `Hash` and `Display` for an [`Entity`] in
/// terms of its identity.
#[macro_export]
macro_rules! impl_entity_equality {
    ($t:ty) => {
        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::entity::EntityExt::same_entity(self, other)
            }
        }

        impl Eq for $t {}

        impl core::hash::Hash for $t {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                state.write_u64($crate::entity::EntityExt::identity_hash(self));
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&$crate::entity::EntityExt::describe(self))
            }
        }
    };
}
