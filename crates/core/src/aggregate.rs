//! Aggregate root marker layered on top of [`Entity`].

use crate::entity::Entity;

/// Aggregate root marker.
///
/// An aggregate root is an entity that guards the consistency boundary of a
/// cluster of entities and value objects. It adds no behaviour of its own;
/// identity equality comes from [`Entity`].
pub trait AggregateRoot: Entity {}
