//! `keel-core` — domain modeling kernel.
//!
//! Identity-compared entities, structurally compared value objects, and the
//! two-way [`Formatter`] used to build validated domain primitives. Everything
//! here is pure, synchronous and in-memory.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod formatter;
pub mod id;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::{Entity, EntityExt};
pub use error::{DomainError, DomainResult};
pub use formatter::{Classification, FormatRule, Formattable, Formatter};
pub use id::Identity;
pub use uuid::Uuid;
pub use value_object::{Component, ValueObject, ValueObjectExt};
