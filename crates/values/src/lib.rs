//! Concrete value objects built on `keel-core`.
//!
//! Pure domain types only (no IO, no storage).

pub mod cpf;
pub mod ordinate;
pub mod point;

pub use cpf::{Cpf, CpfFormatter};
pub use ordinate::Ordinate;
pub use point::Point;
