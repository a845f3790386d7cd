//! `bank-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, entity/value-object traits, employee identifiers and the
//! sequence capability that hands them out.

pub mod entity;
pub mod error;
pub mod id;
pub mod sequence;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::EmployeeNumber;
pub use sequence::{AtomicSequence, SequenceGenerator, process_sequence};
pub use value_object::ValueObject;
