//! People domain module (names, calendar dates, persons).
//!
//! Validated value objects and the `Person` entity that richer records such as
//! employees build on. Pure domain logic only: no IO, no persistence concerns.

pub mod date;
pub mod name;
pub mod person;

pub use date::Date;
pub use name::Name;
pub use person::{Individual, Person};
