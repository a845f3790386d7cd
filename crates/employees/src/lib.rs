//! Employees domain module.
//!
//! Bank employees: salary bounds, minimum working age and sequential employee
//! numbers, implemented purely as deterministic domain logic (no IO, no storage).

pub mod employee;

pub use bank_core::{AtomicSequence, DomainError, DomainResult, EmployeeNumber, SequenceGenerator};
pub use bank_people::{Date, Individual, Name, Person};
pub use employee::Employee;
