//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! attribute values. Two dates with the same day, month and year are the same
//! date; two names with the same parts are the same name.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value and swap it in through the owning entity's mutator.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: `Date { day: 1, month: 2, year: 2004 }`
/// - **Entity**: `Employee { number: EmployeeNumber(7), .. }`
///
/// Constructors of value objects validate their input, so a value that exists
/// is always well-formed and entities never re-check it.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Title(String);
///
/// impl ValueObject for Title {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
