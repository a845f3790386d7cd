use serde::{Deserialize, Serialize};

use bank_core::DomainResult;

use crate::{Date, Name};

/// Identity shared by every record that describes a human being.
///
/// Implementors may strengthen [`set_date_of_birth`](Individual::set_date_of_birth)
/// with their own preconditions; a rejected change must leave the stored date
/// untouched.
pub trait Individual {
    fn name(&self) -> &Name;

    fn date_of_birth(&self) -> &Date;

    fn set_name(&mut self, name: Name);

    fn set_date_of_birth(&mut self, date_of_birth: Date) -> DomainResult<()>;
}

/// A person: validated name plus date of birth.
///
/// Equal when both name and date of birth are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    date_of_birth: Date,
}

impl Person {
    pub fn new(name: Name, date_of_birth: Date) -> Self {
        Self {
            name,
            date_of_birth,
        }
    }
}

impl Individual for Person {
    fn name(&self) -> &Name {
        &self.name
    }

    fn date_of_birth(&self) -> &Date {
        &self.date_of_birth
    }

    fn set_name(&mut self, name: Name) {
        self.name = name;
    }

    /// Plain persons accept any valid date.
    fn set_date_of_birth(&mut self, date_of_birth: Date) -> DomainResult<()> {
        self.date_of_birth = date_of_birth;
        Ok(())
    }
}

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.name.is_unnamed() {
            write!(f, "unnamed (born {})", self.date_of_birth)
        } else {
            write!(f, "{} (born {})", self.name, self.date_of_birth)
        }
    }
}
