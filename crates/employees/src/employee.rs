use serde::Serialize;

use bank_core::{
    DomainError, DomainResult, EmployeeNumber, Entity, SequenceGenerator, process_sequence,
};
use bank_people::{Date, Individual, Name, Person};

/// Entity: bank employee.
///
/// # Invariants
/// - `0 <= salary <= MAXIMUM_SALARY`, and salary is always finite.
/// - `number` is drawn once from a sequence at construction and never reassigned.
/// - At construction, and whenever the date of birth changes, the start year
///   minus the birth year is at least `MINIMUM_WORKING_AGE`. Changing the start
///   date is not re-checked.
///
/// Salary only moves upward, through [`Employee::increment_salary`]. There is no
/// setter for salary or number.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    #[serde(flatten)]
    person: Person,
    start_date: Date,
    salary: f64,
    number: EmployeeNumber,
}

impl Employee {
    /// Ceiling for any employee's annual salary.
    pub const MAXIMUM_SALARY: f64 = 150_000.0;

    /// Minimum years between birth year and start year.
    pub const MINIMUM_WORKING_AGE: i32 = 14;

    /// Default employee numbered from the process-wide sequence.
    pub fn new() -> Self {
        Self::new_in(process_sequence())
    }

    /// Default employee: unnamed person, default start date, zero salary.
    pub fn new_in<S: SequenceGenerator + ?Sized>(sequence: &S) -> Self {
        let number = EmployeeNumber::new(sequence.next_value());
        Self {
            person: Person::default(),
            start_date: Date::default(),
            salary: 0.0,
            number,
        }
    }

    /// Hire an employee numbered from the process-wide sequence.
    pub fn hire(
        name: Name,
        date_of_birth: Date,
        start_date: Date,
        salary: f64,
    ) -> DomainResult<Self> {
        Self::hire_in(process_sequence(), name, date_of_birth, start_date, salary)
    }

    /// Hire an employee numbered from `sequence`.
    ///
    /// The number is drawn before validation, so a rejected hire still
    /// consumes one sequence value.
    pub fn hire_in<S: SequenceGenerator + ?Sized>(
        sequence: &S,
        name: Name,
        date_of_birth: Date,
        start_date: Date,
        salary: f64,
    ) -> DomainResult<Self> {
        let number = EmployeeNumber::new(sequence.next_value());

        ensure_salary_in_range(salary)?;
        ensure_working_age(&date_of_birth, &start_date)?;

        tracing::debug!(%number, salary, start_date = %start_date, "employee hired");

        Ok(Self {
            person: Person::new(name, date_of_birth),
            start_date,
            // -0.0 + 0.0 is +0.0
            salary: salary + 0.0,
            number,
        })
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn start_date(&self) -> &Date {
        &self.start_date
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn number(&self) -> EmployeeNumber {
        self.number
    }

    pub fn maximum_salary(&self) -> f64 {
        Self::MAXIMUM_SALARY
    }

    /// Number the next employee built from the process-wide sequence will get.
    pub fn next_number() -> EmployeeNumber {
        EmployeeNumber::new(process_sequence().peek())
    }

    /// Raise the salary by `amount`.
    ///
    /// Rejected when `amount` is negative (or NaN) or the result would exceed
    /// [`Employee::MAXIMUM_SALARY`]; salary is unchanged on rejection.
    pub fn increment_salary(&mut self, amount: f64) -> DomainResult<()> {
        if amount.is_nan() || amount < 0.0 {
            tracing::warn!(number = %self.number, amount, "rejected negative salary increment");
            return Err(DomainError::invalid_argument(format!(
                "salary increment must not be negative (got {amount})"
            )));
        }

        let raised = self.salary + amount;
        if raised > Self::MAXIMUM_SALARY {
            tracing::warn!(
                number = %self.number,
                amount,
                salary = self.salary,
                "rejected salary increment above maximum"
            );
            return Err(DomainError::invalid_argument(format!(
                "salary {raised} would exceed the maximum of {}",
                Self::MAXIMUM_SALARY
            )));
        }

        tracing::debug!(number = %self.number, from = self.salary, to = raised, "salary incremented");
        self.salary = raised;
        Ok(())
    }

    /// Monthly take-home pay after deducting `tax_percentage` percent.
    ///
    /// `salary * (1 - tax_percentage / 100) / 12`, for `0 <= tax_percentage <= 100`.
    pub fn calculate_wage(&self, tax_percentage: f64) -> DomainResult<f64> {
        if !(0.0..=100.0).contains(&tax_percentage) {
            tracing::warn!(number = %self.number, tax_percentage, "rejected tax percentage");
            return Err(DomainError::invalid_argument(format!(
                "tax percentage must be between 0 and 100 (got {tax_percentage})"
            )));
        }
        Ok(self.salary * (1.0 - tax_percentage / 100.0) / 12.0)
    }

    /// Replace the start date. Not checked against the date of birth.
    pub fn set_start_date(&mut self, start_date: Date) {
        self.start_date = start_date;
    }
}

impl Default for Employee {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_salary_in_range(salary: f64) -> DomainResult<()> {
    if !salary.is_finite() || salary < 0.0 || salary > Employee::MAXIMUM_SALARY {
        tracing::warn!(salary, "rejected salary outside allowed range");
        return Err(DomainError::invalid_argument(format!(
            "salary must be between 0 and {} (got {salary})",
            Employee::MAXIMUM_SALARY
        )));
    }
    Ok(())
}

// Year subtraction only; birthdays within the year are ignored.
fn ensure_working_age(date_of_birth: &Date, start_date: &Date) -> DomainResult<()> {
    let age = Date::calendar_years_between(date_of_birth, start_date);
    if age < Employee::MINIMUM_WORKING_AGE {
        tracing::warn!(
            date_of_birth = %date_of_birth,
            start_date = %start_date,
            age,
            "rejected employee below minimum working age"
        );
        return Err(DomainError::invalid_argument(format!(
            "employees must be at least {} at their start date (got {age})",
            Employee::MINIMUM_WORKING_AGE
        )));
    }
    Ok(())
}

impl Individual for Employee {
    fn name(&self) -> &Name {
        self.person.name()
    }

    fn date_of_birth(&self) -> &Date {
        self.person.date_of_birth()
    }

    fn set_name(&mut self, name: Name) {
        self.person.set_name(name);
    }

    /// Only accepted if the employee is still old enough at the current start date.
    fn set_date_of_birth(&mut self, date_of_birth: Date) -> DomainResult<()> {
        ensure_working_age(&date_of_birth, &self.start_date)?;
        self.person.set_date_of_birth(date_of_birth)
    }
}

impl Entity for Employee {
    type Id = EmployeeNumber;

    fn id(&self) -> Self::Id {
        self.number
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.person == other.person
            && self.salary == other.salary
            && self.number == other.number
            && self.start_date == other.start_date
    }
}

// Salary is never NaN, so equality is total.
impl Eq for Employee {}

impl core::fmt::Display for Employee {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Employee #{}: {}, started {}, salary {:.2}",
            self.number, self.person, self.start_date, self.salary
        )
    }
}
