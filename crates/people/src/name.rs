use serde::{Deserialize, Serialize};

use bank_core::{DomainError, DomainResult, ValueObject};

/// Personal name: title, first name and surname.
///
/// Parts are trimmed and may only contain letters plus the separators found in
/// real names (space, apostrophe, hyphen). A title may also end in a period.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "NameParts")]
pub struct Name {
    title: String,
    first_name: String,
    surname: String,
}

#[derive(Deserialize)]
struct NameParts {
    title: String,
    first_name: String,
    surname: String,
}

impl TryFrom<NameParts> for Name {
    type Error = DomainError;

    /// All three parts empty is the unnamed placeholder; anything else is validated.
    fn try_from(parts: NameParts) -> Result<Self, Self::Error> {
        if parts.title.is_empty() && parts.first_name.is_empty() && parts.surname.is_empty() {
            return Ok(Self::default());
        }
        Self::new(parts.title, parts.first_name, parts.surname)
    }
}

#[derive(Clone, Copy)]
enum Part {
    Title,
    FirstName,
    Surname,
}

impl Part {
    fn label(self) -> &'static str {
        match self {
            Part::Title => "title",
            Part::FirstName => "first name",
            Part::Surname => "surname",
        }
    }
}

fn validate_part(part: Part, raw: &str) -> DomainResult<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(DomainError::invalid_argument(format!(
            "{} cannot be empty",
            part.label()
        )));
    }

    let body = match part {
        Part::Title => value.strip_suffix('.').unwrap_or(value),
        Part::FirstName | Part::Surname => value,
    };

    let starts_with_letter = body.chars().next().is_some_and(char::is_alphabetic);
    let allowed = body
        .chars()
        .all(|c| c.is_alphabetic() || matches!(c, ' ' | '\'' | '-'));

    if !starts_with_letter || !allowed {
        tracing::warn!(part = part.label(), value, "rejected name part");
        return Err(DomainError::invalid_argument(format!(
            "{} '{value}' may only contain letters, spaces, apostrophes and hyphens",
            part.label()
        )));
    }

    Ok(value.to_string())
}

impl Name {
    pub fn new(
        title: impl Into<String>,
        first_name: impl Into<String>,
        surname: impl Into<String>,
    ) -> DomainResult<Self> {
        let title = validate_part(Part::Title, &title.into())?;
        let first_name = validate_part(Part::FirstName, &first_name.into())?;
        let surname = validate_part(Part::Surname, &surname.into())?;
        Ok(Self {
            title,
            first_name,
            surname,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Whether this is the empty placeholder produced by `Name::default()`.
    pub fn is_unnamed(&self) -> bool {
        self.title.is_empty() && self.first_name.is_empty() && self.surname.is_empty()
    }
}

impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for part in [&self.title, &self.first_name, &self.surname] {
            if part.is_empty() {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}

impl ValueObject for Name {}
