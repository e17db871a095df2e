use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Width the name column is padded to when a contact is displayed.
pub const NAME_COLUMN_WIDTH: usize = 30;

pub const FIELD_SEPARATOR: char = ':';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl Contact {
    pub fn new(name: String, phone: String) -> Self {
        Contact { name, phone }
    }

    /// Parses one store line. Fields are split on the first separator and
    /// trimmed; a line without a non-empty second field is malformed.
    pub fn from_line(line: &str) -> Result<Self, AppError> {
        let Some((name, phone)) = line.split_once(FIELD_SEPARATOR) else {
            return Err(AppError::MalformedLine(line.to_string()));
        };

        if phone.is_empty() {
            return Err(AppError::MalformedLine(line.to_string()));
        }

        Ok(Contact::new(name.trim().to_string(), phone.trim().to_string()))
    }

    pub fn to_line(&self) -> String {
        format!("{}{}{}", self.name, FIELD_SEPARATOR, self.phone)
    }

    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase() == query.trim().to_lowercase()
    }
}

impl FromStr for Contact {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Contact::from_line(s)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {:<width$}Fone: {}",
            self.name,
            self.phone,
            width = NAME_COLUMN_WIDTH
        )
    }
}
