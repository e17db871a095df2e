pub mod contact;
pub mod manager;

use crate::errors::AppError;

/// Menu actions, keyed by the number typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    InsertContact,
    ListContacts,
    SearchContact,
    Exit,
}

impl TryFrom<i32> for Command {
    type Error = AppError;

    fn try_from(choice: i32) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(Command::InsertContact),
            2 => Ok(Command::ListContacts),
            4 => Ok(Command::SearchContact),
            5 => Ok(Command::Exit),
            other => Err(AppError::ParseCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_map_to_commands() -> Result<(), AppError> {
        assert_eq!(Command::try_from(1)?, Command::InsertContact);
        assert_eq!(Command::try_from(2)?, Command::ListContacts);
        assert_eq!(Command::try_from(4)?, Command::SearchContact);
        assert_eq!(Command::try_from(5)?, Command::Exit);
        Ok(())
    }

    #[test]
    fn three_is_not_a_command() {
        assert!(matches!(
            Command::try_from(3),
            Err(AppError::ParseCommand(cmd)) if cmd == "3"
        ));
        assert!(Command::try_from(-1).is_err());
    }
}
