use super::*;
use std::path::PathBuf;

/// Keeps store lines in memory. A store that has never been written to, or
/// seeded, behaves like a missing file.
pub struct MemStore {
    data: Option<Vec<StoreLine>>,
    label: PathBuf,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            data: None,
            label: PathBuf::from(":memory:"),
        }
    }

    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StoreLine>,
    {
        Self {
            data: Some(lines.into_iter().map(Into::into).collect()),
            ..Self::new()
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemStore {
    fn append(&mut self, contact: &Contact) -> Result<(), AppError> {
        self.data
            .get_or_insert_with(Vec::new)
            .push(StoreLine::Text(contact.to_line()));
        Ok(())
    }

    fn read_lines(&self) -> Result<Vec<StoreLine>, AppError> {
        self.data
            .clone()
            .ok_or_else(|| AppError::store_not_found(&self.label))
    }

    fn location(&self) -> &Path {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseeded_store_is_missing() {
        let storage = MemStore::new();

        assert!(storage.read_lines().unwrap_err().is_store_not_found());
    }

    #[test]
    fn append_materializes_the_store() -> Result<(), AppError> {
        let mut storage = MemStore::default();

        storage.append(&Contact::new("Ana".to_string(), "123".to_string()))?;

        assert_eq!(storage.read_lines()?, vec![StoreLine::from("Ana:123")]);
        Ok(())
    }

    #[test]
    fn seeded_lines_come_back_verbatim() -> Result<(), AppError> {
        let storage = MemStore::with_lines(["Ana:123", "", "garbage"]);

        assert_eq!(
            storage.read_lines()?,
            vec![
                StoreLine::from("Ana:123"),
                StoreLine::from(""),
                StoreLine::from("garbage"),
            ]
        );
        Ok(())
    }
}
