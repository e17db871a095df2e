use super::*;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::iter;
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_STORAGE_PATH: &str = "agenda.txt";

pub struct TxtStore {
    path: PathBuf,
}

impl TxtStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TxtStore { path: path.into() }
    }
}

impl Default for TxtStore {
    fn default() -> Self {
        TxtStore::new(DEFAULT_STORAGE_PATH)
    }
}

impl ContactStore for TxtStore {
    fn append(&mut self, contact: &Contact) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        // Creates the file on first insert; never truncates.
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "{}", contact.to_line())?;
        file.flush()?;

        debug!(path = %self.path.display(), name = %contact.name, "appended contact");
        Ok(())
    }

    fn read_lines(&self) -> Result<Vec<StoreLine>, AppError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(AppError::store_not_found(&self.path));
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = BufReader::new(file);
        let lines = iter::from_fn(|| {
            let mut buf = Vec::new();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => None,
                Ok(_) => {
                    if buf.last() == Some(&b'\n') {
                        buf.pop();
                    }
                    Some(Ok(StoreLine::from_bytes(buf)))
                }
                Err(e) => Some(Err(e)),
            }
        })
        .collect::<Result<Vec<StoreLine>, io::Error>>()?;

        debug!(path = %self.path.display(), lines = lines.len(), "read store");
        Ok(lines)
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::manager::ContactManager;
    use tempfile::tempdir;

    fn lines<const N: usize>(texts: [&str; N]) -> Vec<StoreLine> {
        texts.into_iter().map(StoreLine::from).collect()
    }

    #[test]
    fn appends_in_insertion_order() -> Result<(), AppError> {
        let dir = tempdir()?;
        let mut storage = TxtStore::new(dir.path().join("agenda.txt"));

        storage.append(&Contact::new("Ana".to_string(), "123".to_string()))?;
        storage.append(&Contact::new("Bob".to_string(), "456".to_string()))?;

        assert_eq!(storage.read_lines()?, lines(["Ana:123", "Bob:456"]));
        assert_eq!(
            fs::read_to_string(storage.location())?,
            "Ana:123\nBob:456\n"
        );
        Ok(())
    }

    #[test]
    fn keeps_existing_content() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("agenda.txt");
        fs::write(&path, "Carla:789\n")?;

        let mut storage = TxtStore::new(&path);
        storage.append(&Contact::new("Ana".to_string(), "123".to_string()))?;

        assert_eq!(storage.read_lines()?, lines(["Carla:789", "Ana:123"]));
        Ok(())
    }

    #[test]
    fn undecodable_line_does_not_stop_the_read() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("agenda.txt");
        fs::write(&path, b"Ana:123\n\xff\xfe:bad\nBob:456\n")?;

        let storage = TxtStore::new(&path);
        let read = storage.read_lines()?;

        assert_eq!(read.len(), 3);
        assert_eq!(read[0], StoreLine::from("Ana:123"));
        assert!(matches!(read[1], StoreLine::Undecodable(_)));
        assert_eq!(read[2], StoreLine::from("Bob:456"));

        let manager = ContactManager::new(Box::new(storage));
        let scan = manager.list()?;
        let names: Vec<&str> = scan.records().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Bob"]);
        assert_eq!(scan.malformed().count(), 1);
        Ok(())
    }

    #[test]
    fn crlf_and_unterminated_last_line() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("agenda.txt");
        fs::write(&path, "Ana:123\r\nBob:456")?;

        let storage = TxtStore::new(&path);

        assert_eq!(storage.read_lines()?, lines(["Ana:123", "Bob:456"]));
        Ok(())
    }

    #[test]
    fn missing_file_is_store_not_found() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = TxtStore::new(dir.path().join("absent.txt"));

        let err = storage.read_lines().unwrap_err();

        assert!(err.is_store_not_found());
        assert!(!storage.location().exists());
        Ok(())
    }

    #[test]
    fn first_append_creates_parent_directory() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join(".instance").join("agenda.txt");
        let mut storage = TxtStore::new(&path);

        storage.append(&Contact::new("Ana".to_string(), "123".to_string()))?;

        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn append_into_directory_fails_with_io() -> Result<(), AppError> {
        let dir = tempdir()?;
        let mut storage = TxtStore::new(dir.path());

        let err = storage
            .append(&Contact::new("Ana".to_string(), "123".to_string()))
            .unwrap_err();

        assert!(matches!(err, AppError::Io(_)));
        Ok(())
    }
}
