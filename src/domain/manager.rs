use super::contact::Contact;
use crate::errors::AppError;
use crate::store::{ContactStore, StoreLine};
use std::path::Path;
use tracing::debug;

/// One non-blank store line, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Record(Contact),
    Malformed(String),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Scan {
    pub entries: Vec<Entry>,
}

impl Scan {
    pub fn records(&self) -> impl Iterator<Item = &Contact> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Record(contact) => Some(contact),
            Entry::Malformed(_) => None,
        })
    }

    pub fn malformed(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Malformed(line) => Some(line.as_str()),
            Entry::Record(_) => None,
        })
    }

    pub fn has_records(&self) -> bool {
        self.records().next().is_some()
    }
}

pub struct ContactManager {
    pub storage: Box<dyn ContactStore>,
}

impl ContactManager {
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self { storage }
    }

    pub fn location(&self) -> &Path {
        self.storage.location()
    }

    pub fn insert(&mut self, name: String, phone: String) -> Result<Contact, AppError> {
        let contact = Contact::new(name, phone);
        self.storage.append(&contact)?;
        Ok(contact)
    }

    pub fn list(&self) -> Result<Scan, AppError> {
        self.scan(|_| true)
    }

    /// Records whose name equals `name` ignoring case. Malformed lines are
    /// kept so callers can report them the same way listing does.
    pub fn search(&self, name: &str) -> Result<Scan, AppError> {
        self.scan(|contact| contact.name_matches(name))
    }

    fn scan<F>(&self, keep: F) -> Result<Scan, AppError>
    where
        F: Fn(&Contact) -> bool,
    {
        let lines = self.storage.read_lines()?;
        let mut scan = Scan::default();

        for line in lines {
            let line = match line {
                StoreLine::Text(text) => text,
                StoreLine::Undecodable(lossy) => {
                    debug!(line = %lossy, "skipping line that is not UTF-8");
                    scan.entries.push(Entry::Malformed(lossy));
                    continue;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match Contact::from_line(&line) {
                Ok(contact) => {
                    if keep(&contact) {
                        scan.entries.push(Entry::Record(contact));
                    }
                }
                Err(AppError::MalformedLine(raw)) => {
                    debug!(line = %raw, "skipping malformed line");
                    scan.entries.push(Entry::Malformed(raw));
                }
                Err(e) => return Err(e),
            }
        }

        debug!(entries = scan.entries.len(), "scanned store");
        Ok(scan)
    }
}
