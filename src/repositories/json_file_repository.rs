use crate::domain::Birthday;
use crate::error::{StorageError, StorageResult};
use crate::models::{ContactBook, ContactRecord};
use crate::repositories::traits::ContactBookRepository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Version tag written into every book file.
pub const FORMAT_VERSION: u32 = 1;

/// On-disk shape of the book: a versioned list of tagged records.
#[derive(Debug, Serialize, Deserialize)]
struct BookFile {
    version: u32,
    #[serde(default)]
    contacts: Vec<ContactEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContactEntry {
    name: String,
    phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

/// Contact book repository backed by a single JSON file.
///
/// The whole file is read on `load` and rewritten on `save`; there are no
/// incremental writes. A missing file loads as an empty book.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the book file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn decode(&self, raw: &str) -> StorageResult<ContactBook> {
        let file: BookFile = serde_json::from_str(raw).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })?;

        if file.version != FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion(file.version));
        }

        let mut book = ContactBook::new();
        for entry in file.contacts {
            let record = ContactRecord {
                phone: entry.phone,
                birthday: entry.birthday,
            };
            // Later duplicates replace earlier ones.
            book.insert(entry.name, record)
                .map_err(|e| StorageError::InvalidRecord {
                    path: self.path.clone(),
                    reason: e.to_string(),
                })?;
        }
        Ok(book)
    }

    fn encode(book: &ContactBook) -> StorageResult<String> {
        let file = BookFile {
            version: FORMAT_VERSION,
            contacts: book
                .iter()
                .map(|(name, record)| ContactEntry {
                    name: name.to_string(),
                    phone: record.phone.clone(),
                    birthday: record.birthday,
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }
}

impl ContactBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<ContactBook> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No saved contact book, starting empty");
                return Ok(ContactBook::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let book = self.decode(&raw)?;
        debug!(path = %self.path.display(), count = book.len(), "Contact book loaded");
        Ok(book)
    }

    fn save(&self, book: &ContactBook) -> StorageResult<()> {
        let contents = Self::encode(book)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        fs::write(&self.path, contents).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), count = book.len(), "Contact book saved");
        Ok(())
    }
}
