use address_book_bot::error::{StorageError, StorageResult};
use address_book_bot::models::ContactBook;
use address_book_bot::repositories::ContactBookRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact book repository for testing.
///
/// Provides an in-memory implementation of ContactBookRepository that can be
/// seeded with a book, configured to fail, and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookRepository {
    stored: Arc<Mutex<Option<ContactBook>>>,
    fail_load: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a new repository with nothing saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: ContactBook) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(book);
        repo
    }

    /// Make every subsequent `load` fail as if the file were unreadable.
    pub fn fail_on_load(&self) {
        *self.fail_load.lock().unwrap() = true;
    }

    /// The most recently saved (or seeded) book.
    pub fn stored(&self) -> Option<ContactBook> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactBookRepository for MockBookRepository {
    fn load(&self) -> StorageResult<ContactBook> {
        self.track_call("load");

        if *self.fail_load.lock().unwrap() {
            return Err(StorageError::Io {
                path: "mock.json".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "mock failure"),
            });
        }

        Ok(self.stored().unwrap_or_default())
    }

    fn save(&self, book: &ContactBook) -> StorageResult<()> {
        self.track_call("save");
        *self.stored.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
