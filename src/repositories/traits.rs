use crate::error::StorageResult;
use crate::models::ContactBook;

/// Repository for persisting the whole contact book.
///
/// The book is read once when a session starts and written back wholesale
/// when it ends. Implementations decide where and how it is stored (file,
/// in-memory mock).
pub trait ContactBookRepository {
    /// Load the persisted book, or an empty one if nothing has been saved yet.
    fn load(&self) -> StorageResult<ContactBook>;

    /// Replace the persisted book with `book`.
    fn save(&self, book: &ContactBook) -> StorageResult<()>;
}
