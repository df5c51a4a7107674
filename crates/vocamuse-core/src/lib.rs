pub mod error;
pub mod query;
pub mod render;
pub mod store;
pub mod vocabulary;

pub use error::{StorageError, VocabError};
pub use query::{Criteria, Predicate};
pub use store::{BlobStore, Collection, FileBlobStore, Loaded, MemoryBlobStore};
pub use vocabulary::{Applied, EXPORT_FILE_NAME, Vocabulary};
