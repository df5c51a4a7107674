pub mod entry;
pub mod error;
pub mod lexicon;
pub mod quote;

pub use entry::{Entry, EntryDraft, WordType};
pub use error::ValidationError;
pub use lexicon::{LegacyLevel, Lexicon, LexiconLevel, SurfaceSubtype};
pub use quote::Quote;
