// Stop-word lists — pluggable sources behind a load-once cache.

pub mod source;
pub mod store;
pub mod traits;

pub use source::{BuiltinSource, FileSource};
pub use store::StopWordStore;
pub use traits::StopWordSource;
