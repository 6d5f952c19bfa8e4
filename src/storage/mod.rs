//! File system storage management
//!
//! Translates caller-supplied file names into paths under the configured
//! upload root and performs store, retrieve, and delete operations.

pub mod operations;
pub mod results;
pub mod validation;

pub use operations::{delete_file, retrieve_file, store_file};
pub use results::{DeleteResult, RetrieveResult, StoreResult};
pub use validation::resolve_within_root;
