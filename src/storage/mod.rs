//! In-memory storage layer for bookshelf.
//!
//! Data lives only as long as the process. Each collection keeps insertion
//! order and hands out ids from its own monotonic counter.
//!
//! ## Components
//!
//! - [`Collection`]: ordered records with lookup, append and removal
//! - [`EntityStore`]: the author and book collections plus the mutations
//!   that keep them consistent
//! - [`SharedStore`]: the lock-guarded handle passed to resolvers

mod collection;
mod seed;
mod store;

pub use collection::Collection;
pub use store::{AuthorPatch, BookPatch, EntityStore, SharedStore};
