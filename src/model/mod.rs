//! Data models for bookshelf.
//!
//! - [`Author`]: a writer, identified by an integer id
//! - [`Book`]: a title owned by one author through `author_id`
//!
//! The link from a book to its author is not enforced; a book may point at an
//! author id that does not exist.

mod author;
mod book;

pub use author::Author;
pub use book::Book;

/// Identifier type shared by both collections.
pub type EntityId = i32;

/// A record stored in a [`Collection`](crate::storage::Collection).
pub trait Entity: Clone {
    fn id(&self) -> EntityId;
}
