//! GraphQL schema, resolvers and HTTP transport for bookshelf.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL at the same URL)
//! bookshelf serve --port 5000
//!
//! # Execute a query from CLI
//! bookshelf query '{ authors { name books { name } } }'
//!
//! # Execute a mutation from CLI
//! bookshelf mutate 'addBook(name: "The Hobbit", authorId: 2) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `books`, `authors`, `book`, `author`
//! - **Mutations**: `addBook`, `updateBook`, `deleteBook`, `addAuthor`,
//!   `updateAuthor`, `deleteAuthor`
//!
//! `Book.author` and `Author.books` are resolved only when selected and read
//! the store at that moment.

mod schema;
mod server;
mod types;

pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{router, run_server};
pub use types::*;
