//! # Bookshelf - an in-memory GraphQL service for authors and books
//!
//! Bookshelf keeps two related collections, authors and their books, in
//! memory and exposes them through one GraphQL endpoint. Relationship fields
//! (`Book.author`, `Author.books`) are resolved on demand against the live
//! store, so clients never join the data themselves.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the API with GraphiQL on http://127.0.0.1:5000/graphql
//! bookshelf serve
//!
//! # One-off query against the sample catalogue
//! bookshelf query '{ book(id: 1) { name author { name } } }'
//!
//! # One-off mutation
//! bookshelf mutate 'addAuthor(name: "Ursula K. Le Guin") { id }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Author, Book)
//! - [`storage`]: In-memory entity store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.bookshelf.toml` configuration files and discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum transport.
pub mod graphql;

/// Data models for authors and books.
pub mod model;

/// In-memory storage layer.
pub mod storage;

pub mod logging;
