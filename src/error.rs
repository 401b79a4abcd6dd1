use std::fmt;

use async_graphql::ErrorExtensions;
use thiserror::Error;

use crate::model::EntityId;

/// Which collection an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Author,
    Book,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Author => write!(f, "Author"),
            EntityKind::Book => write!(f, "Book"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BookshelfError {
    #[error("{kind} not found")]
    NotFound { kind: EntityKind, id: EntityId },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config already exists at {0}")]
    AlreadyInitialized(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl BookshelfError {
    pub fn not_found(kind: EntityKind, id: EntityId) -> Self {
        BookshelfError::NotFound { kind, id }
    }

    /// Machine-readable code attached to GraphQL errors.
    pub fn code(&self) -> &'static str {
        match self {
            BookshelfError::NotFound { .. } => "NOT_FOUND",
            _ => "INTERNAL",
        }
    }
}

impl ErrorExtensions for BookshelfError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            if let BookshelfError::NotFound { id, .. } = self {
                e.set("id", *id);
            }
        })
    }
}

pub type Result<T> = std::result::Result<T, BookshelfError>;
