use std::sync::Arc;

use tokio::sync::RwLock;

use super::collection::Collection;
use crate::{
    error::{BookshelfError, EntityKind, Result},
    model::{Author, Book, EntityId},
};

/// Handle to the store shared by every resolver.
///
/// Mutations take the write lock for their whole read-modify-write, so
/// concurrent requests never interleave inside one operation.
pub type SharedStore = Arc<RwLock<EntityStore>>;

/// Fields of a book that an update may overwrite. `None` leaves a field as is.
#[derive(Debug, Default, Clone)]
pub struct BookPatch {
    pub name: Option<String>,
    pub author_id: Option<EntityId>,
}

/// Fields of an author that an update may overwrite.
#[derive(Debug, Default, Clone)]
pub struct AuthorPatch {
    pub name: Option<String>,
}

/// Owns the author and book collections for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    pub authors: Collection<Author>,
    pub books: Collection<Book>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with the sample catalogue.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (id, name) in super::seed::AUTHORS {
            store.authors.append(Author::new(*id, *name));
        }
        for (id, name, author_id) in super::seed::BOOKS {
            store.books.append(Book::new(*id, *name, *author_id));
        }
        tracing::debug!(
            authors = store.authors.len(),
            books = store.books.len(),
            "Seeded store"
        );
        store
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn author(&self, id: EntityId) -> Option<&Author> {
        self.authors.find_by_id(id)
    }

    pub fn book(&self, id: EntityId) -> Option<&Book> {
        self.books.find_by_id(id)
    }

    /// Books whose `author_id` matches, in store order.
    pub fn books_by_author(&self, author_id: EntityId) -> Vec<Book> {
        self.books
            .all()
            .iter()
            .filter(|book| book.is_by(author_id))
            .cloned()
            .collect()
    }

    /// Accepts any `author_id`, including ones with no matching author.
    pub fn add_book(&mut self, name: String, author_id: EntityId) -> Book {
        let id = self.books.allocate_id();
        tracing::info!(id, name = %name, author_id, "Adding book");
        self.books.append(Book::new(id, name, author_id))
    }

    pub fn update_book(&mut self, id: EntityId, patch: BookPatch) -> Result<Book> {
        let book = self
            .books
            .find_by_id_mut(id)
            .ok_or_else(|| BookshelfError::not_found(EntityKind::Book, id))?;

        tracing::info!(id, "Updating book");
        if let Some(name) = patch.name {
            book.name = name;
        }
        if let Some(author_id) = patch.author_id {
            book.author_id = author_id;
        }
        Ok(book.clone())
    }

    pub fn delete_book(&mut self, id: EntityId) -> Result<Book> {
        let index = self
            .books
            .find_index_by_id(id)
            .ok_or_else(|| BookshelfError::not_found(EntityKind::Book, id))?;

        tracing::info!(id, "Deleting book");
        Ok(self.books.remove_at(index))
    }

    pub fn add_author(&mut self, name: String) -> Author {
        let id = self.authors.allocate_id();
        tracing::info!(id, name = %name, "Adding author");
        self.authors.append(Author::new(id, name))
    }

    pub fn update_author(&mut self, id: EntityId, patch: AuthorPatch) -> Result<Author> {
        let author = self
            .authors
            .find_by_id_mut(id)
            .ok_or_else(|| BookshelfError::not_found(EntityKind::Author, id))?;

        tracing::info!(id, "Updating author");
        if let Some(name) = patch.name {
            author.name = name;
        }
        Ok(author.clone())
    }

    /// Removes only the author; books pointing at it are left in place.
    pub fn delete_author(&mut self, id: EntityId) -> Result<Author> {
        let index = self
            .authors
            .find_index_by_id(id)
            .ok_or_else(|| BookshelfError::not_found(EntityKind::Author, id))?;

        tracing::info!(id, "Deleting author");
        Ok(self.authors.remove_at(index))
    }
}
