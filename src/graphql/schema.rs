use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Schema};

use crate::model::EntityId;
use crate::storage::{AuthorPatch, BookPatch, SharedStore};

use super::types::*;

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: SharedStore) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

pub(super) fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// List of All Books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let store = store(ctx)?.read().await;
        Ok(store.books.all().iter().cloned().map(Book::from).collect())
    }

    /// List of All Authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let store = store(ctx)?.read().await;
        Ok(store.authors.all().iter().cloned().map(Author::from).collect())
    }

    /// Get a book by ID
    async fn book(
        &self,
        ctx: &Context<'_>,
        id: Option<EntityId>,
    ) -> async_graphql::Result<Option<Book>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = store(ctx)?.read().await;
        Ok(store.book(id).cloned().map(Book::from))
    }

    /// Get an author by ID
    async fn author(
        &self,
        ctx: &Context<'_>,
        id: Option<EntityId>,
    ) -> async_graphql::Result<Option<Author>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = store(ctx)?.read().await;
        Ok(store.author(id).cloned().map(Author::from))
    }
}

pub struct MutationRoot;

// Return types stay nullable; a failed root field is left out of `data` and
// reported in `errors`, while sibling fields still resolve.
/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: EntityId,
    ) -> async_graphql::Result<Option<Book>> {
        let mut store = store(ctx)?.write().await;
        Ok(Some(store.add_book(name, author_id).into()))
    }

    /// Update a book
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: EntityId,
        name: Option<String>,
        author_id: Option<EntityId>,
    ) -> async_graphql::Result<Option<Book>> {
        let mut store = store(ctx)?.write().await;
        let book = store
            .update_book(id, BookPatch { name, author_id })
            .map_err(|e| e.extend())?;
        Ok(Some(book.into()))
    }

    /// Delete a book
    async fn delete_book(
        &self,
        ctx: &Context<'_>,
        id: EntityId,
    ) -> async_graphql::Result<Option<Book>> {
        let mut store = store(ctx)?.write().await;
        let book = store.delete_book(id).map_err(|e| e.extend())?;
        Ok(Some(book.into()))
    }

    /// Add an author
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<Author>> {
        let mut store = store(ctx)?.write().await;
        Ok(Some(store.add_author(name).into()))
    }

    /// Update an author
    async fn update_author(
        &self,
        ctx: &Context<'_>,
        id: EntityId,
        name: Option<String>,
    ) -> async_graphql::Result<Option<Author>> {
        let mut store = store(ctx)?.write().await;
        let author = store
            .update_author(id, AuthorPatch { name })
            .map_err(|e| e.extend())?;
        Ok(Some(author.into()))
    }

    /// Delete an author
    async fn delete_author(
        &self,
        ctx: &Context<'_>,
        id: EntityId,
    ) -> async_graphql::Result<Option<Author>> {
        let mut store = store(ctx)?.write().await;
        let author = store.delete_author(id).map_err(|e| e.extend())?;
        Ok(Some(author.into()))
    }
}
