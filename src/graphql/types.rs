use crate::model::{self, EntityId};
use async_graphql::{ComplexObject, Context, SimpleObject};

use super::schema::store;

/// This represents a book written by an author
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(complex)]
pub struct Book {
    pub id: EntityId,
    pub name: String,
    pub author_id: EntityId,
}

#[ComplexObject]
impl Book {
    /// The author whose id matches `authorId`, or null if there is none
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let store = store(ctx)?.read().await;
        Ok(store.author(self.author_id).cloned().map(Author::from))
    }
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self {
            id: b.id,
            name: b.name,
            author_id: b.author_id,
        }
    }
}

/// This represents an author of a book
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(complex)]
pub struct Author {
    pub id: EntityId,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// Every book whose `authorId` matches this author
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let store = store(ctx)?.read().await;
        Ok(store
            .books_by_author(self.id)
            .into_iter()
            .map(Book::from)
            .collect())
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}
