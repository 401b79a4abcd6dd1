use crate::model::{Entity, EntityId};

/// An ordered, in-memory collection of entities with its own id sequence.
///
/// Ids come from a counter that only moves forward, so an id freed by
/// [`remove_at`](Collection::remove_at) is never handed out again.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    next_id: EntityId,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next unused id.
    pub fn allocate_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn find_by_id(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn find_index_by_id(&self, id: EntityId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Push an entity to the end of the collection and return a copy of it.
    ///
    /// The id sequence is advanced past `entity.id()` so seeded records with
    /// explicit ids cannot be collided with later.
    pub fn append(&mut self, entity: T) -> T {
        if entity.id() >= self.next_id {
            self.next_id = entity.id() + 1;
        }
        self.items.push(entity.clone());
        entity
    }

    /// Panics if `index` is out of bounds, like [`Vec::remove`].
    pub fn remove_at(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Author;

    fn collection_with(names: &[&str]) -> Collection<Author> {
        let mut authors = Collection::new();
        for name in names {
            let id = authors.allocate_id();
            authors.append(Author::new(id, *name));
        }
        authors
    }

    #[test]
    fn test_allocate_id_starts_at_one() {
        let mut authors: Collection<Author> = Collection::new();
        assert_eq!(authors.allocate_id(), 1);
        assert_eq!(authors.allocate_id(), 2);
    }

    #[test]
    fn test_find_by_id_and_index() {
        let authors = collection_with(&["Ada", "Grace", "Barbara"]);

        assert_eq!(authors.find_by_id(2).map(|a| a.name.as_str()), Some("Grace"));
        assert_eq!(authors.find_index_by_id(3), Some(2));
        assert!(authors.find_by_id(99).is_none());
        assert!(authors.find_index_by_id(99).is_none());
    }

    #[test]
    fn test_remove_at_returns_removed_entity_and_keeps_order() {
        let mut authors = collection_with(&["Ada", "Grace", "Barbara"]);

        let removed = authors.remove_at(1);
        assert_eq!(removed, Author::new(2, "Grace"));

        let ids: Vec<_> = authors.all().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut authors = collection_with(&["Ada", "Grace", "Barbara"]);

        let index = authors.find_index_by_id(3).unwrap();
        authors.remove_at(index);
        let index = authors.find_index_by_id(1).unwrap();
        authors.remove_at(index);

        let id = authors.allocate_id();
        assert_eq!(id, 4);
        authors.append(Author::new(id, "Frances"));

        let ids: Vec<_> = authors.all().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_append_with_explicit_id_advances_sequence() {
        let mut authors: Collection<Author> = Collection::new();
        authors.append(Author::new(10, "Seeded"));

        assert_eq!(authors.allocate_id(), 11);
    }

    #[test]
    fn test_append_with_lower_id_keeps_sequence() {
        let mut authors = collection_with(&["Ada", "Grace"]);
        authors.append(Author::new(1, "Duplicate"));

        assert_eq!(authors.allocate_id(), 3);
        assert_eq!(authors.len(), 3);
    }

    #[test]
    fn test_find_by_id_mut_updates_in_place() {
        let mut authors = collection_with(&["Ada"]);
        if let Some(author) = authors.find_by_id_mut(1) {
            author.name = "Ada Lovelace".to_string();
        }

        assert_eq!(authors.all()[0].name, "Ada Lovelace");
    }
}
