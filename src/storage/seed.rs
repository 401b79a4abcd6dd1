//! Sample catalogue loaded when `store.seed` is enabled.

use crate::model::EntityId;

pub(super) const AUTHORS: &[(EntityId, &str)] = &[
    (1, "J. K. Rowling"),
    (2, "J. R. R. Tolkien"),
    (3, "Brent Weeks"),
];

pub(super) const BOOKS: &[(EntityId, &str, EntityId)] = &[
    (1, "Harry Potter and the Chamber of Secrets", 1),
    (2, "Harry Potter and the Prisoner of Azkaban", 1),
    (3, "Harry Potter and the Goblet of Fire", 1),
    (4, "The Fellowship of the Ring", 2),
    (5, "The Two Towers", 2),
    (6, "The Return of the King", 2),
    (7, "The Way of Shadows", 3),
    (8, "Beyond the Shadows", 3),
];
