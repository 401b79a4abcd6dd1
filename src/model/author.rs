use serde::{Deserialize, Serialize};

use super::{Entity, EntityId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: EntityId,
    pub name: String,
}

impl Author {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Entity for Author {
    fn id(&self) -> EntityId {
        self.id
    }
}
