use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::entity::UserExternalId;

/// Identifier reserved for the librarian account.
pub static LIBRARIAN_ID: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Librarian,
    Member,
}

impl Role {
    pub fn of(id: &UserExternalId) -> Self {
        let id: &String = id.as_ref();
        if id == LIBRARIAN_ID {
            Self::Librarian
        } else {
            Self::Member
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Librarian => write!(f, "Librarian"),
            Role::Member => write!(f, "Member"),
        }
    }
}
