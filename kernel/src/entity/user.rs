mod external_id;
mod name;
mod role;

pub use self::{external_id::*, name::*, role::*};
use std::fmt::Display;

use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct User {
    name: UserName,
    external_id: UserExternalId,
    role: Role,
}

impl User {
    pub fn new(name: UserName, external_id: UserExternalId) -> Self {
        let role = Role::of(&external_id);
        Self {
            name,
            external_id,
            role,
        }
    }
}

impl Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &String = self.name.as_ref();
        let id: &String = self.external_id.as_ref();
        write!(f, "{name} ({id})")
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{Role, User, UserExternalId, UserName};

    #[test]
    fn reserved_id_is_librarian() {
        let user = User::new(UserName::new("admin"), UserExternalId::new("0"));
        assert_eq!(user.role(), &Role::Librarian);
        assert_eq!(user.role().to_string(), "Librarian");
    }

    #[test]
    fn any_other_id_is_member() {
        for id in ["1", "00", " 0", "42", "abc"] {
            let user = User::new(UserName::new("reader"), UserExternalId::new(id));
            assert_eq!(user.role(), &Role::Member);
        }
    }

    #[test]
    fn display() {
        let user = User::new(UserName::new("Ariel"), UserExternalId::new("12"));
        assert_eq!(user.to_string(), "Ariel (12)");
    }
}
