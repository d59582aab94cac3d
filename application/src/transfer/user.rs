use kernel::prelude::entity::{DestructUser, Role, User};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UserDto {
    pub name: String,
    pub external_id: String,
    pub role: Role,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let DestructUser {
            name,
            external_id,
            role,
        } = value.into_destruct();
        Self {
            name: name.into(),
            external_id: external_id.into(),
            role,
        }
    }
}

pub struct LoginDto {
    pub name: String,
    pub external_id: String,
}
