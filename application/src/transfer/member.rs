use kernel::prelude::entity::{DestructMember, Member};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MemberDto {
    pub id: i32,
    pub name: String,
}

impl From<Member> for MemberDto {
    fn from(value: Member) -> Self {
        let DestructMember { id, name } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

pub struct GetMemberDto {
    pub id: i32,
}

pub struct CreateMemberDto {
    pub name: String,
    pub id: i32,
}

pub struct DeleteMemberDto {
    pub id: i32,
}
