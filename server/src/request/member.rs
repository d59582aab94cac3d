use application::transfer::{CreateMemberDto, DeleteMemberDto, GetMemberDto};
use serde::Deserialize;

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
pub struct CreateMemberRequest {
    name: String,
    id: i32,
}

#[derive(Debug)]
pub struct GetMemberRequest {
    id: i32,
}

impl GetMemberRequest {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteMemberRequest {
    id: i32,
}

impl DeleteMemberRequest {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

pub struct MemberTransformer;

impl Intake<CreateMemberRequest> for MemberTransformer {
    type To = CreateMemberDto;
    fn emit(&self, input: CreateMemberRequest) -> Self::To {
        CreateMemberDto {
            name: input.name,
            id: input.id,
        }
    }
}

impl Intake<GetMemberRequest> for MemberTransformer {
    type To = GetMemberDto;
    fn emit(&self, input: GetMemberRequest) -> Self::To {
        GetMemberDto { id: input.id }
    }
}

impl Intake<DeleteMemberRequest> for MemberTransformer {
    type To = DeleteMemberDto;
    fn emit(&self, input: DeleteMemberRequest) -> Self::To {
        DeleteMemberDto { id: input.id }
    }
}
