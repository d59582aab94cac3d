use application::transfer::{CreateBookDto, DeleteBookDto, FindBookDto, GetBookDto};
use serde::Deserialize;
use uuid::Uuid;

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    title: String,
    author: String,
    year: i32,
    amount: i32,
}

/// `GET /books?title=...` narrows the listing to one title.
#[derive(Debug, Deserialize)]
pub struct FindBookRequest {
    title: Option<String>,
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: Uuid,
}

impl GetBookRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: Uuid,
}

impl DeleteBookRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct BookTransformer;

impl Intake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: CreateBookRequest) -> Self::To {
        CreateBookDto {
            title: input.title,
            author: input.author,
            year: input.year,
            amount: input.amount,
        }
    }
}

impl Intake<FindBookRequest> for BookTransformer {
    type To = Option<FindBookDto>;
    fn emit(&self, input: FindBookRequest) -> Self::To {
        input.title.map(|title| FindBookDto { title })
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}
