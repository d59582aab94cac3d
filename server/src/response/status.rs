use application::transfer::{EditionDto, LibraryStatusDto};
use axum::Json;
use serde::Serialize;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    total_books: usize,
    available_books: usize,
    total_members: usize,
    active_loans: usize,
    summary: String,
    available: Vec<EditionResponse>,
}

#[derive(Debug, Serialize)]
pub struct EditionResponse {
    edition: String,
    copies: i32,
}

impl From<EditionDto> for EditionResponse {
    fn from(value: EditionDto) -> Self {
        Self {
            edition: value.edition,
            copies: value.copies,
        }
    }
}

pub struct StatusPresenter;

impl Exhaust<LibraryStatusDto> for StatusPresenter {
    type To = Json<StatusResponse>;
    fn emit(&self, output: LibraryStatusDto) -> Self::To {
        Json(StatusResponse {
            total_books: output.total_books,
            available_books: output.available_books,
            total_members: output.total_members,
            active_loans: output.active_loans,
            summary: output.summary,
            available: output
                .editions
                .into_iter()
                .map(EditionResponse::from)
                .collect(),
        })
    }
}
