use application::transfer::{BookSelector, BorrowDto, GetMemberLoansDto, ReturnDto};
use serde::Deserialize;
use uuid::Uuid;

use crate::controller::Intake;

/// Body of borrow and return: `{"book_id": "..."}` or `{"title": "..."}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BookSelectorRequest {
    Id { book_id: Uuid },
    Title { title: String },
}

impl From<BookSelectorRequest> for BookSelector {
    fn from(value: BookSelectorRequest) -> Self {
        match value {
            BookSelectorRequest::Id { book_id } => BookSelector::Id(book_id),
            BookSelectorRequest::Title { title } => BookSelector::Title(title),
        }
    }
}

#[derive(Debug)]
pub struct BorrowRequest {
    member_id: i32,
    book: BookSelectorRequest,
}

impl BorrowRequest {
    pub fn new(member_id: i32, book: BookSelectorRequest) -> Self {
        Self { member_id, book }
    }
}

#[derive(Debug)]
pub struct ReturnRequest {
    member_id: i32,
    book: BookSelectorRequest,
}

impl ReturnRequest {
    pub fn new(member_id: i32, book: BookSelectorRequest) -> Self {
        Self { member_id, book }
    }
}

#[derive(Debug)]
pub struct GetMemberLoansRequest {
    member_id: i32,
}

impl GetMemberLoansRequest {
    pub fn new(member_id: i32) -> Self {
        Self { member_id }
    }
}

pub struct LoanTransformer;

impl Intake<BorrowRequest> for LoanTransformer {
    type To = BorrowDto;
    fn emit(&self, input: BorrowRequest) -> Self::To {
        BorrowDto {
            member_id: input.member_id,
            book: input.book.into(),
        }
    }
}

impl Intake<ReturnRequest> for LoanTransformer {
    type To = ReturnDto;
    fn emit(&self, input: ReturnRequest) -> Self::To {
        ReturnDto {
            member_id: input.member_id,
            book: input.book.into(),
        }
    }
}

impl Intake<GetMemberLoansRequest> for LoanTransformer {
    type To = GetMemberLoansDto;
    fn emit(&self, input: GetMemberLoansRequest) -> Self::To {
        GetMemberLoansDto {
            member_id: input.member_id,
        }
    }
}
