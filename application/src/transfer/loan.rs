use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{BorrowOutcome, DestructLoan, Loan, ReturnOutcome};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LoanDto {
    pub id: Uuid,
    pub member_id: i32,
    pub book_id: Uuid,
    pub loaned_at: OffsetDateTime,
    pub returned_at: Option<OffsetDateTime>,
}

impl LoanDto {
    pub fn is_active(&self) -> bool {
        self.returned_at.is_none()
    }
}

impl From<Loan> for LoanDto {
    fn from(value: Loan) -> Self {
        let DestructLoan {
            id,
            member_id,
            book_id,
            loaned_at,
            returned_at,
        } = value.into_destruct();
        Self {
            id: id.into(),
            member_id: member_id.into(),
            book_id: book_id.into(),
            loaned_at: loaned_at.into(),
            returned_at: returned_at.map(Into::into),
        }
    }
}

/// How the caller names the book of a borrow or return.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum BookSelector {
    Id(Uuid),
    Title(String),
}

pub struct BorrowDto {
    pub member_id: i32,
    pub book: BookSelector,
}

pub struct ReturnDto {
    pub member_id: i32,
    pub book: BookSelector,
}

pub struct GetMemberLoansDto {
    pub member_id: i32,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum BorrowResultDto {
    Borrowed(LoanDto),
    Unavailable,
}

impl From<BorrowOutcome> for BorrowResultDto {
    fn from(value: BorrowOutcome) -> Self {
        match value {
            BorrowOutcome::Borrowed(loan) => Self::Borrowed(LoanDto::from(loan)),
            BorrowOutcome::Unavailable => Self::Unavailable,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ReturnResultDto {
    Returned(LoanDto),
    NoMatchingLoan,
}

impl From<ReturnOutcome> for ReturnResultDto {
    fn from(value: ReturnOutcome) -> Self {
        match value {
            ReturnOutcome::Returned(loan) => Self::Returned(LoanDto::from(loan)),
            ReturnOutcome::NoMatchingLoan => Self::NoMatchingLoan,
        }
    }
}
