use application::transfer::{BorrowResultDto, LoanDto, ReturnResultDto};
use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct LoanResponse {
    id: Uuid,
    member_id: i32,
    book_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    loaned_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    returned_at: Option<OffsetDateTime>,
    active: bool,
}

impl From<LoanDto> for LoanResponse {
    fn from(value: LoanDto) -> Self {
        Self {
            active: value.is_active(),
            id: value.id,
            member_id: value.member_id,
            book_id: value.book_id,
            loaned_at: value.loaned_at,
            returned_at: value.returned_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BorrowResponse {
    Borrowed { loan: LoanResponse },
    Unavailable,
}

#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReturnResponse {
    Returned { loan: LoanResponse },
    NoMatchingLoan,
}

pub struct LoanPresenter;

impl Exhaust<Vec<LoanDto>> for LoanPresenter {
    type To = Json<Vec<LoanResponse>>;
    fn emit(&self, output: Vec<LoanDto>) -> Self::To {
        Json(output.into_iter().map(LoanResponse::from).collect())
    }
}

impl Exhaust<BorrowResultDto> for LoanPresenter {
    type To = Json<BorrowResponse>;
    fn emit(&self, output: BorrowResultDto) -> Self::To {
        Json(match output {
            BorrowResultDto::Borrowed(loan) => BorrowResponse::Borrowed { loan: loan.into() },
            BorrowResultDto::Unavailable => BorrowResponse::Unavailable,
        })
    }
}

impl Exhaust<ReturnResultDto> for LoanPresenter {
    type To = Json<ReturnResponse>;
    fn emit(&self, output: ReturnResultDto) -> Self::To {
        Json(match output {
            ReturnResultDto::Returned(loan) => ReturnResponse::Returned { loan: loan.into() },
            ReturnResultDto::NoMatchingLoan => ReturnResponse::NoMatchingLoan,
        })
    }
}
