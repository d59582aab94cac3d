use application::transfer::MemberDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    id: i32,
    name: String,
}

impl From<MemberDto> for MemberResponse {
    fn from(value: MemberDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

impl IntoResponse for MemberResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct MemberPresenter;

impl Exhaust<MemberDto> for MemberPresenter {
    type To = MemberResponse;
    fn emit(&self, output: MemberDto) -> Self::To {
        MemberResponse::from(output)
    }
}

impl Exhaust<Option<MemberDto>> for MemberPresenter {
    type To = Option<MemberResponse>;
    fn emit(&self, output: Option<MemberDto>) -> Self::To {
        output.map(MemberResponse::from)
    }
}

impl Exhaust<Vec<MemberDto>> for MemberPresenter {
    type To = Json<Vec<MemberResponse>>;
    fn emit(&self, output: Vec<MemberDto>) -> Self::To {
        Json(output.into_iter().map(MemberResponse::from).collect())
    }
}
