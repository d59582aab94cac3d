use application::transfer::UserDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kernel::prelude::entity::Role;
use serde::Serialize;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    name: String,
    id: String,
    role: Role,
}

impl From<UserDto> for UserResponse {
    fn from(value: UserDto) -> Self {
        Self {
            name: value.name,
            id: value.external_id,
            role: value.role,
        }
    }
}

impl IntoResponse for UserResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct UserPresenter;

impl Exhaust<UserDto> for UserPresenter {
    type To = UserResponse;
    fn emit(&self, output: UserDto) -> Self::To {
        UserResponse::from(output)
    }
}

impl Exhaust<Vec<UserDto>> for UserPresenter {
    type To = Json<Vec<UserResponse>>;
    fn emit(&self, output: Vec<UserDto>) -> Self::To {
        Json(output.into_iter().map(UserResponse::from).collect())
    }
}
