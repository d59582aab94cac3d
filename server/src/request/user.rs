use application::transfer::LoginDto;
use serde::Deserialize;

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    name: String,
    id: String,
}

pub struct UserTransformer;

impl Intake<LoginRequest> for UserTransformer {
    type To = LoginDto;
    fn emit(&self, input: LoginRequest) -> Self::To {
        LoginDto {
            name: input.name,
            external_id: input.id,
        }
    }
}
