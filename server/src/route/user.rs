use application::service::{GetUserService, LoginService};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{LoginRequest, UserTransformer};
use crate::response::UserPresenter;

pub trait UserRouter {
    fn route_user(self) -> Self;
}

impl UserRouter for Router<AppModule> {
    fn route_user(self) -> Self {
        self.route(
            "/login",
            post(
                |State(module): State<AppModule>, Json(req): Json<LoginRequest>| async move {
                    Controller::new(UserTransformer, UserPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.database().login(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/users",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), UserPresenter)
                    .bypass(|| async move { module.database().get_all_users().await })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
