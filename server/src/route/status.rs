use application::service::LibraryStatusService;
use axum::extract::State;
use axum::routing::get;
use axum::Router;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::response::StatusPresenter;

pub trait StatusRouter {
    fn route_status(self) -> Self;
}

impl StatusRouter for Router<AppModule> {
    fn route_status(self) -> Self {
        self.route(
            "/status",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), StatusPresenter)
                    .bypass(|| async move { module.database().library_status().await })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
