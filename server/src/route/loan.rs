use application::service::GetLoanService;
use axum::extract::State;
use axum::routing::get;
use axum::Router;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::response::LoanPresenter;

pub trait LoanRouter {
    fn route_loan(self) -> Self;
}

impl LoanRouter for Router<AppModule> {
    fn route_loan(self) -> Self {
        self.route(
            "/loans",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), LoanPresenter)
                    .bypass(|| async move { module.database().get_all_loans().await })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
