use application::service::{
    BorrowService, CreateMemberService, DeleteMemberService, GetLoanService, GetMemberService,
    ReturnService,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    BookSelectorRequest, BorrowRequest, CreateMemberRequest, DeleteMemberRequest,
    GetMemberLoansRequest, GetMemberRequest, LoanTransformer, MemberTransformer, ReturnRequest,
};
use crate::response::{LoanPresenter, MemberPresenter, MemberResponse};

pub trait MemberRouter {
    fn route_member(self) -> Self;
}

impl MemberRouter for Router<AppModule> {
    fn route_member(self) -> Self {
        self.route(
            "/members",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), MemberPresenter)
                    .bypass(|| async move { module.database().get_all_members().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>, Json(req): Json<CreateMemberRequest>| async move {
                    Controller::new(MemberTransformer, MemberPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.database().create_member(dto).await })
                        .await
                        .map(|member| (StatusCode::CREATED, member))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/members/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<i32>| async move {
                    Controller::new(MemberTransformer, MemberPresenter)
                        .intake(GetMemberRequest::new(id))
                        .handle(|dto| async move { module.database().get_member(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(MemberResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<i32>| async move {
                    Controller::new(MemberTransformer, MemberPresenter)
                        .intake(DeleteMemberRequest::new(id))
                        .handle(|dto| async move { module.database().delete_member(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/members/:id/loans",
            get(
                |State(module): State<AppModule>, Path(id): Path<i32>| async move {
                    Controller::new(LoanTransformer, LoanPresenter)
                        .intake(GetMemberLoansRequest::new(id))
                        .handle(|dto| async move { module.database().get_member_loans(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/members/:id/borrow",
            post(
                |State(module): State<AppModule>,
                 Path(id): Path<i32>,
                 Json(req): Json<BookSelectorRequest>| async move {
                    Controller::new(LoanTransformer, LoanPresenter)
                        .intake(BorrowRequest::new(id, req))
                        .handle(|dto| async move { module.database().borrow_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/members/:id/return",
            post(
                |State(module): State<AppModule>,
                 Path(id): Path<i32>,
                 Json(req): Json<BookSelectorRequest>| async move {
                    Controller::new(LoanTransformer, LoanPresenter)
                        .intake(ReturnRequest::new(id, req))
                        .handle(|dto| async move { module.database().return_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
