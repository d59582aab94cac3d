mod book;
mod loan;
mod member;
mod status;
mod user;

pub use self::{book::*, loan::*, member::*, status::*, user::*};

#[cfg(test)]
mod test {
    use std::error::Error;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use driver::database::InMemoryDatabase;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::handler::AppModule;
    use crate::route::{BookRouter, LoanRouter, MemberRouter, StatusRouter, UserRouter};

    type TestResult<T = ()> = Result<T, Box<dyn Error>>;

    fn app() -> Router {
        Router::new()
            .route_book()
            .route_member()
            .route_loan()
            .route_user()
            .route_status()
            .with_state(AppModule::new(InMemoryDatabase::new()))
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> TestResult<(StatusCode, Vec<u8>)> {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
            None => request.body(Body::empty())?,
        };
        let response = app.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, bytes.to_vec()))
    }

    fn dune(amount: i32) -> Value {
        json!({ "title": "Dune", "author": "Frank Herbert", "year": 1965, "amount": amount })
    }

    #[tokio::test]
    async fn create_book_and_filter_by_title() -> TestResult {
        let app = app();
        let (status, body) = send(&app, "POST", "/books", Some(dune(2))).await?;
        assert_eq!(status, StatusCode::CREATED);
        let created: Value = serde_json::from_slice(&body)?;
        assert_eq!(created["title"], "Dune");
        assert_eq!(created["total"], 2);

        let emma = json!({ "title": "Emma", "author": "Jane Austen", "year": 1815, "amount": 1 });
        let (status, _) = send(&app, "POST", "/books", Some(emma)).await?;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(&app, "GET", "/books?title=Dune", None).await?;
        assert_eq!(status, StatusCode::OK);
        let titled: Vec<Value> = serde_json::from_slice(&body)?;
        assert_eq!(titled.len(), 1);
        assert_eq!(titled[0]["id"], created["id"]);

        let (_, body) = send(&app, "GET", "/books", None).await?;
        let all: Vec<Value> = serde_json::from_slice(&body)?;
        assert_eq!(all.len(), 2);

        let (status, body) = send(&app, "POST", "/books", Some(dune(-1))).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: Value = serde_json::from_slice(&body)?;
        assert_eq!(error["error"], "Book amount cannot be negative.");
        Ok(())
    }

    #[tokio::test]
    async fn missing_entities_answer_not_found() -> TestResult {
        let app = app();
        let missing = Uuid::new_v4();

        let (status, body) = send(&app, "GET", &format!("/books/{missing}"), None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());

        let (status, body) = send(&app, "GET", "/members/7", None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());

        let (status, body) = send(&app, "DELETE", &format!("/books/{missing}"), None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: Value = serde_json::from_slice(&body)?;
        assert_eq!(error["error"], format!("No book with ID {missing}."));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_member_conflicts() -> TestResult {
        let app = app();
        let alice = json!({ "name": "Alice", "id": 1 });
        let (status, _) = send(&app, "POST", "/members", Some(alice)).await?;
        assert_eq!(status, StatusCode::CREATED);

        let bob = json!({ "name": "Bob", "id": 1 });
        let (status, body) = send(&app, "POST", "/members", Some(bob)).await?;
        assert_eq!(status, StatusCode::CONFLICT);
        let error: Value = serde_json::from_slice(&body)?;
        assert_eq!(error["error"], "Member ID 1 must be unique.");

        let (_, body) = send(&app, "GET", "/members", None).await?;
        let members: Vec<Value> = serde_json::from_slice(&body)?;
        assert_eq!(members, vec![json!({ "id": 1, "name": "Alice" })]);
        Ok(())
    }

    #[tokio::test]
    async fn borrow_and_return_report_outcome() -> TestResult {
        let app = app();
        let (_, body) = send(&app, "POST", "/books", Some(dune(1))).await?;
        let book: Value = serde_json::from_slice(&body)?;
        let member = json!({ "name": "Alice", "id": 1 });
        send(&app, "POST", "/members", Some(member)).await?;

        let by_title = json!({ "title": "Dune" });
        let by_id = json!({ "book_id": book["id"] });
        let outcomes = [
            ("/members/1/borrow", by_title.clone(), "borrowed"),
            ("/members/1/borrow", by_title, "unavailable"),
            ("/members/1/return", by_id.clone(), "returned"),
            ("/members/1/return", by_id, "no_matching_loan"),
        ];
        for (uri, body, outcome) in outcomes {
            let (status, body) = send(&app, "POST", uri, Some(body)).await?;
            assert_eq!(status, StatusCode::OK);
            let result: Value = serde_json::from_slice(&body)?;
            assert_eq!(result["outcome"], outcome);
        }

        let (_, body) = send(&app, "GET", "/members/1/loans", None).await?;
        let loans: Vec<Value> = serde_json::from_slice(&body)?;
        assert_eq!(loans.len(), 1);
        assert_eq!(loans[0]["active"], false);

        let (_, body) = send(&app, "GET", "/status", None).await?;
        let status: Value = serde_json::from_slice(&body)?;
        assert_eq!(status["active_loans"], 0);
        assert_eq!(status["available_books"], 1);
        Ok(())
    }
}
