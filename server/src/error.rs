use std::process::{ExitCode, Termination};

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde::Serialize;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl ErrorStatus {
    fn status(&self) -> StatusCode {
        match self.0.current_context() {
            KernelError::InvalidArgument => StatusCode::BAD_REQUEST,
            KernelError::NotFound => StatusCode::NOT_FOUND,
            KernelError::UniquenessViolation => StatusCode::CONFLICT,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Latest human readable attachment, else the context itself.
    fn message(&self) -> String {
        self.0
            .frames()
            .find_map(|frame| {
                frame
                    .downcast_ref::<String>()
                    .cloned()
                    .or_else(|| frame.downcast_ref::<&str>().map(|message| message.to_string()))
            })
            .unwrap_or_else(|| self.0.current_context().to_string())
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{:?}", self.0);
        } else {
            tracing::debug!("{:?}", self.0);
        }
        let body = ErrorResponse {
            error: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use error_stack::Report;
    use kernel::KernelError;

    use crate::error::ErrorStatus;

    #[test]
    fn maps_context_to_status() {
        let cases = [
            (KernelError::InvalidArgument, StatusCode::BAD_REQUEST),
            (KernelError::NotFound, StatusCode::NOT_FOUND),
            (KernelError::UniquenessViolation, StatusCode::CONFLICT),
            (KernelError::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (context, status) in cases {
            let response = ErrorStatus::from(Report::new(context)).into_response();
            assert_eq!(response.status(), status);
        }
    }

    #[test]
    fn message_prefers_latest_attachment() {
        let report = Report::new(KernelError::InvalidArgument)
            .attach_printable("first")
            .attach_printable("second".to_string());
        assert_eq!(ErrorStatus::from(report).message(), "second");

        let bare = ErrorStatus::from(Report::new(KernelError::NotFound));
        assert_eq!(bare.message(), "Entity not found");
    }
}
