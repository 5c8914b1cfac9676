//! Wiki error taxonomy and its rendering as HTML error pages.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::templates;

pub type Result<T> = std::result::Result<T, WikiError>;

#[derive(Debug, Error)]
pub enum WikiError {
    #[error("entry not found: {0}")]
    NotFound(String),

    #[error("entry already exists: {0}")]
    AlreadyExists(String),

    #[error("invalid form input: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    #[error("the wiki has no entries yet")]
    NoEntries,

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl WikiError {
    /// Message shown to the visitor on the error page
    pub fn user_message(&self) -> String {
        match self {
            WikiError::NotFound(_) => "This page cannot be found".to_string(),
            WikiError::AlreadyExists(_) => "This page already exists.".to_string(),
            WikiError::ValidationFailed(reasons) => {
                format!("Invalid input: {}", reasons.join("; "))
            }
            WikiError::NoEntries => {
                "There are no entries yet. Create the first one!".to_string()
            }
            WikiError::Storage(_) | WikiError::Template(_) => {
                "Something went wrong while loading this page.".to_string()
            }
        }
    }
}

impl ResponseError for WikiError {
    fn status_code(&self) -> StatusCode {
        match self {
            WikiError::NotFound(_) | WikiError::NoEntries => StatusCode::NOT_FOUND,
            WikiError::AlreadyExists(_) => StatusCode::CONFLICT,
            WikiError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            WikiError::Storage(_) | WikiError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("[WIKI] {}", self);
        } else {
            log::debug!("[WIKI] {}", self);
        }

        let message = self.user_message();
        let body = templates::render_error(&message).unwrap_or_else(|e| {
            log::error!("[WIKI] Failed to render error page: {}", e);
            message
        });

        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(WikiError::NotFound("Git".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(WikiError::AlreadyExists("Git".into()).status_code(), StatusCode::CONFLICT);
        assert_eq!(
            WikiError::ValidationFailed(vec!["Title is required".into()]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(WikiError::NoEntries.status_code(), StatusCode::NOT_FOUND);
        let io = std::io::Error::other("disk on fire");
        assert_eq!(WikiError::from(io).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_message_lists_reasons() {
        let err = WikiError::ValidationFailed(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "invalid form input: a; b");
        assert_eq!(err.user_message(), "Invalid input: a; b");
    }

    #[test]
    fn test_error_page_contains_message() {
        let resp = WikiError::NotFound("Missing".into()).error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let ct = resp.headers().get(actix_web::http::header::CONTENT_TYPE).unwrap();
        assert!(ct.to_str().unwrap().starts_with("text/html"));
    }
}
