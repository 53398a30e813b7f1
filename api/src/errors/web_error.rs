use actix_web::{http::StatusCode, HttpResponse};
use encore_db::utils::errors::{DatabaseError, ErrorCode};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::Debug;

pub trait ConvertToWebError: Debug + Error + ToString {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn to_response(&self) -> HttpResponse;
}

fn internal_error(message: &str) -> HttpResponse {
    status_code_and_message(StatusCode::INTERNAL_SERVER_ERROR, message)
}

fn not_found() -> HttpResponse {
    status_code_and_message(StatusCode::NOT_FOUND, "Not found")
}

fn status_code_and_message(code: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(code).json(json!({ "error": message.to_string() }))
}

impl ConvertToWebError for r2d2::Error {
    fn to_response(&self) -> HttpResponse {
        error!("R2D2 error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for DatabaseError {
    fn status_code(&self) -> StatusCode {
        match self.error_code {
            ErrorCode::NoResults => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError { .. } | ErrorCode::ForeignKeyError => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ErrorCode::DuplicateKeyError => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn to_response(&self) -> HttpResponse {
        match &self.error_code {
            ErrorCode::NoResults => not_found(),
            ErrorCode::ValidationError { errors } => {
                let mut fields = HashMap::new();
                for (field, field_errors) in errors {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|error| match &error.message {
                            Some(message) => message.to_string(),
                            None => error.code.to_string(),
                        })
                        .collect();
                    fields.insert(*field, messages);
                }
                HttpResponse::UnprocessableEntity()
                    .json(json!({"error": "Validation error", "fields": fields}))
            }
            ErrorCode::ForeignKeyError => {
                warn!("Foreign key error: {}", self);
                status_code_and_message(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Referenced record does not exist",
                )
            }
            ErrorCode::DuplicateKeyError => {
                status_code_and_message(StatusCode::CONFLICT, "Duplicate record exists")
            }
            _ => {
                error!("Database error: {}", self);
                internal_error("Internal error")
            }
        }
    }
}
