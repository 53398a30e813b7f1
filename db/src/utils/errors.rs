use diesel::result::ConnectionError;
use diesel::result::DatabaseErrorKind;
use diesel::result::Error as DieselError;
use diesel::result::QueryResult;
use log::Level;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use validator::{ValidationError, ValidationErrors};

#[derive(Clone, Debug, PartialEq)]
pub enum ErrorCode {
    InvalidInput,
    MissingInput,
    NoResults,
    QueryError,
    InsertError,
    UpdateError,
    DeleteError,
    DuplicateKeyError,
    ConnectionError,
    InternalError,
    ValidationError {
        errors: HashMap<&'static str, Vec<ValidationError>>,
    },
    ForeignKeyError,
    ParseError,
    Unknown,
}

pub fn get_error_message(code: &ErrorCode) -> (i32, String) {
    use self::ErrorCode::*;
    // In general, these errors try to match the HTTP status codes
    match code {
        // Input errors - 1000 range
        InvalidInput => (1000, "Invalid input".to_string()),
        MissingInput => (1100, "Missing input".to_string()),
        // No results - 2000 range. Query was successful, but the wrong amount of rows was returned
        NoResults => (2000, "No results".to_string()),
        // Query errors - 3000 range. Something went wrong during the query
        QueryError => (3000, "Query Error".to_string()),
        InsertError => (3100, "Could not insert record".to_string()),
        UpdateError => (3200, "Could not update record".to_string()),
        DeleteError => (3300, "Could not delete record".to_string()),
        DuplicateKeyError => (3400, "Duplicate key error".to_string()),
        ConnectionError => (4000, "Connection error".to_string()),
        // Internal server error - 5000, similar to the HTTP 500 errors
        InternalError => (5000, "Internal error".to_string()),
        ValidationError { errors: _ } => (7200, "Validation failed:".to_string()),
        ForeignKeyError => (
            7300,
            "Could not modify record because a referenced record does not exist".to_string(),
        ),
        ParseError => (7400, "Parse failed:".to_string()),
        // Try not to use this error
        Unknown => (10, "Unknown database error".to_string()),
    }
}

#[derive(Debug, PartialEq)]
pub struct DatabaseError {
    pub code: i32,
    pub message: String,
    pub cause: Option<String>,
    pub error_code: ErrorCode,
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref cause) = self.cause {
            write!(f, "\nCaused by: {}", cause)?;
        }
        Ok(())
    }
}

impl Error for DatabaseError {}

impl Serialize for DatabaseError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // 3 is the number of fields in the struct.
        let mut state = serializer.serialize_struct("DatabaseError", 3)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("cause", &self.cause)?;
        state.end()
    }
}

impl DatabaseError {
    pub fn new(error_code: ErrorCode, cause: Option<String>) -> DatabaseError {
        let (code, message) = get_error_message(&error_code);

        DatabaseError {
            code,
            message,
            cause,
            error_code,
        }
    }

    /// Wraps the error from a Result into a DatabaseError
    pub fn wrap<T>(
        error_code: ErrorCode,
        message: &str,
        res: Result<T, DieselError>,
    ) -> Result<T, DatabaseError> {
        res.map_err(|e| DatabaseError::from_diesel_error(error_code.clone(), message, e))
    }

    fn from_diesel_error(error_code: ErrorCode, message: &str, e: DieselError) -> DatabaseError {
        match e {
            DieselError::NotFound => DatabaseError::new(
                ErrorCode::NoResults,
                Some(format!("{}, {}", message, e)),
            ),
            DieselError::DatabaseError(kind, _) => {
                jlog!(Level::Debug, &format!("PG error {}", message), {
                    "error": e.to_string()
                });

                let error_code = match kind {
                    DatabaseErrorKind::UniqueViolation => ErrorCode::DuplicateKeyError,
                    DatabaseErrorKind::ForeignKeyViolation => ErrorCode::ForeignKeyError,
                    _ => error_code,
                };
                DatabaseError::new(error_code, Some(format!("{}, {}", message, e)))
            }
            _ => {
                jlog!(Level::Debug, &format!("PG error {}", message), {
                    "error": e.to_string()
                });

                DatabaseError::new(error_code, Some(format!("{}, {}", message, e)))
            }
        }
    }

    pub fn no_results<T>(message: &str) -> Result<T, DatabaseError> {
        Err(DatabaseError::new(
            ErrorCode::NoResults,
            Some(message.to_string()),
        ))
    }
}

impl From<ConnectionError> for DatabaseError {
    fn from(e: ConnectionError) -> Self {
        DatabaseError::new(ErrorCode::ConnectionError, Some(e.to_string()))
    }
}

// Diesel transactions need the closure error to absorb raw diesel errors
impl From<DieselError> for DatabaseError {
    fn from(e: DieselError) -> Self {
        DatabaseError::from_diesel_error(ErrorCode::Unknown, "Database error", e)
    }
}

impl From<ValidationErrors> for DatabaseError {
    fn from(e: ValidationErrors) -> Self {
        let message = e.to_string();
        let errors = e
            .field_errors()
            .into_iter()
            .map(|(field, errors)| (field, errors.clone()))
            .collect();
        DatabaseError::new(ErrorCode::ValidationError { errors }, Some(message))
    }
}

pub trait ConvertToDatabaseError<U> {
    fn to_db_error(self, code: ErrorCode, message: &'static str) -> Result<U, DatabaseError>;
}

impl<U> ConvertToDatabaseError<U> for QueryResult<U> {
    fn to_db_error(self, code: ErrorCode, message: &'static str) -> Result<U, DatabaseError> {
        DatabaseError::wrap(code, message, self)
    }
}
