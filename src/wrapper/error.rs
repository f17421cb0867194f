pub use crate::repository::RepositoryError;
use anyhow::Error;
use std::any::Any;

pub trait IServiceError: Any {
    fn error_type(&self) -> String {
        "internal_error".to_string()
    }

    fn exit_code(&self) -> i32 {
        // sysexits EX_SOFTWARE
        70
    }
}

#[derive(Debug)]
pub struct ServiceError {
    type_id: std::any::TypeId,
    error_type: String,
    exit_code: i32,
    inner: Error,
}

pub type Result<T> = std::result::Result<T, ServiceError>;

impl ServiceError {
    pub fn new<E>(err: impl IServiceError, detail: E) -> ServiceError
    where
        Error: From<E>,
    {
        ServiceError {
            type_id: err.type_id(),
            error_type: err.error_type(),
            exit_code: err.exit_code(),
            inner: From::from(detail),
        }
    }

    pub fn only(err: impl IServiceError) -> ServiceError {
        ServiceError {
            type_id: err.type_id(),
            error_type: err.error_type(),
            exit_code: err.exit_code(),
            inner: Error::msg("error"),
        }
    }

    pub fn into_inner(self) -> Error {
        self.inner
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn error_type(&self) -> String {
        self.error_type.clone()
    }

    pub fn is_error_of(&self, err: impl IServiceError) -> bool {
        self.type_id == err.type_id() && self.error_type() == err.error_type()
    }
}

// anyhow::Error can be treated as ServiceError
impl IServiceError for Error {}
