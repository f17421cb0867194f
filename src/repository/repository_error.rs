use crate::error::*;

#[derive(Debug)]
pub enum RepositoryError {
    FileNotFound,
    MalformedRecord,
}

impl IServiceError for RepositoryError {
    fn error_type(&self) -> String {
        use RepositoryError::*;

        match self {
            FileNotFound => "file_not_found",
            MalformedRecord => "malformed_record",
        }
        .to_string()
    }

    fn exit_code(&self) -> i32 {
        use RepositoryError::*;

        // sysexits: EX_NOINPUT / EX_DATAERR
        match self {
            FileNotFound => 66,
            MalformedRecord => 65,
        }
    }
}
