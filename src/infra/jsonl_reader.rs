use crate::error::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug)]
pub enum JsonlReaderError {
    ReadError,
}

impl IServiceError for JsonlReaderError {
    fn error_type(&self) -> String {
        use JsonlReaderError::*;

        match self {
            ReadError => "read_error",
        }
        .to_string()
    }

    fn exit_code(&self) -> i32 {
        use JsonlReaderError::*;

        // sysexits EX_IOERR
        match self {
            ReadError => 74,
        }
    }
}

/// Line-delimited JSON reader: one value per non-blank line.
#[derive(Clone, Default)]
pub struct JsonlReader;

impl JsonlReader {
    pub fn new() -> JsonlReader {
        JsonlReader
    }

    /// Reads the whole file. The first malformed line fails the load; there
    /// is no skip-and-continue.
    pub fn read_values(&self, path: &Path) -> Result<Vec<serde_json::Value>> {
        let file = File::open(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                ServiceError::new(
                    RepositoryError::FileNotFound,
                    anyhow::Error::from(err).context(format!("no such file: {}", path.display())),
                )
            } else {
                ServiceError::new(JsonlReaderError::ReadError, err)
            }
        })?;

        let mut values = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|err| ServiceError::new(JsonlReaderError::ReadError, err))?;
            if line.trim().is_empty() {
                continue;
            }
            let value: serde_json::Value = serde_json::from_str(&line).map_err(|err| {
                ServiceError::new(
                    RepositoryError::MalformedRecord,
                    anyhow::Error::from(err).context(format!("line {}", index + 1)),
                )
            })?;
            values.push(value);
        }

        Ok(values)
    }
}
