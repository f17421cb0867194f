use crate::domain::interface::ITableWriter;
use crate::domain::model::Table;
use crate::error::*;
use std::path::Path;

#[derive(Debug)]
pub enum CsvWriterError {
    WriteError,
}

impl IServiceError for CsvWriterError {
    fn error_type(&self) -> String {
        use CsvWriterError::*;

        match self {
            WriteError => "write_error",
        }
        .to_string()
    }

    fn exit_code(&self) -> i32 {
        use CsvWriterError::*;

        // sysexits EX_IOERR
        match self {
            WriteError => 74,
        }
    }
}

impl From<csv::Error> for ServiceError {
    fn from(err: csv::Error) -> ServiceError {
        ServiceError::new(CsvWriterError::WriteError, err)
    }
}

/// Serializes a table as a CSV file: header row, then one row per record.
/// An existing file at the target path is overwritten.
#[derive(Clone, Default)]
pub struct CsvTableWriter;

impl CsvTableWriter {
    pub fn new() -> CsvTableWriter {
        CsvTableWriter
    }
}

impl ITableWriter for CsvTableWriter {
    fn write(&self, table: &Table, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(table.headers())?;
        for row in table.rows() {
            writer.write_record(row.iter().map(|cell| cell.render()))?;
        }
        writer
            .flush()
            .map_err(|err| ServiceError::new(CsvWriterError::WriteError, err))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Cell, Column};

    fn sample_table() -> Table {
        let mut table = Table::new();
        table.insert(
            "created_at",
            Column::per_row(vec![Cell::Str("t1".into()), Cell::Str("t2".into())]),
        );
        table.insert(
            "favorite_count",
            Column::per_row(vec![Cell::Int(7), Cell::Empty]),
        );
        table
    }

    #[test]
    fn it_should_write_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        CsvTableWriter::new().write(&sample_table(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["created_at,favorite_count", "t1,7", "t2,"]);
    }

    #[test]
    fn it_should_overwrite_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale contents\nstale line\nstale line\n").unwrap();

        CsvTableWriter::new().write(&sample_table(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 3);
        assert!(contents.starts_with("created_at"));
    }
}
