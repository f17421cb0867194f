use crate::domain::interface::*;
use crate::domain::model::*;
use crate::error::*;
use crate::infra::JsonlReader;
use std::path::Path;

/// Tweet records backed by a line-delimited JSON file on disk.
pub struct FileTweetRepository {
    reader: JsonlReader,
}

impl FileTweetRepository {
    pub fn new(reader: JsonlReader) -> Self {
        Self { reader }
    }
}

impl ITweetRepository for FileTweetRepository {
    fn load(&self, path: &Path) -> Result<RecordSet> {
        let values = self.reader.read_values(path)?;
        Ok(RecordSet::from(values))
    }
}
