use crate::domain::model::*;
use crate::error::Result;
use std::path::Path;

pub trait ITweetRepository {
    fn load(&self, path: &Path) -> Result<RecordSet>;
}

pub trait ITableWriter {
    fn write(&self, table: &Table, path: &Path) -> Result<()>;
}
