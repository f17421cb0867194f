use crate::domain::interface::*;
use crate::domain::model::*;
use crate::domain::service::sentiment_service::SentimentService;
use crate::error::*;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Output column names, fixed order.
pub const TABLE_COLUMNS: [&str; 15] = [
    "created_at",
    "source",
    "original_text",
    "polarity",
    "subjectivity",
    "lang",
    "favorite_count",
    "retweet_count",
    "original_author",
    "followers_count",
    "friends_count",
    "possibly_sensitive",
    "hashtags",
    "user_mentions",
    "location",
];

#[derive(Debug)]
pub enum ExtractError {
    MissingField,
}

impl IServiceError for ExtractError {
    fn error_type(&self) -> String {
        use ExtractError::*;

        match self {
            MissingField => "missing_field",
        }
        .to_string()
    }

    fn exit_code(&self) -> i32 {
        use ExtractError::*;

        match self {
            MissingField => 65,
        }
    }
}

/// Derives the per-field columns from a record set and assembles them into
/// the output table. Every projection yields one cell per record; a record
/// set containing a non-object entry degrades the guarded projections to a
/// whole-column placeholder instead.
#[derive(Clone)]
pub struct ExtractService {
    sentiment: SentimentService,
    table_writer: Arc<dyn ITableWriter + Send + Sync>,
    output_path: PathBuf,
}

impl ExtractService {
    pub fn new(
        sentiment: SentimentService,
        table_writer: Arc<dyn ITableWriter + Send + Sync>,
        output_path: PathBuf,
    ) -> Self {
        Self {
            sentiment,
            table_writer,
            output_path,
        }
    }

    fn project<F>(&self, records: &RecordSet, cell_of: F) -> Column
    where
        F: Fn(&Record) -> Cell,
    {
        if records.iter().any(|record| !record.is_object()) {
            return Column::degraded();
        }
        Column::per_row(records.iter().map(cell_of).collect())
    }

    fn project_path(&self, records: &RecordSet, path: &[&str]) -> Column {
        self.project(records, |record| {
            record.path(path).map(Cell::from_value).unwrap_or(Cell::Empty)
        })
    }

    /// `created_at` and `source` carry no per-record guard: a record
    /// without the key fails the projection instead of defaulting.
    fn project_required(&self, records: &RecordSet, field: &str) -> Result<Column> {
        let mut cells = Vec::with_capacity(records.len());
        for record in records.iter() {
            let value = record.get(field).ok_or_else(|| {
                ServiceError::new(
                    ExtractError::MissingField,
                    anyhow::anyhow!("record has no `{}` field", field),
                )
            })?;
            cells.push(Cell::from_value(value));
        }
        Ok(Column::per_row(cells))
    }

    pub fn created_times(&self, records: &RecordSet) -> Result<Column> {
        self.project_required(records, "created_at")
    }

    pub fn sources(&self, records: &RecordSet) -> Result<Column> {
        self.project_required(records, "source")
    }

    /// Text of the republished post; empty for records that are not
    /// retweets.
    pub fn original_texts(&self, records: &RecordSet) -> Column {
        self.project_path(records, &["retweeted_status", "text"])
    }

    /// Polarity and subjectivity columns for a text column. Empty text rows
    /// keep the placeholder in both outputs; only non-empty text is scored.
    pub fn sentiments(&self, texts: &Column) -> (Column, Column) {
        let cells = match texts {
            Column::Degraded(_) => return (Column::degraded(), Column::degraded()),
            Column::PerRow(cells) => cells,
        };

        let mut polarity = Vec::with_capacity(cells.len());
        let mut subjectivity = Vec::with_capacity(cells.len());
        for cell in cells {
            let text = cell.as_text();
            if text.is_empty() {
                polarity.push(Cell::Empty);
                subjectivity.push(Cell::Empty);
            } else {
                let sentiment = self.sentiment.score(text);
                polarity.push(Cell::Float(sentiment.polarity));
                subjectivity.push(Cell::Float(sentiment.subjectivity));
            }
        }

        (Column::per_row(polarity), Column::per_row(subjectivity))
    }

    pub fn langs(&self, records: &RecordSet) -> Column {
        self.project_path(records, &["lang"])
    }

    pub fn favorite_counts(&self, records: &RecordSet) -> Column {
        self.project_path(records, &["retweeted_status", "favorite_count"])
    }

    pub fn retweet_counts(&self, records: &RecordSet) -> Column {
        self.project_path(records, &["retweeted_status", "retweet_count"])
    }

    pub fn screen_names(&self, records: &RecordSet) -> Column {
        self.project_path(records, &["user", "screen_name"])
    }

    pub fn followers_counts(&self, records: &RecordSet) -> Column {
        self.project_path(records, &["user", "followers_count"])
    }

    pub fn friends_counts(&self, records: &RecordSet) -> Column {
        self.project_path(records, &["user", "friends_count"])
    }

    /// Not part of the output table, but exposed alongside the other
    /// projections for callers that want it.
    #[allow(dead_code)]
    pub fn statuses_counts(&self, records: &RecordSet) -> Column {
        self.project_path(records, &["user", "statuses_count"])
    }

    /// A record that carries the key keeps its value (including an explicit
    /// null); a record without it gets a null, not the empty placeholder.
    pub fn possibly_sensitive(&self, records: &RecordSet) -> Column {
        self.project(records, |record| match record.get("possibly_sensitive") {
            Some(value) => Cell::from_value(value),
            None => Cell::Null,
        })
    }

    pub fn hashtags(&self, records: &RecordSet) -> Column {
        self.project_path(records, &["retweeted_status", "entities", "hashtags"])
    }

    /// Gated on `extended_tweet` and reading `retweeted_staus` (sic), so
    /// every realistic record comes back empty. Known defect, kept as-is
    /// pending a product decision on the intended gate and path.
    pub fn user_mentions(&self, records: &RecordSet) -> Column {
        self.project(records, |record| {
            if record.has("extended_tweet") {
                record
                    .path(&["retweeted_staus", "entities", "user_mentions"])
                    .map(Cell::from_value)
                    .unwrap_or(Cell::Empty)
            } else {
                Cell::Empty
            }
        })
    }

    pub fn locations(&self, records: &RecordSet) -> Column {
        self.project_path(records, &["user", "location"])
    }

    /// Builds the full 15-column table and optionally persists it as CSV to
    /// the configured output path.
    pub fn tweet_table(&self, records: &RecordSet, save: bool) -> Result<Table> {
        let created_at = self.created_times(records)?;
        let source = self.sources(records)?;
        let original_text = self.original_texts(records);
        let (polarity, subjectivity) = self.sentiments(&original_text);
        let lang = self.langs(records);
        let favorite_count = self.favorite_counts(records);
        let retweet_count = self.retweet_counts(records);
        let original_author = self.screen_names(records);
        let followers_count = self.followers_counts(records);
        let friends_count = self.friends_counts(records);
        let possibly_sensitive = self.possibly_sensitive(records);
        let hashtags = self.hashtags(records);
        let user_mentions = self.user_mentions(records);
        let location = self.locations(records);

        let mut table = Table::new();
        table.insert("created_at", created_at);
        table.insert("source", source);
        table.insert("original_text", original_text);
        table.insert("polarity", polarity);
        table.insert("subjectivity", subjectivity);
        table.insert("lang", lang);
        table.insert("favorite_count", favorite_count);
        table.insert("retweet_count", retweet_count);
        table.insert("original_author", original_author);
        table.insert("followers_count", followers_count);
        table.insert("friends_count", friends_count);
        table.insert("possibly_sensitive", possibly_sensitive);
        table.insert("hashtags", hashtags);
        table.insert("user_mentions", user_mentions);
        table.insert("location", location);

        if save {
            self.table_writer.write(&table, &self.output_path)?;
            info!(path = %self.output_path.display(), "tweet table saved");
            println!("{}", "File Successfully Saved.!!!".green());
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::CsvTableWriter;
    use serde_json::json;

    fn service() -> ExtractService {
        service_with_output(PathBuf::from("unused.csv"))
    }

    fn service_with_output(output_path: PathBuf) -> ExtractService {
        ExtractService::new(
            SentimentService::new(),
            Arc::new(CsvTableWriter::new()),
            output_path,
        )
    }

    fn full_record() -> serde_json::Value {
        json!({
            "created_at": "Fri Jun 18 17:55:49 +0000 2021",
            "source": "<a href=\"https://twitter.com\">Twitter Web App</a>",
            "lang": "en",
            "possibly_sensitive": false,
            "user": {
                "screen_name": "econ_watcher",
                "followers_count": 551,
                "friends_count": 341,
                "statuses_count": 1204,
                "location": "Nairobi"
            },
            "retweeted_status": {
                "text": "I love this!",
                "favorite_count": 7,
                "retweet_count": 3,
                "entities": { "hashtags": [{"text": "economy", "indices": [0, 8]}] }
            }
        })
    }

    fn bare_record() -> serde_json::Value {
        json!({
            "created_at": "t1",
            "source": "web",
            "lang": "en",
            "possibly_sensitive": false,
            "user": {
                "screen_name": "a",
                "followers_count": 5,
                "friends_count": 2,
                "statuses_count": 10,
                "location": "X"
            }
        })
    }

    #[test]
    fn it_should_keep_every_column_row_aligned() {
        let records = RecordSet::from(vec![full_record(), bare_record(), full_record()]);
        let table = service().tweet_table(&records, false).unwrap();

        assert_eq!(table.n_columns(), 15);
        assert_eq!(table.headers(), TABLE_COLUMNS.to_vec());
        assert_eq!(table.n_rows(), records.len());
        for name in TABLE_COLUMNS {
            assert_eq!(table.column(name).unwrap().len(), records.len());
        }
    }

    #[test]
    fn it_should_default_retweet_fields_for_plain_tweets() {
        let records = RecordSet::from(vec![bare_record()]);
        let service = service();

        let texts = service.original_texts(&records);
        assert_eq!(texts.cell(0), Some(&Cell::Empty));

        let (polarity, subjectivity) = service.sentiments(&texts);
        assert_eq!(polarity.cell(0), Some(&Cell::Empty));
        assert_eq!(subjectivity.cell(0), Some(&Cell::Empty));

        assert_eq!(service.favorite_counts(&records).cell(0), Some(&Cell::Empty));
        assert_eq!(service.hashtags(&records).cell(0), Some(&Cell::Empty));
    }

    #[test]
    fn it_should_score_quoted_text() {
        let records = RecordSet::from(vec![full_record()]);
        let service = service();

        let texts = service.original_texts(&records);
        let (polarity, _) = service.sentiments(&texts);
        match polarity.cell(0) {
            Some(Cell::Float(score)) => assert!(*score > 0.0),
            other => panic!("expected scored polarity, got {:?}", other),
        }
    }

    #[test]
    fn it_should_keep_an_explicit_null_for_missing_sensitivity() {
        let record = json!({"created_at": "t1", "source": "web", "lang": "en"});
        let records = RecordSet::from(vec![record]);

        assert_eq!(
            service().possibly_sensitive(&records).cell(0),
            Some(&Cell::Null)
        );
    }

    #[test]
    fn it_should_leave_user_mentions_empty_even_when_gated_open() {
        let mut record = full_record();
        record["extended_tweet"] = json!({"full_text": "longer"});
        record["retweeted_status"]["entities"]["user_mentions"] =
            json!([{"screen_name": "other"}]);
        let records = RecordSet::from(vec![record]);

        assert_eq!(service().user_mentions(&records).cell(0), Some(&Cell::Empty));
    }

    #[test]
    fn it_should_degrade_guarded_columns_on_non_object_records() {
        let records = RecordSet::from(vec![full_record(), json!([1, 2, 3])]);
        let service = service();

        assert!(service.langs(&records).is_degraded());
        assert!(service.original_texts(&records).is_degraded());
        assert!(service.locations(&records).is_degraded());

        let (polarity, subjectivity) = service.sentiments(&service.original_texts(&records));
        assert!(polarity.is_degraded());
        assert!(subjectivity.is_degraded());
    }

    #[test]
    fn it_should_fail_hard_when_created_at_is_missing() {
        let records = RecordSet::from(vec![json!({"source": "web"})]);
        let err = service().created_times(&records).unwrap_err();
        assert!(err.is_error_of(ExtractError::MissingField));
    }

    #[test]
    fn it_should_build_identical_tables_on_reruns() {
        let records = RecordSet::from(vec![full_record(), bare_record()]);
        let service = service();

        let first = service.tweet_table(&records, false).unwrap();
        let second = service.tweet_table(&records, false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn it_should_project_statuses_counts() {
        let records = RecordSet::from(vec![full_record(), json!({"n": 1})]);
        let column = service().statuses_counts(&records);
        assert_eq!(column.cell(0), Some(&Cell::Int(1204)));
        assert_eq!(column.cell(1), Some(&Cell::Empty));
    }

    #[test]
    fn it_should_save_header_plus_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("processed.csv");
        let service = service_with_output(output_path.clone());

        let records = RecordSet::from(vec![full_record(), bare_record()]);
        service.tweet_table(&records, true).unwrap();

        let contents = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(contents.lines().count(), records.len() + 1);
        assert!(contents.lines().next().unwrap().starts_with("created_at,source"));
    }
}
