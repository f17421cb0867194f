use crate::domain::interface::*;
use crate::domain::model::*;
use crate::error::*;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct TweetService {
    tweet_repo: Arc<dyn ITweetRepository + Send + Sync>,
}

impl TweetService {
    pub fn new(tweet_repo: Arc<dyn ITweetRepository + Send + Sync>) -> Self {
        Self { tweet_repo }
    }

    /// Loads the record set and reports how many records came in.
    pub fn load_tweets(&self, path: &Path) -> Result<(usize, RecordSet)> {
        let records = self.tweet_repo.load(path)?;
        info!(count = records.len(), "tweets loaded");
        Ok((records.len(), records))
    }
}
