use crate::domain::service;
use crate::infra;
use crate::repository;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

#[derive(Clone)]
pub struct Infras {
    pub jsonl_reader: infra::JsonlReader,
    pub csv_writer: Arc<infra::CsvTableWriter>,
}

pub fn infras(_config: &Config) -> Infras {
    Infras {
        jsonl_reader: infra::JsonlReader::new(),
        csv_writer: Arc::new(infra::CsvTableWriter::new()),
    }
}

#[derive(Clone)]
pub struct Repository {
    pub tweet: Arc<repository::FileTweetRepository>,
}

pub fn repository(infras: &Infras) -> Repository {
    let tweet = Arc::new(repository::FileTweetRepository::new(
        infras.jsonl_reader.clone(),
    ));
    Repository { tweet }
}

#[derive(Clone)]
pub struct Services {
    pub tweet: service::TweetService,
    pub extract: service::ExtractService,
}

#[derive(Clone)]
pub struct AppContext {
    pub infras: Infras,
    pub repository: Repository,
    pub services: Services,
}

pub fn new(config: Config) -> AppContext {
    let infras = infras(&config);
    let repository = repository(&infras);
    let services = Services {
        tweet: service::TweetService::new(repository.tweet.clone()),
        extract: service::ExtractService::new(
            service::SentimentService::new(),
            infras.csv_writer.clone(),
            config.output_path,
        ),
    };
    AppContext {
        infras,
        repository,
        services,
    }
}
