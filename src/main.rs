mod wrapper;
pub use wrapper::*;

mod domain;
mod infra;
mod initializer;
mod repository;

use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    std::env::set_var("RUST_BACKTRACE", "1");
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = initializer::Config {
        input_path: "./data/Economic_Twitter_Data.json".into(),
        output_path: "./data/processed_tweet_data.csv".into(),
    };
    let app = initializer::new(config.clone());

    let (count, tweets) = app.services.tweet.load_tweets(&config.input_path).unwrap();
    tracing::info!(count, "building tweet table");

    let table = app.services.extract.tweet_table(&tweets, true).unwrap();
    tracing::info!(rows = table.n_rows(), columns = table.n_columns(), "done");

    Ok(())
}
