mod extract_service;
mod sentiment_service;
mod tweet_service;

pub use extract_service::*;
pub use sentiment_service::*;
pub use tweet_service::*;
