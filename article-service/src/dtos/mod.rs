pub mod articles;

pub use articles::{InsertArticleResponse, SearchParams};
