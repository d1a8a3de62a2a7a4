pub mod articles;
pub mod health;
pub mod home;

pub use articles::{create_article, get_article, list_articles, search_articles};
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use home::home;
