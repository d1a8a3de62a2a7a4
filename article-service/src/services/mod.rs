pub mod database;
pub mod metrics;

pub use database::ArticleDb;
pub use metrics::{get_metrics, init_metrics, record_request};
