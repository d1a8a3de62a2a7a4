use mongodb::{bson::Bson, results::InsertOneResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Acknowledgment returned for a successful insert. The id is whatever
/// the store generated for the new document, rendered as an opaque string.
#[derive(Debug, Serialize)]
pub struct InsertArticleResponse {
    pub inserted_id: String,
}

impl From<InsertOneResult> for InsertArticleResponse {
    fn from(result: InsertOneResult) -> Self {
        let inserted_id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };
        Self { inserted_id }
    }
}
