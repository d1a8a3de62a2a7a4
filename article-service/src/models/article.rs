use crate::models::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An article document as it travels on the wire and as it is stored.
///
/// Every field is optional; an unset field is omitted from the serialized
/// output entirely (never `null`, never an empty string). The store adds
/// its own `_id` to persisted documents, which is ignored on decode.
/// `id` is supplied by the caller and its uniqueness is not enforced at
/// this layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "Subtitle", skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(rename = "Content", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(
        rename = "Creation_Timestamp",
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::epoch_seconds"
    )]
    pub creation_timestamp: Option<DateTime<Utc>>,
}
