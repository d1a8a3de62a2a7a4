//! Wire encoding for article creation times.
//!
//! `Creation_Timestamp` travels as a bare integer of Unix seconds rather
//! than an RFC 3339 string, so the stock chrono serde impls do not apply.
//! The same encoding is used for the stored documents, which keeps them
//! readable by earlier deployments of this service.

/// Serde `with`-module for `Option<DateTime<Utc>>` fields carried as
/// Unix-seconds integers. Pair with `#[serde(default, skip_serializing_if =
/// "Option::is_none")]` so an unset time is omitted instead of encoded.
pub mod epoch_seconds {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_i64(ts.timestamp()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = i64::deserialize(deserializer)?;
        match Utc.timestamp_opt(secs, 0) {
            chrono::LocalResult::Single(ts) => Ok(Some(ts)),
            _ => Err(de::Error::custom(format!(
                "Creation_Timestamp out of range: {}",
                secs
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "super::epoch_seconds"
        )]
        ts: Option<DateTime<Utc>>,
    }

    #[test]
    fn encodes_as_bare_integer_token() {
        let wrapper = Wrapper {
            ts: Some(Utc.timestamp_opt(1_700_000_000, 0).unwrap()),
        };
        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(json, r#"{"ts":1700000000}"#);
    }

    #[test]
    fn round_trips_at_second_precision() {
        for secs in [0i64, 1, 1_600_000_000, 4_102_444_800] {
            let wrapper = Wrapper {
                ts: Some(Utc.timestamp_opt(secs, 0).unwrap()),
            };
            let json = serde_json::to_string(&wrapper).unwrap();
            let decoded: Wrapper = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, wrapper);
        }
    }

    #[test]
    fn unset_time_is_omitted() {
        let json = serde_json::to_string(&Wrapper { ts: None }).unwrap();
        assert_eq!(json, "{}");

        let decoded: Wrapper = serde_json::from_str("{}").unwrap();
        assert_eq!(decoded.ts, None);
    }

    #[test]
    fn rejects_non_integer_tokens() {
        for body in [r#"{"ts":"yesterday"}"#, r#"{"ts":1.5}"#, r#"{"ts":null}"#] {
            assert!(serde_json::from_str::<Wrapper>(body).is_err(), "{}", body);
        }
    }
}
