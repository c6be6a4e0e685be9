// src/models/review.rs
use chrono::{DateTime, NaiveDateTime};
use leptos::logging::warn;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,                // Stable row key, assigned by the backend
    pub user_name: String,      // Reviewer display name
    pub product_name: String,   // Reviewed product name
    pub product_review: String, // Free-form review body
    pub created_at: String,     // Serialized timestamp, formatted at render time
}

/// Validates a raw JSON collection element-by-element.
/// Records that fail the `Review` schema are quarantined (skipped with a
/// warning) instead of poisoning the whole collection; server-given order
/// of the surviving records is preserved.
pub fn parse_reviews(values: Vec<serde_json::Value>) -> Vec<Review> {
    let mut reviews = Vec::with_capacity(values.len());
    for value in values {
        match serde_json::from_value::<Review>(value) {
            Ok(review) => reviews.push(review),
            Err(e) => warn!("[PARSE] Quarantined malformed review record: {}", e),
        }
    }
    reviews
}

/// Converts a serialized timestamp into its display form.
/// Accepts RFC 3339 (what the original backend emits) and SQLite's
/// `YYYY-MM-DD HH:MM:SS`; anything else is echoed back untouched so a bad
/// timestamp never breaks a row.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M:%S %:z").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> serde_json::Value {
        json!({
            "id": 1,
            "user_name": "Ann",
            "product_name": "Widget",
            "product_review": "Great!",
            "created_at": "2024-01-01T10:00:00Z"
        })
    }

    #[test]
    fn test_parse_valid_collection() {
        let reviews = parse_reviews(vec![sample_record()]);
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].id, 1);
        assert_eq!(reviews[0].user_name, "Ann");
        assert_eq!(reviews[0].product_name, "Widget");
        assert_eq!(reviews[0].product_review, "Great!");
        assert_eq!(reviews[0].created_at, "2024-01-01T10:00:00Z");
    }

    #[test]
    fn test_parse_empty_collection() {
        assert!(parse_reviews(Vec::new()).is_empty());
    }

    #[test]
    fn test_parse_preserves_server_order() {
        let values = vec![
            json!({"id": 3, "user_name": "C", "product_name": "P", "product_review": "r", "created_at": "2024-01-03T00:00:00Z"}),
            json!({"id": 1, "user_name": "A", "product_name": "P", "product_review": "r", "created_at": "2024-01-01T00:00:00Z"}),
            json!({"id": 2, "user_name": "B", "product_name": "P", "product_review": "r", "created_at": "2024-01-02T00:00:00Z"}),
        ];
        let ids: Vec<i64> = parse_reviews(values).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_parse_quarantines_malformed_records() {
        let values = vec![
            sample_record(),
            json!({"id": "not-a-number", "user_name": "Bob"}),
            json!({
                "id": 2,
                "user_name": "Bea",
                "product_name": "Gadget",
                "product_review": "Fine",
                "created_at": "2024-02-01T09:30:00Z"
            }),
            json!(null),
        ];
        let reviews = parse_reviews(values);
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].id, 1);
        assert_eq!(reviews[1].id, 2);
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        // The backend also serializes contact_number; the client drops it.
        let mut record = sample_record();
        record["contact_number"] = json!("+15550100");
        let reviews = parse_reviews(vec![record]);
        assert_eq!(reviews.len(), 1);
    }

    #[test]
    fn test_format_rfc3339_timestamp() {
        assert_eq!(
            format_timestamp("2024-01-01T10:00:00Z"),
            "2024-01-01 10:00:00 +00:00"
        );
    }

    #[test]
    fn test_format_rfc3339_with_offset() {
        assert_eq!(
            format_timestamp("2024-06-15T08:30:00+02:00"),
            "2024-06-15 08:30:00 +02:00"
        );
    }

    #[test]
    fn test_format_sqlite_timestamp() {
        assert_eq!(
            format_timestamp("2024-01-01 10:00:00"),
            "2024-01-01 10:00:00"
        );
    }

    #[test]
    fn test_format_unparseable_timestamp_echoes_input() {
        assert_eq!(format_timestamp("yesterday-ish"), "yesterday-ish");
        assert_eq!(format_timestamp(""), "");
    }
}
