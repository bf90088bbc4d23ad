//! Log record model.
//!
//! Field declaration order is the serialized key order: `int` before `str`,
//! and inside each group the required field before the optional one.

use serde::Serialize;

/// One simulated log event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// Integer-typed fields
    pub int: IntFields,
    /// String-typed fields
    pub str: StrFields,
}

/// The `int` group of a log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntFields {
    /// Event timestamp (seconds)
    pub ts: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// The `str` group of a log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrFields {
    /// Event name
    pub event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(count: Option<u32>, message: Option<&'static str>) -> LogRecord {
        LogRecord {
            int: IntFields {
                ts: 1641700000,
                count,
            },
            str: StrFields {
                event: "edit",
                message,
            },
        }
    }

    #[test]
    fn test_serialize_required_fields_only() {
        let json = serde_json::to_string(&record(None, None)).unwrap();
        assert_eq!(json, r#"{"int":{"ts":1641700000},"str":{"event":"edit"}}"#);
    }

    #[test]
    fn test_serialize_all_fields() {
        let json = serde_json::to_string(&record(Some(42), Some("yay"))).unwrap();
        assert_eq!(
            json,
            r#"{"int":{"ts":1641700000,"count":42},"str":{"event":"edit","message":"yay"}}"#
        );
    }

    #[test]
    fn test_absent_fields_are_omitted_not_null() {
        let json = serde_json::to_string(&record(Some(0), None)).unwrap();
        assert!(!json.contains("null"));
        assert!(!json.contains("message"));
        assert!(json.contains(r#""count":0"#));
    }
}
