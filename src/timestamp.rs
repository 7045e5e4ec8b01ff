use chrono::{DateTime, NaiveDateTime, Utc};

/// Wire format for task timestamps: `YYYY-MM-DDThh:mm:ss.sssZ`, always UTC.
pub const STAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Parses a service timestamp into a UTC instant.
pub fn parse_stamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, STAMP_FORMAT).map(|dt| dt.and_utc())
}
