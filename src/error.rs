use thiserror::Error;

/// Errors surfaced by a top-level fetch.
///
/// Any failure aborts the whole fetch; there is no retry and no
/// partial-result recovery.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to build request: {0}")]
    RequestConstruction(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to parse {field} timestamp: {source}")]
    TimestampParse {
        field: &'static str,
        #[source]
        source: chrono::ParseError,
    },
}

impl FetchError {
    pub(crate) fn timestamp(field: &'static str, source: chrono::ParseError) -> Self {
        FetchError::TimestampParse { field, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::parse_stamp;

    #[test]
    fn timestamp_error_names_the_field() {
        let source = parse_stamp("garbage").unwrap_err();
        let err = FetchError::timestamp("modified at", source);
        let message = err.to_string();
        assert!(
            message.contains("modified at"),
            "message should identify the field, got: {message}"
        );
    }

    #[test]
    fn construction_error_carries_detail() {
        let err = FetchError::RequestConstruction("relative URL without a base".to_string());
        assert!(err.to_string().contains("relative URL"));
    }
}
