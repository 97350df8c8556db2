use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to SerpAPI, on either the primary or the follow-up call.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to search api failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search api returned a non-json body: {0}")]
    Body(#[source] serde_json::Error),

    #[error("search api responded with status {0}")]
    Status(StatusCode),

    #[error("search api error: {0}")]
    Api(String),
}

#[derive(Error, Debug)]
pub enum OverviewError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("ai overview not found")]
    NotFound,

    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, OverviewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        assert_eq!(OverviewError::NotFound.to_string(), "ai overview not found");
    }

    #[test]
    fn test_error_display_api() {
        let err = OverviewError::from(FetchError::Api("Invalid API key.".to_string()));
        assert_eq!(err.to_string(), "search api error: Invalid API key.");
    }

    #[test]
    fn test_error_display_status() {
        let err = OverviewError::from(FetchError::Status(StatusCode::BAD_GATEWAY));
        assert_eq!(
            err.to_string(),
            "search api responded with status 502 Bad Gateway"
        );
    }

    #[test]
    fn test_error_display_decode() {
        let source = serde_json::from_str::<Vec<String>>("{}").unwrap_err();
        let err = OverviewError::Decode {
            what: "search metadata",
            source,
        };
        assert!(err.to_string().starts_with("failed to decode search metadata: "));
    }
}
