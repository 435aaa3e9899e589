//! Error types for the API client.

/// Errors that can occur when building or sending e-Stat API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An argument was rejected locally, before any network use.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A value had the wrong shape (e.g. a bulk spec that is not a list of objects).
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),
    /// The request never produced an HTTP response (DNS, connect, timeout, body read).
    #[error("Request failed")]
    Transport(#[from] reqwest::Error),
    /// The API returned a status of 400 or above, with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The API answered 200 but reported an error in its `RESULT` envelope.
    #[error("API error {status}: {message}")]
    Api { status: i64, message: String },
    /// The response body was not valid JSON.
    #[error("Failed to parse response: {0}")]
    ParseFailed(String),
    /// A request parameter could not be encoded as JSON.
    #[error("Failed to encode parameter")]
    Serialize(#[source] serde_json::Error),
}

impl Error {
    /// HTTP status for [`Error::HttpStatus`], or the e-Stat `STATUS` code for
    /// [`Error::Api`]. `None` for local and transport failures.
    pub fn status(&self) -> Option<i64> {
        match self {
            Error::HttpStatus { status, .. } => Some(i64::from(*status)),
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the failure happened below HTTP (no response was received).
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// True when the failure was detected locally, before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument(_) | Error::TypeMismatch(_) | Error::Serialize(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn status_reports_http_and_api_codes() {
        let http = Error::HttpStatus {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(http.status(), Some(404));
        assert!(!http.is_transport());

        let api = Error::Api {
            status: 100,
            message: "認証に失敗しました。".to_string(),
        };
        assert_eq!(api.status(), Some(100));
        assert_eq!(api.to_string(), "API error 100: 認証に失敗しました。");
    }

    #[test]
    fn local_errors_have_no_status() {
        let err = Error::InvalidArgument("appId".to_string());
        assert_eq!(err.status(), None);
        assert!(err.is_local());
        assert!(Error::TypeMismatch("x".to_string()).is_local());
    }
}
