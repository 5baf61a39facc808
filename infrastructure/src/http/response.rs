//! Response handling shared by the blocking and non-blocking clients

use jokes_domain::{FetchError, Joke};
use reqwest::StatusCode;

/// Turn a finished response into a joke.
///
/// A non-2xx status wins over whatever the body contains.
pub(crate) fn decode_joke(status: StatusCode, body: &[u8]) -> Result<Joke, FetchError> {
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            status: status.as_u16(),
        });
    }
    serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Map a transport-level failure (connect, TLS, reading the body)
pub(crate) fn network_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Network(format!("request timed out: {}", error))
    } else {
        FetchError::Network(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success() {
        let joke = decode_joke(StatusCode::OK, br#"{"joke":"X"}"#).unwrap();
        assert_eq!(joke.text(), "X");
    }

    #[test]
    fn test_status_checked_before_body() {
        let err = decode_joke(StatusCode::SERVICE_UNAVAILABLE, br#"{"joke":"X"}"#).unwrap_err();
        assert_eq!(err, FetchError::HttpStatus { status: 503 });
    }

    #[test]
    fn test_malformed_body() {
        let err = decode_joke(StatusCode::OK, b"<html>nope</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));

        let err = decode_joke(StatusCode::OK, br#"{"setup":"X"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
