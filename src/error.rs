use crate::response::ErrorResponse;
use std::fmt;

/// Everything that can go wrong while talking to the API: the transport
/// failing, the server answering with an error envelope, or the payload
/// not decoding.
#[derive(Debug)]
pub enum Error {
    Http(reqwest::Error),
    Api(ErrorResponse),
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "http error: {err}"),
            Error::Api(err) => write!(f, "api error: {err}"),
            Error::Json(err) => write!(f, "json error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Api(err) => Some(err),
            Error::Json(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<ErrorResponse> for Error {
    fn from(err: ErrorResponse) -> Self {
        Error::Api(err)
    }
}
