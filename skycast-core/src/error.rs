use thiserror::Error;

/// Failure of a current-weather or forecast lookup.
///
/// Every variant is terminal for the action that triggered the lookup: the
/// caller logs it and leaves the corresponding piece of state untouched.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The geocoder returned zero matches for the query.
    #[error("no location matched '{0}'")]
    CityNotFound(String),

    /// The provider answered with a non-success status code.
    #[error("{endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The request never produced a usable response (DNS, TLS, timeout...).
    #[error("failed to reach weather provider: {0}")]
    Transport(#[from] reqwest::Error),

    /// The payload did not match the shape this endpoint is known to return.
    /// A sample missing a required quantity lands here rather than producing
    /// a partially-filled record.
    #[error("could not parse {endpoint} payload: {source}")]
    Malformed {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl LookupError {
    /// True for the geocoder-miss case, the only failure a caller may want
    /// to distinguish.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::CityNotFound(_))
    }
}

/// Failure of a page-translation request. Opaque to everything except the
/// translation feature itself.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to reach translation provider: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not parse translation response: {0}")]
    Malformed(#[from] serde_json::Error),
}
