#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    InputValidation(#[from] InputValidationError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("JSON decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Why a single input field was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("is required")]
    Missing,

    #[error("must not be empty")]
    Empty,

    #[error("must contain only digits")]
    NotNumeric,

    #[error("must be a comma-separated list of numeric ids")]
    NotIdList,

    #[error("must be one of: {}", .0.join(", "))]
    NotOneOf(&'static [&'static str]),

    #[error("is not accepted by this endpoint")]
    Unknown,

    #[error("must be a string")]
    NotAString,

    #[error("must be an object of string fields")]
    NotAnObject,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("field `{field}` {violation}")]
pub struct InputValidationError {
    field: String,
    violation: Violation,
}

impl InputValidationError {
    pub fn new(field: &str, violation: Violation) -> Self {
        Self {
            field: field.into(),
            violation,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn violation(&self) -> &Violation {
        &self.violation
    }
}

#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("GET {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({url})")]
pub struct DecodeError {
    url: String,
    #[source]
    source: serde_json::Error,
}

impl DecodeError {
    pub fn new(url: &reqwest::Url, source: serde_json::Error) -> Self {
        Self {
            url: url.to_string(),
            source,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid base URL {url:?}: {reason}")]
    BaseUrl { url: String, reason: String },

    #[error("could not build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
