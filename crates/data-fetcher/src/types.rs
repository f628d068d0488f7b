//! Core data types for fetch outcomes and normalized payloads.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Default request timeout for a single fetch.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Immutable fetch configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub url: String,
    pub timeout: Duration,
}

impl FetchConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Normalized payload of a fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body {
    Json(Value),
    Text(String),
}

/// Result of one successful HTTP retrieval.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub url: String,
    pub status_code: u16,
    /// MIME type with parameters stripped; `None` when the header is missing.
    pub content_type: Option<String>,
    pub body: Body,
    /// Header names are stored lowercase.
    pub headers: BTreeMap<String, String>,
}

impl FetchOutcome {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Content type for display, empty when absent.
    pub fn content_type_or_empty(&self) -> &str {
        self.content_type.as_deref().unwrap_or("")
    }
}

/// Shape view over a decoded JSON value.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Object(&'a Map<String, Value>),
    Array(&'a [Value]),
    Scalar(Scalar<'a>),
}

/// A JSON leaf value.
#[derive(Debug, Clone, Copy)]
pub enum Scalar<'a> {
    String(&'a str),
    Number(&'a Number),
    Bool(bool),
    Null,
}

impl<'a> Shape<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Shape::Object(map),
            Value::Array(items) => Shape::Array(items),
            Value::String(s) => Shape::Scalar(Scalar::String(s)),
            Value::Number(n) => Shape::Scalar(Scalar::Number(n)),
            Value::Bool(b) => Shape::Scalar(Scalar::Bool(*b)),
            Value::Null => Shape::Scalar(Scalar::Null),
        }
    }
}

impl Scalar<'_> {
    /// Natural type name of the scalar.
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::String(_) => "string",
            Scalar::Number(n) if n.is_f64() => "float",
            Scalar::Number(_) => "integer",
            Scalar::Bool(_) => "boolean",
            Scalar::Null => "null",
        }
    }
}

impl std::fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::String(s) => write!(f, "{s}"),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Null => write!(f, "null"),
        }
    }
}

/// Errors that can occur while fetching or inspecting the target.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Timeout while fetching my data from {url}")]
    Timeout { url: String },

    #[error("HTTP error {code} for {url}")]
    HttpStatus { code: u16, url: String },

    #[error("{message}")]
    Transport { message: String },

    #[error("My data is not in JSON format")]
    NotJson,

    #[error("Invalid target URL: {0}")]
    InvalidTarget(String),
}

/// Convenience result type.
pub type DataResult<T> = Result<T, DataError>;
