use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeserializationError {
    #[error("unknown {enum_name} value '{value}'")]
    UnknownEnumValue { enum_name: &'static str, value: String },
    #[error("expected a {expected}, found {found}")]
    UnexpectedType { expected: &'static str, found: &'static str },
    #[error("integer {0} does not fit in 32 bits")]
    IntegerOutOfRange(i64),
    #[error("invalid date time '{value}': {source}")]
    InvalidDateTime { value: String, source: chrono::ParseError },
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("cannot write non-finite number {0}")]
    NonFiniteNumber(f64),
    #[error("writer has no open object to write '{0}' into")]
    UnbalancedObject(String),
    #[error("json write error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Sink(String),
}
