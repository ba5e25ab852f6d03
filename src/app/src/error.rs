use thiserror::Error;

/// Errors raised by the state helpers themselves
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("invalid view: {0:?}")]
    InvalidView(String),
    #[error("view {0:?} is not available in the simple wizard")]
    UnsupportedView(String),
}

/// Form data rejected before any backend call
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}", .messages.join("\n"))]
pub struct ValidationError {
    pub messages: Vec<String>,
}

impl ValidationError {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }
}
