//! Failures reported by the backend and their user-facing text.
//!
//! The shell catches whatever the backend binding rejects with and hands it over as a
//! [`Failure`]. Only one backend signature is recognised; every other message is shown as is.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Backend text emitted when the router runs as a repeater or access point
pub const ROUTER_MODE_SIGNATURE: &str = "router is not in router mode";

pub const ROUTER_MODE_MESSAGE: &str = "Роутер не находится в режиме \"Роутер\". Поддерживается только режим \"Роутер\", а текущий режим: \"Усилитель\". Измените режим работы в настройках роутера или выберите другой роутер.";

pub const UNKNOWN_FAILURE_MESSAGE: &str = "Произошла неизвестная ошибка";

/// Name carried by application errors raised in the shell
pub const APP_ERROR_NAME: &str = "AppError";

/// A failure raised while talking to the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Failure {
    /// Raised by the application itself; the message is already meant for the user
    Application {
        message: String,
        code: Option<String>,
        /// JSON-encoded detail payload
        details: Option<String>,
    },
    /// Any error object with a message
    Generic { message: String },
    /// A bare string rejection
    Raw(String),
    /// Anything else (numbers, null, objects without a message)
    Unrecognized,
}

impl Failure {
    pub fn application(message: impl Into<String>) -> Self {
        Self::Application {
            message: message.into(),
            code: None,
            details: None,
        }
    }

    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Classify a loosely typed rejection value as received from a JS shell
    pub fn from_js_value(value: &Value) -> Self {
        match value {
            Value::String(message) => Self::Raw(message.clone()),
            Value::Object(object) => {
                let Some(message) = object.get("message").and_then(Value::as_str) else {
                    return Self::Unrecognized;
                };
                if object.get("name").and_then(Value::as_str) == Some(APP_ERROR_NAME) {
                    Self::Application {
                        message: message.to_string(),
                        code: object
                            .get("code")
                            .and_then(Value::as_str)
                            .map(str::to_string),
                        details: object
                            .get("details")
                            .filter(|details| !details.is_null())
                            .map(Value::to_string),
                    }
                } else {
                    Self::generic(message)
                }
            }
            _ => Self::Unrecognized,
        }
    }
}

impl From<crate::error::ValidationError> for Failure {
    fn from(error: crate::error::ValidationError) -> Self {
        Self::application(error.to_string())
    }
}

/// Text shown to the user for a failure
pub fn translate(failure: &Failure) -> String {
    match failure {
        Failure::Application { message, .. } => message.clone(),
        Failure::Generic { message } | Failure::Raw(message) => localize(message),
        Failure::Unrecognized => UNKNOWN_FAILURE_MESSAGE.to_string(),
    }
}

fn localize(message: &str) -> String {
    if message.contains(ROUTER_MODE_SIGNATURE) {
        ROUTER_MODE_MESSAGE.to_string()
    } else {
        message.to_string()
    }
}
