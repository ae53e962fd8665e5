//! API response envelope

use serde::{Deserialize, Serialize};

use crate::errors::error_codes;

/// Message used by successful responses that carry no custom text
pub const SUCCESS_MESSAGE: &str = "success";

/// Standard API response wrapper
///
/// Every HTTP reply is serialized as `{"code": .., "data": .., "message": ..}`.
/// `data` is `null` for error responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Status code (see [`error_codes`])
    pub code: i32,

    /// Response payload
    pub data: Option<T>,

    /// Human-readable message
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self::success_with_message(data, SUCCESS_MESSAGE)
    }

    /// Create a successful response with a custom message
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            code: error_codes::SUCCESS,
            data: Some(data),
            message: message.into(),
        }
    }

    /// Create an error response
    pub fn error(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            data: None,
            message: message.into(),
        }
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.code == error_codes::SUCCESS
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Map the data to a different type
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            code: self.code,
            data: self.data.map(f),
            message: self.message,
        }
    }
}

/// Conversion of domain errors into the response envelope
pub trait IntoApiResponse {
    /// Status code reported for this error
    fn response_code(&self) -> i32;

    /// Message reported for this error
    fn response_message(&self) -> String;

    fn to_api_response<T>(&self) -> ApiResponse<T> {
        ApiResponse::error(self.response_code(), self.response_message())
    }
}
