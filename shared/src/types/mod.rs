//! Type definitions shared by the API layer
//!
//! - `response` - the `code` / `data` / `message` envelope wrapping every reply

pub mod response;

pub use response::{ApiResponse, IntoApiResponse};
