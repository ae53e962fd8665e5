//! Domain entities representing core business objects.

pub mod token;

// Re-export commonly used types
pub use token::{
    Claims, EXPIRATION_CLAIM, ISSUED_AT_CLAIM, USERNAME_CLAIM, USER_ID_CLAIM,
};
