//! Domain value objects and types.
//!
//! Phone numbers are validated and canonicalized at construction time, so an
//! invalid number can never reach the dispatcher.

pub mod errors;
pub mod phone;

pub use errors::ValidationError;
pub use phone::PhoneNumber;
