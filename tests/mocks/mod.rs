//! Test doubles shared by the integration tests.

pub mod mock_sender;

pub use mock_sender::MockSender;
