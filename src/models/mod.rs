//! Data models for SMS Blast.
//!
//! This module contains the recipient data structure shared by the loader and
//! the dispatcher.

pub mod contact;

pub use contact::Contact;
