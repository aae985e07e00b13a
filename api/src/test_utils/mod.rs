//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory roster backs every port trait, including the unit of work,
//! so the same store serves service tests and router tests through
//! [`InMemoryBackend`](mocks::InMemoryBackend).

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
