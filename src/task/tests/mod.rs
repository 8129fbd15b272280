//! Unit tests for the task domain and store service.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod store_tests;
