//! Test utilities for integration testing.
//!
//! This module provides:
//! - In-memory and failing `WaitlistRepo` implementations
//! - `TestAppStateBuilder` for HTTP-level tests

mod app_state_builder;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use waitlist_mocks::*;
