//! Black Box Tests for frozenview
//!
//! These tests only use the public API - no internal crate access.
//! This simulates what an end user would experience.
