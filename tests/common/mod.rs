//! Common test utilities for nestedpages contract, golden and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated temp directory with a site snapshot, plus CLI runner
//! - Fixtures: a reference site used across suites

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
