//! Common test utilities for codegraph-siccl
//!
//! Python source fixtures and tuple-decoding assertions shared by the
//! integration tests.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
