//! Usecase Layer - end-to-end conversion
//!
//! Wires parsing, fact extraction and encoding into one call. This is the
//! entry point for callers that just want tuples out of source text.

pub mod siccl_conversion;

pub use siccl_conversion::SicclConverter;
