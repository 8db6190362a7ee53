//! This crate contains the code that is required to provide or improve the
//! observability of the binaries in this repository. That currently means
//! initialization logic for logging shared between the binaries and the tests.
pub mod config;
pub mod tracing;

pub use config::Config;
