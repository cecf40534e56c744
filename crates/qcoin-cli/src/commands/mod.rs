//! CLI command implementations.

pub mod batch;
pub mod classical;
pub mod common;
pub mod compare;
pub mod flip;
pub mod superpose;
pub mod version;
