//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod batch;
pub mod run_pipeline;
pub mod stages;
