//! Decompose → answer → combine pipeline domain
//!
//! Pure pieces of the pipeline: stage identifiers, the numbered-list parser
//! that forms the contract between decomposition and answering, the combiner
//! input formatting, and the final result type.

pub mod formatting;
pub mod parsing;
pub mod stage;
pub mod value_objects;
