//! Prompt domain
//!
//! Templates for the prompts sent at each pipeline stage.

mod template;

pub use template::PromptTemplate;
