//! Text-generation provider adapters implementing
//! [`LlmGateway`](subquery_application::LlmGateway).

pub mod openai;

pub use openai::OpenAiGateway;
