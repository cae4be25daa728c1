//! Client for OpenAI-compatible chat completion APIs.

mod client;
mod error;
mod types;

pub use client::ChatClient;
pub use error::LlmError;
pub use types::*;
