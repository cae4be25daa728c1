//! Welcome message service.
//!
//! Exposes `POST /generate-message`, which turns a user's display name into
//! a short greeting by prompting a chat completion API.
//!
//! Configuration is read from the environment, nested keys joined by `__`:
//!
//! | variable | default |
//! |---|---|
//! | `SERVER__LISTEN_ADDR` | `0.0.0.0` |
//! | `SERVER__PORT` (or `PORT`) | `3000` |
//! | `LLM__API_KEY` (or `OPENAI_API_KEY`) | required |
//! | `LLM__BASE_URL` | `https://api.openai.com/v1` |
//! | `LLM__MODEL` | `gpt-3.5-turbo` |
//! | `LLM__TIMEOUT` | `30s` |
//! | `CORS__ALLOWED_ORIGINS` | none (comma-separated) |
//! | `LOG__LEVEL` | `info` |
//!
//! The unprefixed `PORT` and `OPENAI_API_KEY` are used only when the nested
//! form is unset.

pub mod api;
pub mod config;
pub mod error;
pub mod generator;

pub use config::Config;
pub use error::MessageServiceError;
pub use generator::WelcomeMessageGenerator;
