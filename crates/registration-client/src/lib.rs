//! Client-side registration flow.
//!
//! Creates an account through the account service, then asks the welcome
//! message service for a greeting, and merges both into one result:
//! - [`RegistrationOrchestrator`] sequences the calls
//! - [`AccountService`] and [`WelcomeMessageService`] are the dependency seams
//! - [`Feedback`] turns an outcome into the single notification to display

pub mod account;
pub mod config;
pub mod error;
pub mod feedback;
mod http;
pub mod orchestrator;
pub mod types;
pub mod welcome;

pub use account::{AccountService, HttpAccountService};
pub use config::ClientConfig;
pub use error::{Dependency, LoginError, RegistrationError, ServiceError};
pub use feedback::{Feedback, LOGIN_REDIRECT_DELAY};
pub use orchestrator::RegistrationOrchestrator;
pub use types::{LoginRequest, RegistrationRequest, RegistrationResult};
pub use welcome::{HttpWelcomeMessageService, WelcomeMessageService};
