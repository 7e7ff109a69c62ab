//! Contact form submissions and their relay to the operator's inbox

pub mod emails;
pub mod errors;
pub mod service;
pub mod submission;

pub use errors::{RelayError, SubmissionError};
pub use service::{ContactConfig, ContactService, ContactServiceImpl};
pub use submission::Submission;
