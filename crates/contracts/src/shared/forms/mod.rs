//! Form submission results and their UI normalization.
//!
//! Every form endpoint answers with a [`RequestOutcome`]; submission handlers
//! convert it (or an unexpected transport failure) into an [`ActionResult`],
//! the one shape the UI knows how to display: inline field errors, alert
//! banners, toasts and a redirect intent.

pub mod outcome;
pub mod result;

pub use outcome::{OutcomeError, RequestOutcome};
pub use result::{ActionResult, FieldError, UserMessage};
