pub mod submission;
pub mod validation;

pub use submission::{deliver, SubmissionGate, SubmitState};
pub use validation::{subscriber_email, ContactForm, Field, FormErrors};
