mod form;
mod submission;

pub use form::{ContactForm, InquiryType};
pub use submission::{
    BrowserScheduler, ContactState, ImmediateScheduler, Scheduler, SimulatedDelivery,
    SubmissionPhase, SubmitStep,
};
