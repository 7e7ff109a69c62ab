//! Emails sent by the contact relay

mod new_inquiry;

pub use new_inquiry::{eastern_timestamp, NewInquiryTemplate};
