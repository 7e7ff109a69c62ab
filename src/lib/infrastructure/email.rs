//! Email provider adapters

pub mod brevo;
