//! HTTP servers

pub mod http;
