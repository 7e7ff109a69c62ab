//! Application state module

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};

use crate::domain::{communication::email_addresses::EmailAddress, contact::ContactService};

/// Application configuration
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Address visitors are pointed to when a submission cannot be relayed
    pub contact_email: EmailAddress,
}

/// Global application state
#[derive(Clone)]
pub struct AppState<C: ContactService> {
    /// The time the server started
    pub start_time: DateTime<Utc>,

    /// The application configuration
    pub config: AppConfig,

    /// Contact relay service
    pub contact: Arc<C>,
}

impl<C> AppState<C>
where
    C: ContactService,
{
    /// Create a new application state
    pub fn new(config: AppConfig, contact: C) -> Self {
        Self {
            start_time: Utc::now(),
            config,
            contact: Arc::new(contact),
        }
    }
}

impl<C> fmt::Debug for AppState<C>
where
    C: ContactService,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("start_time", &self.start_time)
            .field("config", &self.config)
            .field("contact", &"ContactService")
            .finish()
    }
}
