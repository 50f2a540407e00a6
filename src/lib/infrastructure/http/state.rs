//! Application state module

use std::{fmt, sync::Arc};

use crate::domain::contact::ContactService;

/// Global application state
#[derive(Clone)]
pub struct AppState<C: ContactService> {
    /// Contact service
    pub contact: Arc<C>,
}

impl<C> AppState<C>
where
    C: ContactService,
{
    /// Create a new application state
    pub fn new(contact: C) -> Self {
        Self {
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
            .field("contact", &"ContactService")
            .finish()
    }
}

#[cfg(test)]
use crate::domain::contact::MockContactService;

/// State backed by a [`MockContactService`], with no expectations unless one is given
#[cfg(test)]
pub fn test_state(contact: Option<MockContactService>) -> AppState<MockContactService> {
    let contact = contact
        .map(Arc::new)
        .unwrap_or_else(|| Arc::new(MockContactService::new()));

    AppState { contact }
}
