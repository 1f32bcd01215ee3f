//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::dashboard::Dashboard;

/// App-wide state provided via context
#[derive(Clone)]
pub struct AppContext {
    /// State container for the dashboard page
    pub dashboard: Dashboard,
}

impl AppContext {
    pub fn new(dashboard: Dashboard) -> Self {
        Self { dashboard }
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
