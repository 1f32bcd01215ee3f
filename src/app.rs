//! Food Admin App
//!
//! Root component: builds the dashboard state container and provides it to the page.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::HttpFoodApi;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::dashboard::Dashboard;
use crate::pages::DashboardPage;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::info!("Using food API at {}", config.api_url);
    let dashboard = Dashboard::new(Arc::new(HttpFoodApi::new(config.api_url)));

    // Provide context to all children
    provide_context(AppContext::new(dashboard));

    view! {
        <main class="app-layout">
            <DashboardPage />
        </main>
    }
}
