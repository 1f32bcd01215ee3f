//! Header Component
//!
//! Page banner with the "new dish" trigger.

use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] on_open_modal: Callback<()>) -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="header-content">
                <span class="header-logo">"Food Admin"</span>
                <button
                    type="button"
                    class="new-food-btn"
                    data-testid="new-food-button"
                    on:click=move |_| on_open_modal.run(())
                >
                    <span class="new-food-label">"New dish"</span>
                    <span class="new-food-icon">"+"</span>
                </button>
            </div>
        </header>
    }
}
