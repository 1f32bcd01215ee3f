//! Modal Component
//!
//! Overlay shell shared by the add and edit forms.

use leptos::prelude::*;

/// Renders `children` over the page while `is_open` is true.
///
/// Clicking the backdrop calls `on_close`; clicks inside the panel do not.
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal-panel" on:click=|ev| ev.stop_propagation()>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
