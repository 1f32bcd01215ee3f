//! Food Card Component
//!
//! One dish in the dashboard list, with edit, delete and availability controls.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::{Food, FoodId};

#[component]
pub fn FoodCard(
    food: Food,
    #[prop(into)] on_delete: Callback<FoodId>,
    #[prop(into)] on_edit: Callback<Food>,
    #[prop(into)] on_toggle_available: Callback<Food>,
) -> impl IntoView {
    let id = food.id;
    let available = food.available;
    let for_edit = food.clone();
    let for_toggle = food.clone();

    view! {
        <div class=if available { "food-card" } else { "food-card unavailable" }>
            <header class="food-card-image">
                <img src=food.image.clone() alt=food.name.clone() />
            </header>
            <section class="food-card-body">
                <h2>{food.name.clone()}</h2>
                <p>{food.description.clone()}</p>
                <p class="price">"$ " <b>{food.price.clone()}</b></p>
            </section>
            <section class="food-card-footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon edit-btn"
                        data-testid=format!("edit-food-{}", id)
                        on:click=move |_| on_edit.run(for_edit.clone())
                    >
                        "✎"
                    </button>
                    <DeleteConfirmButton label="🗑" on_confirm=move |_| on_delete.run(id) />
                </div>
                <div class="availability-container">
                    <p>{if available { "Available" } else { "Unavailable" }}</p>
                    <label class="switch">
                        <input
                            type="checkbox"
                            prop:checked=available
                            on:change=move |ev| {
                                // Mirror the stored record; a successful toggle redraws the card
                                event_target::<web_sys::HtmlInputElement>(&ev).set_checked(available);
                                on_toggle_available.run(for_toggle.clone());
                            }
                        />
                        <span class="slider" />
                    </label>
                </div>
            </section>
        </div>
    }
}
