//! Edit Food Modal
//!
//! Form overlay prefilled from the food being edited. Submits a `FoodPatch`
//! holding every form field; the dashboard merges it onto the edit target.

use leptos::prelude::*;

use crate::components::Modal;
use crate::models::{Food, FoodPatch};

#[component]
pub fn ModalEditFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    #[prop(into)] editing_food: Signal<Option<Food>>,
    #[prop(into)] on_update_food: Callback<FoodPatch>,
) -> impl IntoView {
    let (image, set_image) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (description, set_description) = signal(String::new());

    // Prefill whenever a different food is picked for editing
    Effect::new(move |_| {
        if let Some(food) = editing_food.get() {
            set_image.set(food.image);
            set_name.set(food.name);
            set_price.set(food.price);
            set_description.set(food.description);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_update_food.run(FoodPatch {
            name: Some(name.get()),
            description: Some(description.get()),
            price: Some(price.get()),
            available: None,
            image: Some(image.get()),
        });
        set_is_open.run(());
    };

    view! {
        <Modal is_open=is_open on_close=set_is_open>
            <form class="food-form" on:submit=on_submit>
                <h1>"Edit dish"</h1>
                <input
                    type="url"
                    placeholder="Paste the image link here"
                    required=true
                    prop:value=move || image.get()
                    on:input=move |ev| set_image.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Ex: Moda Italiana"
                    required=true
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="Ex: 19.90"
                    required=true
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
                <button type="submit" data-testid="edit-food-button">
                    <span class="button-text">"Save changes"</span>
                    <span class="icon">"✓"</span>
                </button>
            </form>
        </Modal>
    }
}
