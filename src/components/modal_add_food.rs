//! Add Food Modal
//!
//! Form overlay for creating a new dish.

use leptos::prelude::*;

use crate::components::Modal;
use crate::models::NewFood;

#[component]
pub fn ModalAddFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    #[prop(into)] on_add_food: Callback<NewFood>,
) -> impl IntoView {
    let (image, set_image) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let reset = move || {
        set_image.set(String::new());
        set_name.set(String::new());
        set_price.set(String::new());
        set_description.set(String::new());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_add_food.run(NewFood {
            name: name.get(),
            description: description.get(),
            price: price.get(),
            available: true,
            image: image.get(),
        });
        reset();
        set_is_open.run(());
    };

    view! {
        <Modal is_open=is_open on_close=set_is_open>
            <form class="food-form" on:submit=on_submit>
                <h1>"New dish"</h1>
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
                <button type="submit" data-testid="add-food-button">
                    <span class="button-text">"Add dish"</span>
                    <span class="icon">"✓"</span>
                </button>
            </form>
        </Modal>
    }
}
