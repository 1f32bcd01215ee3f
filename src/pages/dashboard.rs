//! Dashboard Page
//!
//! Lists every dish and wires the header, modals and cards to the
//! dashboard state container. Failed operations are logged and leave
//! the list as it was.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FoodCard, Header, ModalAddFood, ModalEditFood};
use crate::context::use_app_context;
use crate::models::{Food, FoodId, FoodPatch, NewFood};
use crate::store::DashboardStateStoreFields;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let dashboard = use_app_context().dashboard;
    let store = dashboard.store();

    // Load foods once on mount
    Effect::new({
        let dashboard = dashboard.clone();
        move |_| {
            let dashboard = dashboard.clone();
            spawn_local(async move {
                if let Err(err) = dashboard.load().await {
                    log::error!("Failed to load foods: {}", err);
                }
            });
        }
    });

    let toggle_modal = Callback::new({
        let dashboard = dashboard.clone();
        move |_: ()| dashboard.toggle_add_modal()
    });

    let toggle_edit_modal = Callback::new({
        let dashboard = dashboard.clone();
        move |_: ()| dashboard.toggle_edit_modal()
    });

    let handle_add_food = Callback::new({
        let dashboard = dashboard.clone();
        move |food: NewFood| {
            let dashboard = dashboard.clone();
            spawn_local(async move {
                if let Err(err) = dashboard.create(food).await {
                    log::error!("Failed to create food: {}", err);
                }
            });
        }
    });

    let handle_update_food = Callback::new({
        let dashboard = dashboard.clone();
        move |patch: FoodPatch| {
            let dashboard = dashboard.clone();
            spawn_local(async move {
                if let Err(err) = dashboard.update(patch).await {
                    log::error!("Failed to update food: {}", err);
                }
            });
        }
    });

    let handle_delete_food = Callback::new({
        let dashboard = dashboard.clone();
        move |id: FoodId| {
            let dashboard = dashboard.clone();
            spawn_local(async move {
                if let Err(err) = dashboard.delete(id).await {
                    log::error!("Failed to delete food #{}: {}", id, err);
                }
            });
        }
    });

    let handle_edit_food = Callback::new({
        let dashboard = dashboard.clone();
        move |food: Food| dashboard.begin_edit(food)
    });

    let handle_toggle_available = Callback::new({
        let dashboard = dashboard.clone();
        move |food: Food| {
            let dashboard = dashboard.clone();
            let id = food.id;
            spawn_local(async move {
                if let Err(err) = dashboard.toggle_available(food).await {
                    log::error!("Failed to toggle availability of food #{}: {}", id, err);
                }
            });
        }
    });

    let add_modal_open = Signal::derive(move || store.add_modal_open().get());
    let edit_modal_open = Signal::derive(move || store.edit_modal_open().get());
    let editing_food = Signal::derive(move || store.editing_food().get());
    let loaded_empty = move || store.with(|state| state.foods.is_some() && state.food_count() == 0);

    view! {
        <Header on_open_modal=toggle_modal />
        <ModalAddFood
            is_open=add_modal_open
            set_is_open=toggle_modal
            on_add_food=handle_add_food
        />
        <ModalEditFood
            is_open=edit_modal_open
            set_is_open=toggle_edit_modal
            editing_food=editing_food
            on_update_food=handle_update_food
        />

        <Show when=loaded_empty>
            <p class="foods-empty">"No dishes yet. Use \"New dish\" to add one."</p>
        </Show>

        <div class="foods-container" data-testid="foods-list">
            <For
                each=move || store.foods().get().unwrap_or_default()
                key=|food| food.clone()
                children=move |food| {
                    view! {
                        <FoodCard
                            food=food
                            on_delete=handle_delete_food
                            on_edit=handle_edit_food
                            on_toggle_available=handle_toggle_available
                        />
                    }
                }
            />
        </div>
    }
}
