//! Dashboard State Container
//!
//! Owns the dashboard store and runs every operation that mirrors a backend
//! call into it. Each operation sends one request and applies one state
//! change after that request succeeds; on failure the store is left as it was.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::FoodApi;
use crate::error::DashboardResult;
use crate::models::{Food, FoodId, FoodPatch, NewFood};
use crate::store::{DashboardState, DashboardStore};

#[derive(Clone)]
pub struct Dashboard {
    store: DashboardStore,
    api: Arc<dyn FoodApi>,
}

impl Dashboard {
    pub fn new(api: Arc<dyn FoodApi>) -> Self {
        Self {
            store: DashboardStore::new(DashboardState::default()),
            api,
        }
    }

    pub fn store(&self) -> DashboardStore {
        self.store
    }

    /// Current state without subscribing
    #[cfg(test)]
    pub fn snapshot(&self) -> DashboardState {
        self.store.get_untracked()
    }

    /// Replace the collection with the backend's list
    pub async fn load(&self) -> DashboardResult<()> {
        let foods = self.api.list_foods().await?;
        log::info!("Loaded {} foods", foods.len());
        self.store.update(|state| state.replace_foods(foods));
        Ok(())
    }

    /// Create a food and append the server's copy. New foods are always available.
    pub async fn create(&self, candidate: NewFood) -> DashboardResult<Food> {
        let payload = NewFood {
            available: true,
            ..candidate
        };
        let created = self.api.create_food(&payload).await?;
        log::debug!("Created food #{}", created.id);
        self.store.update(|state| state.append_food(created.clone()));
        Ok(created)
    }

    pub fn begin_edit(&self, food: Food) {
        self.store.update(|state| state.begin_edit(food));
    }

    /// Submit the edit target merged with `patch` and store the server's copy
    pub async fn update(&self, patch: FoodPatch) -> DashboardResult<Food> {
        let payload = self.store.with_untracked(|state| state.edit_payload(&patch))?;
        self.replace_remote(payload).await
    }

    /// Flip availability of a listed food
    pub async fn toggle_available(&self, food: Food) -> DashboardResult<Food> {
        let payload = Food {
            available: !food.available,
            ..food
        };
        self.replace_remote(payload).await
    }

    /// Delete on the backend, then drop the food locally
    pub async fn delete(&self, id: FoodId) -> DashboardResult<()> {
        self.api.delete_food(id).await?;
        log::debug!("Deleted food #{}", id);
        self.store.update(|state| state.remove_food(id));
        Ok(())
    }

    pub fn toggle_add_modal(&self) {
        self.store.update(|state| state.add_modal_open = !state.add_modal_open);
    }

    pub fn toggle_edit_modal(&self) {
        self.store.update(|state| state.edit_modal_open = !state.edit_modal_open);
    }

    async fn replace_remote(&self, payload: Food) -> DashboardResult<Food> {
        let updated = self.api.update_food(payload.id, &payload).await?;
        log::debug!("Updated food #{}", updated.id);
        self.store.update(|state| state.replace_food(updated.clone()));
        Ok(updated)
    }
}
