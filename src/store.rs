//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use reactive_stores::Store;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{Food, FoodId, FoodPatch};

/// Dashboard page state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct DashboardState {
    /// Foods mirrored from the backend, `None` until the first load
    pub foods: Option<Vec<Food>>,
    /// Target of the edit overlay
    pub editing_food: Option<Food>,
    pub add_modal_open: bool,
    pub edit_modal_open: bool,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

// ========================
// State Mutations
// ========================

impl DashboardState {
    /// Replace the whole collection, keeping server order
    pub fn replace_foods(&mut self, foods: Vec<Food>) {
        self.foods = Some(foods);
    }

    /// Append a created food. An unloaded collection starts empty.
    pub fn append_food(&mut self, food: Food) {
        self.foods.get_or_insert_with(Vec::new).push(food);
    }

    /// Replace the food with the same id in place
    pub fn replace_food(&mut self, updated: Food) {
        if let Some(slot) = self
            .foods
            .iter_mut()
            .flatten()
            .find(|food| food.id == updated.id)
        {
            *slot = updated;
        }
    }

    /// Remove a food by ID
    pub fn remove_food(&mut self, id: FoodId) {
        if let Some(foods) = self.foods.as_mut() {
            foods.retain(|food| food.id != id);
        }
    }

    pub fn begin_edit(&mut self, food: Food) {
        self.editing_food = Some(food);
        self.edit_modal_open = true;
    }

    /// Full record to submit for an edit: the edit target with `patch` laid over it
    pub fn edit_payload(&self, patch: &FoodPatch) -> DashboardResult<Food> {
        self.editing_food
            .as_ref()
            .map(|base| patch.apply_to(base))
            .ok_or(DashboardError::NotEditing)
    }

    pub fn food_count(&self) -> usize {
        self.foods.as_ref().map_or(0, Vec::len)
    }
}
