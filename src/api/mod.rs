//! REST API Bindings
//!
//! Frontend bindings to the food backend, behind the `FoodApi` seam.

mod foods;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{Food, FoodId, NewFood};

pub use foods::HttpFoodApi;

/// Backend contract for the `/foods` collection
///
/// Futures are `?Send`: on wasm32 they run on the single browser event loop.
#[async_trait(?Send)]
pub trait FoodApi: Send + Sync {
    /// `GET /foods`
    async fn list_foods(&self) -> Result<Vec<Food>, ApiError>;

    /// `POST /foods`
    async fn create_food(&self, food: &NewFood) -> Result<Food, ApiError>;

    /// `PUT /foods/{id}` with the full record
    async fn update_food(&self, id: FoodId, food: &Food) -> Result<Food, ApiError>;

    /// `DELETE /foods/{id}`; the response body is ignored
    async fn delete_food(&self, id: FoodId) -> Result<(), ApiError>;
}
