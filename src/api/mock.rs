//! In-memory `FoodApi` for tests
//!
//! Behaves like a json-server backend and records every request it receives.
//! `GatedFoodApi` holds chosen requests open until the test releases them.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::FoodApi;
use crate::error::ApiError;
use crate::models::{Food, FoodId, NewFood};

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    List,
    Create(NewFood),
    Update(FoodId, Food),
    Delete(FoodId),
}

#[derive(Default)]
pub struct MockFoodApi {
    foods: Mutex<Vec<Food>>,
    requests: Mutex<Vec<Request>>,
    failing: Mutex<bool>,
    normalize_prices: Mutex<bool>,
}

impl MockFoodApi {
    pub fn with_foods(foods: Vec<Food>) -> Self {
        Self {
            foods: Mutex::new(foods),
            ..Default::default()
        }
    }

    /// Make every following request answer 500
    pub fn fail_requests(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    /// Answer with prices rewritten to two decimals, like a backend storing numerics
    pub fn normalize_prices(&self, normalize: bool) {
        *self.normalize_prices.lock().unwrap() = normalize;
    }

    fn stored_price(&self, price: &str) -> String {
        if !*self.normalize_prices.lock().unwrap() {
            return price.to_string();
        }
        price
            .parse::<f64>()
            .map(|value| format!("{:.2}", value))
            .unwrap_or_else(|_| price.to_string())
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<Request> {
        self.requests.lock().unwrap().last().cloned()
    }

    fn record(&self, request: Request) -> Result<(), ApiError> {
        self.requests.lock().unwrap().push(request);
        if *self.failing.lock().unwrap() {
            return Err(ApiError::Http {
                status: 500,
                message: "Internal Server Error".to_string(),
            });
        }
        Ok(())
    }

    fn not_found(id: FoodId) -> ApiError {
        ApiError::Http {
            status: 404,
            message: format!("food {} not found", id),
        }
    }
}

#[async_trait(?Send)]
impl FoodApi for MockFoodApi {
    async fn list_foods(&self) -> Result<Vec<Food>, ApiError> {
        self.record(Request::List)?;
        Ok(self.foods.lock().unwrap().clone())
    }

    async fn create_food(&self, food: &NewFood) -> Result<Food, ApiError> {
        self.record(Request::Create(food.clone()))?;
        let mut foods = self.foods.lock().unwrap();
        let id = foods.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        let created = Food {
            id,
            name: food.name.clone(),
            description: food.description.clone(),
            price: self.stored_price(&food.price),
            available: food.available,
            image: food.image.clone(),
        };
        foods.push(created.clone());
        Ok(created)
    }

    async fn update_food(&self, id: FoodId, food: &Food) -> Result<Food, ApiError> {
        self.record(Request::Update(id, food.clone()))?;
        let mut foods = self.foods.lock().unwrap();
        let slot = foods
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        *slot = Food {
            id,
            price: self.stored_price(&food.price),
            ..food.clone()
        };
        Ok(slot.clone())
    }

    async fn delete_food(&self, id: FoodId) -> Result<(), ApiError> {
        self.record(Request::Delete(id))?;
        // Unknown ids succeed
        self.foods.lock().unwrap().retain(|f| f.id != id);
        Ok(())
    }
}

/// Wraps `MockFoodApi` and parks update/delete requests on a gate until the test opens it.
///
/// Updates are gated by the submitted name, deletes by `"delete-{id}"`.
#[derive(Default)]
pub struct GatedFoodApi {
    inner: MockFoodApi,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    started: Mutex<Vec<String>>,
}

impl GatedFoodApi {
    pub fn with_foods(foods: Vec<Food>) -> Self {
        Self {
            inner: MockFoodApi::with_foods(foods),
            ..Default::default()
        }
    }

    /// Hold the request with `key` until the returned sender fires
    pub fn gate(&self, key: impl Into<String>) -> oneshot::Sender<()> {
        let (open, gate) = oneshot::channel();
        self.gates.lock().unwrap().insert(key.into(), gate);
        open
    }

    /// Keys of requests that reached the backend, in arrival order
    pub fn started(&self) -> Vec<String> {
        self.started.lock().unwrap().clone()
    }

    async fn pass(&self, key: String) {
        self.started.lock().unwrap().push(key.clone());
        let gate = self.gates.lock().unwrap().remove(&key);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }
}

#[async_trait(?Send)]
impl FoodApi for GatedFoodApi {
    async fn list_foods(&self) -> Result<Vec<Food>, ApiError> {
        self.inner.list_foods().await
    }

    async fn create_food(&self, food: &NewFood) -> Result<Food, ApiError> {
        self.inner.create_food(food).await
    }

    async fn update_food(&self, id: FoodId, food: &Food) -> Result<Food, ApiError> {
        self.pass(food.name.clone()).await;
        self.inner.update_food(id, food).await
    }

    async fn delete_food(&self, id: FoodId) -> Result<(), ApiError> {
        self.pass(format!("delete-{}", id)).await;
        self.inner.delete_food(id).await
    }
}
