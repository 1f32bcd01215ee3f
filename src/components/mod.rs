//! UI Components
//!
//! Presentation-only Leptos components for the dashboard page.

mod header;
mod modal;
mod modal_add_food;
mod modal_edit_food;
mod food_card;
mod delete_confirm_button;

pub use header::Header;
pub use modal::Modal;
pub use modal_add_food::ModalAddFood;
pub use modal_edit_food::ModalEditFood;
pub use food_card::FoodCard;
pub use delete_confirm_button::DeleteConfirmButton;
