//! Pages
//!
//! Routed views; the admin app currently has a single dashboard page.

mod dashboard;

pub use dashboard::DashboardPage;
