//! Restaurant Menu Domain Module
//!
//! This module contains all menu business logic, including:
//! - Domain models (Dish, CourseType, CourseFilter, request/response bodies)
//! - Business logic helpers (price parsing and formatting)
//! - The menu store and application state
//! - Derived views (course filter, per-course averages)
//! - Add-dish form validation
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;
pub mod validation;
pub mod view;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{CourseFilter, CourseType, Dish, DishCandidate};
pub use state::{AppState, MenuStore, SharedState};
pub use validation::DishDraft;
