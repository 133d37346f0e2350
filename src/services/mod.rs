// Travily backend API clients
// Thin async HTTP clients over the travel-planner backend. Response-body
// parsing is factored into pure functions so it is testable offline.

pub mod auth_api;
pub mod history_api;
pub mod places_api;
