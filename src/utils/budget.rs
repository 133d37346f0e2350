//! Budget estimation for itineraries.

use serde::{Deserialize, Serialize};

/// A priced itinerary activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub price: f64,
}

/// Sums activity prices on top of the base trip cost.
pub fn estimated_budget(activities: &[Activity], base_cost: f64) -> f64 {
    activities.iter().fold(base_cost, |acc, a| acc + a.price)
}
