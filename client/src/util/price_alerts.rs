//! Price alerts persisted in `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Users watch a handful of market symbols (currency pairs, listed holdings)
//! from the dashboard. Alerts live only in this browser; the book is loaded
//! on mount, mutated in memory and written back after every change.

#[cfg(test)]
#[path = "price_alerts_test.rs"]
mod price_alerts_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{load_json, save_json};

pub const STORAGE_KEY: &str = "ledgerdesk_price_alerts";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlertError {
    #[error("symbol is required")]
    EmptySymbol,
    #[error("target price must be a positive number, got {0}")]
    InvalidTarget(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Above,
    Below,
}

impl Direction {
    fn crossed(self, price: f64, target: f64) -> bool {
        match self {
            Self::Above => price >= target,
            Self::Below => price <= target,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceAlert {
    pub id: String,
    pub symbol: String,
    pub target: f64,
    pub direction: Direction,
    #[serde(default)]
    pub triggered: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceAlertBook {
    alerts: Vec<PriceAlert>,
}

impl PriceAlertBook {
    /// Load the book from `localStorage`, empty when absent or unreadable.
    pub fn load() -> Self {
        load_json(STORAGE_KEY).unwrap_or_default()
    }

    pub fn save(&self) {
        save_json(STORAGE_KEY, self);
    }

    #[must_use]
    pub fn alerts(&self) -> &[PriceAlert] {
        &self.alerts
    }

    /// Add an alert and return its id.
    ///
    /// # Errors
    ///
    /// Rejects blank symbols and non-positive or non-finite targets.
    pub fn add(&mut self, symbol: &str, target: f64, direction: Direction) -> Result<String, AlertError> {
        let symbol = symbol.trim().to_ascii_uppercase();
        if symbol.is_empty() {
            return Err(AlertError::EmptySymbol);
        }
        if !target.is_finite() || target <= 0.0 {
            return Err(AlertError::InvalidTarget(target));
        }
        let id = uuid::Uuid::new_v4().to_string();
        self.alerts.push(PriceAlert { id: id.clone(), symbol, target, direction, triggered: false });
        Ok(id)
    }

    /// Remove alert `id`; returns whether it existed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        self.alerts.len() != before
    }

    /// Re-arm a triggered alert.
    pub fn reset(&mut self, id: &str) -> bool {
        match self.alerts.iter_mut().find(|a| a.id == id) {
            Some(alert) => {
                alert.triggered = false;
                true
            }
            None => false,
        }
    }

    /// Check a price quote and return alerts that fire for the first time.
    pub fn evaluate(&mut self, symbol: &str, price: f64) -> Vec<PriceAlert> {
        if !price.is_finite() {
            return Vec::new();
        }
        let symbol = symbol.trim().to_ascii_uppercase();
        let mut fired = Vec::new();
        for alert in &mut self.alerts {
            if alert.triggered || alert.symbol != symbol {
                continue;
            }
            if alert.direction.crossed(price, alert.target) {
                alert.triggered = true;
                fired.push(alert.clone());
            }
        }
        fired
    }
}
