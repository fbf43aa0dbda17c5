//! Investment domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single position/holding record belonging to one investor.
///
/// Field names match the stored columns; the list read is pass-through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Investment {
    pub id: String,
    pub investor_id: String,
    pub project_name: String,
    pub token_class: String,
    pub shares_owned: i64,
    pub market_value: f64,
    pub roi_percent: f64,
    pub next_distribution_date: NaiveDate,
}
