//! Stock item resource (the `items` endpoint).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ListResource;

/// Vendor terms for purchasing a stock item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PurchaseTerms {
    pub vendor_id: String,
    pub vendor_code: String,
    pub vendor_title: String,
    pub vendor_product_code: String,
    pub priority: f64,
    pub lead_time: String,
    pub unit: String,
    pub unit_rate: f64,
    pub min_quantity: f64,
    pub vendor_min_quantity: f64,
    pub price: f64,
    pub currency_price: f64,
    pub currency: String,
}

/// A custom parameter attached to a stock item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Parameter {
    pub parameter_id: String,
    pub ord: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct StockItem {
    pub article_id: String,
    pub product_id: String,
    pub code: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    pub group_code: String,
    pub group_title: String,
    pub is_raw: bool,
    /// A number, a list of price levels, or null.
    pub selling_price: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_cost: Option<f64>,
    pub in_stock: f64,
    pub available: f64,
    pub booked: f64,
    pub expected_total: f64,
    pub expected_available: f64,
    pub expected_booked: f64,
    pub min_quantity: String,
    pub icon: String,
    pub deleted: bool,
    pub purchase_terms: Vec<PurchaseTerms>,
    pub parameters: Vec<Parameter>,
}

impl ListResource for StockItem {
    const NAME: &'static str = "StockItem";
    const PATH: &'static str = "items";
}
