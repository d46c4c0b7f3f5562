//! Customer order resource.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ListResource, Timestamp};

/// Lot or order an order line is sourced from.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StockLot {
    pub lot_id: String,
    pub lot_code: String,
    pub lot_status: String,
    pub lot_status_txt: String,
    pub man_ord_id: String,
    pub manufacturing_order_code: String,
    pub manufacturing_order_status: String,
    pub manufacturing_order_status_txt: String,
    pub pur_ord_id: String,
    pub purchase_order_code: String,
    pub purchase_order_status: String,
    pub purchase_order_status_txt: String,
}

/// A line of a customer order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CustomerOrderProduct {
    pub line_id: String,
    pub ord: String,
    pub article_id: String,
    pub description: String,
    pub quantity: f64,
    pub shipped: f64,
    // The API spells it this way.
    #[serde(rename = "delviery_date")]
    pub delivery_date: Option<Timestamp>,
    pub item_price: f64,
    pub item_price_cur: f64,
    pub total_price: f64,
    pub total_price_cur: f64,
    pub discount_rate: f64,
    pub discount_rate_cur: f64,
    pub cost: f64,
    pub profit: f64,
    pub part_status: String,
    pub part_status_txt: String,
    pub source: Vec<StockLot>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CustomerOrder {
    #[serde(rename = "cust_ord_id")]
    pub customer_order_id: String,
    pub code: String,
    pub reference: String,
    pub customer_id: String,
    pub customer_code: String,
    pub customer_name: String,
    pub pricelist_id: i64,
    pub pricelist_code: String,
    pub pricelist_title: String,
    pub shipping_address_id: String,
    /// Either a string or an object.
    pub shipping_address: Value,
    pub status: String,
    pub status_txt: String,
    pub part_status: String,
    pub part_status_txt: String,
    pub invoice_status: String,
    pub invoice_status_txt: String,
    pub payment_status: String,
    pub payment_status_txt: String,
    pub created: Timestamp,
    pub delivery_date: Option<Timestamp>,
    pub actual_delivery_date: Option<Timestamp>,
    pub currency: String,
    pub currency_rate: f64,
    pub total_price: f64,
    pub total_price_cur: f64,
    pub total_cost: f64,
    pub profit: f64,
    pub discount_rate: f64,
    pub discount_sum: f64,
    pub discount_sum_cur: f64,
    pub notes: String,
    pub delivery_terms: String,
    pub products: Vec<CustomerOrderProduct>,
}

impl ListResource for CustomerOrder {
    const NAME: &'static str = "CustomerOrder";
    const PATH: &'static str = "customer-orders";
}
