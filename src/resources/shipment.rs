//! Shipment resource.

use serde::{Deserialize, Serialize};

use super::{ListResource, Timestamp};

/// A picked item of a shipment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ShipmentProduct {
    pub article_id: String,
    pub product_id: String,
    pub item_code: String,
    pub item_title: String,
    pub lot_id: String,
    pub lot_code: String,
    pub lot_status: String,
    pub site_id: String,
    pub site: String,
    pub location_id: String,
    pub location: String,
    pub quantity_picked: i64,
    pub quantity_booked: i64,
    pub unit_id: String,
    pub unit: String,
    pub expiry_date: String,
    pub lot_status_txt: String,
}

/// A customer order covered by a shipment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ShipmentOrder {
    pub customer_order_id: String,
    pub customer_order_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Shipment {
    pub shipment_id: String,
    pub code: String,
    pub created: Timestamp,
    pub status: String,
    pub customer_order_id: String,
    pub customer_order_code: String,
    pub rma_order_id: String,
    pub rma_order_code: String,
    pub purchase_order_id: String,
    pub purchase_order_code: String,
    pub waybill_notes: String,
    pub packing_notes: String,
    pub tracking_number: String,
    pub shipping_address: String,
    pub status_txt: String,
    pub products: Vec<ShipmentProduct>,
    pub orders: Vec<ShipmentOrder>,
}

impl ListResource for Shipment {
    const NAME: &'static str = "Shipment";
    const PATH: &'static str = "shipments";
}
