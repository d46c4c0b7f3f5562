//! Customer resource.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ListResource, Timestamp};

/// One contact entry (email, phone, address, ...) of a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ContactDetails {
    pub line_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Either a plain string or an object, depending on `kind`.
    pub value: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Customer {
    pub customer_id: String,
    pub code: String,
    pub title: String,
    pub reg_nr: String,
    pub tax_nr: String,
    pub created: Timestamp,
    pub next_contact: Option<Timestamp>,
    pub status: String,
    pub payment_period: i64,
    pub user_id: String,
    pub language_id: String,
    pub contact_data: Vec<ContactDetails>,
}

impl ListResource for Customer {
    const NAME: &'static str = "Customer";
    const PATH: &'static str = "customers";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_deserialization() {
        let customer: Customer = serde_json::from_value(json!({
            "customer_id": "17",
            "code": "C-00017",
            "title": "ACME Ltd",
            "created": "1700000000",
            "next_contact": null,
            "status": "1",
            "payment_period": 30,
            "contact_data": [
                {"line_id": "1", "type": "email", "value": "ops@acme.test"},
                {"line_id": "2", "type": "address", "value": {"city": "Riga"}}
            ]
        }))
        .unwrap();

        assert_eq!(customer.customer_id, "17");
        assert_eq!(customer.created.timestamp(), 1_700_000_000);
        assert!(customer.next_contact.is_none());
        assert_eq!(customer.payment_period, 30);
        assert_eq!(customer.contact_data[0].kind, "email");
        assert_eq!(customer.contact_data[1].value["city"], "Riga");
        assert!(customer.reg_nr.is_empty());
    }
}
