//! MRPeasy list endpoints and their record shapes.
//!
//! Each record type implements [`ListResource`], which ties it to the
//! endpoint path it is listed from. Listing goes through
//! [`HttpClient::fetch_all`], so every endpoint pages the same way.
//!
//! # Example
//!
//! ```rust,ignore
//! use mrpeasy::resources::{Customer, StockItem};
//!
//! let customers = client.list_customers(&ctx).await?;
//! let items = client.list::<StockItem>(&ctx).await?;
//! ```

mod customer;
mod customer_order;
mod shipment;
mod stock_item;
mod timestamp;

pub use customer::{ContactDetails, Customer};
pub use customer_order::{CustomerOrder, CustomerOrderProduct, StockLot};
pub use shipment::{Shipment, ShipmentOrder, ShipmentProduct};
pub use stock_item::{Parameter, PurchaseTerms, StockItem};
pub use timestamp::Timestamp;

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpError, RequestContext};

/// A record type that can be listed from a paginated endpoint.
pub trait ListResource: DeserializeOwned + Send + Sync + Sized {
    /// The singular name of the resource (e.g., "Customer").
    const NAME: &'static str;

    /// The endpoint path, relative to the base URL (e.g., "customers").
    const PATH: &'static str;
}

impl HttpClient {
    /// Lists every record of `R`.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::fetch_all`].
    pub async fn list<R: ListResource>(&self, ctx: &RequestContext) -> Result<Vec<R>, HttpError> {
        tracing::debug!(resource = R::NAME, path = R::PATH, "Listing MRPeasy resource");
        self.fetch_all(ctx, R::PATH).await
    }

    /// Lists every customer.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::fetch_all`].
    pub async fn list_customers(&self, ctx: &RequestContext) -> Result<Vec<Customer>, HttpError> {
        self.list(ctx).await
    }

    /// Lists every customer order.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::fetch_all`].
    pub async fn list_customer_orders(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<CustomerOrder>, HttpError> {
        self.list(ctx).await
    }

    /// Lists every shipment.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::fetch_all`].
    pub async fn list_shipments(&self, ctx: &RequestContext) -> Result<Vec<Shipment>, HttpError> {
        self.list(ctx).await
    }

    /// Lists every stock item.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::fetch_all`].
    pub async fn list_stock_items(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<StockItem>, HttpError> {
        self.list(ctx).await
    }
}
