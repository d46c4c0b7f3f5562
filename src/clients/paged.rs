//! Paged collection fetching.
//!
//! List endpoints return a page of items plus a `Content-Range` header. The
//! helpers here follow that header until the collection is exhausted.

use serde::de::DeserializeOwned;

use crate::clients::context::RequestContext;
use crate::clients::decode::DecodeTarget;
use crate::clients::errors::HttpError;
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{HttpMethod, RangeOption, RequestOption};
use crate::clients::http_response::PageCursor;

impl HttpClient {
    /// Fetches every item of a list endpoint, page by page.
    ///
    /// The first request carries no `Range` header, so the server picks the
    /// first page. Each following request asks for `items=<next_offset>`
    /// from the previous page's cursor. Pages are requested sequentially and
    /// items are returned in server order.
    ///
    /// There is no page limit: the loop ends only when the cursor reports no
    /// remaining items.
    ///
    /// # Errors
    ///
    /// Returns the first error from any page; items already fetched are
    /// discarded. Cancelling `ctx` aborts the in-flight page with
    /// [`HttpError::Cancelled`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let customers: Vec<Customer> = client.fetch_all(&ctx, "customers").await?;
    /// ```
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> Result<Vec<T>, HttpError> {
        let mut items = Vec::new();
        let mut range: Option<RangeOption> = None;

        loop {
            let (mut page, cursor) = self.fetch_page::<T>(ctx, path, range).await?;

            tracing::debug!(
                path,
                page_size = page.len(),
                last_item_index = cursor.last_item_index,
                total_items = cursor.total_items,
                "Fetched MRPeasy page"
            );

            items.append(&mut page);
            if !cursor.has_next() {
                return Ok(items);
            }
            range = Some(RangeOption::From(cursor.next_offset()));
        }
    }

    /// Fetches a single page of a list endpoint.
    ///
    /// `range` of `None` sends no `Range` header.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::execute`].
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        path: &str,
        range: Option<RangeOption>,
    ) -> Result<(Vec<T>, PageCursor), HttpError> {
        let request = self
            .request(HttpMethod::Get, path)
            .options(range.map(RequestOption::Range))
            .build()?;

        let mut page: Vec<T> = Vec::new();
        let response = self
            .execute(ctx, request, Some(DecodeTarget::Typed(&mut page)))
            .await?;

        Ok((page, response.cursor))
    }
}
