//! Destinations for a response body.

use std::fmt;

use serde::de::DeserializeOwned;
use tokio::io::AsyncWrite;

use crate::clients::errors::HttpError;

/// Where the executor should put a successful response body.
///
/// The caller picks the variant; the executor never inspects the target's
/// type at runtime.
///
/// # Example
///
/// ```rust,ignore
/// use mrpeasy::clients::DecodeTarget;
///
/// // Decode JSON into a typed slot
/// let mut customers: Vec<Customer> = Vec::new();
/// client.execute(&ctx, request, Some(DecodeTarget::Typed(&mut customers))).await?;
///
/// // Copy the raw bytes into a writer
/// let mut file = tokio::fs::File::create("customers.json").await?;
/// client.execute::<()>(&ctx, request, Some(DecodeTarget::Raw(&mut file))).await?;
/// ```
pub enum DecodeTarget<'a, T> {
    /// Copy the body unchanged into a writer.
    Raw(&'a mut (dyn AsyncWrite + Unpin + Send)),
    /// Decode the body as JSON into a value.
    Typed(&'a mut T),
}

impl<T> fmt::Debug for DecodeTarget<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(_) => f.write_str("DecodeTarget::Raw"),
            Self::Typed(_) => f.write_str("DecodeTarget::Typed"),
        }
    }
}

/// Decodes the first JSON value in `body` into `slot`.
///
/// An empty or whitespace-only body is accepted and leaves `slot` untouched.
pub(crate) fn decode_json<T: DeserializeOwned>(body: &[u8], slot: &mut T) -> Result<(), HttpError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<T>();
    match values.next() {
        None => Ok(()),
        Some(Ok(value)) => {
            *slot = value;
            Ok(())
        }
        Some(Err(e)) => Err(HttpError::Decoding(e)),
    }
}
