//! HTTP response types for the MRPeasy API client.
//!
//! This module provides the [`HttpResponse`] envelope returned by a
//! successful call and the [`PageCursor`] derived from its `Content-Range`
//! header.

use reqwest::header::{HeaderMap, CONTENT_RANGE};

use crate::clients::errors::PaginationHeaderError;

/// Unit token the API may put in front of the range, as in `items 0-99/250`.
const RANGE_UNIT_PREFIX: &str = "items ";

/// Pagination state parsed from a response's `Content-Range` header.
///
/// The header format is `<first>-<last>/<total>`, with zero-based inclusive
/// item indexes. A cursor describes exactly one response; only
/// [`next_offset`](Self::next_offset) is carried into the next request.
///
/// # Example
///
/// ```rust
/// use mrpeasy::clients::PageCursor;
///
/// let cursor = PageCursor::parse("0-99/250").unwrap();
/// assert_eq!(cursor.last_item_index, 99);
/// assert_eq!(cursor.total_items, 250);
/// assert!(cursor.has_next());
/// assert_eq!(cursor.next_offset(), 99);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageCursor {
    /// Index of the last item in this response.
    pub last_item_index: u64,
    /// Total number of items in the collection.
    pub total_items: u64,
}

impl PageCursor {
    /// Parses a `Content-Range` header value.
    ///
    /// The first index is validated but not retained.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationHeaderError::Malformed`] if the value does not have
    /// exactly one `/` and exactly one `-` in the range part, or
    /// [`PaginationHeaderError::InvalidNumber`] if a segment is not an integer.
    pub fn parse(header_value: &str) -> Result<Self, PaginationHeaderError> {
        let trimmed = header_value.trim();
        let range_spec = trimmed.strip_prefix(RANGE_UNIT_PREFIX).unwrap_or(trimmed);

        let malformed = || PaginationHeaderError::Malformed {
            value: header_value.to_string(),
        };

        let parts: Vec<&str> = range_spec.split('/').collect();
        let [range, total] = parts[..] else {
            return Err(malformed());
        };

        let bounds: Vec<&str> = range.split('-').collect();
        let [first, last] = bounds[..] else {
            return Err(malformed());
        };

        parse_segment("first index", first, header_value)?;
        let last_item_index = parse_segment("last index", last, header_value)?;
        let total_items = parse_segment("total", total, header_value)?;

        Ok(Self {
            last_item_index,
            total_items,
        })
    }

    /// Reads and parses the `Content-Range` header from a header map.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationHeaderError::Missing`] if the header is absent or
    /// not valid UTF-8, otherwise any error from [`parse`](Self::parse).
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, PaginationHeaderError> {
        let value = headers
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .ok_or(PaginationHeaderError::Missing)?;
        Self::parse(value)
    }

    /// Returns `true` if items remain after this response.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        // total - 1 > last, without underflow on an empty collection
        self.total_items > self.last_item_index.saturating_add(1)
    }

    /// Returns the offset to request the next page from.
    ///
    /// This is the last returned index itself, not one past it: the server
    /// treats the requested start offset as exclusive of the last fetched item.
    #[must_use]
    pub const fn next_offset(&self) -> u64 {
        self.last_item_index
    }
}

fn parse_segment(
    segment: &'static str,
    found: &str,
    header_value: &str,
) -> Result<u64, PaginationHeaderError> {
    found
        .trim()
        .parse()
        .map_err(|_| PaginationHeaderError::InvalidNumber {
            segment,
            found: found.to_string(),
            value: header_value.to_string(),
        })
}

/// The envelope of a successful (2xx) API call.
///
/// The body has already been consumed by the executor; the envelope keeps
/// the status, the headers and the derived [`PageCursor`].
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Pagination state of this response.
    pub cursor: PageCursor,
}

impl HttpResponse {
    /// Creates a new envelope.
    #[must_use]
    pub const fn new(code: u16, headers: HeaderMap, cursor: PageCursor) -> Self {
        Self {
            code,
            headers,
            cursor,
        }
    }

    /// Returns `true` if more items remain after this response.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.cursor.has_next()
    }

    /// Returns the offset to request the next page from.
    #[must_use]
    pub const fn next_offset(&self) -> u64 {
        self.cursor.next_offset()
    }

    /// Returns a header value as a string, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
