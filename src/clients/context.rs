//! Caller-supplied cancellation for API calls.
//!
//! A [`RequestContext`] bundles a [`CancellationToken`] with an optional
//! deadline. Every network call made by [`HttpClient`](crate::clients::HttpClient)
//! races against the context, so cancelling it aborts the in-flight request
//! and any paged fetch built on top of it.

use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::clients::errors::CancellationReason;

/// Cancellation context bound to one or more API calls.
///
/// Cloning a context shares its token: cancelling any clone cancels them all.
/// Use [`RequestContext::child`] for a context that can be cancelled
/// independently of its parent.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use mrpeasy::clients::{CancellationReason, RequestContext};
///
/// let ctx = RequestContext::new().with_timeout(Duration::from_secs(30));
/// assert!(ctx.err().is_none());
///
/// ctx.cancel();
/// assert_eq!(ctx.err(), Some(CancellationReason::Cancelled));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Creates a context that is never cancelled unless [`cancel`](Self::cancel) is called.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context driven by an existing token.
    #[must_use]
    pub const fn from_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Sets a deadline. An earlier deadline already on the context is kept.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) if existing < deadline => existing,
            _ => deadline,
        });
        self
    }

    /// Sets a deadline `timeout` from now.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derives a context that is cancelled with its parent but can also be
    /// cancelled on its own.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Cancels this context and every child derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns the underlying token.
    #[must_use]
    pub const fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns why the context is done, or `None` while it is still live.
    #[must_use]
    pub fn err(&self) -> Option<CancellationReason> {
        if self.token.is_cancelled() {
            return Some(CancellationReason::Cancelled);
        }
        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => {
                Some(CancellationReason::DeadlineExceeded)
            }
            _ => None,
        }
    }

    /// Resolves once the context is cancelled or its deadline passes.
    pub async fn done(&self) -> CancellationReason {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    () = self.token.cancelled() => CancellationReason::Cancelled,
                    () = tokio::time::sleep_until(deadline) => CancellationReason::DeadlineExceeded,
                }
            }
            None => {
                self.token.cancelled().await;
                CancellationReason::Cancelled
            }
        }
    }
}
