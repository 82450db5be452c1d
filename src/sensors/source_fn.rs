//! # Function-backed source (`SourceFn`)
//!
//! [`SourceFn`] wraps a closure `F: Fn(Arc<str>) -> Fut`, producing a fresh
//! fetch future per pull. This keeps scripted sources free of shared mutable
//! state; when a script does need state across pulls (for example "fail on
//! the fifth call"), hold an `Arc`'d counter inside the closure explicitly.
//!
//! ## Example
//! ```
//! use std::sync::Arc;
//! use pullstream::{FetchError, Reading, SourceFn, SourceRef};
//!
//! let fixed: SourceRef = SourceFn::arc(|subject: Arc<str>| async move {
//!     Ok::<_, FetchError>(Reading::new(subject, 40))
//! });
//! ```

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::sensors::reading::Reading;
use crate::sensors::source::Source;

/// Function-backed source implementation.
///
/// Wraps a closure that *creates* a new fetch future per pull.
pub struct SourceFn<F> {
    f: F,
}

impl<F> SourceFn<F> {
    /// Creates a new function-backed source.
    ///
    /// Prefer [`SourceFn::arc`] when you immediately need a
    /// [`SourceRef`](crate::SourceRef).
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the source and returns it as a shared handle (`Arc<SourceFn>`).
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<F, Fut> Source for SourceFn<F>
where
    F: Fn(Arc<str>) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = Result<Reading, FetchError>> + Send + 'static,
{
    async fn fetch(&self, subject: Arc<str>) -> Result<Reading, FetchError> {
        (self.f)(subject).await
    }
}
