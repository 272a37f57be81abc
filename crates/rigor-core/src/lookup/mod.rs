//! Bibliographic lookup trait and the CrossRef implementation.

pub mod crossref;
pub mod mock;

pub use crossref::CrossrefClient;

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

/// Boxed future returned by [`BibliographicLookup`] methods.
pub type LookupFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, LookupError>> + Send + 'a>>;

/// A bibliographic work returned by a lookup service.
#[derive(Debug, Clone, PartialEq)]
pub struct Work {
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub year: Option<i32>,
    pub doi: Option<String>,
    pub journal: Option<String>,
    /// The service's own relevance score for the query. CrossRef scores are
    /// unbounded floats; only their order and the low-confidence threshold
    /// matter here.
    pub relevance: f64,
}

/// Errors from a lookup service.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("{0}")]
    Other(String),
}

/// A bibliographic database that can be queried with free-text citations.
pub trait BibliographicLookup: Send + Sync {
    /// The canonical name of this service (e.g., "CrossRef").
    fn name(&self) -> &str;

    /// Single best match for a raw citation string, or `None` when the
    /// service has no result for it.
    fn lookup<'a>(&'a self, query: &'a str) -> LookupFuture<'a, Option<Work>>;

    /// Relevance-sorted journal-article search, used for reading
    /// recommendations rather than verification.
    fn similar<'a>(&'a self, query: &'a str, rows: u32) -> LookupFuture<'a, Vec<Work>>;
}
