//! Mock lookup backend for testing.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use super::{BibliographicLookup, LookupError, LookupFuture, Work};

/// A configurable mock response for [`MockLookup`].
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Simulate a successful match.
    Found(Work),
    /// Simulate "no result for this query".
    NotFound,
    /// Simulate a transport or server failure.
    Error(String),
}

impl MockResponse {
    /// Shorthand for a `Found` response with the given title and relevance.
    pub fn found(title: &str, relevance: f64) -> Self {
        MockResponse::Found(Work {
            title: Some(title.to_string()),
            authors: vec!["Mock Author".to_string()],
            year: Some(2020),
            doi: Some("10.1000/mock".to_string()),
            journal: None,
            relevance,
        })
    }
}

/// A hand-rolled mock implementing [`BibliographicLookup`] for tests.
///
/// Supports:
/// - A fixed response (used for every call), **or**
/// - A sequence of responses (one per call, repeating the last if exhausted).
/// - Optional per-call latency.
/// - Call counting and query recording.
pub struct MockLookup {
    name: &'static str,
    /// Each call pops the next response; the fallback repeats when exhausted.
    responses: Mutex<Vec<MockResponse>>,
    fallback: MockResponse,
    similar_works: Mutex<Vec<Work>>,
    fail_similar: AtomicBool,
    delay: Option<Duration>,
    call_count: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl MockLookup {
    /// Create a mock that always returns `response` from `lookup`.
    pub fn new(name: &'static str, response: MockResponse) -> Self {
        Self {
            name,
            responses: Mutex::new(Vec::new()),
            fallback: response,
            similar_works: Mutex::new(Vec::new()),
            fail_similar: AtomicBool::new(false),
            delay: None,
            call_count: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that returns responses in order, repeating the last one.
    pub fn with_sequence(name: &'static str, mut responses: Vec<MockResponse>) -> Self {
        assert!(
            !responses.is_empty(),
            "sequence must have at least one response"
        );
        // Reverse so we can pop() from the front cheaply.
        responses.reverse();
        let fallback = responses.first().cloned().unwrap();
        Self {
            name,
            responses: Mutex::new(responses),
            fallback,
            similar_works: Mutex::new(Vec::new()),
            fail_similar: AtomicBool::new(false),
            delay: None,
            call_count: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Set simulated network latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Works returned from `similar` (empty by default).
    pub fn with_similar_works(self, works: Vec<Work>) -> Self {
        *self.similar_works.lock().unwrap() = works;
        self
    }

    /// Make every `similar` call fail.
    pub fn with_failing_similar(self) -> Self {
        self.fail_similar.store(true, Ordering::SeqCst);
        self
    }

    /// How many times `lookup()` has been called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Queries passed to `lookup()`, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    fn next_response(&self) -> MockResponse {
        let mut seq = self.responses.lock().unwrap();
        if let Some(resp) = seq.pop() {
            resp
        } else {
            self.fallback.clone()
        }
    }
}

impl BibliographicLookup for MockLookup {
    fn name(&self) -> &str {
        self.name
    }

    fn lookup<'a>(&'a self, query: &'a str) -> LookupFuture<'a, Option<Work>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        let response = self.next_response();
        let delay = self.delay;

        Box::pin(async move {
            if let Some(d) = delay {
                tokio::time::sleep(d).await;
            }

            match response {
                MockResponse::Found(work) => Ok(Some(work)),
                MockResponse::NotFound => Ok(None),
                MockResponse::Error(msg) => Err(LookupError::Other(msg)),
            }
        })
    }

    fn similar<'a>(&'a self, _query: &'a str, rows: u32) -> LookupFuture<'a, Vec<Work>> {
        let works: Vec<Work> = self
            .similar_works
            .lock()
            .unwrap()
            .iter()
            .take(rows as usize)
            .cloned()
            .collect();
        let fail = self.fail_similar.load(Ordering::SeqCst);
        let delay = self.delay;

        Box::pin(async move {
            if let Some(d) = delay {
                tokio::time::sleep(d).await;
            }
            if fail {
                return Err(LookupError::Other("similar unavailable".to_string()));
            }
            Ok(works)
        })
    }
}
