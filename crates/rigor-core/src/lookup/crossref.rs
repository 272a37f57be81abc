//! CrossRef works API client.

use std::time::Duration;

use super::{BibliographicLookup, LookupError, LookupFuture, Work};

const DEFAULT_BASE_URL: &str = "https://api.crossref.org/works";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the public CrossRef works endpoint.
///
/// The base URL, polite-pool contact address, and per-request timeout are
/// plain fields so deployments (and tests) can inject their own. One client
/// is built at startup and shared across the pipeline and the
/// recommendations layer.
pub struct CrossrefClient {
    http: reqwest::Client,
    base_url: String,
    mailto: Option<String>,
    timeout: Duration,
}

impl CrossrefClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            mailto: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Contact address for CrossRef's polite pool; also lands in the
    /// User-Agent header.
    pub fn with_mailto(mut self, mailto: Option<String>) -> Self {
        self.mailto = mailto;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn user_agent(&self) -> String {
        match &self.mailto {
            Some(email) => format!("rigor/{} (mailto:{})", env!("CARGO_PKG_VERSION"), email),
            None => format!("rigor/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Run a works query and map the response items.
    ///
    /// `journal_only` adds the relevance sort and journal-article filter the
    /// recommendations layer wants; verification queries go unfiltered so
    /// conference papers still match.
    async fn get_works(
        &self,
        query: &str,
        rows: u32,
        journal_only: bool,
    ) -> Result<Vec<Work>, LookupError> {
        let mut url = format!(
            "{}?query={}&rows={}",
            self.base_url,
            urlencoding::encode(query),
            rows
        );
        if journal_only {
            url.push_str("&sort=relevance&filter=type:journal-article");
        }
        if let Some(ref email) = self.mailto {
            url.push_str(&format!("&mailto={}", urlencoding::encode(email)));
        }

        let resp = self
            .http
            .get(&url)
            .header("User-Agent", self.user_agent())
            .timeout(self.timeout)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let data: serde_json::Value = resp.json().await?;
        let items = data["message"]["items"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        Ok(items.iter().map(work_from_item).collect())
    }
}

/// Map one CrossRef item object onto a [`Work`].
fn work_from_item(item: &serde_json::Value) -> Work {
    let title = item["title"]
        .as_array()
        .and_then(|a| a.first())
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    let authors: Vec<String> = item["author"]
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|a| {
                    let given = a["given"].as_str().unwrap_or("");
                    let family = a["family"].as_str().unwrap_or("");
                    let name = format!("{} {}", given, family).trim().to_string();
                    if name.is_empty() { None } else { Some(name) }
                })
                .collect()
        })
        .unwrap_or_default();

    // Publication year lives under different keys depending on the record.
    let year = ["published", "published-print", "published-online"]
        .iter()
        .find_map(|key| item[*key]["date-parts"][0][0].as_i64())
        .map(|y| y as i32);

    let journal = item["container-title"]
        .as_array()
        .and_then(|a| a.first())
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    Work {
        title,
        authors,
        year,
        doi: item["DOI"].as_str().map(|s| s.to_string()),
        journal,
        relevance: item["score"].as_f64().unwrap_or(0.0),
    }
}

impl BibliographicLookup for CrossrefClient {
    fn name(&self) -> &str {
        "CrossRef"
    }

    fn lookup<'a>(&'a self, query: &'a str) -> LookupFuture<'a, Option<Work>> {
        Box::pin(async move {
            let works = self.get_works(query, 1, false).await?;
            Ok(works.into_iter().next())
        })
    }

    fn similar<'a>(&'a self, query: &'a str, rows: u32) -> LookupFuture<'a, Vec<Work>> {
        Box::pin(async move { self.get_works(query, rows, true).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── response item mapping ────────────────────────────────────────

    #[test]
    fn test_work_from_full_item() {
        let item = json!({
            "title": ["Attention Is All You Need"],
            "author": [
                {"given": "Ashish", "family": "Vaswani"},
                {"family": "Shazeer"}
            ],
            "published": {"date-parts": [[2017, 6]]},
            "DOI": "10.5555/3295222",
            "container-title": ["Advances in Neural Information Processing Systems"],
            "score": 87.5
        });
        let work = work_from_item(&item);
        assert_eq!(work.title.as_deref(), Some("Attention Is All You Need"));
        assert_eq!(work.authors, vec!["Ashish Vaswani", "Shazeer"]);
        assert_eq!(work.year, Some(2017));
        assert_eq!(work.doi.as_deref(), Some("10.5555/3295222"));
        assert_eq!(work.relevance, 87.5);
    }

    #[test]
    fn test_work_from_sparse_item() {
        let work = work_from_item(&json!({}));
        assert_eq!(work.title, None);
        assert!(work.authors.is_empty());
        assert_eq!(work.year, None);
        assert_eq!(work.relevance, 0.0);
    }

    #[test]
    fn test_year_falls_back_to_print_date() {
        let item = json!({
            "published-print": {"date-parts": [[2019]]}
        });
        assert_eq!(work_from_item(&item).year, Some(2019));
    }

    // ── request construction ─────────────────────────────────────────

    #[test]
    fn test_user_agent_includes_mailto() {
        let client = CrossrefClient::new(reqwest::Client::new())
            .with_mailto(Some("audit@example.org".to_string()));
        let ua = client.user_agent();
        assert!(ua.starts_with("rigor/"));
        assert!(ua.contains("mailto:audit@example.org"));
    }

    #[test]
    fn test_user_agent_without_mailto() {
        let client = CrossrefClient::new(reqwest::Client::new());
        assert!(!client.user_agent().contains("mailto"));
    }
}
