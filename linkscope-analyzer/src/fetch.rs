use crate::result::LinkProbeResult;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Redirect hops followed before a probe is classified as a redirect loop.
pub const MAX_REDIRECTS: usize = 3;

/// Classified outcome of a single link fetch.
///
/// Transport failures are classified here, by the typed error the client
/// returns, rather than by sniffing diagnostic strings downstream.
#[derive(Debug, Clone)]
pub enum ProbeOutcome {
    /// A response arrived; carries the post-redirect URL and status line.
    Transmitted {
        final_url: String,
        status_code: u16,
        status_message: String,
        content_length: u64,
    },
    /// Malformed scheme or transport-level failure (DNS, connect).
    BadProtocol,
    /// The redirect cap was exceeded; `stuck_at` is where the loop was
    /// detected, when the client could tell us.
    RedirectLoop { stuck_at: String },
    /// No response and no classified error.
    Unreachable,
}

/// Issues one bounded-redirect GET per link and classifies the result.
#[derive(Clone)]
pub struct LinkFetcher {
    client: Client,
}

impl LinkFetcher {
    pub fn new() -> Self {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("Linkscope/0.1 (https://github.com/linkscope/linkscope)")
            .timeout(Duration::from_secs(timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch a single link and classify what came back. Never retries.
    pub async fn fetch(&self, url: &str) -> ProbeOutcome {
        debug!("Probing {}", url);

        match self.client.get(url).send().await {
            Ok(response) => {
                let final_url = response.url().to_string();
                let status = response.status();
                let status_message = status
                    .canonical_reason()
                    .unwrap_or_default()
                    .to_string();
                let content_length = match response.bytes().await {
                    Ok(body) => body.len() as u64,
                    Err(_) => 0,
                };

                ProbeOutcome::Transmitted {
                    final_url,
                    status_code: status.as_u16(),
                    status_message,
                    content_length,
                }
            }
            Err(e) => Self::classify_error(url, e),
        }
    }

    /// Probe one raw link: time the fetch and fold the outcome into a
    /// complete result. All outcomes, including classified failures,
    /// produce a well-formed result; this never fails.
    pub async fn probe(&self, raw_url: &str) -> LinkProbeResult {
        let started = Instant::now();
        let outcome = self.fetch(raw_url).await;
        let total_access_duration_ms = started.elapsed().as_millis() as u64;

        // False only when nothing at all came back; classified failures
        // still count as reached. Compat with the historical payload.
        let reachable = !matches!(outcome, ProbeOutcome::Unreachable);

        let (final_url, response_code, response_message, content_length) = match outcome {
            ProbeOutcome::Transmitted {
                final_url,
                status_code,
                status_message,
                content_length,
            } => (final_url, status_code, status_message, content_length),
            ProbeOutcome::BadProtocol => (String::new(), 400, "Bad request".to_string(), 0),
            ProbeOutcome::RedirectLoop { stuck_at } => {
                (stuck_at, 310, "Too many redirect".to_string(), 0)
            }
            ProbeOutcome::Unreachable => (String::new(), 404, String::new(), 0),
        };

        LinkProbeResult {
            parsed_url: raw_url.to_string(),
            final_url: final_url.clone(),
            secured: final_url.starts_with("https"),
            reachable,
            redirected_urls: Vec::new(),
            total_access_duration_ms,
            content_length,
            response_code,
            response_message,
        }
    }

    fn classify_error(url: &str, error: reqwest::Error) -> ProbeOutcome {
        if error.is_redirect() {
            let stuck_at = error.url().map(|u| u.to_string()).unwrap_or_default();
            warn!("Redirect cap exceeded for {} (stuck at {})", url, stuck_at);
            ProbeOutcome::RedirectLoop { stuck_at }
        } else if error.is_timeout() {
            warn!("No response for {}: {}", url, error);
            ProbeOutcome::Unreachable
        } else if error.is_builder() || error.is_connect() {
            warn!("Protocol-level failure for {}: {}", url, error);
            ProbeOutcome::BadProtocol
        } else {
            warn!("Unclassified failure for {}: {}", url, error);
            ProbeOutcome::Unreachable
        }
    }
}

impl Default for LinkFetcher {
    fn default() -> Self {
        Self::new()
    }
}
