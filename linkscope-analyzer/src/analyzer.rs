use crate::error::{AnalyzeError, Result};
use crate::extract::extract_links;
use crate::fetch::LinkFetcher;
use crate::result::AnalysisResult;
use futures::stream::{FuturesUnordered, StreamExt};
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use url::Url;

/// Orchestrates one page analysis: fetch the page, extract its links,
/// probe every link concurrently and partition the results.
pub struct PageAnalyzer {
    page_client: Client,
    fetcher: LinkFetcher,
}

impl PageAnalyzer {
    pub fn new() -> Self {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        // The target page itself is fetched without the per-link redirect
        // cap; only sub-link probes are bounded.
        let page_client = Client::builder()
            .user_agent("Linkscope/0.1 (https://github.com/linkscope/linkscope)")
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            page_client,
            fetcher: LinkFetcher::with_timeout(timeout_secs),
        }
    }

    pub async fn analyze(&self, url: &str) -> Result<AnalysisResult> {
        info!("Analyzing {}", url);
        let started = Instant::now();

        let target = Url::parse(url)
            .map_err(|e| AnalyzeError::InvalidUrl(format!("{}: {}", url, e)))?;
        let marker = site_marker(&target);

        let response = self.page_client.get(target).send().await?;

        let mut analysis = AnalysisResult::new(url.to_string());
        analysis.response_code = response.status().as_u16();
        analysis.response_message = response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string();

        let body = response.text().await?;
        let links = extract_links(&body);
        let total = links.len();
        debug!("Extracted {} links from {}", total, url);

        // Fan out one probe per link; completions arrive in whatever order
        // the network delivers them, and the stream ends after exactly one
        // result per link. An empty link set yields no completions and the
        // loop finalizes immediately instead of waiting forever.
        let mut probes: FuturesUnordered<_> = links
            .iter()
            .map(|link| self.fetcher.probe(link))
            .collect();

        while let Some(probe) = probes.next().await {
            if probe.final_url.contains(&marker) {
                analysis.internal_links.push(probe);
            } else {
                analysis.external_links.push(probe);
            }
        }
        debug_assert_eq!(analysis.total_links(), total);

        analysis.analysis_duration_ms = started.elapsed().as_millis() as u64;
        info!(
            "Analysis of {} complete: {} internal, {} external, {}ms",
            url,
            analysis.internal_links.len(),
            analysis.external_links.len(),
            analysis.analysis_duration_ms
        );

        Ok(analysis)
    }
}

impl Default for PageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// The analyzed site's own identity, matched as a substring of each probe's
/// final URL to split internal from external links. Includes the port when
/// the target carries an explicit one, so two hosts on the same address
/// don't collide.
fn site_marker(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        _ => url.as_str().to_string(),
    }
}
