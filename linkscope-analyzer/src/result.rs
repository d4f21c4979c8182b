use serde::{Deserialize, Serialize};

/// Outcome of probing a single extracted link.
///
/// Field names serialize in the camelCase shape the JSON report has always
/// used, so downstream consumers keep parsing unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkProbeResult {
    /// The raw href value the probe was launched for.
    pub parsed_url: String,
    /// URL the probe ended up at after redirects. Empty when no response
    /// was obtained.
    pub final_url: String,
    /// Final URL is served over HTTPS.
    pub secured: bool,
    /// A response (possibly a classified failure) was obtained. False only
    /// when the fetch produced neither a response nor a classification.
    pub reachable: bool,
    /// Redirect chain is not captured, only the final URL; kept in the
    /// payload for shape compatibility.
    #[serde(rename = "redirectedURLs")]
    pub redirected_urls: Vec<String>,
    pub total_access_duration_ms: u64,
    pub content_length: u64,
    pub response_code: u16,
    pub response_message: String,
}

/// Aggregated report for one analyzed page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub url: String,
    pub analysis_duration_ms: u64,
    pub response_code: u16,
    pub response_message: String,
    pub internal_links: Vec<LinkProbeResult>,
    pub external_links: Vec<LinkProbeResult>,
}

impl AnalysisResult {
    pub fn new(url: String) -> Self {
        Self {
            url,
            analysis_duration_ms: 0,
            response_code: 0,
            response_message: String::new(),
            internal_links: Vec::new(),
            external_links: Vec::new(),
        }
    }

    /// Total number of probed links across both partitions.
    pub fn total_links(&self) -> usize {
        self.internal_links.len() + self.external_links.len()
    }
}
